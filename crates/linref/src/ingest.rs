//! Point lists from two-column delimited text.
//!
//! Format: one `x,y` pair of integers per line, no header. Lines that are
//! blank, have fewer than two fields, or have non-integer values in the
//! first two fields are skipped and reported as [`Diagnostic`]s; fields
//! beyond the second are ignored. Only I/O failures are errors.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::geom::Point;

/// Why a line was skipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    EmptyLine,
    TooFewValues { got: usize },
    NonNumeric,
}

/// A skipped input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number.
    pub line: usize,
    pub reason: SkipReason,
    /// Raw line content, without the line terminator.
    pub content: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            SkipReason::EmptyLine => write!(f, "line {} is empty and was skipped", self.line),
            SkipReason::TooFewValues { got } => write!(
                f,
                "invalid format at line {}: expected 2 values, got {got} (\"{}\")",
                self.line, self.content
            ),
            SkipReason::NonNumeric => write!(
                f,
                "non-numeric values at line {} (\"{}\")",
                self.line, self.content
            ),
        }
    }
}

/// Parsed points plus everything that was skipped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PointsCsv {
    pub points: Vec<Point>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Errors that stop ingestion.
#[derive(Debug)]
pub enum IngestError {
    /// The path is empty or whitespace.
    EmptyPath,
    NotFound(PathBuf),
    Io { path: Option<PathBuf>, source: io::Error },
}

impl fmt::Display for IngestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngestError::EmptyPath => write!(f, "CSV file path is empty"),
            IngestError::NotFound(path) => write!(f, "CSV file not found: {}", path.display()),
            IngestError::Io {
                path: Some(path),
                source,
            } => write!(f, "I/O error reading {}: {source}", path.display()),
            IngestError::Io { path: None, source } => write!(f, "I/O error: {source}"),
        }
    }
}

impl std::error::Error for IngestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IngestError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

fn parse_line(line: &str) -> Result<Point, SkipReason> {
    if line.trim().is_empty() {
        return Err(SkipReason::EmptyLine);
    }
    let values: Vec<&str> = line.split(',').collect();
    if values.len() < 2 {
        return Err(SkipReason::TooFewValues { got: values.len() });
    }
    match (values[0].trim().parse(), values[1].trim().parse()) {
        (Ok(x), Ok(y)) => Ok(Point::new(x, y)),
        _ => Err(SkipReason::NonNumeric),
    }
}

/// Decode one raw line: lossy UTF-8, no trailing `\r`, no leading BOM on
/// the first line.
fn decode_line(raw: &[u8], first: bool) -> String {
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    let raw = match raw.strip_prefix("\u{feff}".as_bytes()) {
        Some(rest) if first => rest,
        _ => raw,
    };
    String::from_utf8_lossy(raw).into_owned()
}

/// Parse points from any buffered reader.
///
/// Invalid UTF-8 is replaced rather than rejected, so such a line is
/// reported as a diagnostic and the rest of the input is still read.
pub fn parse_points<R: BufRead>(reader: R) -> Result<PointsCsv, IngestError> {
    let mut out = PointsCsv::default();
    for (k, raw) in reader.split(b'\n').enumerate() {
        let raw = raw.map_err(|source| IngestError::Io { path: None, source })?;
        let line = decode_line(&raw, k == 0);
        match parse_line(&line) {
            Ok(p) => out.points.push(p),
            Err(reason) => out.diagnostics.push(Diagnostic {
                line: k + 1,
                reason,
                content: line,
            }),
        }
    }
    Ok(out)
}

/// Open `path` and parse it with [`parse_points`].
pub fn read_points_csv(path: impl AsRef<Path>) -> Result<PointsCsv, IngestError> {
    let path = path.as_ref();
    if path.as_os_str().to_string_lossy().trim().is_empty() {
        return Err(IngestError::EmptyPath);
    }
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => IngestError::NotFound(path.to_path_buf()),
        _ => IngestError::Io {
            path: Some(path.to_path_buf()),
            source,
        },
    })?;
    parse_points(BufReader::new(file)).map_err(|e| match e {
        IngestError::Io { path: None, source } => IngestError::Io {
            path: Some(path.to_path_buf()),
            source,
        },
        other => other,
    })
}
