//! Interactive query loop over stdin/stdout.

use std::io::{BufRead, Write};

use anyhow::Result;
use linref::{find, Point, Polyline};

use crate::output::format_text;

const PROMPT: &str = "Enter the point P coordinates (x,y) separated by a comma (blank line or q to quit):";

fn is_quit(line: &str) -> bool {
    line.is_empty() || matches!(line, "q" | "quit" | "exit")
}

/// Answer one query per line until a quit line or end of input. Returns the
/// number of queries answered.
pub fn run<R: BufRead, W: Write>(polyline: &Polyline, input: R, mut out: W) -> Result<usize> {
    let mut answered = 0usize;
    writeln!(out, "{PROMPT}")?;
    out.flush()?;
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if is_quit(line) {
            break;
        }
        match line.parse::<Point>() {
            Ok(p) => {
                let result = find(polyline, p);
                tracing::debug!(x = p.x, y = p.y, valid = result.is_valid, "query");
                writeln!(out, "{}", format_text(&result))?;
                answered += 1;
            }
            Err(e) => writeln!(out, "Error: {e}")?,
        }
        writeln!(out, "{PROMPT}")?;
        out.flush()?;
    }
    Ok(answered)
}
