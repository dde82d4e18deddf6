//! Integer point with exact squared distances.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use nalgebra::Vector2;

/// Immutable 2D point on the integer grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance, exact.
    ///
    /// Differences are widened to `i64` and squares to `i128`, so no input
    /// can overflow.
    #[inline]
    pub fn squared_distance_to(&self, other: &Point) -> i128 {
        let dx = i128::from(i64::from(other.x) - i64::from(self.x));
        let dy = i128::from(i64::from(other.y) - i64::from(self.y));
        dx * dx + dy * dy
    }

    /// Euclidean distance. Symmetric bit-for-bit and `0.0` for equal points.
    #[inline]
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.squared_distance_to(other) as f64).sqrt()
    }

    /// Float view for callers working in `nalgebra` vectors.
    #[inline]
    pub fn to_vec2(self) -> Vector2<f64> {
        Vector2::new(f64::from(self.x), f64::from(self.y))
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Errors from parsing `"x,y"` into a [`Point`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsePointError {
    /// Input did not contain a comma-separated pair.
    MissingComma,
    /// One of the two coordinates is not an `i32`.
    Coordinate { axis: char, source: ParseIntError },
}

impl fmt::Display for ParsePointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingComma => write!(f, "expected two values separated by a comma"),
            Self::Coordinate { axis, source } => {
                write!(f, "invalid {axis} coordinate: {source}")
            }
        }
    }
}

impl std::error::Error for ParsePointError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MissingComma => None,
            Self::Coordinate { source, .. } => Some(source),
        }
    }
}

impl FromStr for Point {
    type Err = ParsePointError;

    /// Parses `"x,y"`; surrounding whitespace on either value is ignored and
    /// fields after the second are dropped, as in CSV ingestion.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.split(',');
        let (x, y) = match (fields.next(), fields.next()) {
            (Some(x), Some(y)) => (x, y),
            _ => return Err(ParsePointError::MissingComma),
        };
        let x = x
            .trim()
            .parse()
            .map_err(|source| ParsePointError::Coordinate { axis: 'x', source })?;
        let y = y
            .trim()
            .parse()
            .map_err(|source| ParsePointError::Coordinate { axis: 'y', source })?;
        Ok(Self { x, y })
    }
}
