//! Offset and station of a point relative to a polyline.
//!
//! Purpose
//! - Pick the single best segment among those whose perpendicular foot lies
//!   within the segment, using the bounding-box squared distance as a cheap
//!   key and deferring the exact (sqrt) distance until it decides something.
//! - Derive the offset (perpendicular distance) and station (arc length to
//!   the foot) from that segment.
//!
//! Selection rules
//! - Smaller box distance wins outright; its exact distance stays pending.
//! - Equal box distance of zero (point inside both boxes) compares exact
//!   distances; strictly smaller wins, equal keeps the lower index.
//! - Equal non-zero box distance keeps the earlier segment without comparing
//!   exact distances. This can select a segment that is not the closest; the
//!   behavior is kept as-is and pinned by `tests::equal_nonzero_box_distance_keeps_earlier_segment`.
//!
//! Code cross-refs: `search::best_segment`, `Polyline`, `Segment`

mod search;

use nalgebra::Vector2;

use crate::geom::{Point, Side};
use crate::polyline::Polyline;

/// Outcome of [`find`]. When `is_valid` is false, `offset` and `station`
/// are zero and carry no meaning.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SearchResult {
    pub offset: f64,
    pub station: f64,
    pub is_valid: bool,
}

impl SearchResult {
    pub const INVALID: Self = Self {
        offset: 0.0,
        station: 0.0,
        is_valid: false,
    };

    /// `(offset, station)` when valid.
    #[inline]
    pub fn offset_station(&self) -> Option<(f64, f64)> {
        self.is_valid.then_some((self.offset, self.station))
    }
}

/// Full description of a successful match.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Location {
    /// Index of the selected segment.
    pub segment_index: usize,
    /// Perpendicular distance to the selected segment (always >= 0).
    pub offset: f64,
    /// Arc length from the polyline start to the foot of the perpendicular.
    pub station: f64,
    /// Side of the selected segment the query lies on.
    pub side: Side,
    /// Foot of the perpendicular.
    pub foot: Vector2<f64>,
}

impl Location {
    /// Offset signed by side: positive on the left, negative on the right.
    #[inline]
    pub fn signed_offset(&self) -> f64 {
        match self.side {
            Side::Right => -self.offset,
            Side::Left | Side::On => self.offset,
        }
    }
}

impl From<Option<Location>> for SearchResult {
    fn from(loc: Option<Location>) -> Self {
        match loc {
            Some(l) => Self {
                offset: l.offset,
                station: l.station,
                is_valid: true,
            },
            None => Self::INVALID,
        }
    }
}

/// Locate `p` on `polyline`; `None` when no segment contains its projection.
pub fn locate(polyline: &Polyline, p: Point) -> Option<Location> {
    let best = search::best_segment(polyline, p)?;
    let segment = best.segment;

    // Pythagoras on (p, start, foot); rounding can push the radicand below 0.
    let to_start_sq = p.squared_distance_to(&segment.start()) as f64;
    let along = (to_start_sq - best.offset * best.offset).max(0.0).sqrt();

    let prior = best
        .index
        .checked_sub(1)
        .and_then(|k| polyline.cumulative_length_at(k))
        .unwrap_or(0.0);

    Some(Location {
        segment_index: best.index,
        offset: best.offset,
        station: prior + along,
        side: segment.side_of(p),
        foot: segment.foot_of(p),
    })
}

/// Offset and station of `p` relative to `polyline`.
#[inline]
pub fn find(polyline: &Polyline, p: Point) -> SearchResult {
    locate(polyline, p).into()
}
