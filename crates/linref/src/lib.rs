//! Linear referencing of points against integer polylines.
//!
//! Given an ordered chain of segments and a query point, compute the
//! point's offset (perpendicular distance to the best segment) and station
//! (arc length along the chain to the foot of that perpendicular).
//!
//! Layout
//! - `geom`: `Point`, `Segment`, `BoundingBox`.
//! - `polyline`: `Polyline` with cumulative lengths.
//! - `locate`: the best-segment search (`find`, `locate`).
//! - `ingest`: CSV point lists with per-line diagnostics.
//! - `sample`: seeded random-walk polylines.

pub mod geom;
pub mod ingest;
pub mod locate;
pub mod polyline;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{Point, Segment, Side};
pub use locate::{find, locate, Location, SearchResult};
pub use polyline::Polyline;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{BoundingBox, ParsePointError, Point, Segment, Side};
    pub use crate::ingest::{parse_points, read_points_csv, Diagnostic, PointsCsv, SkipReason};
    pub use crate::locate::{find, locate, Location, SearchResult};
    pub use crate::polyline::Polyline;
    pub use crate::sample::{random_walk, ReplayToken, SampleCfg};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polyline_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Polyline>();
        assert_send_sync::<SearchResult>();
    }

    #[test]
    fn cumulative_lengths_through_the_root_exports() {
        let pl = Polyline::new(&[Point::new(0, 0), Point::new(0, 3), Point::new(4, 3)]);
        assert_eq!(pl.cumulative_length_at(0), Some(3.0));
        assert_eq!(pl.cumulative_length_at(1), Some(7.0));
        assert!(find(&pl, Point::new(2, 5)).is_valid);
    }
}
