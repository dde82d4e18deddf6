//! Ordered chain of segments with cumulative arc lengths.
//!
//! Invariants:
//! - `segments.len() == max(0, points - 1)`.
//! - `cumulative.len() == segments.len()`, non-decreasing, and
//!   `cumulative[i] == length[0] + ... + length[i]`.
//! - Immutable after construction, so a `&Polyline` can be shared across
//!   threads for concurrent queries.

use crate::geom::{Point, Segment};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline {
    segments: Vec<Segment>,
    cumulative: Vec<f64>,
}

impl Polyline {
    /// Pair consecutive points into segments. Fewer than two points give an
    /// empty polyline.
    pub fn new(points: &[Point]) -> Self {
        let segments: Vec<Segment> = points
            .windows(2)
            .map(|w| Segment::new(w[0], w[1]))
            .collect();
        let cumulative = segments
            .iter()
            .scan(0.0, |total, s| {
                *total += s.length();
                Some(*total)
            })
            .collect();
        Self {
            segments,
            cumulative,
        }
    }

    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// `None` for any index outside `[0, segment_count())`.
    #[inline]
    pub fn segment_at(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    /// Length through segment `index` inclusive; `None` when out of range.
    #[inline]
    pub fn cumulative_length_at(&self, index: usize) -> Option<f64> {
        self.cumulative.get(index).copied()
    }

    /// Total arc length; `0.0` for an empty polyline.
    #[inline]
    pub fn total_length(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }
}

impl FromIterator<Point> for Polyline {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let points: Vec<Point> = iter.into_iter().collect();
        Self::new(&points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pts(raw: &[(i32, i32)]) -> Vec<Point> {
        raw.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn empty_and_single_point_have_no_segments() {
        let cases: [&[(i32, i32)]; 2] = [&[], &[(0, 0)]];
        for raw in cases {
            let pl = Polyline::new(&pts(raw));
            assert_eq!(pl.segment_count(), 0);
            assert!(pl.is_empty());
            assert!(pl.segment_at(0).is_none());
            assert!(pl.cumulative_length_at(0).is_none());
            assert_eq!(pl.total_length(), 0.0);
        }
    }

    #[test]
    fn cumulative_lengths_l_shape() {
        let pl = Polyline::new(&pts(&[(0, 0), (0, 3), (4, 3)]));
        assert_eq!(pl.segment_count(), 2);
        assert_eq!(pl.cumulative_length_at(0), Some(3.0));
        assert_eq!(pl.cumulative_length_at(1), Some(7.0));
        assert_eq!(pl.cumulative_length_at(2), None);
        assert_eq!(pl.total_length(), 7.0);
    }

    #[test]
    fn segment_lookup_pairs_consecutive_points() {
        let pl = Polyline::new(&pts(&[(0, 0), (5, 0), (5, 5)]));
        let s1 = pl.segment_at(1).unwrap();
        assert_eq!(s1.start(), Point::new(5, 0));
        assert_eq!(s1.end(), Point::new(5, 5));
        assert!(pl.segment_at(2).is_none());
        assert!(pl.segment_at(usize::MAX).is_none());
    }

    #[test]
    fn absent_is_distinct_from_zero_length() {
        // A leading degenerate segment gives a legitimate zero.
        let pl = Polyline::new(&pts(&[(1, 1), (1, 1), (4, 5)]));
        assert_eq!(pl.cumulative_length_at(0), Some(0.0));
        assert_eq!(pl.cumulative_length_at(1), Some(5.0));
        assert_eq!(pl.cumulative_length_at(2), None);
    }

    #[test]
    fn collects_from_iterator() {
        let pl: Polyline = pts(&[(0, 0), (3, 4)]).into_iter().collect();
        assert_eq!(pl.segment_count(), 1);
        assert_eq!(pl.total_length(), 5.0);
    }

    proptest! {
        #[test]
        fn counts_and_cumulative_sums(raw in prop::collection::vec((-1000i32..1000, -1000i32..1000), 0..40)) {
            let points = pts(&raw);
            let pl = Polyline::new(&points);
            prop_assert_eq!(pl.segment_count(), points.len().saturating_sub(1));
            let mut sum = 0.0;
            let mut prev = 0.0;
            for k in 0..pl.segment_count() {
                let len = pl.segment_at(k).unwrap().length();
                sum += len;
                let c = pl.cumulative_length_at(k).unwrap();
                prop_assert_eq!(c, sum);
                prop_assert!(c >= prev);
                prop_assert!(c >= len);
                prev = c;
            }
            prop_assert!(pl.cumulative_length_at(pl.segment_count()).is_none());
        }
    }
}
