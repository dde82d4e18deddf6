//! Straight segment with cached length and bounding box.
//!
//! Invariants
//! - `length` and `bbox` are derived once in [`Segment::new`] and never change.
//! - Predicates (`contains_projection`, `side_of`) are exact: they compare
//!   widened integers and never divide.

use nalgebra::Vector2;

use super::Point;

/// Axis-aligned box spanning a segment's endpoints (inclusive).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

impl BoundingBox {
    #[inline]
    pub fn spanning(a: Point, b: Point) -> Self {
        Self {
            x_min: a.x.min(b.x),
            x_max: a.x.max(b.x),
            y_min: a.y.min(b.y),
            y_max: a.y.max(b.y),
        }
    }

    /// Inclusive on all four edges.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        (self.x_min..=self.x_max).contains(&p.x) && (self.y_min..=self.y_max).contains(&p.y)
    }

    /// Squared distance from `p` to the closest point of the box, exact.
    #[inline]
    pub fn squared_distance(&self, p: Point) -> i128 {
        let (px, py) = (i64::from(p.x), i64::from(p.y));
        let dx = (i64::from(self.x_min) - px).max(px - i64::from(self.x_max)).max(0);
        let dy = (i64::from(self.y_min) - py).max(py - i64::from(self.y_max)).max(0);
        i128::from(dx) * i128::from(dx) + i128::from(dy) * i128::from(dy)
    }
}

/// Which side of a directed segment a point lies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
    On,
}

/// A single straight piece of a polyline, `start → end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    start: Point,
    end: Point,
    length: f64,
    bbox: BoundingBox,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            length: start.distance_to(&end),
            bbox: BoundingBox::spanning(start, end),
        }
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Cached Euclidean length; `0.0` for a degenerate segment.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[inline]
    pub fn bounding_box(&self) -> BoundingBox {
        self.bbox
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// `(end - start, p - start)` as widened integer vectors.
    #[inline]
    fn deltas(&self, p: Point) -> ((i128, i128), (i128, i128)) {
        let ab = (
            i128::from(self.end.x) - i128::from(self.start.x),
            i128::from(self.end.y) - i128::from(self.start.y),
        );
        let ap = (
            i128::from(p.x) - i128::from(self.start.x),
            i128::from(p.y) - i128::from(self.start.y),
        );
        (ab, ap)
    }

    /// Whether the orthogonal projection of `p` onto the line lands within
    /// the segment, i.e. `t = dot(p - start, end - start) / |end - start|² ∈ [0, 1]`.
    ///
    /// Evaluated as `0 <= dot <= |end - start|²`. A degenerate segment never
    /// contains a projection, not even of its own point.
    pub fn contains_projection(&self, p: Point) -> bool {
        let (ab, ap) = self.deltas(p);
        let len_sq = ab.0 * ab.0 + ab.1 * ab.1;
        if len_sq == 0 {
            return false;
        }
        let dot = ap.0 * ab.0 + ap.1 * ab.1;
        (0..=len_sq).contains(&dot)
    }

    /// Squared distance from `p` to the bounding box; `0.0` inside or on it.
    ///
    /// A lower bound on the true distance, used only to prune and to order
    /// candidates.
    #[inline]
    pub fn squared_distance_to_bounding_box(&self, p: Point) -> f64 {
        if self.bbox.contains(p) {
            return 0.0;
        }
        self.bbox.squared_distance(p) as f64
    }

    /// Perpendicular distance from `p` to the infinite line through the
    /// segment, `|A·x + B·y + C| / sqrt(A² + B²)`.
    ///
    /// Pre: `contains_projection(p)`; otherwise this is a line distance, not
    /// a segment distance (and NaN for a degenerate segment).
    pub fn distance_to(&self, p: Point) -> f64 {
        let (sx, sy) = (i128::from(self.start.x), i128::from(self.start.y));
        let (ex, ey) = (i128::from(self.end.x), i128::from(self.end.y));
        // Ax + By + C = 0
        let a = ey - sy;
        let b = sx - ex;
        let c = ex * sy - sx * ey;
        let num = (a * i128::from(p.x) + b * i128::from(p.y) + c).abs();
        num as f64 / ((a * a + b * b) as f64).sqrt()
    }

    /// Side of the directed line `start → end` that `p` lies on.
    pub fn side_of(&self, p: Point) -> Side {
        let (ab, ap) = self.deltas(p);
        match (ab.0 * ap.1 - ab.1 * ap.0).signum() {
            1 => Side::Left,
            -1 => Side::Right,
            _ => Side::On,
        }
    }

    /// Foot of the perpendicular from `p` on the line, as a float vector.
    /// A degenerate segment returns its start point.
    pub fn foot_of(&self, p: Point) -> Vector2<f64> {
        let (ab, ap) = self.deltas(p);
        let len_sq = ab.0 * ab.0 + ab.1 * ab.1;
        let s = self.start.to_vec2();
        if len_sq == 0 {
            return s;
        }
        let t = (ap.0 * ab.0 + ap.1 * ab.1) as f64 / len_sq as f64;
        s + (self.end.to_vec2() - s) * t
    }
}
