//! Best-segment scan with deferred exact distances.

use crate::geom::{Point, Segment};
use crate::polyline::Polyline;

/// Scan state. `ExactKnown` is only reached through a zero box-distance
/// tie, so its box distance is implicitly `0.0`.
#[derive(Clone, Copy, Debug)]
enum Best<'a> {
    Unset,
    BoxKnown {
        index: usize,
        segment: &'a Segment,
        box_d2: f64,
    },
    ExactKnown {
        index: usize,
        segment: &'a Segment,
        exact: f64,
    },
}

impl Best<'_> {
    #[inline]
    fn box_d2(&self) -> f64 {
        match *self {
            Best::Unset => f64::INFINITY,
            Best::BoxKnown { box_d2, .. } => box_d2,
            Best::ExactKnown { .. } => 0.0,
        }
    }
}

/// Selected segment with its resolved perpendicular distance.
#[derive(Clone, Copy, Debug)]
pub(super) struct BestSegment<'a> {
    pub index: usize,
    pub segment: &'a Segment,
    pub offset: f64,
}

pub(super) fn best_segment(polyline: &Polyline, p: Point) -> Option<BestSegment<'_>> {
    let mut best = Best::Unset;

    for (i, segment) in polyline.segments().iter().enumerate() {
        if !segment.contains_projection(p) {
            continue;
        }

        let d2 = segment.squared_distance_to_bounding_box(p);
        let best_d2 = best.box_d2();
        if d2 > best_d2 {
            continue;
        }
        if d2 < best_d2 {
            best = Best::BoxKnown {
                index: i,
                segment,
                box_d2: d2,
            };
            continue;
        }
        // Equal and non-zero: earlier segment is kept.
        if d2 != 0.0 {
            continue;
        }

        let (index, incumbent, exact) = match best {
            Best::Unset => continue,
            Best::BoxKnown { index, segment, .. } => (index, segment, segment.distance_to(p)),
            Best::ExactKnown {
                index,
                segment,
                exact,
            } => (index, segment, exact),
        };
        let candidate = segment.distance_to(p);
        best = if candidate < exact {
            Best::ExactKnown {
                index: i,
                segment,
                exact: candidate,
            }
        } else {
            Best::ExactKnown {
                index,
                segment: incumbent,
                exact,
            }
        };
    }

    match best {
        Best::Unset => None,
        Best::BoxKnown { index, segment, .. } => Some(BestSegment {
            index,
            segment,
            offset: segment.distance_to(p),
        }),
        Best::ExactKnown {
            index,
            segment,
            exact,
        } => Some(BestSegment {
            index,
            segment,
            offset: exact,
        }),
    }
}
