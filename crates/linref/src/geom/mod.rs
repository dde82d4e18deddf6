//! Integer 2D geometry (points and straight segments).
//!
//! Purpose
//! - Provide the primitives the locator needs: point distance, projection
//!   containment, a bounding-box lower bound and the exact line distance.
//! - Keep every predicate exact in integer arithmetic; only distances are
//!   floats.
//!
//! Code cross-refs: `Point`, `Segment`, `BoundingBox`, `crate::locate`

mod point;
mod segment;

pub use point::{ParsePointError, Point};
pub use segment::{BoundingBox, Segment, Side};
