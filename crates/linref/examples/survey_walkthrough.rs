//! Offset/station walkthrough on a small L-shaped alignment.
//!
//! Purpose
//! - Show the end-to-end flow: parse a point list, build the polyline, query
//!   a handful of points and print what the locator decided.
//!
//! Run: cargo run -p linref --example survey_walkthrough

use std::io::Cursor;

use linref::ingest::parse_points;
use linref::{locate, Point, Polyline};

fn main() {
    let csv = "0,0\n5,0\n\n5,5\nten,10\n10,5\n";
    let parsed = parse_points(Cursor::new(csv)).expect("in-memory read cannot fail");
    for d in &parsed.diagnostics {
        println!("skipped: {d}");
    }

    let polyline = Polyline::new(&parsed.points);
    println!(
        "polyline: {} segments, total length {:.4}",
        polyline.segment_count(),
        polyline.total_length()
    );

    for q in [Point::new(2, 1), Point::new(7, 3), Point::new(6, 6), Point::new(-4, -4)] {
        match locate(&polyline, q) {
            Some(loc) => println!(
                "{q}: segment {} offset {:.4} ({:?}) station {:.4}",
                loc.segment_index, loc.offset, loc.side, loc.station
            ),
            None => println!("{q}: no segment contains the projection"),
        }
    }
}
