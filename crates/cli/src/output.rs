//! Text and JSON renderings of query results.

use linref::{Location, Point, SearchResult, Side};
use serde::Serialize;

/// One line of human output, four decimals like a survey sheet.
pub fn format_text(result: &SearchResult) -> String {
    match result.offset_station() {
        Some((offset, station)) => {
            format!("Result: Offset = {offset:.4}, Station = {station:.4}")
        }
        None => "Can't find Offset and Station".to_string(),
    }
}

/// JSON record of a single query. Invalid results carry `null` fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub x: i32,
    pub y: i32,
    pub is_valid: bool,
    pub offset: Option<f64>,
    pub station: Option<f64>,
    pub segment: Option<usize>,
    pub side: Option<&'static str>,
}

impl Row {
    pub fn new(query: Point, location: Option<Location>) -> Self {
        Self {
            x: query.x,
            y: query.y,
            is_valid: location.is_some(),
            offset: location.map(|l| l.offset),
            station: location.map(|l| l.station),
            segment: location.map(|l| l.segment_index),
            side: location.map(|l| side_name(l.side)),
        }
    }
}

fn side_name(side: Side) -> &'static str {
    match side {
        Side::Left => "left",
        Side::Right => "right",
        Side::On => "on",
    }
}
