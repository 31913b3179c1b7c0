//! Move-stream normalization.
//!
//! The downstream motion representation forbids combined XY+Z interpolation
//! on repositioning moves. Any consecutive pair of points that changes both
//! the planar position and the depth is split into two discrete moves; arc
//! moves are exempt since their geometry fixes the depth as constant.

use crate::geometry::POSITION_EPSILON;
use stockprep_core::{FeedRates, ToolpathLevel, ToolpathPoint};

/// Rewrites a level so no rapid/linear move changes XY and Z at once.
///
/// Descending transitions travel at the prior depth first and plunge at the
/// target; ascending transitions lift straight up, then travel at the new
/// height. A plunge with no explicit feed falls back to the vertical feed.
pub fn normalize_level(points: Vec<ToolpathPoint>, feeds: &FeedRates) -> ToolpathLevel {
    let mut normalized: ToolpathLevel = Vec::with_capacity(points.len());
    for point in points {
        let Some(prev) = normalized.last() else {
            normalized.push(point);
            continue;
        };
        let planar_change = (point.x - prev.x).abs() > POSITION_EPSILON
            || (point.y - prev.y).abs() > POSITION_EPSILON;
        let depth_change = (point.z - prev.z).abs() > POSITION_EPSILON;

        if planar_change && depth_change && !point.is_arc() {
            if point.z > prev.z {
                normalized.push(ToolpathPoint::rapid(prev.x, prev.y, point.z));
                normalized.push(ToolpathPoint::rapid(point.x, point.y, point.z));
            } else {
                let feed = if point.feed_rate > 0.0 {
                    point.feed_rate
                } else {
                    feeds.z
                };
                normalized.push(ToolpathPoint::rapid(point.x, point.y, prev.z));
                normalized.push(ToolpathPoint::linear(point.x, point.y, point.z, feed));
            }
        } else {
            normalized.push(point);
        }
    }
    normalized
}
