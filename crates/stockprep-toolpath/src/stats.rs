//! Toolpath statistics for job summaries.

use crate::depth::z_levels;
use crate::geometry::POSITION_EPSILON;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use stockprep_core::{FacingJobParams, MoveKind, StockShape, ToolpathLevel, ToolpathPoint};

/// Rapid traverse estimate used for time calculation (mm/min).
const RAPID_TRAVERSE_RATE: f64 = 3000.0;

/// Summary numbers for a generated toolpath, carried in the worker's
/// completion payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolpathStatistics {
    /// Total travel distance over all levels (mm).
    pub total_distance: f64,
    /// Estimated machining time (minutes).
    pub estimated_time: f64,
    /// Volume of stock removed (mm^3).
    pub material_removed: f64,
    pub roughing_passes: usize,
    pub finishing_pass: bool,
}

/// Computes statistics over the generated levels.
pub fn calculate_statistics(
    toolpath: &[ToolpathLevel],
    params: &FacingJobParams,
) -> ToolpathStatistics {
    let mut total_distance = 0.0;
    let mut estimated_time = 0.0;

    for level in toolpath {
        for pair in level.windows(2) {
            let length = move_length(&pair[0], &pair[1]);
            total_distance += length;
            let feed = if pair[1].feed_rate > 0.0 {
                pair[1].feed_rate
            } else {
                RAPID_TRAVERSE_RATE
            };
            estimated_time += length / feed;
        }
    }

    let cutting = &params.cutting;
    let material_removed = match params.stock.shape {
        StockShape::Rectangular => {
            let (x, y) = params.stock.footprint();
            x * y * cutting.total_depth
        }
        StockShape::Circular => {
            let radius = params.stock.diameter.unwrap_or(0.0) / 2.0;
            PI * radius * radius * cutting.total_depth
        }
    };

    let levels = z_levels(cutting);
    ToolpathStatistics {
        total_distance,
        estimated_time,
        material_removed,
        roughing_passes: levels.iter().filter(|l| !l.is_finishing).count(),
        finishing_pass: cutting.finishing_pass,
    }
}

/// Length of the move ending at `point`, starting from `prev`.
fn move_length(prev: &ToolpathPoint, point: &ToolpathPoint) -> f64 {
    match point.kind {
        MoveKind::Arc { i, j, clockwise } => {
            let radius = i.hypot(j);
            if radius < POSITION_EPSILON {
                return chord_length(prev, point);
            }
            let center = (prev.x + i, prev.y + j);
            let a0 = (prev.y - center.1).atan2(prev.x - center.0);
            let a1 = (point.y - center.1).atan2(point.x - center.0);
            let mut sweep = if clockwise { a0 - a1 } else { a1 - a0 };
            if sweep <= POSITION_EPSILON {
                sweep += 2.0 * PI;
            }
            radius * sweep
        }
        _ => chord_length(prev, point),
    }
}

fn chord_length(prev: &ToolpathPoint, point: &ToolpathPoint) -> f64 {
    ((point.x - prev.x).powi(2) + (point.y - prev.y).powi(2) + (point.z - prev.z).powi(2)).sqrt()
}
