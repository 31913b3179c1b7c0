//! Zigzag facing pattern: one continuous connected path per level.

use crate::depth::z_levels;
use crate::error::ToolpathResult;
use crate::normalizer::normalize_level;
use crate::patterns::{level_label, scan_rows, GenerationOptions};
use stockprep_core::{FacingJobParams, ToolpathLevel, ToolpathPoint};

/// Generates a single connected path that plunges once at the first row and
/// alternates direction each row, stepping over along the boundary. The tool
/// does not retract until the level is finished.
pub fn generate(
    params: &FacingJobParams,
    options: &GenerationOptions,
) -> ToolpathResult<Vec<ToolpathLevel>> {
    let cutting = &params.cutting;
    let feeds = &params.feeds;
    let levels = z_levels(cutting);
    let total = levels.len();
    let scan = scan_rows(params);

    let mut all_levels = Vec::with_capacity(total);
    for (index, level) in levels.iter().enumerate() {
        if options.aborted() {
            return Ok(all_levels);
        }
        options.progress(
            index as f32 / total as f32 * 100.0,
            &level_label(level, index, total),
        );

        let mut points = Vec::new();
        if let Some((first_start, _)) = scan.rows.first() {
            points.push(ToolpathPoint::rapid(
                first_start.x,
                first_start.y,
                cutting.safe_z_height,
            ));
            points.push(ToolpathPoint::linear(
                first_start.x,
                first_start.y,
                level.depth,
                feeds.z,
            ));

            for (i, (_, end)) in scan.rows.iter().enumerate() {
                points.push(ToolpathPoint::linear(end.x, end.y, level.depth, feeds.xy));

                if let Some((next_start, _)) = scan.rows.get(i + 1) {
                    match scan.boundary_radius {
                        Some(_) => {
                            // Step over along the compensated circle: the arc
                            // center offset is relative to the current point,
                            // sense picked for the shorter boundary direction.
                            let from = end;
                            let cross = (from.x - scan.center.x) * (next_start.y - scan.center.y)
                                - (from.y - scan.center.y) * (next_start.x - scan.center.x);
                            points.push(ToolpathPoint::arc(
                                next_start.x,
                                next_start.y,
                                level.depth,
                                feeds.xy,
                                scan.center.x - from.x,
                                scan.center.y - from.y,
                                cross < 0.0,
                            ));
                        }
                        None => {
                            points.push(ToolpathPoint::linear(
                                next_start.x,
                                next_start.y,
                                level.depth,
                                feeds.xy,
                            ));
                        }
                    }
                }
            }

            if let Some(last) = points.last().cloned() {
                points.push(ToolpathPoint::rapid(last.x, last.y, cutting.safe_z_height));
            }
        }
        all_levels.push(normalize_level(points, feeds));
    }
    Ok(all_levels)
}
