//! Rectilinear facing pattern: independent back-and-forth rows.

use crate::depth::z_levels;
use crate::error::ToolpathResult;
use crate::normalizer::normalize_level;
use crate::patterns::{level_label, scan_rows, GenerationOptions};
use stockprep_core::{FacingJobParams, ToolpathLevel, ToolpathPoint};

/// Generates straight passes over the compensated scan envelope, lifting the
/// tool between every row.
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

        let mut points = Vec::with_capacity(scan.rows.len() * 4);
        for (start, end) in &scan.rows {
            points.push(ToolpathPoint::rapid(start.x, start.y, cutting.safe_z_height));
            points.push(ToolpathPoint::linear(start.x, start.y, level.depth, feeds.z));
            points.push(ToolpathPoint::linear(end.x, end.y, level.depth, feeds.xy));
            points.push(ToolpathPoint::rapid(end.x, end.y, cutting.safe_z_height));
        }
        all_levels.push(normalize_level(points, feeds));
    }
    Ok(all_levels)
}
