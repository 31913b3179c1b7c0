//! Depth planning: effective cutting width, pass counts, and Z levels.

use stockprep_core::{CuttingParameters, ZLevel};

/// Lateral spacing between adjacent passes after applying the stepover
/// percentage to the tool diameter.
pub fn effective_cutting_width(tool_radius: f64, stepover: f64) -> f64 {
    let tool_diameter = tool_radius * 2.0;
    tool_diameter * (stepover / 100.0)
}

/// Number of passes needed to cover `stock_dimension` at the given row
/// spacing. Non-positive inputs collapse to a single pass.
pub fn number_of_passes(stock_dimension: f64, effective_width: f64) -> usize {
    if effective_width <= 0.0 || stock_dimension <= 0.0 {
        return 1;
    }
    ((stock_dimension / effective_width).ceil() as usize).max(1)
}

/// Ordered cutting depths for roughing and the optional finishing pass.
///
/// The last roughing level lands exactly on the roughing budget even when it
/// is a partial step. The returned order is the cutting order.
pub fn z_levels(cutting: &CuttingParameters) -> Vec<ZLevel> {
    let mut levels = Vec::new();

    let roughing_depth = if cutting.finishing_pass {
        cutting.total_depth - cutting.finishing_pass_height
    } else {
        cutting.total_depth
    };

    let roughing_passes = (roughing_depth / cutting.stepdown).ceil() as usize;
    for i in 0..roughing_passes {
        let depth = cutting.z_offset - ((i + 1) as f64 * cutting.stepdown).min(roughing_depth);
        levels.push(ZLevel {
            depth,
            is_finishing: false,
        });
    }

    if cutting.finishing_pass {
        levels.push(ZLevel {
            depth: cutting.z_offset - cutting.total_depth,
            is_finishing: true,
        });
    }

    levels
}
