//! Cross-checks of geometric and cutting-parameter consistency.

use stockprep_core::{FacingJobParams, StockShape};

/// Validates a parameter set before generation is attempted.
///
/// Returns one human-readable entry per problem; an empty list means the
/// parameters are acceptable. Purely advisory — this never fails and the
/// engine does not call it on its own.
pub fn validate(params: &FacingJobParams) -> Vec<String> {
    let mut errors = Vec::new();
    let stock = &params.stock;
    let cutting = &params.cutting;
    let feeds = &params.feeds;

    if cutting.tool_radius <= 0.0 {
        errors.push("Tool radius must be positive".to_string());
    }

    match stock.shape {
        StockShape::Rectangular => {
            let x = stock.x.unwrap_or(0.0);
            let y = stock.y.unwrap_or(0.0);
            if x <= 0.0 {
                errors.push("Stock X dimension must be positive".to_string());
            }
            if y <= 0.0 {
                errors.push("Stock Y dimension must be positive".to_string());
            }
            if x > 0.0 && cutting.tool_radius >= x / 2.0 {
                errors.push("Tool radius exceeds half of stock X dimension".to_string());
            }
            if y > 0.0 && cutting.tool_radius >= y / 2.0 {
                errors.push("Tool radius exceeds half of stock Y dimension".to_string());
            }
        }
        StockShape::Circular => {
            let diameter = stock.diameter.unwrap_or(0.0);
            if diameter <= 0.0 {
                errors.push("Stock diameter must be positive".to_string());
            }
            if diameter > 0.0 && cutting.tool_radius >= diameter / 2.0 {
                errors.push("Tool radius exceeds stock radius".to_string());
            }
        }
    }

    if cutting.stepover <= 0.0 || cutting.stepover > 100.0 {
        errors.push("Stepover must be between 0 and 100%".to_string());
    }
    if cutting.stepdown <= 0.0 {
        errors.push("Stepdown must be positive".to_string());
    }
    if cutting.total_depth <= 0.0 {
        errors.push("Total depth must be positive".to_string());
    }
    if cutting.safe_z_height <= 0.0 {
        errors.push("Safe Z height must be positive".to_string());
    }

    if cutting.finishing_pass {
        if cutting.finishing_pass_height <= 0.0 {
            errors.push("Finishing pass height must be positive".to_string());
        }
        if cutting.finishing_pass_height >= cutting.total_depth {
            errors.push("Finishing pass height must be less than total depth".to_string());
        }
        if cutting.finishing_pass_height >= cutting.stepdown {
            errors.push("Finishing pass height should be less than stepdown value".to_string());
        }
    }

    if feeds.xy <= 0.0 {
        errors.push("Horizontal feed rate must be positive".to_string());
    }
    if feeds.z <= 0.0 {
        errors.push("Vertical feed rate must be positive".to_string());
    }
    if feeds.spindle_speed <= 0.0 {
        errors.push("Spindle speed must be positive".to_string());
    }

    errors
}
