//! Facing pattern generators.
//!
//! Each generator turns a parameter set into one move list per planned depth
//! level. Generation is a cooperative, cancellable unit of work: the abort
//! predicate is polled at level and task boundaries, so an aborted run always
//! returns whole, valid levels.

pub mod rectilinear;
pub mod spiral;
pub mod zigzag;

use crate::depth::{effective_cutting_width, number_of_passes};
use crate::error::{ToolpathError, ToolpathResult};
use crate::geometry::{
    clip_segment_to_circle, clip_segment_to_rect, origin_offset, rotate_point, Point2, Rect,
    BOUNDARY_CLEARANCE, POSITION_EPSILON,
};
use std::sync::Arc;
use stockprep_core::{FacingJobParams, PatternType, ToolpathLevel, ZLevel};

/// Cooperative abort predicate; `true` stops generation at the next
/// suspension point.
pub type AbortFn = Arc<dyn Fn() -> bool + Send + Sync>;

/// Progress observer taking a percentage estimate and a phase label.
/// Advisory only; never used for control flow.
pub type ProgressFn = Arc<dyn Fn(f32, &str) + Send + Sync>;

/// Optional hooks for a generation call.
#[derive(Clone, Default)]
pub struct GenerationOptions {
    pub should_abort: Option<AbortFn>,
    pub on_progress: Option<ProgressFn>,
}

impl GenerationOptions {
    pub(crate) fn aborted(&self) -> bool {
        self.should_abort.as_ref().is_some_and(|f| f())
    }

    pub(crate) fn progress(&self, percent: f32, message: &str) {
        if let Some(f) = &self.on_progress {
            f(percent, message);
        }
    }
}

/// Generates the complete facing toolpath for the selected pattern.
///
/// Returns the ordered levels, first roughing level first, finishing level
/// last when enabled. On abort the levels completed so far are returned.
pub fn generate_toolpath(
    params: &FacingJobParams,
    options: &GenerationOptions,
) -> ToolpathResult<Vec<ToolpathLevel>> {
    if params.cutting.stepdown <= 0.0 {
        return Err(ToolpathError::InvalidParameters(
            "stepdown must be positive".to_string(),
        ));
    }
    if effective_cutting_width(params.cutting.tool_radius, params.cutting.stepover) <= 0.0 {
        return Err(ToolpathError::InvalidParameters(
            "effective cutting width must be positive (check tool radius and stepover)"
                .to_string(),
        ));
    }

    match params.pattern.pattern_type {
        PatternType::Rectilinear => rectilinear::generate(params, options),
        PatternType::Zigzag => zigzag::generate(params, options),
        PatternType::Spiral => spiral::generate(params, options),
    }
}

pub(crate) fn level_label(level: &ZLevel, index: usize, total: usize) -> String {
    if level.is_finishing {
        format!("Finishing pass at {:.3}", level.depth)
    } else {
        format!("Roughing level {}/{} at {:.3}", index + 1, total, level.depth)
    }
}

/// Directed scan rows for the row-based generators, plus the boundary the
/// zigzag step-over has to follow on circular stock.
pub(crate) struct ScanRows {
    pub rows: Vec<(Point2, Point2)>,
    pub center: Point2,
    /// Compensated boundary radius; `Some` only for circular stock.
    pub boundary_radius: Option<f64>,
}

/// Computes the tool-compensated scan rows for one level.
///
/// Rows alternate direction by parity. For rectangular stock with a zero
/// scan angle the rows are built directly so the pass count is exact; any
/// other configuration generates rows in the rotated frame and clips them to
/// the compensated boundary, skipping rows that fall entirely outside.
pub(crate) fn scan_rows(params: &FacingJobParams) -> ScanRows {
    let cutting = &params.cutting;
    let (stock_x, stock_y) = params.stock.footprint();
    let radius = cutting.tool_radius;
    let effective_width = effective_cutting_width(radius, cutting.stepover);
    let origin = origin_offset(stock_x, stock_y, params.stock.origin_position);
    let center = Point2::new(origin.x + stock_x / 2.0, origin.y + stock_y / 2.0);
    let angle = params.pattern.angle;

    if params.stock.is_circular() {
        let stock_radius = stock_x / 2.0;
        let comp_radius = if cutting.clear_stock_exit {
            stock_radius + radius
        } else {
            stock_radius - radius
        };
        let mut rows = Vec::new();
        if comp_radius > 0.0 {
            let reach = stock_radius + 2.0 * radius + BOUNDARY_CLEARANCE;
            let passes = number_of_passes(stock_x, effective_width);
            for i in 0..passes {
                let offset = -comp_radius + i as f64 * effective_width;
                let p1 = rotate_point(
                    Point2::new(center.x - reach, center.y + offset),
                    center,
                    angle,
                );
                let p2 = rotate_point(
                    Point2::new(center.x + reach, center.y + offset),
                    center,
                    angle,
                );
                let Some((a, b)) = clip_segment_to_circle(p1, p2, center, comp_radius) else {
                    continue;
                };
                if a.distance_to(&b) < POSITION_EPSILON {
                    continue;
                }
                rows.push(if i % 2 == 0 { (a, b) } else { (b, a) });
            }
        }
        return ScanRows {
            rows,
            center,
            boundary_radius: Some(comp_radius),
        };
    }

    let rows = if angle.abs() < POSITION_EPSILON {
        let (x_min, x_max) = if cutting.clear_stock_exit {
            (origin.x - radius, origin.x + stock_x + radius)
        } else {
            (origin.x + radius, origin.x + stock_x - radius)
        };
        let y_min = origin.y + radius;
        let passes = number_of_passes(stock_y, effective_width);
        (0..passes)
            .map(|i| {
                let y = y_min + i as f64 * effective_width;
                if i % 2 == 0 {
                    (Point2::new(x_min, y), Point2::new(x_max, y))
                } else {
                    (Point2::new(x_max, y), Point2::new(x_min, y))
                }
            })
            .collect()
    } else {
        let clip = Rect::new(
            origin.x + radius,
            origin.y + radius,
            origin.x + stock_x - radius,
            origin.y + stock_y - radius,
        );
        let radians = angle.to_radians();
        let span = stock_x * radians.sin().abs() + stock_y * radians.cos().abs();
        let reach = stock_x.hypot(stock_y) / 2.0 + 2.0 * radius;
        let passes = number_of_passes(span, effective_width);
        let mut rows = Vec::new();
        for i in 0..passes {
            let offset = -span / 2.0 + radius + i as f64 * effective_width;
            let p1 = rotate_point(
                Point2::new(center.x - reach, center.y + offset),
                center,
                angle,
            );
            let p2 = rotate_point(
                Point2::new(center.x + reach, center.y + offset),
                center,
                angle,
            );
            let Some((mut a, mut b)) = clip_segment_to_rect(p1, p2, &clip) else {
                continue;
            };
            if cutting.clear_stock_exit {
                let length = a.distance_to(&b);
                if length > POSITION_EPSILON {
                    let (ux, uy) = ((b.x - a.x) / length, (b.y - a.y) / length);
                    let overrun = 2.0 * radius;
                    a = Point2::new(a.x - ux * overrun, a.y - uy * overrun);
                    b = Point2::new(b.x + ux * overrun, b.y + uy * overrun);
                }
            }
            if a.distance_to(&b) < POSITION_EPSILON {
                continue;
            }
            rows.push(if i % 2 == 0 { (a, b) } else { (b, a) });
        }
        rows
    };

    ScanRows {
        rows,
        center,
        boundary_radius: None,
    }
}
