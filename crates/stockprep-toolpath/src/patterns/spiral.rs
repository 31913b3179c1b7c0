//! Spiral facing pattern with corner and side peeling.
//!
//! A centered spiral cannot reach the corners of rectangular stock, nor the
//! far sides of an elongated one. Each level therefore runs a work queue
//! built from the stock aspect ratio: corner peels (arcs of shrinking radius
//! bounded by the two walls adjoining the corner, connected with dogleg
//! moves while the tool stays down), side peels (wall-bounded arcs with a
//! semicircular fallback, connected with retract-move-replunge), and finally
//! a true Archimedean spiral down to the tool radius with a center cleanout
//! circle.

use crate::depth::{effective_cutting_width, z_levels};
use crate::error::{ToolpathError, ToolpathResult};
use crate::geometry::{origin_offset, Point2, BOUNDARY_CLEARANCE, POSITION_EPSILON};
use crate::normalizer::normalize_level;
use crate::patterns::{level_label, GenerationOptions};
use std::f64::consts::PI;
use std::fmt;
use stockprep_core::{
    FacingJobParams, FeedRates, SpiralDirection, ToolpathLevel, ToolpathPoint,
};
use tracing::{debug, trace};

/// Below this XY distance the tool slides instead of retracting.
const SLIDE_EPSILON: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Corner::TopLeft => write!(f, "top-left"),
            Corner::TopRight => write!(f, "top-right"),
            Corner::BottomRight => write!(f, "bottom-right"),
            Corner::BottomLeft => write!(f, "bottom-left"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Top => write!(f, "top"),
            Side::Bottom => write!(f, "bottom"),
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// One unit of peeling work, consumed in order by the level loop.
#[derive(Debug, Clone, Copy, PartialEq)]
enum PeelTask {
    Corner(Corner),
    Side(Side),
    Spiral,
}

impl fmt::Display for PeelTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeelTask::Corner(corner) => write!(f, "corner peel {corner}"),
            PeelTask::Side(side) => write!(f, "side peel {side}"),
            PeelTask::Spiral => write!(f, "spiral"),
        }
    }
}

/// Working envelope for one depth level. The effective boundary is the stock
/// extended by the tool radius plus clearance; the stock boundary is the raw
/// outline and drives corner-completion decisions.
#[derive(Debug, Clone, Copy)]
struct Boundary {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    radius: f64,
    center: Point2,
}

fn corner_coords(corner: Corner, boundary: &Boundary) -> Point2 {
    match corner {
        Corner::TopLeft => Point2::new(boundary.x_min, boundary.y_max),
        Corner::TopRight => Point2::new(boundary.x_max, boundary.y_max),
        Corner::BottomRight => Point2::new(boundary.x_max, boundary.y_min),
        Corner::BottomLeft => Point2::new(boundary.x_min, boundary.y_min),
    }
}

/// Intersection of a circle around `center` with a horizontal or vertical
/// wall, picking the root on the requested side. `None` when the wall lies
/// beyond the radius.
fn line_circle_point(
    radius: f64,
    line_value: f64,
    horizontal: bool,
    center: Point2,
    positive_root: bool,
) -> Option<Point2> {
    let r_sq = radius * radius;
    if horizontal {
        let dy = line_value - center.y;
        if dy * dy > r_sq {
            trace!(radius, line_value, "horizontal wall beyond peel radius");
            return None;
        }
        let dx = (r_sq - dy * dy).sqrt();
        Some(Point2::new(
            center.x + if positive_root { dx } else { -dx },
            line_value,
        ))
    } else {
        let dx = line_value - center.x;
        if dx * dx > r_sq {
            trace!(radius, line_value, "vertical wall beyond peel radius");
            return None;
        }
        let dy = (r_sq - dx * dx).sqrt();
        Some(Point2::new(
            line_value,
            center.y + if positive_root { dy } else { -dy },
        ))
    }
}

/// Arc of the peel radius bounded by the two walls adjoining a corner.
/// Start/end order follows the milling sign.
fn corner_arc(
    radius: f64,
    corner: Corner,
    boundary: &Boundary,
    sign: f64,
) -> Option<(Point2, Point2)> {
    let center = boundary.center;
    let (p1, p2) = match corner {
        Corner::TopLeft => (
            line_circle_point(radius, boundary.y_max, true, center, false)?,
            line_circle_point(radius, boundary.x_min, false, center, true)?,
        ),
        Corner::TopRight => (
            line_circle_point(radius, boundary.x_max, false, center, true)?,
            line_circle_point(radius, boundary.y_max, true, center, true)?,
        ),
        Corner::BottomRight => (
            line_circle_point(radius, boundary.y_min, true, center, true)?,
            line_circle_point(radius, boundary.x_max, false, center, false)?,
        ),
        Corner::BottomLeft => (
            line_circle_point(radius, boundary.x_min, false, center, false)?,
            line_circle_point(radius, boundary.y_min, true, center, false)?,
        ),
    };
    Some(if sign > 0.0 { (p1, p2) } else { (p2, p1) })
}

/// Arc of the peel radius bounded by the two walls perpendicular to the side
/// being peeled. The circle is smaller than the peeled side, so it
/// intersects the adjacent boundaries; `None` once the radius drops inside
/// them.
fn side_arc(radius: f64, side: Side, boundary: &Boundary, sign: f64) -> Option<(Point2, Point2)> {
    let center = boundary.center;
    let (p1, p2) = match side {
        Side::Top => (
            line_circle_point(radius, boundary.x_max, false, center, true)?,
            line_circle_point(radius, boundary.x_min, false, center, true)?,
        ),
        Side::Bottom => (
            line_circle_point(radius, boundary.x_min, false, center, false)?,
            line_circle_point(radius, boundary.x_max, false, center, false)?,
        ),
        Side::Left => (
            line_circle_point(radius, boundary.y_max, true, center, false)?,
            line_circle_point(radius, boundary.y_min, true, center, false)?,
        ),
        Side::Right => (
            line_circle_point(radius, boundary.y_min, true, center, true)?,
            line_circle_point(radius, boundary.y_max, true, center, true)?,
        ),
    };
    Some(if sign > 0.0 { (p1, p2) } else { (p2, p1) })
}

/// Side arc that stays defined for deep peeling: when the bounded
/// computation fails, the arc degrades to a semicircle through the center
/// line of the peeled side.
fn robust_side_arc(radius: f64, side: Side, boundary: &Boundary, sign: f64) -> (Point2, Point2) {
    if let Some(arc) = side_arc(radius, side, boundary, sign) {
        return arc;
    }
    debug!(radius, %side, "bounded side arc failed, using semicircle fallback");
    let center = boundary.center;
    match side {
        Side::Left => {
            let top = Point2::new(center.x, center.y + radius);
            let bottom = Point2::new(center.x, center.y - radius);
            if sign > 0.0 {
                (top, bottom)
            } else {
                (bottom, top)
            }
        }
        Side::Right => {
            let top = Point2::new(center.x, center.y + radius);
            let bottom = Point2::new(center.x, center.y - radius);
            if sign > 0.0 {
                (bottom, top)
            } else {
                (top, bottom)
            }
        }
        Side::Top => {
            let left = Point2::new(center.x - radius, center.y);
            let right = Point2::new(center.x + radius, center.y);
            if sign > 0.0 {
                (right, left)
            } else {
                (left, right)
            }
        }
        Side::Bottom => {
            let left = Point2::new(center.x - radius, center.y);
            let right = Point2::new(center.x + radius, center.y);
            if sign > 0.0 {
                (left, right)
            } else {
                (right, left)
            }
        }
    }
}

/// L-shaped repositioning whose intermediate point is the candidate farther
/// from the working center, so the connection never re-enters cleared
/// material closer in.
fn dogleg_move(from: Point2, to: Point2, center: Point2) -> Vec<Point2> {
    let via_a = Point2::new(from.x, to.y);
    let via_b = Point2::new(to.x, from.y);
    let intermediate = if via_a.distance_to(&center) > via_b.distance_to(&center) {
        via_a
    } else {
        via_b
    };

    let mut moves = Vec::new();
    if intermediate.distance_to(&from) > POSITION_EPSILON {
        moves.push(intermediate);
    }
    if to.distance_to(&intermediate) > POSITION_EPSILON {
        moves.push(to);
    }
    if moves.is_empty() {
        moves.push(to);
    }
    moves
}

/// Task sequence for one level, from the stock aspect ratio. Sides the
/// central spiral already touches are not peeled.
fn build_queue(is_circular: bool, stock_x: f64, stock_y: f64) -> Vec<PeelTask> {
    let mut queue = Vec::new();
    if is_circular {
        queue.push(PeelTask::Spiral);
        return queue;
    }

    if stock_x > stock_y {
        // Landscape: the spiral reaches the top and bottom walls.
        queue.extend([
            PeelTask::Corner(Corner::TopLeft),
            PeelTask::Corner(Corner::BottomLeft),
            PeelTask::Side(Side::Left),
            PeelTask::Corner(Corner::TopRight),
            PeelTask::Corner(Corner::BottomRight),
            PeelTask::Side(Side::Right),
        ]);
    } else if stock_y > stock_x {
        // Portrait: the spiral reaches the left and right walls.
        queue.extend([
            PeelTask::Corner(Corner::TopLeft),
            PeelTask::Corner(Corner::TopRight),
            PeelTask::Side(Side::Top),
            PeelTask::Corner(Corner::BottomLeft),
            PeelTask::Corner(Corner::BottomRight),
            PeelTask::Side(Side::Bottom),
        ]);
    } else {
        // Square: the spiral reaches all four walls.
        queue.extend([
            PeelTask::Corner(Corner::TopLeft),
            PeelTask::Corner(Corner::TopRight),
            PeelTask::Corner(Corner::BottomRight),
            PeelTask::Corner(Corner::BottomLeft),
        ]);
    }
    queue.push(PeelTask::Spiral);
    queue
}

/// Accumulates one level's points, suppressing duplicates and handling the
/// retract-move-replunge connection.
struct LevelBuilder<'a> {
    points: Vec<ToolpathPoint>,
    depth: f64,
    safe_z: f64,
    feeds: &'a FeedRates,
}

impl<'a> LevelBuilder<'a> {
    fn new(depth: f64, safe_z: f64, feeds: &'a FeedRates) -> Self {
        Self {
            points: Vec::new(),
            depth,
            safe_z,
            feeds,
        }
    }

    fn append(&mut self, point: ToolpathPoint) {
        if let Some(last) = self.points.last() {
            let planar = (point.x - last.x).hypot(point.y - last.y);
            if planar <= POSITION_EPSILON && (point.z - last.z).abs() <= POSITION_EPSILON {
                return;
            }
        }
        self.points.push(point);
    }

    fn last_xy(&self) -> Option<Point2> {
        self.points.last().map(|p| Point2::new(p.x, p.y))
    }

    /// Safe repositioning: retract, travel at safe height, plunge back to the
    /// cutting depth. Very short moves slide with the tool down instead.
    fn rapid_to(&mut self, target: Point2, label: &str) {
        let Some(last) = self.last_xy() else { return };
        if last.distance_to(&target) < SLIDE_EPSILON {
            return;
        }
        self.append(
            ToolpathPoint::rapid(last.x, last.y, self.safe_z)
                .with_comment(format!("Retract for {label}")),
        );
        self.append(
            ToolpathPoint::rapid(target.x, target.y, self.safe_z)
                .with_comment(format!("Move to {label}")),
        );
        self.append(
            ToolpathPoint::linear(target.x, target.y, self.depth, self.feeds.z)
                .with_comment(format!("Plunge for {label}")),
        );
    }
}

/// Generates the spiral facing toolpath.
pub fn generate(
    params: &FacingJobParams,
    options: &GenerationOptions,
) -> ToolpathResult<Vec<ToolpathLevel>> {
    let cutting = &params.cutting;
    let feeds = &params.feeds;
    let pattern = &params.pattern;

    if pattern.spiral_direction == SpiralDirection::InsideOut {
        return Err(ToolpathError::UnsupportedPattern(
            "spiral inside-out".to_string(),
        ));
    }

    let is_circular = params.stock.is_circular();
    let (stock_x, stock_y) = params.stock.footprint();
    let tool_radius = cutting.tool_radius;
    let effective_width = effective_cutting_width(tool_radius, cutting.stepover);
    let origin = origin_offset(stock_x, stock_y, params.stock.origin_position);
    let center = Point2::new(origin.x + stock_x / 2.0, origin.y + stock_y / 2.0);

    let effective = Boundary {
        x_min: origin.x - tool_radius - BOUNDARY_CLEARANCE,
        x_max: origin.x + stock_x + tool_radius + BOUNDARY_CLEARANCE,
        y_min: origin.y - tool_radius - BOUNDARY_CLEARANCE,
        y_max: origin.y + stock_y + tool_radius + BOUNDARY_CLEARANCE,
        radius: if is_circular {
            stock_x / 2.0 + tool_radius + BOUNDARY_CLEARANCE
        } else {
            0.0
        },
        center,
    };
    let stock = Boundary {
        x_min: origin.x,
        x_max: origin.x + stock_x,
        y_min: origin.y,
        y_max: origin.y + stock_y,
        radius: if is_circular { stock_x / 2.0 } else { 0.0 },
        center,
    };

    let sign = pattern.milling_direction.sign();
    let clockwise = sign < 0.0;
    let levels = z_levels(cutting);
    let total = levels.len();
    let queue = build_queue(is_circular, stock_x, stock_y);
    let mut all_levels = Vec::with_capacity(total);

    for (index, level) in levels.iter().enumerate() {
        if options.aborted() {
            debug!("aborted before level {}", index + 1);
            return Ok(all_levels);
        }
        options.progress(
            index as f32 / total as f32 * 100.0,
            &level_label(level, index, total),
        );

        let mut builder = LevelBuilder::new(level.depth, cutting.safe_z_height, feeds);

        // Entry point: just outside the first corner to peel, or on the
        // circular stock edge.
        let start = if is_circular {
            Point2::new(center.x + effective.radius, center.y)
        } else if let Some(PeelTask::Corner(corner)) = queue.first().copied() {
            let c = corner_coords(corner, &stock);
            Point2::new(
                c.x + (tool_radius + BOUNDARY_CLEARANCE) * (c.x - center.x).signum(),
                c.y + (tool_radius + BOUNDARY_CLEARANCE) * (c.y - center.y).signum(),
            )
        } else {
            center
        };
        builder.append(
            ToolpathPoint::rapid(start.x, start.y, cutting.safe_z_height)
                .with_comment("Initial Rapid to Safe Z"),
        );
        builder
            .append(ToolpathPoint::rapid(start.x, start.y, level.depth)
                .with_comment("Initial Rapid to Cut Z"));

        for (task_index, task) in queue.iter().enumerate() {
            if options.aborted() {
                debug!("aborted in level {} before {task}", index + 1);
                return Ok(all_levels);
            }
            options.progress(
                (index * queue.len() + task_index) as f32
                    / (total * queue.len()) as f32
                    * 100.0,
                &task.to_string(),
            );

            match *task {
                PeelTask::Corner(corner) => {
                    debug!(%corner, "processing corner");
                    let corner_pos = corner_coords(corner, &stock);
                    let mut peel_radius = (corner_pos.x - center.x)
                        .hypot(corner_pos.y - center.y)
                        + effective_width;

                    loop {
                        let Some((arc_start, arc_end)) =
                            corner_arc(peel_radius, corner, &effective, sign)
                        else {
                            break;
                        };

                        if let Some(last) = builder.points.last() {
                            if (last.z - level.depth).abs() > POSITION_EPSILON {
                                let (x, y) = (last.x, last.y);
                                builder.append(
                                    ToolpathPoint::linear(x, y, level.depth, feeds.z)
                                        .with_comment("Plunge for corner peel"),
                                );
                            }
                        }

                        let from = builder.last_xy().unwrap_or(start);
                        for p in dogleg_move(from, arc_start, center) {
                            builder.append(
                                ToolpathPoint::rapid(p.x, p.y, level.depth)
                                    .with_comment(format!("DogLeg to {corner}")),
                            );
                        }

                        builder.append(
                            ToolpathPoint::arc(
                                arc_end.x,
                                arc_end.y,
                                level.depth,
                                feeds.xy,
                                center.x - arc_start.x,
                                center.y - arc_start.y,
                                clockwise,
                            )
                            .with_comment(format!("Corner Peel {corner}")),
                        );

                        // Stop once a slightly smaller radius no longer
                        // reaches the uncompensated stock corner.
                        if corner_arc(peel_radius - tool_radius, corner, &stock, sign).is_none() {
                            break;
                        }
                        peel_radius -= effective_width;
                    }
                }
                PeelTask::Side(side) => {
                    debug!(%side, "processing side");
                    let side_extent = match side {
                        Side::Left | Side::Right => stock_x / 2.0,
                        Side::Top | Side::Bottom => stock_y / 2.0,
                    };
                    let mut peel_radius = side_extent + tool_radius + BOUNDARY_CLEARANCE;
                    let stop_radius = stock_x.min(stock_y) / 2.0 - 2.0 * tool_radius;

                    while peel_radius > stop_radius {
                        let (arc_start, arc_end) =
                            robust_side_arc(peel_radius, side, &effective, sign);

                        builder.rapid_to(arc_start, &format!("Side Peel {side}"));

                        // Split at the angular midpoint; a single wall-to-wall
                        // arc can exceed a half circle.
                        let start_angle =
                            (arc_start.y - center.y).atan2(arc_start.x - center.x);
                        let mut end_angle = (arc_end.y - center.y).atan2(arc_end.x - center.x);
                        if !clockwise && end_angle < start_angle {
                            end_angle += 2.0 * PI;
                        }
                        if clockwise && end_angle > start_angle {
                            end_angle -= 2.0 * PI;
                        }
                        let mid_angle = (start_angle + end_angle) / 2.0;
                        let mid = Point2::new(
                            center.x + peel_radius * mid_angle.cos(),
                            center.y + peel_radius * mid_angle.sin(),
                        );

                        builder.append(
                            ToolpathPoint::arc(
                                mid.x,
                                mid.y,
                                level.depth,
                                feeds.xy,
                                center.x - arc_start.x,
                                center.y - arc_start.y,
                                clockwise,
                            )
                            .with_comment(format!("Side Peel {side} Seg 1")),
                        );
                        builder.append(
                            ToolpathPoint::arc(
                                arc_end.x,
                                arc_end.y,
                                level.depth,
                                feeds.xy,
                                center.x - mid.x,
                                center.y - mid.y,
                                clockwise,
                            )
                            .with_comment(format!("Side Peel {side} Seg 2")),
                        );

                        peel_radius -= effective_width;
                    }
                }
                PeelTask::Spiral => {
                    debug!("processing spiral");
                    let (engage_radius, engage_angle, start_point) = if is_circular {
                        let radius = effective.radius;
                        (radius, 0.0, Point2::new(center.x + radius, center.y))
                    } else if let Some(last) = builder.last_xy() {
                        (
                            (last.x - center.x).hypot(last.y - center.y),
                            (last.y - center.y).atan2(last.x - center.x),
                            last,
                        )
                    } else {
                        let radius = stock_x.min(stock_y) / 2.0;
                        (radius, 0.0, Point2::new(center.x + radius, center.y))
                    };

                    if let Some(last) = builder.last_xy() {
                        if last.distance_to(&start_point) > SLIDE_EPSILON {
                            builder.rapid_to(start_point, "Spiral Start");
                        }
                    }
                    builder.append(
                        ToolpathPoint::linear(start_point.x, start_point.y, level.depth, feeds.xy)
                            .with_comment("Spiral Start Point"),
                    );

                    let final_radius = tool_radius;
                    let total_radial = engage_radius - final_radius;
                    if total_radial > 0.0 {
                        let revolutions = total_radial / effective_width;
                        let per_rev =
                            pattern.spiral_segments_per_revolution.unwrap_or(36).max(1) as f64;
                        let segments = (revolutions * per_rev).ceil().max(per_rev) as usize;
                        let angle_step = revolutions * 2.0 * PI / segments as f64 * sign;
                        let radius_step = total_radial / segments as f64;

                        let mut radius = engage_radius;
                        let mut theta = engage_angle;
                        for _ in 0..segments {
                            theta += angle_step;
                            radius -= radius_step;
                            builder.append(ToolpathPoint::linear(
                                center.x + radius * theta.cos(),
                                center.y + radius * theta.sin(),
                                level.depth,
                                feeds.xy,
                            ));
                        }
                    }

                    // Two half circles so no boss is left on the centerline.
                    builder.append(
                        ToolpathPoint::linear(
                            center.x + final_radius,
                            center.y,
                            level.depth,
                            feeds.xy,
                        )
                        .with_comment("Center Cleanout Start"),
                    );
                    builder.append(
                        ToolpathPoint::arc(
                            center.x - final_radius,
                            center.y,
                            level.depth,
                            feeds.xy,
                            -final_radius,
                            0.0,
                            clockwise,
                        )
                        .with_comment("Center Cleanout 1"),
                    );
                    builder.append(
                        ToolpathPoint::arc(
                            center.x + final_radius,
                            center.y,
                            level.depth,
                            feeds.xy,
                            final_radius,
                            0.0,
                            clockwise,
                        )
                        .with_comment("Center Cleanout 2"),
                    );
                }
            }
        }

        if let Some(last) = builder.points.last().cloned() {
            builder.append(ToolpathPoint::rapid(last.x, last.y, cutting.safe_z_height));
        }
        all_levels.push(normalize_level(builder.points, feeds));
    }

    Ok(all_levels)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boundary(half: f64) -> Boundary {
        Boundary {
            x_min: -half,
            x_max: half,
            y_min: -half,
            y_max: half,
            radius: 0.0,
            center: Point2::new(0.0, 0.0),
        }
    }

    #[test]
    fn test_line_circle_point() {
        let center = Point2::new(0.0, 0.0);
        let p = line_circle_point(10.0, 6.0, true, center, true).unwrap();
        assert!((p.y - 6.0).abs() < 1e-9);
        assert!((p.x - 8.0).abs() < 1e-9);

        let p = line_circle_point(10.0, 6.0, false, center, false).unwrap();
        assert!((p.x - 6.0).abs() < 1e-9);
        assert!((p.y + 8.0).abs() < 1e-9);

        assert!(line_circle_point(5.0, 6.0, true, center, true).is_none());
    }

    #[test]
    fn test_corner_arc_endpoints_sit_on_walls() {
        let b = boundary(50.0);
        let (start, end) = corner_arc(60.0, Corner::TopRight, &b, 1.0).unwrap();
        // Counter-clockwise: from the right wall up to the top wall.
        assert!((start.x - 50.0).abs() < 1e-9);
        assert!((end.y - 50.0).abs() < 1e-9);

        // Conventional milling swaps the traversal order.
        let (rev_start, rev_end) = corner_arc(60.0, Corner::TopRight, &b, -1.0).unwrap();
        assert_eq!((rev_start, rev_end), (end, start));

        // The radius no longer reaches the walls.
        assert!(corner_arc(40.0, Corner::TopRight, &b, 1.0).is_none());
    }

    #[test]
    fn test_side_arc_and_semicircle_fallback() {
        let b = boundary(50.0);
        let (start, end) = side_arc(60.0, Side::Left, &b, 1.0).unwrap();
        assert!((start.y - 50.0).abs() < 1e-9);
        assert!((end.y + 50.0).abs() < 1e-9);
        assert!(start.x < 0.0 && end.x < 0.0);

        // Inside the perpendicular walls the bounded form fails and the
        // semicircle takes over with the same result shape.
        assert!(side_arc(30.0, Side::Left, &b, 1.0).is_none());
        let (start, end) = robust_side_arc(30.0, Side::Left, &b, 1.0);
        assert_eq!((start.x, start.y), (0.0, 30.0));
        assert_eq!((end.x, end.y), (0.0, -30.0));
    }

    #[test]
    fn test_dogleg_prefers_the_outer_intermediate() {
        let center = Point2::new(0.0, 0.0);
        let from = Point2::new(50.0, 40.0);
        let to = Point2::new(30.0, 55.0);
        let moves = dogleg_move(from, to, center);
        assert_eq!(moves.len(), 2);
        // Candidates are (50,55) and (30,40); the first is farther out.
        assert_eq!((moves[0].x, moves[0].y), (50.0, 55.0));
        assert_eq!((moves[1].x, moves[1].y), (30.0, 55.0));
    }

    #[test]
    fn test_dogleg_collapses_collinear_moves() {
        let center = Point2::new(0.0, 0.0);
        let from = Point2::new(50.0, 40.0);
        let to = Point2::new(50.0, 55.0);
        let moves = dogleg_move(from, to, center);
        assert_eq!(moves.len(), 1);
        assert_eq!((moves[0].x, moves[0].y), (50.0, 55.0));
    }

    #[test]
    fn test_build_queue_by_aspect_ratio() {
        assert_eq!(build_queue(true, 60.0, 60.0), vec![PeelTask::Spiral]);

        let square = build_queue(false, 100.0, 100.0);
        assert_eq!(square.len(), 5);
        assert!(square[..4]
            .iter()
            .all(|t| matches!(t, PeelTask::Corner(_))));
        assert_eq!(square[4], PeelTask::Spiral);

        let landscape = build_queue(false, 200.0, 100.0);
        assert_eq!(
            landscape,
            vec![
                PeelTask::Corner(Corner::TopLeft),
                PeelTask::Corner(Corner::BottomLeft),
                PeelTask::Side(Side::Left),
                PeelTask::Corner(Corner::TopRight),
                PeelTask::Corner(Corner::BottomRight),
                PeelTask::Side(Side::Right),
                PeelTask::Spiral,
            ]
        );

        let portrait = build_queue(false, 100.0, 200.0);
        assert!(portrait.contains(&PeelTask::Side(Side::Top)));
        assert!(portrait.contains(&PeelTask::Side(Side::Bottom)));
    }
}
