//! Planar geometry primitives used by the pattern generators.

use stockprep_core::{HorizontalAnchor, OriginPosition, VerticalAnchor};

/// Tolerance for position coincidence checks.
pub const POSITION_EPSILON: f64 = 1e-6;

/// Tolerance added to boundary compensation so the tool clears the stock edge
/// (length units).
pub const BOUNDARY_CLEARANCE: f64 = 1.0;

/// A point in the XY cutting plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point2) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Axis-aligned rectangle used for clipping and containment checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    pub fn contains(&self, point: &Point2) -> bool {
        point.x >= self.x_min - POSITION_EPSILON
            && point.x <= self.x_max + POSITION_EPSILON
            && point.y >= self.y_min - POSITION_EPSILON
            && point.y <= self.y_max + POSITION_EPSILON
    }
}

/// First intersection of the segment `p1..p2` with a circle, in segment
/// order. Returns `None` when the segment misses the circle entirely.
pub fn segment_circle_intersection(
    p1: Point2,
    p2: Point2,
    center: Point2,
    radius: f64,
) -> Option<Point2> {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let a = dx * dx + dy * dy;
    if a < POSITION_EPSILON {
        return None;
    }
    let b = 2.0 * (dx * (p1.x - center.x) + dy * (p1.y - center.y));
    let c = (p1.x - center.x).powi(2) + (p1.y - center.y).powi(2) - radius * radius;
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_disc = discriminant.sqrt();
    for t in [(-b - sqrt_disc) / (2.0 * a), (-b + sqrt_disc) / (2.0 * a)] {
        if t >= -POSITION_EPSILON && t <= 1.0 + POSITION_EPSILON {
            let t = t.clamp(0.0, 1.0);
            return Some(Point2::new(p1.x + t * dx, p1.y + t * dy));
        }
    }
    None
}

/// Portion of the segment `p1..p2` inside a circle, found by intersecting
/// from both ends. Segments fully inside are returned unchanged; segments
/// fully outside yield `None`.
pub fn clip_segment_to_circle(
    p1: Point2,
    p2: Point2,
    center: Point2,
    radius: f64,
) -> Option<(Point2, Point2)> {
    let inside = |p: &Point2| p.distance_to(&center) <= radius + POSITION_EPSILON;
    let start = if inside(&p1) {
        p1
    } else {
        segment_circle_intersection(p1, p2, center, radius)?
    };
    let end = if inside(&p2) {
        p2
    } else {
        segment_circle_intersection(p2, p1, center, radius)?
    };
    Some((start, end))
}

/// Liang-Barsky clipping of the segment `p1..p2` against a rectangle.
/// Returns `None` when the segment lies entirely outside. A zero-length axis
/// component is treated as parallel and rejected immediately when outside on
/// that axis.
pub fn clip_segment_to_rect(p1: Point2, p2: Point2, rect: &Rect) -> Option<(Point2, Point2)> {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    let p = [-dx, dx, -dy, dy];
    let q = [
        p1.x - rect.x_min,
        rect.x_max - p1.x,
        p1.y - rect.y_min,
        rect.y_max - p1.y,
    ];
    for i in 0..4 {
        if p[i].abs() < POSITION_EPSILON {
            if q[i] < 0.0 {
                return None;
            }
        } else {
            let r = q[i] / p[i];
            if p[i] < 0.0 {
                if r > t1 {
                    return None;
                }
                if r > t0 {
                    t0 = r;
                }
            } else {
                if r < t0 {
                    return None;
                }
                if r < t1 {
                    t1 = r;
                }
            }
        }
    }
    Some((
        Point2::new(p1.x + t0 * dx, p1.y + t0 * dy),
        Point2::new(p1.x + t1 * dx, p1.y + t1 * dy),
    ))
}

/// Rigid rotation of `point` about `center` by `angle_degrees`. The
/// zero-angle case returns the exact input so axis-aligned paths carry no
/// trigonometric round-off.
pub fn rotate_point(point: Point2, center: Point2, angle_degrees: f64) -> Point2 {
    if angle_degrees.abs() < POSITION_EPSILON {
        return point;
    }
    let radians = angle_degrees.to_radians();
    let (sin, cos) = radians.sin_cos();
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    Point2::new(
        center.x + dx * cos - dy * sin,
        center.y + dx * sin + dy * cos,
    )
}

/// XY offset positioning the stock's reference corner relative to program
/// zero. `front-left` yields a zero offset.
pub fn origin_offset(stock_x: f64, stock_y: f64, origin: OriginPosition) -> Point2 {
    let x = match origin.horizontal {
        HorizontalAnchor::Left => 0.0,
        HorizontalAnchor::Center => -stock_x / 2.0,
        HorizontalAnchor::Right => -stock_x,
    };
    let y = match origin.vertical {
        VerticalAnchor::Front => 0.0,
        VerticalAnchor::Center => -stock_y / 2.0,
        VerticalAnchor::Back => -stock_y,
    };
    Point2::new(x, y)
}
