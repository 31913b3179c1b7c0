use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use stockprep_core::{
    FacingJobParams, MillingDirection, MoveKind, OriginPosition, PatternType, SpiralDirection,
    StockGeometry, ToolpathPoint,
};
use stockprep_toolpath::geometry::{Point2, Rect};
use stockprep_toolpath::{generate_toolpath, GenerationOptions, ToolpathError};

fn job(pattern_type: PatternType) -> FacingJobParams {
    let mut params = FacingJobParams::default();
    params.stock = StockGeometry::rectangular(100.0, 80.0, 10.0, OriginPosition::default());
    params.cutting.tool_radius = 3.0;
    params.cutting.stepover = 50.0;
    params.cutting.stepdown = 2.0;
    params.cutting.total_depth = 2.0;
    params.cutting.safe_z_height = 5.0;
    params.pattern.pattern_type = pattern_type;
    params
}

fn arcs(level: &[ToolpathPoint]) -> Vec<(f64, f64, bool)> {
    level
        .iter()
        .filter_map(|p| match p.kind {
            MoveKind::Arc { i, j, clockwise } => Some((i, j, clockwise)),
            _ => None,
        })
        .collect()
}

fn cutting_moves(level: &[ToolpathPoint], feed_xy: f64) -> usize {
    level
        .iter()
        .filter(|p| p.kind == MoveKind::Linear && p.feed_rate == feed_xy)
        .count()
}

#[test]
fn rectilinear_produces_expected_pass_count() {
    let params = job(PatternType::Rectilinear);
    let toolpath = generate_toolpath(&params, &GenerationOptions::default()).unwrap();
    assert_eq!(toolpath.len(), 1);

    // ceil(80 / 3) = 27 rows, one cutting move each.
    assert_eq!(cutting_moves(&toolpath[0], params.feeds.xy), 27);
}

#[test]
fn levels_start_and_end_at_safe_height() {
    for pattern_type in [
        PatternType::Rectilinear,
        PatternType::Zigzag,
        PatternType::Spiral,
    ] {
        let params = job(pattern_type);
        let toolpath = generate_toolpath(&params, &GenerationOptions::default()).unwrap();
        for level in &toolpath {
            let first = level.first().unwrap();
            let last = level.last().unwrap();
            assert!(first.z >= params.cutting.safe_z_height, "{pattern_type}");
            assert!(last.z >= params.cutting.safe_z_height, "{pattern_type}");
            assert!(level.iter().all(|p| p.feed_rate >= 0.0));
        }
    }
}

#[test]
fn zigzag_plunges_once_per_level() {
    let params = job(PatternType::Zigzag);
    let toolpath = generate_toolpath(&params, &GenerationOptions::default()).unwrap();
    let level = &toolpath[0];

    let at_safe = level
        .iter()
        .filter(|p| (p.z - params.cutting.safe_z_height).abs() < 1e-9)
        .count();
    assert_eq!(at_safe, 2);

    // 27 rows cut plus 26 step-over connectors, all in one connected path.
    assert_eq!(cutting_moves(level, params.feeds.xy), 27 + 26);
}

#[test]
fn rotated_scan_covers_the_perpendicular_dimension() {
    let mut params = job(PatternType::Rectilinear);
    params.pattern.angle = 90.0;
    let toolpath = generate_toolpath(&params, &GenerationOptions::default()).unwrap();
    let level = &toolpath[0];

    // The 90-degree scan steps across the 100mm dimension; two of the
    // ceil(100/3)=34 rows fall outside the compensated envelope and are
    // skipped.
    assert_eq!(cutting_moves(level, params.feeds.xy), 32);

    let envelope = Rect::new(3.0, 3.0, 97.0, 77.0);
    for p in level {
        assert!(
            envelope.contains(&Point2::new(p.x, p.y)),
            "point ({}, {}) outside compensated envelope",
            p.x,
            p.y
        );
    }
}

#[test]
fn circular_zigzag_stitches_rows_with_boundary_arcs() {
    let mut params = job(PatternType::Zigzag);
    params.stock = StockGeometry::circular(60.0, 10.0, "center-center".parse().unwrap());
    let toolpath = generate_toolpath(&params, &GenerationOptions::default()).unwrap();
    let level = &toolpath[0];

    // 17 chords survive clipping against the compensated circle (radius 27);
    // tangent and outside rows are skipped. 16 connectors stitch them.
    assert_eq!(cutting_moves(level, params.feeds.xy), 17);
    assert_eq!(arcs(level).len(), 16);

    let comp_radius = 27.0;
    for p in level {
        assert!(
            p.x.hypot(p.y) <= comp_radius + 1e-6,
            "point ({}, {}) outside compensated circle",
            p.x,
            p.y
        );
    }
}

#[test]
fn spiral_on_square_stock_peels_corners_only() {
    let mut params = job(PatternType::Spiral);
    params.stock = StockGeometry::rectangular(100.0, 100.0, 10.0, OriginPosition::default());
    let toolpath = generate_toolpath(&params, &GenerationOptions::default()).unwrap();
    assert_eq!(toolpath.len(), 1);
    let level = &toolpath[0];

    // Corner tasks connect with doglegs at depth; only the initial approach
    // and the final retract touch the safe height. Side peeling would insert
    // additional retracts.
    let at_safe = level
        .iter()
        .filter(|p| (p.z - params.cutting.safe_z_height).abs() < 1e-9)
        .count();
    assert_eq!(at_safe, 2);

    // Corner peel arcs plus the two-half-circle center cleanout.
    let level_arcs = arcs(level);
    assert!(level_arcs.len() >= 6);

    // The cleanout circles the stock center (50, 50) at the tool radius.
    let n = level.len();
    let cleanout = &level[n - 3..n - 1];
    assert!((cleanout[0].x - 47.0).abs() < 1e-6 && (cleanout[0].y - 50.0).abs() < 1e-6);
    assert!((cleanout[1].x - 53.0).abs() < 1e-6 && (cleanout[1].y - 50.0).abs() < 1e-6);

    // The spiral walks down to the tool radius before the cleanout.
    let reaches_center = level.iter().any(|p| {
        p.kind == MoveKind::Linear && ((p.x - 50.0).hypot(p.y - 50.0) - 3.0).abs() < 0.5
    });
    assert!(reaches_center);

    // Everything stays within the spiral engage radius of the center; the
    // first revolutions ride just outside the compensated box, cutting air
    // past the stock edge.
    let engage_limit = Rect::new(-6.0, -6.0, 106.0, 106.0);
    for p in level {
        assert!(
            engage_limit.contains(&Point2::new(p.x, p.y)),
            "point ({}, {}) beyond the engage envelope",
            p.x,
            p.y
        );
    }
}

#[test]
fn spiral_on_landscape_stock_peels_sides_with_retracts() {
    let mut params = job(PatternType::Spiral);
    params.stock = StockGeometry::rectangular(160.0, 80.0, 10.0, OriginPosition::default());
    let toolpath = generate_toolpath(&params, &GenerationOptions::default()).unwrap();
    let level = &toolpath[0];

    // Side peeling lifts over cleared interior, so the level visits the safe
    // height more than the two entry/exit points.
    let at_safe = level
        .iter()
        .filter(|p| (p.z - params.cutting.safe_z_height).abs() < 1e-9)
        .count();
    assert!(at_safe > 2);
}

#[test]
fn spiral_on_circular_stock_needs_no_peeling() {
    let mut params = job(PatternType::Spiral);
    params.stock = StockGeometry::circular(60.0, 10.0, "center-center".parse().unwrap());
    let toolpath = generate_toolpath(&params, &GenerationOptions::default()).unwrap();
    let level = &toolpath[0];

    // Pure spiral: engage at the stock edge, no corner or side arcs before
    // the trailing center cleanout pair.
    let level_arcs = arcs(level);
    assert_eq!(level_arcs.len(), 2);

    let engage_radius = 60.0 / 2.0 + 3.0 + 1.0;
    let max_radius = level
        .iter()
        .map(|p| p.x.hypot(p.y))
        .fold(0.0_f64, f64::max);
    assert!((max_radius - engage_radius).abs() < 1e-6);
}

#[test]
fn milling_direction_flips_every_arc_rotation_sense() {
    let mut climb = job(PatternType::Spiral);
    climb.stock = StockGeometry::rectangular(100.0, 100.0, 10.0, OriginPosition::default());
    climb.pattern.milling_direction = MillingDirection::Climb;

    let mut conventional = climb.clone();
    conventional.pattern.milling_direction = MillingDirection::Conventional;

    let climb_path = generate_toolpath(&climb, &GenerationOptions::default()).unwrap();
    let conventional_path =
        generate_toolpath(&conventional, &GenerationOptions::default()).unwrap();

    let climb_arcs = arcs(&climb_path[0]);
    let conventional_arcs = arcs(&conventional_path[0]);
    assert!(!climb_arcs.is_empty());
    assert!(climb_arcs.iter().all(|(_, _, clockwise)| !clockwise));
    assert!(conventional_arcs.iter().all(|(_, _, clockwise)| *clockwise));

    // The center cleanout is identical geometry either way.
    let climb_cleanout: Vec<&ToolpathPoint> =
        climb_path[0].iter().rev().take(3).collect();
    let conventional_cleanout: Vec<&ToolpathPoint> =
        conventional_path[0].iter().rev().take(3).collect();
    for (a, b) in climb_cleanout.iter().zip(&conventional_cleanout) {
        assert!((a.x - b.x).abs() < 1e-9);
        assert!((a.y - b.y).abs() < 1e-9);
    }
}

#[test]
fn abort_after_first_level_yields_one_complete_level() {
    let mut params = job(PatternType::Spiral);
    params.stock = StockGeometry::rectangular(100.0, 100.0, 10.0, OriginPosition::default());
    params.cutting.stepdown = 1.0;
    params.cutting.total_depth = 2.0;

    let abort = Arc::new(AtomicBool::new(false));
    let abort_signal = abort.clone();
    let options = GenerationOptions {
        should_abort: Some(Arc::new(move || abort.load(Ordering::Relaxed))),
        on_progress: Some(Arc::new(move |_, message: &str| {
            if message.contains("Roughing level 2") {
                abort_signal.store(true, Ordering::Relaxed);
            }
        })),
    };

    let toolpath = generate_toolpath(&params, &options).unwrap();
    assert_eq!(toolpath.len(), 1);
    assert!(!toolpath[0].is_empty());
}

#[test]
fn abort_before_start_yields_no_levels() {
    let params = job(PatternType::Spiral);
    let options = GenerationOptions {
        should_abort: Some(Arc::new(|| true)),
        on_progress: None,
    };
    let toolpath = generate_toolpath(&params, &options).unwrap();
    assert!(toolpath.is_empty());
}

#[test]
fn inside_out_spiral_is_rejected() {
    let mut params = job(PatternType::Spiral);
    params.pattern.spiral_direction = SpiralDirection::InsideOut;
    let err = generate_toolpath(&params, &GenerationOptions::default()).unwrap_err();
    assert!(matches!(err, ToolpathError::UnsupportedPattern(_)));
    assert_eq!(err.to_string(), "Unsupported facing pattern: spiral inside-out");
}

#[test]
fn non_terminating_parameters_are_rejected() {
    let mut params = job(PatternType::Spiral);
    params.cutting.stepdown = 0.0;
    assert!(matches!(
        generate_toolpath(&params, &GenerationOptions::default()),
        Err(ToolpathError::InvalidParameters(_))
    ));

    let mut params = job(PatternType::Zigzag);
    params.cutting.stepover = 0.0;
    assert!(matches!(
        generate_toolpath(&params, &GenerationOptions::default()),
        Err(ToolpathError::InvalidParameters(_))
    ));
}

#[test]
fn finishing_pass_appends_one_deeper_level() {
    let mut params = job(PatternType::Rectilinear);
    params.cutting.stepdown = 3.0;
    params.cutting.total_depth = 10.0;
    params.cutting.finishing_pass = true;
    params.cutting.finishing_pass_height = 0.5;
    let toolpath = generate_toolpath(&params, &GenerationOptions::default()).unwrap();
    assert_eq!(toolpath.len(), 5);

    let depth_of = |level: &[ToolpathPoint]| {
        level
            .iter()
            .map(|p| p.z)
            .fold(f64::INFINITY, f64::min)
    };
    assert!((depth_of(&toolpath[3]) + 9.5).abs() < 1e-9);
    assert!((depth_of(&toolpath[4]) + 10.0).abs() < 1e-9);
}
