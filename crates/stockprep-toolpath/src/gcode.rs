//! G-code program emission for generated facing toolpaths.
//!
//! Turns the normalized per-level move lists into a complete program:
//! header, stock metadata for the downstream viewer, setup, per-level
//! cutting sections, and a cleanup/retract footer. Feed words are restated
//! only when the command kind or the feed rate changes.

use crate::depth::z_levels;
use stockprep_core::{FacingJobParams, MoveKind, StockShape, ToolpathLevel, ToolpathPoint};

fn format_number(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// Generates the complete G-code program for a toolpath.
pub fn generate_gcode(
    toolpath: &[ToolpathLevel],
    params: &FacingJobParams,
    tool_number: u32,
    workplace: u32,
) -> String {
    let cutting = &params.cutting;
    let mut sections = Vec::new();

    sections.push(header(params, tool_number));
    sections.push(stock_metadata(params));
    sections.push(setup(tool_number, params.feeds.spindle_speed, workplace));

    if let Some(first) = toolpath.first().and_then(|level| level.first()) {
        sections.push(positioning(first, cutting.z_offset + cutting.safe_z_height));
    }

    let levels = z_levels(cutting);
    for (index, points) in toolpath.iter().enumerate() {
        if points.is_empty() {
            continue;
        }
        let Some(level) = levels.get(index) else {
            continue;
        };
        let safe_z = level.depth + cutting.safe_z_height;
        let finishing_offset = if level.is_finishing {
            cutting.finishing_pass_offset
        } else {
            0.0
        };
        sections.push(cutting_moves(
            points,
            index,
            level.is_finishing,
            safe_z,
            finishing_offset,
        ));
    }

    sections.push(cleanup(cutting.z_offset, cutting.safe_z_height));
    sections.join("\n")
}

fn header(params: &FacingJobParams, tool_number: u32) -> String {
    let stock = &params.stock;
    let cutting = &params.cutting;
    let pattern = &params.pattern;
    let feeds = &params.feeds;
    let mut lines = Vec::new();

    lines.push("; Stockprep - Generated Facing Operation".to_string());
    match stock.shape {
        StockShape::Rectangular => lines.push(format!(
            "; Stock: Rectangular {}x{}mm",
            format_number(stock.x.unwrap_or(0.0), 4),
            format_number(stock.y.unwrap_or(0.0), 4)
        )),
        StockShape::Circular => lines.push(format!(
            "; Stock: Circular D{}mm",
            format_number(stock.diameter.unwrap_or(0.0), 4)
        )),
    }
    lines.push(format!(
        "; Pattern: {} at {}°",
        pattern.pattern_type, pattern.angle
    ));
    lines.push(format!(
        "; Tool: T{tool_number} R{}mm",
        format_number(cutting.tool_radius, 4)
    ));
    lines.push(format!(
        "; Feed: XY={} Z={} mm/min",
        format_number(feeds.xy, 0),
        format_number(feeds.z, 0)
    ));
    lines.push(format!(
        "; Spindle: {} RPM",
        format_number(feeds.spindle_speed, 0)
    ));
    lines.push(String::new());
    lines.push("G21 ; Metric units".to_string());
    lines.push("G90 ; Absolute positioning".to_string());
    lines.push("G94 ; Feed rate per minute".to_string());
    lines.push(String::new());

    lines.join("\n")
}

/// Stock dimensions as a key/value record the G-code viewer picks up.
fn stock_metadata(params: &FacingJobParams) -> String {
    let stock = &params.stock;
    let cutting = &params.cutting;
    let mut lines = Vec::new();

    lines.push("; Stock metadata for G-code viewer".to_string());
    match stock.shape {
        StockShape::Rectangular => lines.push(format!(
            "M7500 K\"stock_cuboid\" V\"X{}:Y{}:Z{}\"",
            format_number(stock.x.unwrap_or(0.0), 4),
            format_number(stock.y.unwrap_or(0.0), 4),
            format_number(cutting.total_depth, 4)
        )),
        StockShape::Circular => lines.push(format!(
            "M7500 K\"stock_cylinder\" V\"D{}:Z{}\"",
            format_number(stock.diameter.unwrap_or(0.0), 4),
            format_number(cutting.total_depth, 4)
        )),
    }
    lines.push(String::new());

    lines.join("\n")
}

fn setup(tool_number: u32, spindle_speed: f64, workplace: u32) -> String {
    let mut lines = Vec::new();

    lines.push("; Setup".to_string());
    lines.push(format!("G{} ; Use WCS {workplace}", 53 + workplace));
    lines.push(format!("T{tool_number} ; Confirm tool selection"));
    lines.push(format!(
        "M3.9 S{} ; Start spindle with safety wrapper",
        format_number(spindle_speed, 0)
    ));
    lines.push(String::new());

    lines.join("\n")
}

fn positioning(first_point: &ToolpathPoint, safe_z: f64) -> String {
    let mut lines = Vec::new();

    lines.push("; Position to start".to_string());
    lines.push(format!(
        "G0 Z{} ; Move to safe height above stock top",
        format_number(safe_z, 4)
    ));
    lines.push(format!(
        "G0 X{} Y{} ; Rapid to start position",
        format_number(first_point.x, 4),
        format_number(first_point.y, 4)
    ));
    lines.push(String::new());

    lines.join("\n")
}

fn cutting_moves(
    points: &[ToolpathPoint],
    level_index: usize,
    is_finishing: bool,
    safe_z: f64,
    finishing_offset: f64,
) -> String {
    let Some(first_point) = points.first() else {
        return String::new();
    };
    let mut lines = Vec::new();

    let pass_type = if is_finishing {
        "Finishing Pass".to_string()
    } else {
        format!("Roughing Z Level {}", level_index + 1)
    };
    lines.push(format!(
        "; {pass_type}: {}mm (Safe Z: {}mm)",
        format_number(first_point.z, 4),
        format_number(safe_z, 4)
    ));
    if is_finishing && finishing_offset != 0.0 {
        lines.push(format!("; Offset: {}mm", format_number(finishing_offset, 4)));
    }

    let mut last_command: Option<&'static str> = None;
    let mut last_feed: Option<f64> = None;

    for point in points {
        let mut x = point.x;
        let mut y = point.y;
        if is_finishing && finishing_offset != 0.0 {
            x += finishing_offset;
            y += finishing_offset;
        }

        match point.kind {
            MoveKind::Rapid => {
                if last_command != Some("G0") {
                    last_command = Some("G0");
                    last_feed = None;
                }
                lines.push(format!(
                    "G0 X{} Y{} Z{}",
                    format_number(x, 4),
                    format_number(y, 4),
                    format_number(point.z, 4)
                ));
            }
            MoveKind::Arc { i, j, clockwise } => {
                let command = if clockwise { "G2" } else { "G3" };
                let mut feed_part = String::new();
                if (last_command != Some(command) || last_feed != Some(point.feed_rate))
                    && point.feed_rate > 0.0
                {
                    feed_part = format!(" F{}", format_number(point.feed_rate, 0));
                    last_feed = Some(point.feed_rate);
                }
                last_command = Some(command);
                lines.push(format!(
                    "{command} X{} Y{} Z{} I{} J{}{feed_part}",
                    format_number(x, 4),
                    format_number(y, 4),
                    format_number(point.z, 4),
                    format_number(i, 4),
                    format_number(j, 4)
                ));
            }
            MoveKind::Linear => {
                let mut feed_part = String::new();
                if (last_command != Some("G1") || last_feed != Some(point.feed_rate))
                    && point.feed_rate > 0.0
                {
                    feed_part = format!(" F{}", format_number(point.feed_rate, 0));
                    last_feed = Some(point.feed_rate);
                }
                last_command = Some("G1");
                lines.push(format!(
                    "G1 X{} Y{} Z{}{feed_part}",
                    format_number(x, 4),
                    format_number(y, 4),
                    format_number(point.z, 4)
                ));
            }
        }
    }
    lines.push(String::new());

    lines.join("\n")
}

fn cleanup(z_offset: f64, safe_z_height: f64) -> String {
    let mut lines = Vec::new();

    lines.push("; Cleanup".to_string());
    lines.push(format!(
        "G0 Z{} ; Final retract to safe height above stock top",
        format_number(z_offset + safe_z_height, 4)
    ));
    lines.push("M5.9 ; Stop spindle with safety wrapper".to_string());
    lines.push("G27 Z1 ; Park machine".to_string());
    lines.push("; Program ends automatically at end of file".to_string());

    lines.join("\n")
}
