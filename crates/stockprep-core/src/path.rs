//! Toolpath points, levels, and planned cutting depths.

use serde::{Deserialize, Serialize};

/// Interpolation kind of a single move.
///
/// Arc moves carry their center offset relative to the move's start point
/// (the point preceding them in the level) and a rotation sense.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MoveKind {
    Rapid,
    Linear,
    Arc { i: f64, j: f64, clockwise: bool },
}

/// A single planar+depth position in a toolpath level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolpathPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Feed rate for the move ending at this point; 0 on rapids.
    pub feed_rate: f64,
    #[serde(flatten)]
    pub kind: MoveKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl ToolpathPoint {
    pub fn rapid(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            feed_rate: 0.0,
            kind: MoveKind::Rapid,
            comment: None,
        }
    }

    pub fn linear(x: f64, y: f64, z: f64, feed_rate: f64) -> Self {
        Self {
            x,
            y,
            z,
            feed_rate,
            kind: MoveKind::Linear,
            comment: None,
        }
    }

    pub fn arc(x: f64, y: f64, z: f64, feed_rate: f64, i: f64, j: f64, clockwise: bool) -> Self {
        Self {
            x,
            y,
            z,
            feed_rate,
            kind: MoveKind::Arc { i, j, clockwise },
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn is_arc(&self) -> bool {
        matches!(self.kind, MoveKind::Arc { .. })
    }
}

/// Ordered move sequence at one cutting depth, produced by exactly one
/// generator call.
pub type ToolpathLevel = Vec<ToolpathPoint>;

/// One planned cutting depth. The planner's output order is the cutting
/// order and is never reordered downstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZLevel {
    pub depth: f64,
    pub is_finishing: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_constructors() {
        let p = ToolpathPoint::rapid(1.0, 2.0, 5.0);
        assert_eq!(p.feed_rate, 0.0);
        assert_eq!(p.kind, MoveKind::Rapid);
        assert!(!p.is_arc());

        let p = ToolpathPoint::arc(10.0, 0.0, -1.0, 800.0, -5.0, 0.0, true);
        assert!(p.is_arc());
    }

    #[test]
    fn test_arc_point_wire_form() {
        let p = ToolpathPoint::arc(10.0, 0.0, -1.0, 800.0, -5.0, 0.0, false)
            .with_comment("Center Cleanout 1");
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["type"], "arc");
        assert_eq!(json["i"], -5.0);
        assert_eq!(json["j"], 0.0);
        assert_eq!(json["clockwise"], false);
        assert_eq!(json["feedRate"], 800.0);

        let parsed: ToolpathPoint = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, p);
    }

    #[test]
    fn test_linear_point_wire_form_has_no_arc_fields() {
        let p = ToolpathPoint::linear(1.0, 2.0, -0.5, 600.0);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["type"], "linear");
        assert!(json.get("i").is_none());
        assert!(json.get("comment").is_none());
    }
}
