//! Stock geometry and origin placement.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shape of the workpiece blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockShape {
    Rectangular,
    Circular,
}

impl fmt::Display for StockShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockShape::Rectangular => write!(f, "rectangular"),
            StockShape::Circular => write!(f, "circular"),
        }
    }
}

/// Vertical anchor of the work origin on the stock footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAnchor {
    Front,
    Center,
    Back,
}

/// Horizontal anchor of the work origin on the stock footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAnchor {
    Left,
    Center,
    Right,
}

/// Origin placement code combining a vertical and a horizontal anchor,
/// written as e.g. `front-left` or `center-center`.
///
/// `front-left` places program zero on the stock's front-left corner, which
/// makes the origin offset exactly zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OriginPosition {
    pub vertical: VerticalAnchor,
    pub horizontal: HorizontalAnchor,
}

impl OriginPosition {
    pub fn new(vertical: VerticalAnchor, horizontal: HorizontalAnchor) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }
}

impl Default for OriginPosition {
    fn default() -> Self {
        Self::new(VerticalAnchor::Front, HorizontalAnchor::Left)
    }
}

impl FromStr for OriginPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (vertical, horizontal) = s
            .split_once('-')
            .ok_or_else(|| format!("Unknown origin position: {s}"))?;
        let vertical = match vertical {
            "front" => VerticalAnchor::Front,
            "center" => VerticalAnchor::Center,
            "back" => VerticalAnchor::Back,
            _ => return Err(format!("Unknown origin position: {s}")),
        };
        let horizontal = match horizontal {
            "left" => HorizontalAnchor::Left,
            "center" => HorizontalAnchor::Center,
            "right" => HorizontalAnchor::Right,
            _ => return Err(format!("Unknown origin position: {s}")),
        };
        Ok(Self::new(vertical, horizontal))
    }
}

impl fmt::Display for OriginPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vertical = match self.vertical {
            VerticalAnchor::Front => "front",
            VerticalAnchor::Center => "center",
            VerticalAnchor::Back => "back",
        };
        let horizontal = match self.horizontal {
            HorizontalAnchor::Left => "left",
            HorizontalAnchor::Center => "center",
            HorizontalAnchor::Right => "right",
        };
        write!(f, "{vertical}-{horizontal}")
    }
}

impl TryFrom<String> for OriginPosition {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OriginPosition> for String {
    fn from(value: OriginPosition) -> Self {
        value.to_string()
    }
}

/// Dimensions and origin placement of the workpiece blank.
///
/// Exactly one of {`x`+`y`, `diameter`} is meaningful, selected by `shape`.
/// `z` is the workpiece height used by downstream visualization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockGeometry {
    pub shape: StockShape,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diameter: Option<f64>,
    pub origin_position: OriginPosition,
}

impl StockGeometry {
    pub fn rectangular(x: f64, y: f64, z: f64, origin_position: OriginPosition) -> Self {
        Self {
            shape: StockShape::Rectangular,
            x: Some(x),
            y: Some(y),
            z: Some(z),
            diameter: None,
            origin_position,
        }
    }

    pub fn circular(diameter: f64, z: f64, origin_position: OriginPosition) -> Self {
        Self {
            shape: StockShape::Circular,
            x: None,
            y: None,
            z: Some(z),
            diameter: Some(diameter),
            origin_position,
        }
    }

    pub fn is_circular(&self) -> bool {
        self.shape == StockShape::Circular
    }

    /// X/Y extent of the stock footprint. Circular stock collapses to its
    /// bounding square of diameter x diameter.
    pub fn footprint(&self) -> (f64, f64) {
        match self.shape {
            StockShape::Rectangular => (self.x.unwrap_or(0.0), self.y.unwrap_or(0.0)),
            StockShape::Circular => {
                let d = self.diameter.unwrap_or(0.0);
                (d, d)
            }
        }
    }
}

impl Default for StockGeometry {
    fn default() -> Self {
        Self::rectangular(100.0, 100.0, 10.0, OriginPosition::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_position_parsing() {
        let origin: OriginPosition = "front-left".parse().unwrap();
        assert_eq!(origin.vertical, VerticalAnchor::Front);
        assert_eq!(origin.horizontal, HorizontalAnchor::Left);

        let origin: OriginPosition = "back-center".parse().unwrap();
        assert_eq!(origin.vertical, VerticalAnchor::Back);
        assert_eq!(origin.horizontal, HorizontalAnchor::Center);

        assert!("middle-left".parse::<OriginPosition>().is_err());
        assert!("frontleft".parse::<OriginPosition>().is_err());
    }

    #[test]
    fn test_origin_position_round_trip() {
        for code in ["front-left", "center-center", "back-right"] {
            let origin: OriginPosition = code.parse().unwrap();
            assert_eq!(origin.to_string(), code);
        }
    }

    #[test]
    fn test_footprint() {
        let stock = StockGeometry::rectangular(120.0, 80.0, 10.0, OriginPosition::default());
        assert_eq!(stock.footprint(), (120.0, 80.0));

        let stock = StockGeometry::circular(60.0, 10.0, OriginPosition::default());
        assert_eq!(stock.footprint(), (60.0, 60.0));
        assert!(stock.is_circular());
    }

    #[test]
    fn test_stock_geometry_json() {
        let stock = StockGeometry::circular(60.0, 10.0, OriginPosition::default());
        let json = serde_json::to_string(&stock).unwrap();
        assert!(json.contains("\"shape\":\"circular\""));
        assert!(json.contains("\"originPosition\":\"front-left\""));
        assert!(!json.contains("\"x\""));

        let parsed: StockGeometry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, stock);
    }
}
