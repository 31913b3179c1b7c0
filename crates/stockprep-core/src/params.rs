//! Cutting, pattern, and feed parameters for a facing job.

use crate::stock::StockGeometry;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Depth and compensation parameters for the cutting operation.
///
/// `stepover` is a percentage of the tool diameter. A finishing pass, when
/// enabled, reserves `finishing_pass_height` of the total depth for a final
/// full-depth level; its height must stay below both the total depth and the
/// stepdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CuttingParameters {
    pub tool_radius: f64,
    pub stepover: f64,
    pub stepdown: f64,
    pub z_offset: f64,
    pub total_depth: f64,
    pub safe_z_height: f64,
    /// Run each pass far enough that the tool fully leaves the stock edge.
    #[serde(default)]
    pub clear_stock_exit: bool,
    #[serde(default)]
    pub finishing_pass: bool,
    #[serde(default)]
    pub finishing_pass_height: f64,
    #[serde(default)]
    pub finishing_pass_offset: f64,
}

impl Default for CuttingParameters {
    fn default() -> Self {
        Self {
            tool_radius: 3.0,
            stepover: 50.0,
            stepdown: 1.0,
            z_offset: 0.0,
            total_depth: 2.0,
            safe_z_height: 5.0,
            clear_stock_exit: false,
            finishing_pass: false,
            finishing_pass_height: 0.2,
            finishing_pass_offset: 0.0,
        }
    }
}

/// Topology of the facing toolpath.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternType {
    Rectilinear,
    Zigzag,
    Spiral,
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternType::Rectilinear => write!(f, "rectilinear"),
            PatternType::Zigzag => write!(f, "zigzag"),
            PatternType::Spiral => write!(f, "spiral"),
        }
    }
}

impl FromStr for PatternType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rectilinear" => Ok(PatternType::Rectilinear),
            "zigzag" => Ok(PatternType::Zigzag),
            "spiral" => Ok(PatternType::Spiral),
            _ => Err(format!("Unsupported facing pattern: {s}")),
        }
    }
}

/// Cutting direction relative to tool rotation. Determines the rotation sense
/// of every arc the spiral generator emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MillingDirection {
    Climb,
    Conventional,
}

impl MillingDirection {
    /// Sign of the angular travel: climb is positive (counter-clockwise).
    pub fn sign(&self) -> f64 {
        match self {
            MillingDirection::Climb => 1.0,
            MillingDirection::Conventional => -1.0,
        }
    }
}

/// Radial direction of the spiral topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpiralDirection {
    OutsideIn,
    InsideOut,
}

impl Default for SpiralDirection {
    fn default() -> Self {
        SpiralDirection::OutsideIn
    }
}

/// Pattern selection plus its refinement knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacingPattern {
    #[serde(rename = "type")]
    pub pattern_type: PatternType,
    /// Rotation of the scan direction in degrees.
    #[serde(default)]
    pub angle: f64,
    pub milling_direction: MillingDirection,
    /// Line segments per full spiral revolution; higher is smoother.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spiral_segments_per_revolution: Option<u32>,
    #[serde(default)]
    pub spiral_direction: SpiralDirection,
}

impl Default for FacingPattern {
    fn default() -> Self {
        Self {
            pattern_type: PatternType::Rectilinear,
            angle: 0.0,
            milling_direction: MillingDirection::Climb,
            spiral_segments_per_revolution: None,
            spiral_direction: SpiralDirection::OutsideIn,
        }
    }
}

/// Feed rates and spindle speed. All values must be positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedRates {
    /// Horizontal cutting feed (mm/min).
    pub xy: f64,
    /// Vertical plunge feed (mm/min).
    pub z: f64,
    /// Spindle speed (RPM).
    pub spindle_speed: f64,
}

impl Default for FeedRates {
    fn default() -> Self {
        Self {
            xy: 800.0,
            z: 300.0,
            spindle_speed: 10000.0,
        }
    }
}

/// Everything the engine needs to generate one facing job.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacingJobParams {
    pub stock: StockGeometry,
    pub cutting: CuttingParameters,
    pub pattern: FacingPattern,
    pub feeds: FeedRates,
}
