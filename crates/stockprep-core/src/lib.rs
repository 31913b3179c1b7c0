//! # Stockprep Core
//!
//! Core data model shared by the stockprep crates: stock geometry, cutting
//! parameters, facing patterns, feed rates, and the toolpath point and level
//! types produced by the generation engine.
//!
//! All parameter types are serde (de)serializable so a complete facing job can
//! be described by a single JSON document and shipped across the worker
//! boundary unchanged.

pub mod params;
pub mod path;
pub mod stock;

pub use params::{
    CuttingParameters, FacingJobParams, FacingPattern, FeedRates, MillingDirection, PatternType,
    SpiralDirection,
};
pub use path::{MoveKind, ToolpathLevel, ToolpathPoint, ZLevel};
pub use stock::{HorizontalAnchor, OriginPosition, StockGeometry, StockShape, VerticalAnchor};
