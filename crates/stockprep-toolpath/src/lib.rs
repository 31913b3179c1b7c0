//! # Stockprep Toolpath Engine
//!
//! Facing toolpath generation for stock preparation: clears a flat layer of
//! material from a rectangular or circular workpiece and emits the result as
//! a G-code motion program.
//!
//! ## Pipeline
//!
//! parameters → depth planner → pattern generator → move normalizer →
//! G-code emitter. The generator stage is cooperatively cancellable and
//! progress-reporting; all other stages are pure, synchronous transforms.
//!
//! ## Modules
//!
//! - **geometry**: line-circle intersection, box clipping, rotation, origin
//!   offsets
//! - **depth**: effective cutting width, pass counts, Z-level planning
//! - **patterns**: rectilinear, zigzag, and spiral generators
//! - **normalizer**: splits combined XY+Z repositioning moves
//! - **validator**: advisory parameter cross-checks
//! - **stats**: distance/time/material summaries
//! - **gcode**: program emission

pub mod depth;
pub mod error;
pub mod gcode;
pub mod geometry;
pub mod normalizer;
pub mod patterns;
pub mod stats;
pub mod validator;

pub use error::{ToolpathError, ToolpathResult};
pub use gcode::generate_gcode;
pub use normalizer::normalize_level;
pub use patterns::{generate_toolpath, AbortFn, GenerationOptions, ProgressFn};
pub use stats::{calculate_statistics, ToolpathStatistics};
pub use validator::validate;
