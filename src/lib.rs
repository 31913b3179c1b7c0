//! # Stockprep
//!
//! A Rust-based facing toolpath generator for CNC stock preparation.
//! Stockprep plans 2.5-axis facing operations that clear a flat layer of
//! material from a rectangular or circular workpiece and serializes the
//! result into a G-code program.
//!
//! ## Architecture
//!
//! Stockprep is organized as a workspace with multiple crates:
//!
//! 1. **stockprep-core** - Shared data model: stock geometry, cutting
//!    parameters, patterns, feeds, toolpath points and levels
//! 2. **stockprep-toolpath** - The engine: geometry primitives, depth
//!    planning, the rectilinear/zigzag/spiral generators, move
//!    normalization, validation, statistics, and G-code emission
//! 3. **stockprep-worker** - Background execution: tagged request/progress/
//!    completion payloads and a tokio-based runner with cooperative abort
//! 4. **stockprep** - The CLI binary tying it all together
//!
//! ## Features
//!
//! - **Three pattern topologies**: independent rows, continuous zigzag, and
//!   a peeling spiral with corner/side arcs for rectangular stock
//! - **Multi-level depth planning** with an optional finishing pass
//! - **Climb and conventional milling** applied to every generated arc
//! - **Cooperative cancellation** that always yields whole levels
//! - **Advisory validation** with human-readable messages

pub use stockprep_core::{
    CuttingParameters, FacingJobParams, FacingPattern, FeedRates, MillingDirection, MoveKind,
    OriginPosition, PatternType, SpiralDirection, StockGeometry, StockShape, ToolpathLevel,
    ToolpathPoint, ZLevel,
};

pub use stockprep_toolpath::{
    calculate_statistics, generate_gcode, generate_toolpath, validate, GenerationOptions,
    ToolpathError, ToolpathResult, ToolpathStatistics,
};

pub use stockprep_worker::{ToolpathWorker, WorkerHandle, WorkerMessage, WorkerRequest};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output, RUST_LOG environment
/// variable support, and INFO as the default level.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
