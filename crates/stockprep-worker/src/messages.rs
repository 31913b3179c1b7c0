//! Tagged payload shapes for the background-execution boundary.

use serde::{Deserialize, Serialize};
use stockprep_core::{FacingJobParams, ToolpathLevel};
use stockprep_toolpath::ToolpathStatistics;

/// Request sent to the worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkerRequest {
    Generate { params: FacingJobParams },
}

/// Messages streamed back to the caller.
///
/// A request yields zero or more `Progress` messages followed by exactly one
/// `Complete` or `Error`. Progress is advisory; callers must not assume a
/// message for every level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkerMessage {
    Progress {
        progress: f32,
        message: String,
    },
    Complete {
        toolpath: Vec<ToolpathLevel>,
        statistics: ToolpathStatistics,
    },
    Error {
        error: String,
    },
}
