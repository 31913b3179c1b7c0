//! Tokio-based background runner for toolpath generation.

use crate::messages::{WorkerMessage, WorkerRequest};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use stockprep_toolpath::{calculate_statistics, generate_toolpath, GenerationOptions};
use tokio::sync::mpsc;
use tracing::debug;

/// Portion of the overall progress attributed to path generation; the
/// remainder covers statistics and delivery.
const GENERATION_PROGRESS_SPAN: f32 = 0.8;

/// Spawns generation requests onto blocking threads and streams messages
/// back over a channel.
pub struct ToolpathWorker;

/// Caller's side of a running generation: the message stream plus the
/// cooperative abort switch.
pub struct WorkerHandle {
    pub messages: mpsc::Receiver<WorkerMessage>,
    abort: Arc<AtomicBool>,
}

impl WorkerHandle {
    /// Requests cancellation. The engine polls this flag at level and task
    /// boundaries, so the completion message still carries every level that
    /// finished. Cancellation is not an error.
    pub fn abort(&self) {
        self.abort.store(true, Ordering::Relaxed);
    }

    /// Receives the next message, or `None` once the worker is done.
    pub async fn recv(&mut self) -> Option<WorkerMessage> {
        self.messages.recv().await
    }
}

impl ToolpathWorker {
    /// Runs a request on a blocking thread and returns the handle for
    /// draining its messages.
    pub fn spawn(request: WorkerRequest) -> WorkerHandle {
        let (tx, rx) = mpsc::channel(64);
        let abort = Arc::new(AtomicBool::new(false));
        let abort_flag = abort.clone();

        tokio::task::spawn_blocking(move || {
            let WorkerRequest::Generate { params } = request;
            debug!(pattern = %params.pattern.pattern_type, "starting toolpath generation");

            let _ = tx.blocking_send(WorkerMessage::Progress {
                progress: 0.0,
                message: "Starting toolpath generation...".to_string(),
            });

            let progress_tx = tx.clone();
            let options = GenerationOptions {
                should_abort: Some(Arc::new(move || abort_flag.load(Ordering::Relaxed))),
                on_progress: Some(Arc::new(move |percent: f32, message: &str| {
                    let _ = progress_tx.blocking_send(WorkerMessage::Progress {
                        progress: percent * GENERATION_PROGRESS_SPAN,
                        message: message.to_string(),
                    });
                })),
            };

            match generate_toolpath(&params, &options) {
                Ok(toolpath) => {
                    let _ = tx.blocking_send(WorkerMessage::Progress {
                        progress: 100.0 * GENERATION_PROGRESS_SPAN,
                        message: "Calculating statistics...".to_string(),
                    });
                    let statistics = calculate_statistics(&toolpath, &params);
                    let _ = tx.blocking_send(WorkerMessage::Progress {
                        progress: 100.0,
                        message: "Generation complete".to_string(),
                    });
                    let _ = tx.blocking_send(WorkerMessage::Complete {
                        toolpath,
                        statistics,
                    });
                }
                Err(err) => {
                    let _ = tx.blocking_send(WorkerMessage::Error {
                        error: err.to_string(),
                    });
                }
            }
        });

        WorkerHandle { messages: rx, abort }
    }
}
