//! # Stockprep Worker
//!
//! Background execution boundary for toolpath generation. Large spiral jobs
//! can involve thousands of segments, so generation runs off the interactive
//! thread: a request carrying the parameters goes in, and a stream of tagged
//! messages comes back — zero or more progress notifications followed by
//! exactly one completion or error.
//!
//! The payload shapes here are the wire contract; the transport that carries
//! them belongs to the host.

pub mod messages;
pub mod worker;

pub use messages::{WorkerMessage, WorkerRequest};
pub use worker::{ToolpathWorker, WorkerHandle};
