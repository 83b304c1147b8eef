//! Event log port - diagnostic channel

use anyhow::Result;

use crate::services::LogEvent;

/// Sink for structured diagnostic events
///
/// Callers ignore the returned error; logging never breaks an operation.
pub trait EventLog: Send + Sync {
    fn log(&self, event: LogEvent) -> Result<()>;
}
