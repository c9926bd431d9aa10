use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::timeout;
use tracing::{debug, warn};

use super::buffer::BufferState;
use super::models::RequestLogRecord;
use super::sink::ArchiveSink;

/// Shared request-log buffer with batched, fire-and-forget archival.
///
/// `observe` is the only mutation path. The mutex covers exactly the
/// append/evict/count/snapshot step; the archive write runs on a detached
/// task and never blocks or fails the request that triggered it.
pub struct AuditLogBuffer {
    state: Mutex<BufferState>,
    sink: Arc<dyn ArchiveSink>,
    write_timeout: Duration,
}

impl AuditLogBuffer {
    pub fn new(sink: Arc<dyn ArchiveSink>, capacity: usize, threshold: usize) -> Self {
        Self::with_timeout(sink, capacity, threshold, Duration::from_secs(10))
    }

    pub fn with_timeout(
        sink: Arc<dyn ArchiveSink>,
        capacity: usize,
        threshold: usize,
        write_timeout: Duration,
    ) -> Self {
        AuditLogBuffer {
            state: Mutex::new(BufferState::new(capacity, threshold)),
            sink,
            write_timeout,
        }
    }

    pub fn observe(&self, record: RequestLogRecord) {
        let batch = self.state.lock().push(record);

        if let Some(batch) = batch {
            self.dispatch(batch);
        }
    }

    fn dispatch(&self, batch: Vec<RequestLogRecord>) {
        let sink = self.sink.clone();
        let write_timeout = self.write_timeout;

        debug!("AuditLogBuffer: dispatching batch of {} records", batch.len());
        tokio::spawn(async move {
            match timeout(write_timeout, sink.write_batch(batch)).await {
                Ok(Ok(())) => debug!("AuditLogBuffer: batch archived"),
                Ok(Err(e)) => warn!("AuditLogBuffer: archive write failed: {}", e),
                Err(_) => warn!(
                    "AuditLogBuffer: archive write timed out after {:?}",
                    write_timeout
                ),
            }
        });
    }
}
