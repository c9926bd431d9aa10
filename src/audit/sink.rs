use std::env;
use std::sync::Arc;

use super::models::RequestLogRecord;

/// Cold-storage destination for archived log batches. Each call writes one
/// immutable object; delivery is best effort and failures stay inside the
/// audit pipeline.
#[async_trait::async_trait]
pub trait ArchiveSink: Send + Sync {
    async fn write_batch(&self, records: Vec<RequestLogRecord>) -> anyhow::Result<()>;
}

pub struct StdoutSink;

#[async_trait::async_trait]
impl ArchiveSink for StdoutSink {
    async fn write_batch(&self, records: Vec<RequestLogRecord>) -> anyhow::Result<()> {
        println!("Archiving {} request log records", records.len());
        Ok(())
    }
}

pub struct ArchiveSinkFactory;

impl ArchiveSinkFactory {
    pub fn create() -> crate::errors::Result<Arc<dyn ArchiveSink>> {
        let backend = env::var("ARCHIVE_BACKEND").unwrap_or_else(|_| "file".into());

        let boxed: Box<dyn ArchiveSink> = match backend.as_str() {
            "stdout" => Box::new(StdoutSink),
            "file" => Box::new(super::file::FileArchiveSink::new()?),
            other => {
                return Err(crate::errors::EncurtadorError::config(format!(
                    "Unknown archive backend: {}",
                    other
                )));
            }
        };

        Ok(Arc::from(boxed))
    }
}
