//! File-backed archive sink
//!
//! Writes each batch as one immutable JSON object named by its write
//! timestamp, mirroring the `logs-<millis>.json` layout of the bucket it
//! stands in for.

use std::env;
use std::fs;
use std::path::PathBuf;

use tracing::info;

use super::models::RequestLogRecord;
use super::sink::ArchiveSink;
use crate::errors::{EncurtadorError, Result};

pub struct FileArchiveSink {
    dir: PathBuf,
}

impl FileArchiveSink {
    pub fn new() -> Result<Self> {
        let dir = env::var("ARCHIVE_DIR").unwrap_or_else(|_| "archive".to_string());
        Self::with_dir(dir)
    }

    pub fn with_dir<T: Into<PathBuf>>(dir: T) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| {
            EncurtadorError::archive(format!("Failed to create archive dir: {}", e))
        })?;
        Ok(FileArchiveSink { dir })
    }
}

#[async_trait::async_trait]
impl ArchiveSink for FileArchiveSink {
    async fn write_batch(&self, records: Vec<RequestLogRecord>) -> anyhow::Result<()> {
        let object_name = format!("logs-{}.json", chrono::Utc::now().timestamp_millis());
        let json = serde_json::to_string_pretty(&records)?;

        fs::write(self.dir.join(&object_name), json)?;
        info!("Archived {} request log records as {}", records.len(), object_name);
        Ok(())
    }
}
