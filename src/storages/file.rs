//! File-backed mapping store
//!
//! Persists the `links` collection as a JSON array in a single file. Every
//! operation re-reads the file, so external edits are picked up without a
//! reload step.

use std::collections::HashMap;
use std::env;
use std::fs;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::{error, info};

use super::{InsertOutcome, SerializableShortLink, ShortLink, Storage};
use crate::errors::{EncurtadorError, Result};

pub struct FileStorage {
    file_path: String,
    // Serializes the read-modify-write cycle so conditional inserts
    // cannot race each other within this process.
    write_lock: Mutex<()>,
}

impl FileStorage {
    pub fn new() -> Result<Self> {
        let file_path = env::var("DB_FILE_NAME").unwrap_or_else(|_| "links.json".to_string());

        if fs::read_to_string(&file_path).is_err() {
            fs::write(&file_path, "[]")?;
            info!("Created empty link file: {}", file_path);
        }

        Ok(FileStorage {
            file_path,
            write_lock: Mutex::new(()),
        })
    }

    pub fn with_path<T: Into<String>>(file_path: T) -> Result<Self> {
        let file_path = file_path.into();
        if fs::read_to_string(&file_path).is_err() {
            fs::write(&file_path, "[]")?;
        }
        Ok(FileStorage {
            file_path,
            write_lock: Mutex::new(()),
        })
    }

    fn load_from_file(&self) -> Result<HashMap<String, ShortLink>> {
        let content = fs::read_to_string(&self.file_path).map_err(|e| {
            error!("Failed to read link file {}: {}", self.file_path, e);
            EncurtadorError::store_operation(format!("Failed to read link file: {}", e))
        })?;

        let links: Vec<SerializableShortLink> = serde_json::from_str(&content).map_err(|e| {
            error!("Failed to parse link file: {}", e);
            EncurtadorError::store_operation(format!("Failed to parse link file: {}", e))
        })?;

        let mut map = HashMap::new();
        for link in links {
            let link = ShortLink::from(link);
            map.insert(link.code.clone(), link);
        }
        Ok(map)
    }

    fn save_to_file(&self, links: &HashMap<String, ShortLink>) -> Result<()> {
        let links_vec: Vec<SerializableShortLink> =
            links.values().map(SerializableShortLink::from).collect();

        let json = serde_json::to_string_pretty(&links_vec)
            .map_err(|e| EncurtadorError::store_operation(e.to_string()))?;
        fs::write(&self.file_path, json)
            .map_err(|e| EncurtadorError::store_operation(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn get(&self, code: &str) -> Result<Option<ShortLink>> {
        Ok(self.load_from_file()?.get(code).cloned())
    }

    async fn insert(&self, link: ShortLink) -> Result<InsertOutcome> {
        let _guard = self.write_lock.lock();

        let mut links = self.load_from_file()?;
        if links.contains_key(&link.code) {
            return Ok(InsertOutcome::Conflict);
        }

        links.insert(link.code.clone(), link);
        self.save_to_file(&links)?;
        Ok(InsertOutcome::Inserted)
    }

    async fn scan_recent(&self, limit: usize) -> Result<Vec<ShortLink>> {
        Ok(self.load_from_file()?.into_values().take(limit).collect())
    }

    async fn backend_name(&self) -> String {
        "file".to_string()
    }
}
