use std::env;
use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::{EncurtadorError, Result};

pub mod file;
pub mod memory;
pub mod models;

pub use models::{InsertOutcome, SerializableShortLink, ShortLink};

/// Durable mapping store for [`ShortLink`] records, keyed by code.
///
/// `scan_recent` gives no ordering guarantee; ordering is imposed by the
/// caller. Any transport or store failure surfaces as a store-operation
/// error and is not retried at this layer.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn get(&self, code: &str) -> Result<Option<ShortLink>>;

    /// Conditional insert: writes the record only if no record with the
    /// same code exists, otherwise reports [`InsertOutcome::Conflict`]
    /// without touching the existing record.
    async fn insert(&self, link: ShortLink) -> Result<InsertOutcome>;

    /// Returns at most `limit` records, in store order.
    async fn scan_recent(&self, limit: usize) -> Result<Vec<ShortLink>>;

    async fn backend_name(&self) -> String;
}

pub struct StorageFactory;

impl StorageFactory {
    pub fn create() -> Result<Arc<dyn Storage>> {
        let backend = env::var("STORAGE_BACKEND").unwrap_or_else(|_| "file".into());

        let boxed: Box<dyn Storage> = match backend.as_str() {
            "memory" => Box::new(memory::MemoryStorage::new()),
            "file" => Box::new(file::FileStorage::new()?),
            other => {
                return Err(EncurtadorError::config(format!(
                    "Unknown storage backend: {}",
                    other
                )));
            }
        };

        Ok(Arc::from(boxed))
    }
}
