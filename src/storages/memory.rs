//! In-memory mapping store
//!
//! Non-durable backend for development and tests.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use super::{InsertOutcome, ShortLink, Storage};
use crate::errors::Result;

#[derive(Default)]
pub struct MemoryStorage {
    links: DashMap<String, ShortLink>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage {
            links: DashMap::new(),
        }
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get(&self, code: &str) -> Result<Option<ShortLink>> {
        Ok(self.links.get(code).map(|entry| entry.value().clone()))
    }

    async fn insert(&self, link: ShortLink) -> Result<InsertOutcome> {
        match self.links.entry(link.code.clone()) {
            Entry::Occupied(_) => Ok(InsertOutcome::Conflict),
            Entry::Vacant(entry) => {
                entry.insert(link);
                Ok(InsertOutcome::Inserted)
            }
        }
    }

    async fn scan_recent(&self, limit: usize) -> Result<Vec<ShortLink>> {
        Ok(self
            .links
            .iter()
            .take(limit)
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn backend_name(&self) -> String {
        "memory".to_string()
    }
}
