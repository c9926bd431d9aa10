//! Short-link creation service

use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::errors::{EncurtadorError, Result};
use crate::storages::{InsertOutcome, ShortLink, Storage};
use crate::utils::{generate_random_code, normalize_url};

pub const CODE_LENGTH: usize = 6;

/// Collision retry budget for the conditional insert. With 62^6 codes a
/// second conflict in a row already points at a store problem.
pub const MAX_CODE_ATTEMPTS: usize = 5;

#[derive(Deserialize)]
pub struct CreateRequest {
    pub url: String,
}

#[derive(Serialize)]
pub struct CreateResponse {
    pub curto: String,
}

pub struct ShortenService;

impl ShortenService {
    pub async fn handle_create(
        req: HttpRequest,
        body: web::Json<CreateRequest>,
        storage: web::Data<Arc<dyn Storage>>,
    ) -> impl Responder {
        if body.url.trim().is_empty() {
            let e = EncurtadorError::validation("URL não pode ser vazia");
            return HttpResponse::BadRequest().json(serde_json::json!({"erro": e.message()}));
        }

        let target = normalize_url(&body.url);
        if url::Url::parse(&target).is_err() {
            // normalization never rejects, but leave a trace for cleanup
            warn!("Storing target that does not parse as a URL: {}", target);
        }

        match Self::create(storage.get_ref().as_ref(), target).await {
            Ok(code) => {
                let host = req.connection_info().host().to_string();
                HttpResponse::Ok().json(CreateResponse {
                    curto: format!("http://{}/{}", host, code),
                })
            }
            Err(e) => {
                error!("Failed to create short link: {}", e);
                HttpResponse::InternalServerError()
                    .json(serde_json::json!({"erro": "Erro interno do servidor"}))
            }
        }
    }

    /// Generates a fresh code and conditionally inserts the mapping,
    /// retrying on code collision up to [`MAX_CODE_ATTEMPTS`] times.
    pub async fn create(storage: &dyn Storage, target: String) -> Result<String> {
        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let code = generate_random_code(CODE_LENGTH);
            let link = ShortLink {
                code: code.clone(),
                target: target.clone(),
                created_at: Some(chrono::Utc::now()),
            };

            match storage.insert(link).await? {
                InsertOutcome::Inserted => {
                    info!("Created short link '{}' -> '{}'", code, target);
                    return Ok(code);
                }
                InsertOutcome::Conflict => {
                    debug!("Code collision on '{}' (attempt {})", code, attempt);
                }
            }
        }

        Err(EncurtadorError::store_operation(format!(
            "Exhausted {} code generation attempts",
            MAX_CODE_ATTEMPTS
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storages::memory::MemoryStorage;

    #[tokio::test]
    async fn test_create_returns_resolvable_code() {
        let storage = MemoryStorage::new();
        let code = ShortenService::create(&storage, "http://example.com".to_string())
            .await
            .unwrap();

        assert_eq!(code.len(), CODE_LENGTH);
        let link = storage.get(&code).await.unwrap().unwrap();
        assert_eq!(link.target, "http://example.com");
        assert!(link.created_at.is_some());
    }

    #[tokio::test]
    async fn test_create_retries_past_a_collision() {
        struct CollidingStorage {
            inner: MemoryStorage,
            conflicts_left: std::sync::atomic::AtomicUsize,
        }

        #[async_trait::async_trait]
        impl Storage for CollidingStorage {
            async fn get(&self, code: &str) -> Result<Option<ShortLink>> {
                self.inner.get(code).await
            }

            async fn insert(&self, link: ShortLink) -> Result<InsertOutcome> {
                use std::sync::atomic::Ordering;
                if self
                    .conflicts_left
                    .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                    .is_ok()
                {
                    return Ok(InsertOutcome::Conflict);
                }
                self.inner.insert(link).await
            }

            async fn scan_recent(&self, limit: usize) -> Result<Vec<ShortLink>> {
                self.inner.scan_recent(limit).await
            }

            async fn backend_name(&self) -> String {
                "colliding".to_string()
            }
        }

        let storage = CollidingStorage {
            inner: MemoryStorage::new(),
            conflicts_left: std::sync::atomic::AtomicUsize::new(2),
        };

        let code = ShortenService::create(&storage, "http://example.com".to_string())
            .await
            .unwrap();
        assert!(storage.get(&code).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_create_gives_up_after_attempt_budget() {
        struct AlwaysConflict;

        #[async_trait::async_trait]
        impl Storage for AlwaysConflict {
            async fn get(&self, _: &str) -> Result<Option<ShortLink>> {
                Ok(None)
            }
            async fn insert(&self, _: ShortLink) -> Result<InsertOutcome> {
                Ok(InsertOutcome::Conflict)
            }
            async fn scan_recent(&self, _: usize) -> Result<Vec<ShortLink>> {
                Ok(Vec::new())
            }
            async fn backend_name(&self) -> String {
                "conflict".to_string()
            }
        }

        let result = ShortenService::create(&AlwaysConflict, "http://example.com".to_string()).await;
        assert!(matches!(result, Err(EncurtadorError::StoreOperation(_))));
    }
}
