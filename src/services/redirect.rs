//! Short-code resolution service
//!
//! Renders the embedded redirect page with the resolved target substituted
//! in, rather than answering with a 3xx. Misses are plain-text 404s.

use std::sync::Arc;

use actix_web::{HttpResponse, Responder, web};
use tracing::{debug, error};

use crate::errors::{EncurtadorError, Result};
use crate::storages::Storage;

static REDIRECT_PAGE: &str = include_str!("../../static/redirecionando.html");

pub struct RedirectService;

impl RedirectService {
    pub async fn handle_redirect(
        path: web::Path<String>,
        storage: web::Data<Arc<dyn Storage>>,
    ) -> impl Responder {
        let code = path.into_inner();

        match Self::resolve(storage.get_ref().as_ref(), &code).await {
            Ok(target) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(REDIRECT_PAGE.replace("{{URL}}", &target)),
            Err(EncurtadorError::NotFound(_)) => {
                debug!("Short code not found: {}", code);
                HttpResponse::NotFound()
                    .content_type("text/plain; charset=utf-8")
                    .body("Link não encontrado")
            }
            Err(e) => {
                error!("Failed to resolve '{}': {}", code, e);
                HttpResponse::InternalServerError()
                    .content_type("text/plain; charset=utf-8")
                    .body("Erro interno do servidor")
            }
        }
    }

    /// Looks up a code and reports the target URL, or a not-found error.
    #[tracing::instrument(skip(storage))]
    pub async fn resolve(storage: &dyn Storage, code: &str) -> Result<String> {
        storage
            .get(code)
            .await?
            .map(|link| link.target)
            .ok_or_else(|| EncurtadorError::not_found(format!("Link '{}' not found", code)))
    }
}
