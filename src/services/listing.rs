//! Listing services: most recent and random selection
//!
//! Both operate over a capped scan window rather than the full store. The
//! window is a carried-over scale limitation of the design, not a sampling
//! algorithm; see DESIGN.md.

use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Responder, web};
use tracing::error;

use crate::storages::{ShortLink, Storage};

/// Upper bound on records examined per listing request.
pub const SCAN_WINDOW: usize = 50;
pub const RECENT_LIMIT: usize = 5;

pub struct ListingService;

impl ListingService {
    pub async fn handle_recent(
        req: HttpRequest,
        storage: web::Data<Arc<dyn Storage>>,
    ) -> impl Responder {
        match storage.scan_recent(SCAN_WINDOW).await {
            Ok(links) => {
                let host = req.connection_info().host().to_string();
                let urls: Vec<String> = Self::most_recent(links, RECENT_LIMIT)
                    .into_iter()
                    .map(|link| format!("http://{}/{}", host, link.code))
                    .collect();
                HttpResponse::Ok().json(urls)
            }
            Err(e) => {
                error!("Failed to list recent links: {}", e);
                HttpResponse::InternalServerError()
                    .json(serde_json::json!({"erro": "Erro interno do servidor"}))
            }
        }
    }

    pub async fn handle_random(
        req: HttpRequest,
        storage: web::Data<Arc<dyn Storage>>,
    ) -> impl Responder {
        match storage.scan_recent(SCAN_WINDOW).await {
            Ok(links) => match Self::pick_random(&links) {
                Some(link) => {
                    let host = req.connection_info().host().to_string();
                    HttpResponse::Found()
                        .insert_header(("Location", format!("http://{}/{}", host, link.code)))
                        .finish()
                }
                None => HttpResponse::NotFound()
                    .content_type("text/plain; charset=utf-8")
                    .body("Nenhum link disponível."),
            },
            Err(e) => {
                error!("Failed to pick random link: {}", e);
                HttpResponse::InternalServerError()
                    .content_type("text/plain; charset=utf-8")
                    .body("Erro interno do servidor")
            }
        }
    }

    /// Records lacking a creation timestamp are dropped, the rest ordered
    /// newest first. Stable sort, ties stay in scan order.
    fn most_recent(links: Vec<ShortLink>, n: usize) -> Vec<ShortLink> {
        let mut dated: Vec<ShortLink> = links
            .into_iter()
            .filter(|link| link.created_at.is_some())
            .collect();
        dated.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        dated.truncate(n);
        dated
    }

    /// Uniform pick over the scanned window.
    fn pick_random(links: &[ShortLink]) -> Option<&ShortLink> {
        if links.is_empty() {
            None
        } else {
            Some(&links[rand::random_range(0..links.len())])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn link_at(code: &str, seconds_ago: i64) -> ShortLink {
        ShortLink {
            code: code.to_string(),
            target: "http://example.com".to_string(),
            created_at: Some(Utc::now() - Duration::seconds(seconds_ago)),
        }
    }

    fn undated(code: &str) -> ShortLink {
        ShortLink {
            code: code.to_string(),
            target: "http://example.com".to_string(),
            created_at: None,
        }
    }

    #[test]
    fn test_most_recent_orders_newest_first() {
        let links = vec![
            link_at("older", 30),
            link_at("newest", 1),
            link_at("middle", 10),
        ];

        let codes: Vec<String> = ListingService::most_recent(links, 5)
            .into_iter()
            .map(|l| l.code)
            .collect();
        assert_eq!(codes, vec!["newest", "middle", "older"]);
    }

    #[test]
    fn test_most_recent_truncates_to_limit() {
        let links: Vec<ShortLink> = (0..7).map(|i| link_at(&format!("c{}", i), i)).collect();

        let picked = ListingService::most_recent(links, 5);
        assert_eq!(picked.len(), 5);
        assert_eq!(picked[0].code, "c0");
        assert_eq!(picked[4].code, "c4");
    }

    #[test]
    fn test_most_recent_skips_undated_records() {
        let links = vec![undated("legacy1"), link_at("dated", 5), undated("legacy2")];

        let picked = ListingService::most_recent(links, 5);
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].code, "dated");
    }

    #[test]
    fn test_pick_random_on_empty_window() {
        assert!(ListingService::pick_random(&[]).is_none());
    }

    #[test]
    fn test_pick_random_covers_the_window() {
        let links: Vec<ShortLink> = (0..3).map(|i| link_at(&format!("c{}", i), i)).collect();

        let mut seen = std::collections::HashSet::new();
        for _ in 0..300 {
            seen.insert(ListingService::pick_random(&links).unwrap().code.clone());
        }
        // (2/3)^300 chance of missing one, effectively impossible
        assert_eq!(seen.len(), 3);
    }
}
