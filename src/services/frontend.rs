use actix_web::{HttpResponse, Responder};

static INDEX_PAGE: &str = include_str!("../../static/index.html");

pub struct FrontendService;

impl FrontendService {
    /// Serves the embedded landing page.
    pub async fn handle_index() -> impl Responder {
        HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(INDEX_PAGE)
    }
}
