//! Request observer middleware
//!
//! Feeds every inbound request into the audit buffer before routing. The
//! payload is buffered to capture the body and then handed back so
//! downstream extractors still see it. Observation never fails a request.

use std::sync::Arc;

use actix_http::h1;
use actix_web::body::MessageBody;
use actix_web::dev::{Payload, ServiceRequest, ServiceResponse};
use actix_web::middleware::Next;
use actix_web::{Error, web};

use super::manager::AuditLogBuffer;
use super::models::RequestLogRecord;

pub struct AuditMiddleware;

impl AuditMiddleware {
    pub async fn observe(
        mut req: ServiceRequest,
        next: Next<impl MessageBody>,
    ) -> Result<ServiceResponse<impl MessageBody>, Error> {
        let buffer = req
            .app_data::<web::Data<Arc<AuditLogBuffer>>>()
            .map(|data| data.get_ref().clone());

        if let Some(buffer) = buffer {
            let bytes = req.extract::<web::Bytes>().await.unwrap_or_default();
            let record = RequestLogRecord::capture(req.method().as_str(), req.path(), &bytes);
            req.set_payload(bytes_into_payload(bytes));

            buffer.observe(record);
        }

        next.call(req).await
    }
}

fn bytes_into_payload(buf: web::Bytes) -> Payload {
    let (_, mut payload) = h1::Payload::create(true);
    payload.unread_data(buf);
    Payload::from(payload)
}
