//! Best-effort request audit trail
//!
//! Every inbound request is recorded into a small in-memory ring; every
//! `flush_threshold` requests a snapshot of the ring goes to cold storage
//! as one immutable batch object. Data loss on sink failure is accepted.

pub mod buffer;
pub mod file;
pub mod manager;
pub mod middleware;
pub mod models;
pub mod sink;

pub use manager::AuditLogBuffer;
pub use middleware::AuditMiddleware;
pub use models::RequestLogRecord;
pub use sink::{ArchiveSink, ArchiveSinkFactory, StdoutSink};
