//! Encurtador - a minimalist URL shortener service
//!
//! Accepts a long URL, hands back a 6-character code, and resolves codes
//! via a rendered redirect page. Read endpoints expose the most recently
//! created links and a uniformly sampled one. Every inbound request is
//! additionally captured into a bounded in-memory ring that is archived to
//! cold storage in batches, best effort.
//!
//! # Architecture
//! - `storages`: mapping store contract and backends
//! - `audit`: request-log ring, archive sinks, observer middleware
//! - `services`: HTTP-facing services (shorten, redirect, listing, frontend)
//! - `config`: environment-driven configuration
//! - `system`: logging initialization

pub mod audit;
pub mod config;
pub mod errors;
pub mod services;
pub mod storages;
pub mod system;
pub mod utils;
