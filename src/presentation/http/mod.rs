//! HTTP API
//!
//! Handlers, extractors and route table.

pub mod extractors;
pub mod handlers;
pub mod routes;
