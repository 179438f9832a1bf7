//! Infrastructure Layer
//!
//! Contains implementations for external services including:
//! - Database pool, migrations and health probe (PostgreSQL)
//! - Repositories, one per table
//! - Prometheus metrics

pub mod database;
pub mod metrics;
pub mod repositories;
