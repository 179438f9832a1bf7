//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **RecordService**: list/get/create/update/delete for any record type

pub mod record_service;

pub use record_service::{RecordError, RecordService};
