//! Application Layer
//!
//! Contains the services that sit between the HTTP handlers and the
//! repositories.

pub mod services;
