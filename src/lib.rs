//! # Schedule Server Library
//!
//! Employee work-schedule management backend:
//! - RESTful CRUD endpoints for employees, work days, meetings,
//!   break sessions, work sessions and tasks
//! - PostgreSQL for persistent storage
//!
//! ## Architecture
//!
//! - **Domain Layer**: Record types, drafts and the repository trait
//! - **Application Layer**: The generic record service
//! - **Infrastructure Layer**: Database pool, repositories, metrics
//! - **Presentation Layer**: HTTP handlers, routes and middleware
//!
//! ## Module Structure
//!
//! ```text
//! schedule_server/
//! +-- config/         Configuration management
//! +-- domain/         Records and the CrudRepository trait
//! +-- application/    RecordService
//! +-- infrastructure/ PostgreSQL repositories, pool, metrics
//! +-- presentation/   HTTP routes, handlers, middleware
//! +-- shared/         Errors and validation helpers
//! ```

// Configuration module
pub mod config;

// Domain layer - Records and repository contract
pub mod domain;

// Application layer - Services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
