//! # Domain Layer
//!
//! Record types of the schedule server and the repository contract used to
//! persist them. Independent of HTTP and of the concrete database.
//!
//! ## Structure
//!
//! - **entities**: Employee, WorkDay, Meeting, BreakSession, WorkSession, Task
//!   and their drafts
//! - **repository**: the `CrudRepository` trait

pub mod entities;
pub mod repository;

// Re-export commonly used types
pub use entities::*;
pub use repository::CrudRepository;
