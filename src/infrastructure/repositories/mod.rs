//! Repository Implementations
//!
//! PostgreSQL implementations of the domain `CrudRepository` trait, one per
//! table. Update and delete are single statements: `UPDATE ... RETURNING`
//! yields no row and `DELETE` affects no row when the id is absent, so a
//! concurrent delete is reported as not found.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use schedule_server::infrastructure::repositories::{
//!     PgEmployeeRepository, PgBreakSessionRepository,
//! };
//!
//! async fn setup_repositories(pool: PgPool) {
//!     let employees = PgEmployeeRepository::new(pool.clone());
//!     let breaks = PgBreakSessionRepository::new(pool.clone());
//! }
//! ```

pub mod employee_repository;
pub mod work_day_repository;
pub mod meeting_repository;
pub mod session_repository;
pub mod task_repository;

pub use employee_repository::PgEmployeeRepository;
pub use work_day_repository::PgWorkDayRepository;
pub use meeting_repository::PgMeetingRepository;
pub use session_repository::{
    PgBreakSessionRepository, PgSessionRepository, PgWorkSessionRepository, SessionRecord,
};
pub use task_repository::PgTaskRepository;
