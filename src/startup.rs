//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{extract::FromRef, Router};
use sqlx::PgPool;
use tokio::net::TcpListener;

use crate::application::services::RecordService;
use crate::config::Settings;
use crate::domain::{BreakSession, CrudRepository, Employee, Meeting, Task, WorkDay, WorkSession};
use crate::infrastructure::database::{self, HealthProbe, PgHealthProbe};
use crate::infrastructure::repositories::{
    PgBreakSessionRepository, PgEmployeeRepository, PgMeetingRepository, PgTaskRepository,
    PgWorkDayRepository, PgWorkSessionRepository,
};
use crate::presentation::http::{handlers, routes};
use crate::presentation::middleware::{create_cors_layer, create_trace_layer};

/// One repository per record type.
#[derive(Clone)]
pub struct Repositories {
    pub employees: Arc<dyn CrudRepository<Employee>>,
    pub work_days: Arc<dyn CrudRepository<WorkDay>>,
    pub meetings: Arc<dyn CrudRepository<Meeting>>,
    pub break_sessions: Arc<dyn CrudRepository<BreakSession>>,
    pub work_sessions: Arc<dyn CrudRepository<WorkSession>>,
    pub tasks: Arc<dyn CrudRepository<Task>>,
}

impl Repositories {
    /// PostgreSQL repositories sharing one pool
    pub fn postgres(pool: &PgPool) -> Self {
        Self {
            employees: Arc::new(PgEmployeeRepository::new(pool.clone())),
            work_days: Arc::new(PgWorkDayRepository::new(pool.clone())),
            meetings: Arc::new(PgMeetingRepository::new(pool.clone())),
            break_sessions: Arc::new(PgBreakSessionRepository::new(pool.clone())),
            work_sessions: Arc::new(PgWorkSessionRepository::new(pool.clone())),
            tasks: Arc::new(PgTaskRepository::new(pool.clone())),
        }
    }
}

/// Application state shared across handlers
#[derive(Clone, FromRef)]
pub struct AppState {
    pub employees: RecordService<Employee>,
    pub work_days: RecordService<WorkDay>,
    pub meetings: RecordService<Meeting>,
    pub break_sessions: RecordService<BreakSession>,
    pub work_sessions: RecordService<WorkSession>,
    pub tasks: RecordService<Task>,
    pub health: Arc<dyn HealthProbe>,
}

impl AppState {
    pub fn new(repositories: Repositories, health: Arc<dyn HealthProbe>) -> Self {
        Self {
            employees: RecordService::new(repositories.employees),
            work_days: RecordService::new(repositories.work_days),
            meetings: RecordService::new(repositories.meetings),
            break_sessions: RecordService::new(repositories.break_sessions),
            work_sessions: RecordService::new(repositories.work_sessions),
            tasks: RecordService::new(repositories.tasks),
            health,
        }
    }
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        handlers::health::init_server_start();

        // Create database pool
        let db = database::create_pool(&settings.database).await?;
        tracing::info!("Database connection pool created");

        if settings.database.run_migrations {
            database::run_migrations(&db).await?;
            tracing::info!("Database migrations applied");
        }

        let state = AppState::new(
            Repositories::postgres(&db),
            Arc::new(PgHealthProbe::new(db)),
        );

        // Build router with middleware
        let router = routes::create_router(state)
            .layer(create_trace_layer())
            .layer(create_cors_layer(&settings.cors));

        let listener = TcpListener::bind(settings.server_addr()).await?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

/// Resolves on Ctrl+C (and SIGTERM on Unix)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
