//! Common Test Utilities
//!
//! In-memory repositories and a router wired to them, so the HTTP surface
//! can be exercised without a database.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use serde_json::{json, Value};

use schedule_server::domain::{CrudRepository, Record};
use schedule_server::infrastructure::database::HealthProbe;
use schedule_server::presentation::http::routes::create_router;
use schedule_server::shared::error::AppError;
use schedule_server::startup::{AppState, Repositories};

/// Repository backed by a map, assigning ids from 1 like an identity column.
pub struct InMemoryRepository<R: Record> {
    rows: Mutex<BTreeMap<i32, R>>,
    next_id: AtomicI32,
}

impl<R: Record> Default for InMemoryRepository<R> {
    fn default() -> Self {
        Self {
            rows: Mutex::new(BTreeMap::new()),
            next_id: AtomicI32::new(1),
        }
    }
}

#[async_trait]
impl<R: Record> CrudRepository<R> for InMemoryRepository<R> {
    async fn find_all(&self) -> Result<Vec<R>, AppError> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<R>, AppError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn insert(&self, draft: &R::Draft) -> Result<R, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let record = R::from_draft(id, draft.clone());
        self.rows.lock().unwrap().insert(id, record.clone());
        Ok(record)
    }

    async fn update(&self, id: i32, draft: &R::Draft) -> Result<Option<R>, AppError> {
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(&id) {
            Some(row) => {
                *row = R::from_draft(id, draft.clone());
                Ok(Some(row.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(self.rows.lock().unwrap().remove(&id).is_some())
    }
}

/// Probe that always succeeds.
pub struct HealthyProbe;

#[async_trait]
impl HealthProbe for HealthyProbe {
    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Probe that always fails, as if the database were down.
pub struct DownProbe;

#[async_trait]
impl HealthProbe for DownProbe {
    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }
}

fn in_memory_repositories() -> Repositories {
    Repositories {
        employees: Arc::new(InMemoryRepository::default()),
        work_days: Arc::new(InMemoryRepository::default()),
        meetings: Arc::new(InMemoryRepository::default()),
        break_sessions: Arc::new(InMemoryRepository::default()),
        work_sessions: Arc::new(InMemoryRepository::default()),
        tasks: Arc::new(InMemoryRepository::default()),
    }
}

/// Test server over fresh in-memory repositories
pub fn test_server() -> TestServer {
    test_server_with_probe(Arc::new(HealthyProbe))
}

/// Test server with a specific database probe
pub fn test_server_with_probe(probe: Arc<dyn HealthProbe>) -> TestServer {
    let state = AppState::new(in_memory_repositories(), probe);
    TestServer::new(create_router(state)).expect("failed to build test server")
}

/// Employee payload with generated names
pub fn fake_employee() -> Value {
    let first: String = FirstName().fake();
    let last: String = LastName().fake();
    json!({
        "nombre": first,
        "apellido": last,
        "correo": format!("{}.{}@montedarramo.com", first, last).to_lowercase(),
        "rol": "Cocinero",
        "equipo": "Cocina",
        "fotoUrl": "assets/n1.png"
    })
}

/// Task payload with a generated title
pub fn fake_task() -> Value {
    let title: String = Sentence(2..5).fake();
    json!({ "fecha": "2024-11-04", "titulo": title, "estado": "pendiente" })
}
