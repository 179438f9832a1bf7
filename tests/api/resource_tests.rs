//! Per-Resource API Tests
//!
//! Every resource answers the same five routes with the same status codes.
//! Each case runs the full lifecycle against one resource.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

use crate::common::{fake_employee, fake_task, test_server};

fn work_day() -> Value {
    json!({ "fecha": "2024-11-04", "empleadoId": 1 })
}

fn meeting() -> Value {
    json!({ "fecha": "2024-11-05", "titulo": "Planificación semanal" })
}

fn session() -> Value {
    json!({ "idJornada": 1, "tiempoInicio": "09:00:00", "tiempoFin": "13:30:00" })
}

fn updated_session() -> Value {
    json!({ "idJornada": 2, "tiempoInicio": "15:00:00", "tiempoFin": "14:00:00" })
}

#[test_case("empleados", fake_employee(), fake_employee() ; "employees")]
#[test_case("jornadas", work_day(), json!({ "fecha": "2024-11-06", "empleadoId": 3 }) ; "work days")]
#[test_case("reuniones", meeting(), json!({ "fecha": "2024-11-07", "titulo": "Retrospectiva" }) ; "meetings")]
#[test_case("sesionesDescanso", session(), updated_session() ; "break sessions")]
#[test_case("sesionesTrabajo", session(), updated_session() ; "work sessions")]
#[test_case("tareas", fake_task(), json!({ "fecha": "2024-11-08", "titulo": "Inventario", "estado": "hecha" }) ; "tasks")]
#[tokio::test]
async fn test_resource_lifecycle(resource: &str, body: Value, replacement: Value) {
    let server = test_server();
    let collection = format!("/api/{}", resource);

    server
        .get(&collection)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    // Create
    let response = server.post(&collection).json(&body).await;
    response.assert_status(StatusCode::CREATED);
    let created: Value = response.json();
    let id = created["id"].as_i64().expect("assigned id");
    for (field, value) in body.as_object().unwrap() {
        assert_eq!(&created[field], value, "field {}", field);
    }
    let item = format!("{}/{}", collection, id);

    // List and get
    let listed: Vec<Value> = server.get(&collection).await.json();
    assert_eq!(listed, vec![created.clone()]);
    let fetched = server.get(&item).await;
    fetched.assert_status_ok();
    assert_eq!(fetched.json::<Value>(), created);

    // Update
    let response = server.put(&item).json(&replacement).await;
    response.assert_status_ok();
    let updated: Value = response.json();
    assert_eq!(updated["id"], id);
    for (field, value) in replacement.as_object().unwrap() {
        assert_eq!(&updated[field], value, "field {}", field);
    }
    assert_eq!(server.get(&item).await.json::<Value>(), updated);

    // Missing ids
    let missing = format!("{}/{}", collection, id + 100);
    server.get(&missing).await.assert_status_not_found();
    server
        .put(&missing)
        .json(&replacement)
        .await
        .assert_status_not_found();
    server.delete(&missing).await.assert_status_not_found();

    // Delete
    server.delete(&item).await.assert_status(StatusCode::NO_CONTENT);
    server.get(&item).await.assert_status_not_found();
    server.delete(&item).await.assert_status_not_found();
    server
        .get(&collection)
        .await
        .assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_resources_are_independent() {
    let server = test_server();

    server
        .post("/api/sesionesDescanso")
        .json(&session())
        .await
        .assert_status(StatusCode::CREATED);

    server
        .get("/api/sesionesTrabajo")
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server.get("/api/sesionesDescanso/1").await.assert_status_ok();
    server.get("/api/sesionesTrabajo/1").await.assert_status_not_found();
}

#[tokio::test]
async fn test_work_day_without_employee_defaults_to_zero() {
    let server = test_server();

    let created: Value = server
        .post("/api/jornadas")
        .json(&json!({ "fecha": "2024-11-04" }))
        .await
        .json();

    assert_eq!(created["empleadoId"], 0);
}

#[tokio::test]
async fn test_invalid_time_is_bad_request() {
    let server = test_server();

    let response = server
        .post("/api/sesionesTrabajo")
        .json(&json!({ "idJornada": 1, "tiempoInicio": "25:99" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_task_status_is_free_text() {
    let server = test_server();

    let created: Value = server
        .post("/api/tareas")
        .json(&json!({ "titulo": "Limpiar", "estado": "cualquier cosa" }))
        .await
        .json();

    assert_eq!(created["estado"], "cualquier cosa");
    assert_eq!(created["fecha"], Value::Null);
}

#[test_case(json!("2024-11-05") ; "plain date")]
#[test_case(json!("2024-11-05T23:00:00.000Z") ; "browser timestamp")]
#[test_case(json!(1730847600000_i64) ; "epoch millis")]
#[tokio::test]
async fn test_meeting_date_forms_are_stored_as_calendar_date(fecha: Value) {
    let server = test_server();

    let response = server
        .post("/api/reuniones")
        .json(&json!({ "fecha": fecha, "titulo": "Planificación semanal" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["fecha"], "2024-11-05");
}
