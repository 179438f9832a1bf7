//! Employee API Tests
//!
//! Full request/response behaviour of `/api/empleados`. The other
//! resources share the same handlers and are covered in `resource_tests`.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{fake_employee, test_server};

#[tokio::test]
async fn test_empty_list_is_no_content() {
    let server = test_server();

    let response = server.get("/api/empleados").await;

    response.assert_status(StatusCode::NO_CONTENT);
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn test_create_get_delete_lifecycle() {
    let server = test_server();

    let created = server
        .post("/api/empleados")
        .json(&json!({ "nombre": "Ana", "rol": "Chef" }))
        .await;
    created.assert_status(StatusCode::CREATED);
    let created: Value = created.json();
    let id = created["id"].as_i64().expect("assigned id");
    assert_eq!(created["nombre"], "Ana");
    assert_eq!(created["rol"], "Chef");

    let fetched = server.get(&format!("/api/empleados/{}", id)).await;
    fetched.assert_status_ok();
    assert_eq!(fetched.json::<Value>(), created);

    server
        .delete(&format!("/api/empleados/{}", id))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let gone = server.get(&format!("/api/empleados/{}", id)).await;
    gone.assert_status_not_found();
    assert!(gone.text().is_empty());
}

#[tokio::test]
async fn test_english_field_names_are_accepted() {
    let server = test_server();

    let created: Value = server
        .post("/api/empleados")
        .json(&json!({ "name": "Ana", "role": "Chef", "email": "ana@example.com" }))
        .await
        .json();

    assert_eq!(created["nombre"], "Ana");
    assert_eq!(created["rol"], "Chef");
    assert_eq!(created["correo"], "ana@example.com");
}

#[tokio::test]
async fn test_list_includes_created_records() {
    let server = test_server();
    let first: Value = server.post("/api/empleados").json(&fake_employee()).await.json();
    let second: Value = server.post("/api/empleados").json(&fake_employee()).await.json();

    let response = server.get("/api/empleados").await;

    response.assert_status_ok();
    let listed: Vec<Value> = response.json();
    assert_eq!(listed, vec![first, second]);
}

#[tokio::test]
async fn test_create_ignores_client_id() {
    let server = test_server();

    let mut body = fake_employee();
    body["id"] = json!(500);
    let created: Value = server.post("/api/empleados").json(&body).await.json();

    assert_eq!(created["id"], 1);
    server.get("/api/empleados/500").await.assert_status_not_found();
}

#[tokio::test]
async fn test_update_overwrites_whole_record_under_path_id() {
    let server = test_server();
    let created: Value = server.post("/api/empleados").json(&fake_employee()).await.json();
    let id = created["id"].as_i64().unwrap();

    let response = server
        .put(&format!("/api/empleados/{}", id))
        .json(&json!({ "id": 77, "nombre": "Lucas", "equipo": "Sala" }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({
            "id": id,
            "nombre": "Lucas",
            "apellido": null,
            "correo": null,
            "rol": null,
            "equipo": "Sala",
            "fotoUrl": null
        })
    );
    server.get("/api/empleados/77").await.assert_status_not_found();
}

#[tokio::test]
async fn test_update_missing_is_not_found_and_changes_nothing() {
    let server = test_server();
    let existing: Value = server.post("/api/empleados").json(&fake_employee()).await.json();

    let response = server
        .put("/api/empleados/999")
        .json(&json!({ "nombre": "Nadie" }))
        .await;

    response.assert_status_not_found();
    assert!(response.text().is_empty());
    let listed: Vec<Value> = server.get("/api/empleados").await.json();
    assert_eq!(listed, vec![existing]);
}

#[tokio::test]
async fn test_second_delete_is_not_found() {
    let server = test_server();
    let created: Value = server.post("/api/empleados").json(&fake_employee()).await.json();
    let path = format!("/api/empleados/{}", created["id"]);

    server.delete(&path).await.assert_status(StatusCode::NO_CONTENT);
    server.delete(&path).await.assert_status_not_found();
}

#[tokio::test]
async fn test_overlong_field_is_rejected() {
    let server = test_server();

    let response = server
        .post("/api/empleados")
        .json(&json!({ "nombre": "a".repeat(256) }))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["code"], 10007);
    assert!(body["errors"].as_array().is_some_and(|e| e.len() == 1));
    server
        .get("/api/empleados")
        .await
        .assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let server = test_server();

    let response = server
        .post("/api/empleados")
        .bytes("{ not json".into())
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["code"], 10002);
}

#[tokio::test]
async fn test_non_integer_id_is_bad_request() {
    let server = test_server();

    server.get("/api/empleados/abc").await.assert_status_bad_request();
    server.delete("/api/empleados/1.5").await.assert_status_bad_request();
}
