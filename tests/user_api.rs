use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;
use userhub::app;
use userhub::config::{AppConfig, DatabaseConfig};
use userhub::lifecycle::Application;

async fn spawn_app() -> (Application, Router) {
    let config = AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        },
    };
    app::bootstrap(&config).await.unwrap()
}

async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = router
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn register(router: &Router, first: &str, last: &str) -> Value {
    let (status, body) = send(
        router,
        Method::POST,
        "/user/register",
        Some(json!({"firstName": first, "lastName": last})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["data"].clone()
}

#[tokio::test]
async fn register_returns_the_joined_name() {
    let (_app, router) = spawn_app().await;

    let (status, body) = send(
        &router,
        Method::POST,
        "/user/register",
        Some(json!({"firstName": "Grace", "lastName": "Hopper"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Create Success");
    assert_eq!(body["data"]["name"], "Grace Hopper");
    assert!(body["data"]["id"].as_i64().is_some());
}

#[tokio::test]
async fn register_without_last_name_is_rejected() {
    let (_app, router) = spawn_app().await;

    let (status, body) = send(
        &router,
        Method::POST,
        "/user/register",
        Some(json!({"firstName": "Grace"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "lastName is required");
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn register_with_malformed_json_is_rejected() {
    let (_app, router) = spawn_app().await;

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/user/register")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn update_of_unknown_user_fails() {
    let (_app, router) = spawn_app().await;

    let (status, body) = send(
        &router,
        Method::PUT,
        "/user/update",
        Some(json!({"id": 999, "firstName": "Alan"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Fail to get this user");
}

#[tokio::test]
async fn update_first_name_keeps_last_name() {
    let (_app, router) = spawn_app().await;
    let user = register(&router, "Grace", "Hopper").await;

    let (status, body) = send(
        &router,
        Method::PUT,
        "/user/update",
        Some(json!({"id": user["id"], "firstName": "Amazing"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Update Success");
    assert_eq!(body["data"]["name"], "Amazing Hopper");
}

#[tokio::test]
async fn update_of_single_word_name_is_rejected() {
    let (_app, router) = spawn_app().await;
    let user = register(&router, "Cher", " ").await;
    let id = user["id"].as_i64().unwrap();

    let (status, body) = send(
        &router,
        Method::PUT,
        "/user/update",
        Some(json!({"id": id, "lastName": "Bono"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"message": "Stored name cannot be split into first and last name"})
    );

    let (_, body) = send(&router, Method::GET, &format!("/user/find?id={}", id), None).await;
    assert_eq!(body["data"]["name"], "Cher  ");
}

#[tokio::test]
async fn update_without_id_is_rejected() {
    let (_app, router) = spawn_app().await;

    let (status, body) = send(
        &router,
        Method::PUT,
        "/user/update",
        Some(json!({"lastName": "Hopper"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "id is required");
}

#[tokio::test]
async fn delete_of_unknown_user_fails() {
    let (_app, router) = spawn_app().await;

    let (status, body) = send(&router, Method::DELETE, "/user/delete?id=42", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "User does not exist");
}

#[tokio::test]
async fn delete_removes_the_user() {
    let (_app, router) = spawn_app().await;
    let user = register(&router, "Grace", "Hopper").await;
    let id = user["id"].as_i64().unwrap();

    let (status, body) =
        send(&router, Method::DELETE, &format!("/user/delete?id={}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Delete user success"}));

    let (status, _) = send(&router, Method::GET, &format!("/user/find?id={}", id), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn find_returns_the_current_name() {
    let (_app, router) = spawn_app().await;
    let user = register(&router, "Grace", "Hopper").await;
    let id = user["id"].as_i64().unwrap();

    send(
        &router,
        Method::PUT,
        "/user/update",
        Some(json!({"id": id, "lastName": "Murray"})),
    )
    .await;

    let (status, body) = send(&router, Method::GET, &format!("/user/find?id={}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Fetching user success");
    assert_eq!(body["data"], json!({"id": id, "name": "Grace Murray"}));
}

#[tokio::test]
async fn find_validates_the_id_parameter() {
    let (_app, router) = spawn_app().await;

    let (status, body) = send(&router, Method::GET, "/user/find", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "User does not exist");

    let (status, body) = send(&router, Method::GET, "/user/find?id=", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "User does not exist");

    let (status, body) = send(&router, Method::GET, "/user/find?id=abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Id is not available");
}

#[tokio::test]
async fn repeated_id_uses_the_first_value() {
    let (_app, router) = spawn_app().await;
    let first = register(&router, "Grace", "Hopper").await;
    register(&router, "Alan", "Turing").await;
    let id = first["id"].as_i64().unwrap();

    let (status, body) = send(
        &router,
        Method::GET,
        &format!("/user/find?id={}&id={}", id, id + 1),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Grace Hopper");

    let (status, body) = send(&router, Method::DELETE, "/user/delete?id=&id=1", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"message": "User does not exist"}));
}

#[tokio::test]
async fn id_beyond_the_column_range_is_unknown() {
    let (_app, router) = spawn_app().await;

    let (status, body) = send(&router, Method::GET, "/user/find?id=99999999999", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "User does not exist");

    let (status, body) = send(
        &router,
        Method::PUT,
        "/user/update",
        Some(json!({"id": 99999999999_i64, "firstName": "Ada"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Fail to get this user");
}

#[tokio::test]
async fn shutdown_closes_the_pool() {
    let (app, router) = spawn_app().await;
    register(&router, "Grace", "Hopper").await;

    app.shutdown().await.unwrap();

    let (status, body) = send(&router, Method::GET, "/user/find?id=1", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "User does not exist");
}
