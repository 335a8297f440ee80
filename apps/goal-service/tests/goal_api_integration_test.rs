//! Goal API 統合テスト
//!
//! `build_app` で組み立てた Router を、マイグレーション適用済みの
//! インメモリ SQLite に接続して HTTP レベルで検証する。
//!
//! 実行方法:
//! ```bash
//! cargo test -p horizon-goal-service --test goal_api_integration_test
//! ```

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use horizon_goal_service::{app_builder::build_app, config::CorsOrigins};
use horizon_infra::{db, repository::SqliteGoalRepository};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use tower::ServiceExt;

// =============================================================================
// ヘルパー
// =============================================================================

async fn setup() -> (Router, SqlitePool) {
    let pool = db::create_in_memory_pool().await.unwrap();
    let repository = Arc::new(SqliteGoalRepository::new(pool.clone()));
    let app = build_app(repository, pool.clone(), &CorsOrigins::Any);
    (app, pool)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn create(app: &Router, title: &str, description: &str) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/goals",
        Some(json!({"title": title, "description": description})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

// =============================================================================
// テストケース
// =============================================================================

#[tokio::test]
async fn test_作成した目標が一覧に含まれる() {
    // Arrange
    let (app, _pool) = setup().await;

    // Act
    let created = create(&app, "T", "D").await;
    let (status, list) = send(&app, Method::GET, "/api/goals", None).await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert!(created["id"].is_i64());
    assert_eq!(
        list,
        json!([{"id": created["id"], "title": "T", "description": "D", "status": null}])
    );
}

#[tokio::test]
async fn test_書き込みが無ければ一覧は同じ結果を返す() {
    let (app, _pool) = setup().await;
    create(&app, "a", "1").await;
    create(&app, "b", "2").await;

    let (_, first) = send(&app, Method::GET, "/api/goals", None).await;
    let (_, second) = send(&app, Method::GET, "/api/goals", None).await;

    assert_eq!(first, second);
    assert_eq!(first.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_更新はステータスのみを変更する() {
    // Arrange
    let (app, _pool) = setup().await;
    let created = create(&app, "T", "D").await;
    let uri = format!("/api/goals/{}", created["id"]);

    // Act
    let (status, updated) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({"status": "Completed", "title": "X", "description": "Y"})),
    )
    .await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        updated,
        json!({"id": created["id"], "title": "T", "description": "D", "status": "Completed"})
    );
    let (_, list) = send(&app, Method::GET, "/api/goals", None).await;
    assert_eq!(list, json!([updated]));
}

#[tokio::test]
async fn test_削除後は一覧から消え以後の更新と削除は404() {
    // Arrange
    let (app, _pool) = setup().await;
    let created = create(&app, "T", "D").await;
    let uri = format!("/api/goals/{}", created["id"]);

    // Act
    let (status, body) = send(&app, Method::DELETE, &uri, None).await;

    // Assert
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (_, list) = send(&app, Method::GET, "/api/goals", None).await;
    assert_eq!(list, json!([]));

    let (put_status, _) = send(&app, Method::PUT, &uri, Some(json!({"status": "x"}))).await;
    assert_eq!(put_status, StatusCode::NOT_FOUND);

    let (delete_status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(delete_status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_必須項目が無い作成は400で保存されない() {
    let (app, _pool) = setup().await;

    let (status, body) = send(&app, Method::POST, "/api/goals", Some(json!({"title": "T"}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert_eq!(body["type"], "https://horizon.example.com/errors/bad-request");
    let (_, list) = send(&app, Method::GET, "/api/goals", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_存在しないidの更新は404() {
    let (app, _pool) = setup().await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/goals/999999",
        Some(json!({"status": "Completed"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["title"], "Not Found");
}

#[tokio::test]
async fn test_整数でないidは404() {
    let (app, _pool) = setup().await;

    let (delete_status, _) = send(&app, Method::DELETE, "/api/goals/not-a-number", None).await;
    let (put_status, _) = send(
        &app,
        Method::PUT,
        "/api/goals/not-a-number",
        Some(json!({"status": "Completed"})),
    )
    .await;

    assert_eq!(delete_status, StatusCode::NOT_FOUND);
    assert_eq!(put_status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_存在しないidの更新はボディの内容に関わらず404() {
    let (app, _pool) = setup().await;

    let (empty_object, body) =
        send(&app, Method::PUT, "/api/goals/999999", Some(json!({}))).await;
    let (no_body, _) = send(&app, Method::PUT, "/api/goals/999999", None).await;

    assert_eq!(empty_object, StatusCode::NOT_FOUND);
    assert_eq!(body["title"], "Not Found");
    assert_eq!(no_body, StatusCode::NOT_FOUND);
    let (_, list) = send(&app, Method::GET, "/api/goals", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_存在するidの更新でステータスが無い場合は400で変更されない() {
    let (app, _pool) = setup().await;
    let created = create(&app, "T", "D").await;
    let uri = format!("/api/goals/{}", created["id"]);

    let (status, body) = send(&app, Method::PUT, &uri, Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().is_some_and(|d| d.contains("status")));
    let (_, list) = send(&app, Method::GET, "/api/goals", None).await;
    assert_eq!(list, json!([created]));
}

#[tokio::test]
async fn test_削除したidは再利用されない() {
    let (app, _pool) = setup().await;
    let first = create(&app, "a", "1").await;
    send(&app, Method::DELETE, &format!("/api/goals/{}", first["id"]), None).await;

    let second = create(&app, "b", "2").await;

    assert!(second["id"].as_i64() > first["id"].as_i64());
}

#[tokio::test]
async fn test_進捗は完了のみを数える() {
    // Arrange
    let (app, _pool) = setup().await;
    let (_, empty) = send(&app, Method::GET, "/api/goals/progress", None).await;
    assert_eq!(empty, json!({"completed": 0, "total": 0, "percentage": 0.0}));

    let done = create(&app, "a", "1").await;
    create(&app, "b", "2").await;
    send(
        &app,
        Method::PUT,
        &format!("/api/goals/{}", done["id"]),
        Some(json!({"status": "Completed"})),
    )
    .await;

    // Act
    let (status, progress) = send(&app, Method::GET, "/api/goals/progress", None).await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(progress, json!({"completed": 1, "total": 2, "percentage": 50.0}));
}

#[tokio::test]
async fn test_readinessはプールの状態を反映する() {
    let (app, pool) = setup().await;

    let (ready_status, ready) = send(&app, Method::GET, "/health/ready", None).await;
    assert_eq!(ready_status, StatusCode::OK);
    assert_eq!(ready, json!({"status": "ready", "checks": {"database": "ok"}}));

    pool.close().await;

    let (status, body) = send(&app, Method::GET, "/health/ready", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({"status": "not_ready", "checks": {"database": "error"}}));
}

#[tokio::test]
async fn test_レスポンスにリクエストidが付与される() {
    let (app, _pool) = setup().await;
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_クライアント指定のリクエストidはそのまま返る() {
    let (app, _pool) = setup().await;
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "client-supplied-id")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(
        response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("client-supplied-id")
    );
}

#[tokio::test]
async fn test_cors_任意のオリジンを許可する() {
    let (app, _pool) = setup().await;
    let request = Request::builder()
        .uri("/api/goals")
        .header("origin", "http://localhost:3000")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
