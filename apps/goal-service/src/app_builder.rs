//! # Goal Service アプリケーション構築
//!
//! State の初期化とルーター構築を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    http::HeaderValue,
    routing::{get, put},
};
use horizon_infra::repository::GoalRepository;
use horizon_shared::observability::{MakeRequestUuidV7, make_request_span};
use sqlx::SqlitePool;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    config::CorsOrigins,
    handler::{
        GoalState,
        ReadinessState,
        create_goal,
        delete_goal,
        get_goal_progress,
        health_check,
        list_goals,
        readiness_check,
        update_goal_status,
    },
    usecase::GoalUseCaseImpl,
};

/// リポジトリとプールから全ルートを持つ Router を構築する
pub fn build_app(
    goal_repository: Arc<dyn GoalRepository>,
    pool: SqlitePool,
    cors_origins: &CorsOrigins,
) -> Router {
    let goal_state = Arc::new(GoalState {
        usecase: GoalUseCaseImpl::new(goal_repository),
    });
    let readiness_state = Arc::new(ReadinessState { pool });

    Router::new()
        .route("/health", get(health_check))
        .route("/health/ready", get(readiness_check))
        .with_state(readiness_state)
        .route("/api/goals", get(list_goals).post(create_goal))
        // 静的セグメントはパラメータより優先されるため `{id}` と衝突しない
        .route("/api/goals/progress", get(get_goal_progress))
        .route(
            "/api/goals/{id}",
            put(update_goal_status).delete(delete_goal),
        )
        .with_state(goal_state)
        .layer(cors_layer(cors_origins))
        // Request ID + TraceLayer により、すべての HTTP リクエストに request_id が付与されログに自動注入される
        // 1. SetRequestIdLayer（最外）: リクエスト受信時に UUID v7 を生成（またはクライアント提供値を使用）
        // 2. TraceLayer: カスタムスパンに request_id を含める
        // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}

/// CORS レイヤーを構築する
///
/// 解釈できないオリジンは警告を出して除外する。
fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    let allow_origin = match origins {
        CorsOrigins::Any => AllowOrigin::any(),
        CorsOrigins::List(list) => {
            let values: Vec<HeaderValue> = list
                .iter()
                .filter_map(|origin| match HeaderValue::from_str(origin) {
                    Ok(value) => Some(value),
                    Err(e) => {
                        tracing::warn!(%origin, error = %e, "不正な CORS オリジンを無視します");
                        None
                    }
                })
                .collect();
            AllowOrigin::list(values)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
