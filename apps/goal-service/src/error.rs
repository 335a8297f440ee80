//! # Goal Service エラー定義
//!
//! Goal Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! | バリアント | HTTP ステータス |
//! |-----------|----------------|
//! | `BadRequest` | 400 |
//! | `NotFound` | 404 |
//! | `Database` | 500（詳細はログにのみ出力） |

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use horizon_domain::DomainError;
use horizon_infra::InfraError;
use horizon_shared::ErrorResponse;
use thiserror::Error;

/// Goal Service で発生するエラー
#[derive(Debug, Error)]
pub enum GoalServiceError {
    /// リソースが見つからない
    #[error("リソースが見つかりません: {0}")]
    NotFound(String),

    /// 不正なリクエスト
    #[error("不正なリクエスト: {0}")]
    BadRequest(String),

    /// データベースエラー
    #[error("データベースエラー: {0}")]
    Database(#[from] InfraError),
}

impl From<DomainError> for GoalServiceError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::BadRequest(msg),
            err @ DomainError::NotFound { .. } => Self::NotFound(err.to_string()),
        }
    }
}

impl From<JsonRejection> for GoalServiceError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

/// パスパラメータを解釈できない URI は、該当するリソースが無いものとして扱う
impl From<PathRejection> for GoalServiceError {
    fn from(rejection: PathRejection) -> Self {
        Self::NotFound(rejection.body_text())
    }
}

impl IntoResponse for GoalServiceError {
    fn into_response(self) -> Response {
        let body = match &self {
            GoalServiceError::NotFound(msg) => ErrorResponse::not_found(msg.clone()),
            GoalServiceError::BadRequest(msg) => ErrorResponse::bad_request(msg.clone()),
            GoalServiceError::Database(e) => {
                tracing::error!(
                    error = %e,
                    span_trace = %e.span_trace(),
                    "データベースエラー"
                );
                ErrorResponse::internal_error()
            }
        };

        let status =
            StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    async fn response_body(response: Response) -> ErrorResponse {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_bad_requestは400とメッセージを返す() {
        let response = GoalServiceError::BadRequest("title は必須です".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response_body(response).await,
            ErrorResponse::bad_request("title は必須です")
        );
    }

    #[tokio::test]
    async fn test_not_foundは404を返す() {
        let response = GoalServiceError::NotFound("Goal が見つかりません: 1".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response_body(response).await.title, "Not Found");
    }

    #[tokio::test]
    async fn test_databaseは500で内部情報を含まない() {
        let err = GoalServiceError::from(InfraError::unexpected("disk I/O error at /var/db"));

        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = response_body(response).await;
        assert_eq!(body, ErrorResponse::internal_error());
        assert!(!body.detail.contains("/var/db"));
    }

    #[test]
    fn test_domain_errorのバリデーションはbad_requestに変換される() {
        let err = GoalServiceError::from(DomainError::missing_field("status"));

        assert!(matches!(err, GoalServiceError::BadRequest(msg) if msg == "status は必須です"));
    }

    #[test]
    fn test_domain_errorのnot_foundはnot_foundに変換される() {
        let err = GoalServiceError::from(DomainError::NotFound {
            entity_type: "Goal",
            id:          "9".to_string(),
        });

        assert!(matches!(err, GoalServiceError::NotFound(msg) if msg == "Goal が見つかりません: 9"));
    }
}
