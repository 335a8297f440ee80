//! # Horizon 共有ユーティリティ
//!
//! Horizon の各クレートで使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - サービス（goal-service）から依存される
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum への依存は持たない（`IntoResponse` 変換はサービス側の責務）

pub mod error_response;
pub mod health;
pub mod observability;

pub use error_response::ErrorResponse;
pub use health::{CheckStatus, HealthResponse, ReadinessResponse, ReadinessStatus};
