//! # Horizon インフラ層
//!
//! 外部システム（SQLite）との接続を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **データベース接続**: SQLite 接続プールの作成とマイグレーション
//! - **リポジトリ実装**: 目標の永続化
//!
//! ## 依存関係
//!
//! ```text
//! goal-service → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`db`] - SQLite 接続管理・マイグレーション
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリ実装
//! - `fake` - テスト用インメモリリポジトリ（`test-utils` feature）
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use horizon_infra::{db, repository::SqliteGoalRepository};
//!
//! let pool = db::create_pool("sqlite://goals.db").await?;
//! db::run_migrations(&pool).await?;
//! let repository = SqliteGoalRepository::new(pool);
//! ```

pub mod db;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod fake;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
