//! # リポジトリ実装
//!
//! ドメインエンティティの永続化を担当する。
//!
//! ## 設計方針
//!
//! - **トレイト境界**: ユースケース層はトレイト経由でのみリポジトリを扱う
//! - **データベース抽象化**: sqlx を使用し、SQLite 固有の処理をカプセル化
//! - **テスタビリティ**: `fake` モジュールのインメモリ実装と差し替え可能

pub mod goal_repository;

pub use goal_repository::{GoalRepository, SqliteGoalRepository};
