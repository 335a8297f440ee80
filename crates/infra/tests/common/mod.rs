//! テスト共通フィクスチャ
//!
//! インメモリ SQLite を使用する統合テストで共通利用するヘルパー。

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use horizon_domain::goal::{Goal, NewGoal};
use horizon_infra::{
    db,
    repository::{GoalRepository, SqliteGoalRepository},
};
use sqlx::SqlitePool;

/// マイグレーション適用済みのインメモリプールを作成する
pub async fn setup_pool() -> SqlitePool {
    db::create_in_memory_pool().await.unwrap()
}

/// 目標を 1 件挿入して返す
pub async fn insert_goal(pool: &SqlitePool, title: &str, description: &str) -> Goal {
    SqliteGoalRepository::new(pool.clone())
        .insert(&NewGoal::new(title, description))
        .await
        .unwrap()
}
