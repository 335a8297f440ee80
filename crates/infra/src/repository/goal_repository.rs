//! # GoalRepository
//!
//! 目標の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **単一ステートメント**: ステータス更新は `UPDATE ... RETURNING`、削除は
//!   影響行数で存在判定するため、読み取りと書き込みの間に隙間がない
//! - **ID 非再利用**: `AUTOINCREMENT` により削除済み ID が再採番されることはない
//!
//! ## 並行更新
//!
//! 同一目標への同時ステータス更新は後勝ち（last-write-wins）となる。
//! バージョン列による楽観ロックは行わない。

use async_trait::async_trait;
use horizon_domain::goal::{Goal, GoalId, GoalStatus, NewGoal};
use sqlx::SqlitePool;

use crate::error::InfraError;

/// 目標リポジトリトレイト
#[async_trait]
pub trait GoalRepository: Send + Sync {
    /// 全目標を ID 昇順で取得する
    async fn find_all(&self) -> Result<Vec<Goal>, InfraError>;

    /// ID で目標を検索する
    ///
    /// # 戻り値
    ///
    /// - `Ok(Some(goal))`: 目標が見つかった場合
    /// - `Ok(None)`: 目標が見つからない場合
    /// - `Err(_)`: データベースエラー
    async fn find_by_id(&self, id: &GoalId) -> Result<Option<Goal>, InfraError>;

    /// 目標を挿入し、採番された ID を含む目標を返す
    ///
    /// ステータスは未設定で保存される。
    async fn insert(&self, goal: &NewGoal) -> Result<Goal, InfraError>;

    /// ステータスのみを更新し、更新後の目標を返す
    ///
    /// 対象が存在しない場合は `Ok(None)`。
    async fn update_status(
        &self,
        id: &GoalId,
        status: &GoalStatus,
    ) -> Result<Option<Goal>, InfraError>;

    /// 目標を削除する
    ///
    /// 削除した場合は `true`、対象が存在しない場合は `false`。
    async fn delete(&self, id: &GoalId) -> Result<bool, InfraError>;
}

/// DB の goals テーブルの行を表す中間構造体
#[derive(sqlx::FromRow)]
struct GoalRow {
    id:          i64,
    title:       String,
    description: String,
    status:      Option<String>,
}

impl From<GoalRow> for Goal {
    fn from(row: GoalRow) -> Self {
        Goal::from_db(
            GoalId::from_i64(row.id),
            row.title,
            row.description,
            row.status.map(GoalStatus::new),
        )
    }
}

/// SQLite 実装の GoalRepository
#[derive(Debug, Clone)]
pub struct SqliteGoalRepository {
    pool: SqlitePool,
}

impl SqliteGoalRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GoalRepository for SqliteGoalRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Goal>, InfraError> {
        let rows = sqlx::query_as::<_, GoalRow>(
            r#"
            SELECT id, title, description, status
            FROM goals
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Goal::from).collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: &GoalId) -> Result<Option<Goal>, InfraError> {
        let row = sqlx::query_as::<_, GoalRow>(
            r#"
            SELECT id, title, description, status
            FROM goals
            WHERE id = ?
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Goal::from))
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, goal: &NewGoal) -> Result<Goal, InfraError> {
        let row = sqlx::query_as::<_, GoalRow>(
            r#"
            INSERT INTO goals (title, description, status)
            VALUES (?, ?, NULL)
            RETURNING id, title, description, status
            "#,
        )
        .bind(goal.title())
        .bind(goal.description())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn update_status(
        &self,
        id: &GoalId,
        status: &GoalStatus,
    ) -> Result<Option<Goal>, InfraError> {
        let row = sqlx::query_as::<_, GoalRow>(
            r#"
            UPDATE goals
            SET status = ?
            WHERE id = ?
            RETURNING id, title, description, status
            "#,
        )
        .bind(status.as_str())
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Goal::from))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: &GoalId) -> Result<bool, InfraError> {
        let result = sqlx::query("DELETE FROM goals WHERE id = ?")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
