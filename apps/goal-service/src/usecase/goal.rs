//! 目標管理ユースケース

use std::sync::Arc;

use horizon_domain::{
    DomainError,
    goal::{Goal, GoalId, GoalProgress, GoalStatus, NewGoal},
};
use horizon_infra::repository::GoalRepository;

use crate::error::GoalServiceError;

/// 目標作成の入力
///
/// JSON の `null` と未指定はどちらも `None` になる。空文字列は有効な値。
#[derive(Debug, Default)]
pub struct CreateGoalInput {
    pub title:       Option<String>,
    pub description: Option<String>,
}

/// ステータス更新の入力
#[derive(Debug)]
pub struct UpdateGoalStatusInput {
    pub goal_id: GoalId,
    pub status:  Option<String>,
}

/// 目標管理ユースケース
pub struct GoalUseCaseImpl {
    goal_repository: Arc<dyn GoalRepository>,
}

impl GoalUseCaseImpl {
    pub fn new(goal_repository: Arc<dyn GoalRepository>) -> Self {
        Self { goal_repository }
    }

    /// 目標一覧を取得する（作成順）
    pub async fn list_goals(&self) -> Result<Vec<Goal>, GoalServiceError> {
        let goals = self.goal_repository.find_all().await?;
        Ok(goals)
    }

    /// 目標を作成する
    ///
    /// `title` と `description` の存在のみを検証する。
    /// 検証に失敗した場合はストレージに触れない。
    pub async fn create_goal(&self, input: CreateGoalInput) -> Result<Goal, GoalServiceError> {
        let title = input
            .title
            .ok_or_else(|| DomainError::missing_field("title"))?;
        let description = input
            .description
            .ok_or_else(|| DomainError::missing_field("description"))?;

        let goal = self
            .goal_repository
            .insert(&NewGoal::new(title, description))
            .await?;

        tracing::info!(goal_id = %goal.id(), "目標を作成しました");
        Ok(goal)
    }

    /// ID で目標を取得する
    ///
    /// 存在しない場合は 404。
    pub async fn get_goal(&self, goal_id: &GoalId) -> Result<Goal, GoalServiceError> {
        self.goal_repository
            .find_by_id(goal_id)
            .await?
            .ok_or_else(|| not_found(goal_id))
    }

    /// 目標のステータスを更新する
    ///
    /// 存在確認を先に行うため、目標が無ければステータスの有無に関わらず 404。
    /// 目標が存在してステータスが欠落している場合は 400。
    pub async fn update_goal_status(
        &self,
        input: UpdateGoalStatusInput,
    ) -> Result<Goal, GoalServiceError> {
        self.get_goal(&input.goal_id).await?;

        let status = input
            .status
            .map(GoalStatus::new)
            .ok_or_else(|| DomainError::missing_field("status"))?;

        // 確認後に削除された場合も 404
        let goal = self
            .goal_repository
            .update_status(&input.goal_id, &status)
            .await?
            .ok_or_else(|| not_found(&input.goal_id))?;

        tracing::info!(goal_id = %goal.id(), status = %status, "目標のステータスを更新しました");
        Ok(goal)
    }

    /// 目標を削除する
    pub async fn delete_goal(&self, goal_id: &GoalId) -> Result<(), GoalServiceError> {
        let deleted = self.goal_repository.delete(goal_id).await?;
        if !deleted {
            return Err(not_found(goal_id));
        }

        tracing::info!(%goal_id, "目標を削除しました");
        Ok(())
    }

    /// 目標全体の達成状況を集計する
    pub async fn goal_progress(&self) -> Result<GoalProgress, GoalServiceError> {
        let goals = self.goal_repository.find_all().await?;
        Ok(GoalProgress::from_goals(&goals))
    }
}

fn not_found(goal_id: &GoalId) -> GoalServiceError {
    DomainError::NotFound {
        entity_type: "Goal",
        id:          goal_id.to_string(),
    }
    .into()
}
