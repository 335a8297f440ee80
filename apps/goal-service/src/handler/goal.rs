//! # 目標ハンドラ
//!
//! 目標管理 API を提供する。
//!
//! ## エンドポイント
//!
//! - `GET /api/goals` - 目標一覧
//! - `POST /api/goals` - 目標作成
//! - `PUT /api/goals/{id}` - ステータス更新
//! - `DELETE /api/goals/{id}` - 目標削除
//! - `GET /api/goals/progress` - 達成状況
//!
//! ## リクエストの解釈
//!
//! ボディの抽出失敗（Content-Type 不一致、JSON 構文エラー、型不一致）は
//! 構造化された 400 として返す。整数でないパス ID は該当するリソースが無いものとして
//! 404 を返す。

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path,
        State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use horizon_domain::goal::{Goal, GoalId, GoalProgress};
use serde::{Deserialize, Serialize};

use crate::{
    error::GoalServiceError,
    usecase::{CreateGoalInput, GoalUseCaseImpl, UpdateGoalStatusInput},
};

/// 目標 API の共有状態
pub struct GoalState {
    pub usecase: GoalUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// 目標作成リクエスト
#[derive(Debug, Deserialize)]
pub struct CreateGoalRequest {
    pub title:       Option<String>,
    pub description: Option<String>,
}

/// ステータス更新リクエスト
#[derive(Debug, Deserialize)]
pub struct UpdateGoalStatusRequest {
    pub status: Option<String>,
}

/// 目標 DTO
///
/// `status` は未設定なら `null` としてシリアライズされる。
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoalDto {
    pub id:          i64,
    pub title:       String,
    pub description: String,
    pub status:      Option<String>,
}

impl From<&Goal> for GoalDto {
    fn from(goal: &Goal) -> Self {
        Self {
            id:          goal.id().as_i64(),
            title:       goal.title().to_string(),
            description: goal.description().to_string(),
            status:      goal.status().map(|s| s.as_str().to_string()),
        }
    }
}

/// 達成状況 DTO
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct GoalProgressDto {
    pub completed:  usize,
    pub total:      usize,
    pub percentage: f64,
}

impl From<GoalProgress> for GoalProgressDto {
    fn from(progress: GoalProgress) -> Self {
        Self {
            completed:  progress.completed,
            total:      progress.total,
            percentage: progress.percentage,
        }
    }
}

// --- ハンドラ ---

/// GET /api/goals
///
/// 全目標を作成順で返す。目標が無ければ空配列。
#[tracing::instrument(skip_all)]
pub async fn list_goals(
    State(state): State<Arc<GoalState>>,
) -> Result<impl IntoResponse, GoalServiceError> {
    let goals = state.usecase.list_goals().await?;

    let items: Vec<GoalDto> = goals.iter().map(GoalDto::from).collect();
    Ok((StatusCode::OK, Json(items)))
}

/// POST /api/goals
///
/// ## レスポンス
///
/// - `201 Created`: 作成された目標
/// - `400 Bad Request`: ボディが不正、または `title` / `description` が無い
#[tracing::instrument(skip_all)]
pub async fn create_goal(
    State(state): State<Arc<GoalState>>,
    body: Result<Json<CreateGoalRequest>, JsonRejection>,
) -> Result<impl IntoResponse, GoalServiceError> {
    let Json(req) = body?;
    let input = CreateGoalInput {
        title:       req.title,
        description: req.description,
    };

    let goal = state.usecase.create_goal(input).await?;

    Ok((StatusCode::CREATED, Json(GoalDto::from(&goal))))
}

/// PUT /api/goals/{id}
///
/// ステータスのみを更新する。
///
/// ## レスポンス
///
/// 目標の存在確認はボディの検証より先に行う。
///
/// ## レスポンス
///
/// - `200 OK`: 更新後の目標
/// - `400 Bad Request`: 目標は存在するが、ボディが不正または `status` が無い
/// - `404 Not Found`: 目標が見つからない、または ID が整数でない
#[tracing::instrument(skip_all, fields(goal_id = tracing::field::Empty))]
pub async fn update_goal_status(
    State(state): State<Arc<GoalState>>,
    goal_id: Result<Path<i64>, PathRejection>,
    body: Result<Json<UpdateGoalStatusRequest>, JsonRejection>,
) -> Result<impl IntoResponse, GoalServiceError> {
    let Path(goal_id) = goal_id?;
    tracing::Span::current().record("goal_id", goal_id);
    let goal_id = GoalId::from_i64(goal_id);

    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) => {
            state.usecase.get_goal(&goal_id).await?;
            return Err(rejection.into());
        }
    };

    let input = UpdateGoalStatusInput {
        goal_id,
        status: req.status,
    };

    let goal = state.usecase.update_goal_status(input).await?;

    Ok((StatusCode::OK, Json(GoalDto::from(&goal))))
}

/// DELETE /api/goals/{id}
///
/// ## レスポンス
///
/// - `204 No Content`: 削除成功
/// - `404 Not Found`: 目標が見つからない、または ID が整数でない
#[tracing::instrument(skip_all, fields(goal_id = tracing::field::Empty))]
pub async fn delete_goal(
    State(state): State<Arc<GoalState>>,
    goal_id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, GoalServiceError> {
    let Path(goal_id) = goal_id?;
    tracing::Span::current().record("goal_id", goal_id);

    state
        .usecase
        .delete_goal(&GoalId::from_i64(goal_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/goals/progress
///
/// ステータスが `"Completed"` の目標数と全体に対する割合を返す。
#[tracing::instrument(skip_all)]
pub async fn get_goal_progress(
    State(state): State<Arc<GoalState>>,
) -> Result<impl IntoResponse, GoalServiceError> {
    let progress = state.usecase.goal_progress().await?;

    Ok((StatusCode::OK, Json(GoalProgressDto::from(progress))))
}
