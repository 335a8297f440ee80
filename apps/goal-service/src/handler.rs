//! # HTTP ハンドラ
//!
//! Goal Service の API エンドポイントを提供する。

pub mod goal;
pub mod health;

pub use goal::{
    GoalState,
    create_goal,
    delete_goal,
    get_goal_progress,
    list_goals,
    update_goal_status,
};
pub use health::{ReadinessState, health_check, readiness_check};
