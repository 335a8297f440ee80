//! # ユースケース層
//!
//! ハンドラとリポジトリの間に位置し、入力検証とエラー変換を担当する。

pub mod goal;

pub use goal::{CreateGoalInput, GoalUseCaseImpl, UpdateGoalStatusInput};
