//! # Horizon ドメイン層
//!
//! 目標（Goal）管理のドメインモデルを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! goal-service → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、HTTP）には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`goal`] - 目標エンティティと関連する値オブジェクト
//!
//! ## 使用例
//!
//! ```rust
//! use horizon_domain::goal::{Goal, GoalId, GoalStatus};
//!
//! let goal = Goal::from_db(GoalId::from_i64(1), "走る".into(), "毎朝 5km".into(), None);
//! let goal = goal.with_status(GoalStatus::new(GoalStatus::COMPLETED));
//!
//! assert!(goal.is_completed());
//! ```

pub mod error;
pub mod goal;

pub use error::DomainError;
