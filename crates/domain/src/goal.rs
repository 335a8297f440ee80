//! # 目標（Goal）
//!
//! Horizon が管理する唯一のエンティティ。
//!
//! - `id` はストレージが採番し、以後不変
//! - `title` / `description` は作成時に必須で、以後この API では変更しない
//! - `status` は自由記述。作成直後は未設定（`None`）
//!
//! ## 使用例
//!
//! ```rust
//! use horizon_domain::goal::{Goal, GoalId, GoalProgress, GoalStatus};
//!
//! let goals = vec![
//!     Goal::from_db(GoalId::from_i64(1), "読書".into(), "月 2 冊".into(), None),
//!     Goal::from_db(
//!         GoalId::from_i64(2),
//!         "貯金".into(),
//!         "毎月 3 万円".into(),
//!         Some(GoalStatus::new(GoalStatus::COMPLETED)),
//!     ),
//! ];
//!
//! let progress = GoalProgress::from_goals(&goals);
//! assert_eq!(progress.completed, 1);
//! assert_eq!(progress.total, 2);
//! assert_eq!(progress.percentage, 50.0);
//! ```

use derive_more::Display;

// =========================================================================
// GoalId
// =========================================================================

/// 目標の一意識別子
///
/// SQLite の `INTEGER PRIMARY KEY AUTOINCREMENT` で採番される。
/// 削除後も同じ値が再利用されることはない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("{_0}")]
pub struct GoalId(i64);

impl GoalId {
    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

// =========================================================================
// GoalStatus
// =========================================================================

/// 目標のステータス（値オブジェクト）
///
/// 列挙型ではなく自由記述の文字列。空文字列も受け付ける。
/// 集計とテストで参照する値のみ定数として公開する。
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{_0}")]
pub struct GoalStatus(String);

impl GoalStatus {
    pub const IN_PROGRESS: &'static str = "In Progress";
    pub const COMPLETED: &'static str = "Completed";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 完了ステータスかどうか（大文字小文字・前後空白を区別する完全一致）
    pub fn is_completed(&self) -> bool {
        self.0 == Self::COMPLETED
    }
}

// =========================================================================
// NewGoal（未保存の目標）
// =========================================================================

/// 永続化前の目標
///
/// ID はストレージが採番するため持たない。ステータスは常に未設定で作成される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGoal {
    title:       String,
    description: String,
}

impl NewGoal {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title:       title.into(),
            description: description.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

// =========================================================================
// Goal（目標エンティティ）
// =========================================================================

/// 目標エンティティ
///
/// # 不変条件
///
/// - `id` / `title` / `description` は常に存在する
/// - 変更可能なのは `status` のみ（[`Goal::with_status`]）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    id:          GoalId,
    title:       String,
    description: String,
    status:      Option<GoalStatus>,
}

impl Goal {
    /// データベースから取得した値で復元する
    pub fn from_db(
        id: GoalId,
        title: String,
        description: String,
        status: Option<GoalStatus>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            status,
        }
    }

    /// ステータスを変更した目標を返す
    ///
    /// タイトルと説明は変更されない。
    pub fn with_status(self, status: GoalStatus) -> Self {
        Self {
            status: Some(status),
            ..self
        }
    }

    pub fn id(&self) -> GoalId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> Option<&GoalStatus> {
        self.status.as_ref()
    }

    pub fn is_completed(&self) -> bool {
        self.status.as_ref().is_some_and(GoalStatus::is_completed)
    }
}

// =========================================================================
// GoalProgress（進捗サマリー）
// =========================================================================

/// 目標全体の達成状況
///
/// `percentage` は 0.0〜100.0。目標が 1 件も無い場合は 0.0。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalProgress {
    pub completed:  usize,
    pub total:      usize,
    pub percentage: f64,
}

impl GoalProgress {
    pub fn from_goals(goals: &[Goal]) -> Self {
        let total = goals.len();
        let completed = goals.iter().filter(|g| g.is_completed()).count();
        let percentage = if total == 0 {
            0.0
        } else {
            completed as f64 / total as f64 * 100.0
        };

        Self {
            completed,
            total,
            percentage,
        }
    }
}
