//! # テスト用インメモリリポジトリ
//!
//! ハンドラ・ユースケーステストで使用するインメモリ実装。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! horizon-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use horizon_domain::goal::{Goal, GoalId, GoalStatus, NewGoal};

use crate::{error::InfraError, repository::GoalRepository};

// ===== FakeGoalRepository =====

#[derive(Debug, Default)]
struct FakeGoalStore {
    goals:   Vec<Goal>,
    last_id: i64,
}

/// インメモリの GoalRepository
///
/// SQLite の `AUTOINCREMENT` と同様に、削除済みの ID は再利用しない。
/// [`FakeGoalRepository::unavailable`] で作成すると全操作がエラーを返す。
#[derive(Debug, Clone, Default)]
pub struct FakeGoalRepository {
    store:       Arc<Mutex<FakeGoalStore>>,
    unavailable: bool,
}

impl FakeGoalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// ストレージ障害を模擬するリポジトリを作成する
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// テストデータを直接投入し、投入した目標を返す
    pub fn add_goal(&self, title: &str, description: &str, status: Option<&str>) -> Goal {
        let mut store = self.store.lock().unwrap();
        store.last_id += 1;
        let goal = Goal::from_db(
            GoalId::from_i64(store.last_id),
            title.to_string(),
            description.to_string(),
            status.map(GoalStatus::new),
        );
        store.goals.push(goal.clone());
        goal
    }

    fn check_available(&self) -> Result<(), InfraError> {
        if self.unavailable {
            return Err(InfraError::unexpected("ストレージが利用できません"));
        }
        Ok(())
    }
}

#[async_trait]
impl GoalRepository for FakeGoalRepository {
    async fn find_all(&self) -> Result<Vec<Goal>, InfraError> {
        self.check_available()?;
        Ok(self.store.lock().unwrap().goals.clone())
    }

    async fn find_by_id(&self, id: &GoalId) -> Result<Option<Goal>, InfraError> {
        self.check_available()?;
        Ok(self
            .store
            .lock()
            .unwrap()
            .goals
            .iter()
            .find(|g| g.id() == *id)
            .cloned())
    }

    async fn insert(&self, goal: &NewGoal) -> Result<Goal, InfraError> {
        self.check_available()?;
        let mut store = self.store.lock().unwrap();
        store.last_id += 1;
        let saved = Goal::from_db(
            GoalId::from_i64(store.last_id),
            goal.title().to_string(),
            goal.description().to_string(),
            None,
        );
        store.goals.push(saved.clone());
        Ok(saved)
    }

    async fn update_status(
        &self,
        id: &GoalId,
        status: &GoalStatus,
    ) -> Result<Option<Goal>, InfraError> {
        self.check_available()?;
        let mut store = self.store.lock().unwrap();
        let Some(slot) = store.goals.iter_mut().find(|g| g.id() == *id) else {
            return Ok(None);
        };
        let updated = slot.clone().with_status(status.clone());
        *slot = updated.clone();
        Ok(Some(updated))
    }

    async fn delete(&self, id: &GoalId) -> Result<bool, InfraError> {
        self.check_available()?;
        let mut store = self.store.lock().unwrap();
        let before = store.goals.len();
        store.goals.retain(|g| g.id() != *id);
        Ok(store.goals.len() < before)
    }
}
