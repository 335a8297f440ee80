//! # SQLite データベース接続管理
//!
//! データベース接続プールの作成、マイグレーション、疎通確認を行う。
//!
//! ## 設計方針
//!
//! - **明示的な注入**: プールは `main` で一度だけ作成し、リポジトリと
//!   ハンドラ State に渡す。モジュールレベルのシングルトンは持たない
//! - **明示的なマイグレーション**: スキーマ作成はリクエスト処理とは分離し、
//!   起動時に [`run_migrations`] を一度だけ呼ぶ
//! - **ファイル自動作成**: 接続先ファイルが無ければ作成する
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use horizon_infra::db;
//!
//! let pool = db::create_pool("sqlite://goals.db").await?;
//! db::run_migrations(&pool).await?;
//! ```

use std::{str::FromStr, time::Duration};

use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

use crate::error::InfraError;

/// SQLite 接続プールを作成する
///
/// # 引数
///
/// * `database_url` - SQLite 接続 URL（例: `sqlite://goals.db`, `sqlite::memory:`）
///
/// # 設定値
///
/// - `max_connections(5)`: SQLite は書き込みが直列化されるため少数で十分
/// - `acquire_timeout(5秒)`: 接続取得のタイムアウト
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, InfraError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// インメモリ SQLite プールを作成する（テスト用）
///
/// インメモリ DB は接続ごとに独立するため、接続数を 1 に固定し、
/// アイドル切断で DB が消えないようにタイムアウトを無効化する。
/// マイグレーションも適用済みの状態で返す。
#[cfg(any(test, feature = "test-utils"))]
pub async fn create_in_memory_pool() -> Result<SqlitePool, InfraError> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

/// データベースマイグレーションを実行する
///
/// `sqlx::migrate!()` マクロで埋め込まれたマイグレーションファイルを
/// 順番に適用する。適用済みのマイグレーションはスキップされるため冪等。
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), InfraError> {
    sqlx::migrate!("../../migrations").run(pool).await?;
    Ok(())
}

/// データベースへの疎通を確認する
///
/// Readiness Check から使用する。
#[tracing::instrument(skip_all, level = "debug")]
pub async fn ping(pool: &SqlitePool) -> Result<(), InfraError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
