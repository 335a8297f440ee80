//! # Goal Service サーバー
//!
//! 個人目標（タイトル・説明・ステータス）を管理する HTTP API。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `GOAL_SERVICE_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `GOAL_SERVICE_PORT` | No | ポート番号（デフォルト: `5000`） |
//! | `DATABASE_URL` | No | SQLite 接続 URL（デフォルト: `sqlite://goals.db`） |
//! | `CORS_ALLOWED_ORIGINS` | No | 許可オリジン（デフォルト: `*`） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p horizon-goal-service
//!
//! GOAL_SERVICE_PORT=8080 DATABASE_URL=sqlite:///var/lib/horizon/goals.db \
//!     cargo run -p horizon-goal-service --release
//! ```

use std::sync::Arc;

use anyhow::Context as _;
use horizon_goal_service::{app_builder::build_app, config::GoalServiceConfig};
use horizon_infra::{db, repository::SqliteGoalRepository};
use horizon_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("goal-service");
    init_tracing(&tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = "goal-service").entered();

    let config = GoalServiceConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        "Goal Service サーバーを起動します: {}",
        config.bind_address()
    );

    let pool = db::create_pool(&config.database_url)
        .await
        .context("データベース接続に失敗しました")?;
    tracing::info!("データベースに接続しました");

    db::run_migrations(&pool)
        .await
        .context("マイグレーションの適用に失敗しました")?;
    tracing::info!("マイグレーションを適用しました");

    let goal_repository = Arc::new(SqliteGoalRepository::new(pool.clone()));
    let app = build_app(goal_repository, pool, &config.cors_origins);

    let listener = TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("{} へのバインドに失敗しました", config.bind_address()))?;
    tracing::info!(
        "Goal Service サーバーが起動しました: {}",
        listener.local_addr()?
    );

    axum::serve(listener, app).await.context("サーバーが異常終了しました")?;

    Ok(())
}
