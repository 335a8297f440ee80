//! # Goal Service 設定
//!
//! 環境変数から Goal Service サーバーの設定を読み込む。
//!
//! | 変数名 | デフォルト | 説明 |
//! |--------|-----------|------|
//! | `GOAL_SERVICE_HOST` | `0.0.0.0` | バインドアドレス |
//! | `GOAL_SERVICE_PORT` | `5000` | ポート番号 |
//! | `DATABASE_URL` | `sqlite://goals.db` | SQLite 接続 URL |
//! | `CORS_ALLOWED_ORIGINS` | `*` | 許可するオリジン（`*` またはカンマ区切り） |

use std::env;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATABASE_URL: &str = "sqlite://goals.db";

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// ポート番号として解釈できない値
    #[error("GOAL_SERVICE_PORT は有効なポート番号である必要があります: {0}")]
    InvalidPort(String),
}

/// CORS で許可するオリジン
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// すべてのオリジンを許可
    Any,
    /// 列挙したオリジンのみ許可
    List(Vec<String>),
}

impl CorsOrigins {
    /// `*` またはカンマ区切りのオリジン列を解釈する
    ///
    /// 空要素は無視する。有効なオリジンが 1 つも無い場合は `Any` とみなす。
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value == "*" {
            return Self::Any;
        }

        let origins: Vec<String> = value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() {
            Self::Any
        } else {
            Self::List(origins)
        }
    }
}

/// Goal Service サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalServiceConfig {
    /// バインドアドレス
    pub host:         String,
    /// ポート番号
    pub port:         u16,
    /// データベース接続 URL
    pub database_url: String,
    /// CORS 許可オリジン
    pub cors_origins: CorsOrigins,
}

impl GoalServiceConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意の参照関数から設定を読み込む
    ///
    /// テストではプロセスの環境変数を書き換えずにクロージャで値を渡す。
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("GOAL_SERVICE_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: lookup("GOAL_SERVICE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            cors_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|v| CorsOrigins::parse(&v))
                .unwrap_or(CorsOrigins::Any),
        })
    }

    /// `host:port` 形式のバインドアドレス
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
