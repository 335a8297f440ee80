//! # Goal Service ライブラリ
//!
//! Goal Service の設定・ユースケース・ハンドラを公開する。
//! 統合テストから Router を組み立てられるよう、構築処理もここに置く。

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
