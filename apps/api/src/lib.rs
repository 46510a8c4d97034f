//! # Notes API サーバー
//!
//! ノートの作成・取得・更新・削除を提供する REST API。
//!
//! ## アーキテクチャ
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Client    │────▶│   handler   │────▶│   usecase   │────▶│ repository  │
//! │   (HTTP)    │     │ (axum/JSON) │     │             │     │ (PG / mem)  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## モジュール構成
//!
//! - [`app_builder`] - State の組み立てとルーター構築
//! - [`config`] - アプリケーション設定（環境変数からの読み込み）
//! - [`error`] - API エラー定義と HTTP レスポンスへの変換
//! - [`handler`] - HTTP リクエストハンドラ
//! - [`usecase`] - ノート操作のユースケース
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use notes_api::{app_builder::build_app, handler::ReadinessState};
//! use notes_infra::repository::InMemoryNoteRepository;
//!
//! let app = build_app(
//!     Arc::new(InMemoryNoteRepository::new()),
//!     Arc::new(ReadinessState { pool: None }),
//! );
//! ```

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
