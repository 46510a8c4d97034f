//! # Notes インフラ層
//!
//! ノートの永続化を担当するストレージ層。
//!
//! ## 責務
//!
//! - **データベース接続**: PostgreSQL への接続プール管理とマイグレーション
//! - **リポジトリ実装**: [`NoteRepository`](repository::NoteRepository) の
//!   PostgreSQL 実装とインメモリ実装
//! - **エラー定義**: ストレージ障害を表す [`InfraError`]
//!
//! ## 依存関係
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`db`] - PostgreSQL 接続プール・マイグレーション・疎通確認
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリトレイトと実装
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use notes_infra::{db, repository::PostgresNoteRepository};
//!
//! let pool = db::create_pool("postgres://localhost/notes", 10).await?;
//! db::run_migrations(&pool).await?;
//! let repository = PostgresNoteRepository::new(pool);
//! ```

pub mod db;
pub mod error;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
