//! # リポジトリ
//!
//! ノートストレージの抽象（[`NoteRepository`]）とその実装を提供する。
//!
//! - [`PostgresNoteRepository`]: 本番用。sqlx で PostgreSQL にアクセスする
//! - [`InMemoryNoteRepository`]: テストおよび DB なしでの起動用

pub mod in_memory_note_repository;
pub mod note_repository;

pub use in_memory_note_repository::InMemoryNoteRepository;
pub use note_repository::{NoteRepository, PostgresNoteRepository};
