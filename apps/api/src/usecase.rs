//! # ユースケース層
//!
//! ノート操作をリポジトリ呼び出しに変換する。
//!
//! - **依存性注入**: リポジトリを `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: ハンドラは HTTP との変換だけを行い、ストレージ操作はここに集約

pub mod note;

pub use note::NoteUseCaseImpl;
