//! # Notes ドメイン層
//!
//! ノートのドメインモデルを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、HTTP）に一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`note`] - ノートエンティティと識別子
//!
//! ## 使用例
//!
//! ```rust
//! use notes_domain::note::{NewNote, Note, NoteId};
//!
//! let draft = NewNote::new("買い物", "牛乳と卵");
//! // ID はストレージ層が採番する
//! let note = Note::from_db(NoteId::from_i64(1), draft.title(), draft.content());
//! assert_eq!(note.id().as_i64(), 1);
//! ```

pub mod note;
