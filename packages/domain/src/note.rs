//! # ノート
//!
//! 唯一のドメインエンティティ。タイトルと本文を持つ。
//!
//! ## 2 つの状態
//!
//! - [`NewNote`]: まだ作成されていないノート。ID を持たない
//! - [`Note`]: 永続化済みのノート。ストレージ層が採番した [`NoteId`] を必ず持つ
//!
//! 「ID が無いのは未作成のノートだけ」という不変条件を、`Option<NoteId>` の
//! フィールドではなく型の分離で表現している。
//!
//! タイトル・本文に制約はない（空文字列も許容する）。

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// ノートの一意識別子
///
/// ストレージ層が作成時に採番する整数 ID。作成後は変化しない。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, From,
)]
#[serde(transparent)]
#[display("{_0}")]
pub struct NoteId(i64);

impl NoteId {
    /// 既存の整数値から ID を作成する（DB・パスパラメータからの復元用）
    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

/// 未作成のノート（作成・更新リクエストのペイロード）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    title:   String,
    content: String,
}

impl NewNote {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title:   title.into(),
            content: content.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// 永続化済みのノート
///
/// # 不変条件
///
/// - `id` は常に存在し、ストレージ内で一意
/// - [`revise`](Note::revise) は `id` を保持したままタイトルと本文だけを置き換える
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    id:      NoteId,
    title:   String,
    content: String,
}

impl Note {
    /// データベースの行からノートを復元する
    pub fn from_db(id: NoteId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn id(&self) -> NoteId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// タイトルと本文をペイロードの内容で置き換えた新しい状態を返す
    ///
    /// ID は変更されない。
    pub fn revise(self, changes: NewNote) -> Self {
        Self {
            id:      self.id,
            title:   changes.title,
            content: changes.content,
        }
    }
}
