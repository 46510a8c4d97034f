//! # NoteRepository
//!
//! ノートの永続化を担当するリポジトリ。
//!
//! ## save の分割
//!
//! 「ID が無ければ採番して挿入、あれば上書き」という汎用 `save` を、
//! 型で区別できる 2 つの操作に分けている:
//!
//! - [`insert`](NoteRepository::insert): [`NewNote`] を受け取り、ID を採番して返す
//! - [`update`](NoteRepository::update): [`Note`] を上書きする。行が無ければ `None`
//!   （挿入はしない）

use async_trait::async_trait;
use notes_domain::note::{NewNote, Note, NoteId};
use sqlx::PgPool;

use crate::error::InfraError;

/// ノートリポジトリトレイト
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// 全ノートを ID 昇順で取得する
    async fn find_all(&self) -> Result<Vec<Note>, InfraError>;

    /// ID でノートを検索する
    async fn find_by_id(&self, id: &NoteId) -> Result<Option<Note>, InfraError>;

    /// ノートを挿入し、採番された ID を含むノートを返す
    ///
    /// 採番される ID は過去に使われたことのない値（削除済みの ID も再利用しない）。
    async fn insert(&self, note: &NewNote) -> Result<Note, InfraError>;

    /// ノートのタイトルと本文を上書きする
    ///
    /// 対象の行が存在しない場合は `None` を返し、新しい行は作らない。
    async fn update(&self, note: &Note) -> Result<Option<Note>, InfraError>;

    /// ノートを削除する
    ///
    /// 存在しない ID を指定してもエラーにしない。
    async fn delete_by_id(&self, id: &NoteId) -> Result<(), InfraError>;
}

/// `notes` テーブルの 1 行
#[derive(Debug, sqlx::FromRow)]
struct NoteRow {
    id:      i64,
    title:   String,
    content: String,
}

impl From<NoteRow> for Note {
    fn from(row: NoteRow) -> Self {
        Note::from_db(NoteId::from_i64(row.id), row.title, row.content)
    }
}

/// PostgreSQL 実装の NoteRepository
#[derive(Debug, Clone)]
pub struct PostgresNoteRepository {
    pool: PgPool,
}

impl PostgresNoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteRepository for PostgresNoteRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Note>, InfraError> {
        let rows = sqlx::query_as::<_, NoteRow>(
            r#"
            SELECT id, title, content
            FROM notes
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Note::from).collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: &NoteId) -> Result<Option<Note>, InfraError> {
        let row = sqlx::query_as::<_, NoteRow>(
            r#"
            SELECT id, title, content
            FROM notes
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Note::from))
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, note: &NewNote) -> Result<Note, InfraError> {
        let row = sqlx::query_as::<_, NoteRow>(
            r#"
            INSERT INTO notes (title, content)
            VALUES ($1, $2)
            RETURNING id, title, content
            "#,
        )
        .bind(note.title())
        .bind(note.content())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %note.id()))]
    async fn update(&self, note: &Note) -> Result<Option<Note>, InfraError> {
        let row = sqlx::query_as::<_, NoteRow>(
            r#"
            UPDATE notes
            SET title = $2, content = $3
            WHERE id = $1
            RETURNING id, title, content
            "#,
        )
        .bind(note.id().as_i64())
        .bind(note.title())
        .bind(note.content())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Note::from))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete_by_id(&self, id: &NoteId) -> Result<(), InfraError> {
        sqlx::query(
            r#"
            DELETE FROM notes
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_トレイトはsendとsyncを実装している() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PostgresNoteRepository>();
        assert_send_sync::<Box<dyn NoteRepository>>();
    }

    #[test]
    fn test_行からノートに変換できる() {
        let row = NoteRow {
            id:      3,
            title:   "A".to_string(),
            content: "B".to_string(),
        };

        let note = Note::from(row);

        assert_eq!(note, Note::from_db(NoteId::from_i64(3), "A", "B"));
    }
}
