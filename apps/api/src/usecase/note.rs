//! ノート管理ユースケース

use std::sync::Arc;

use notes_domain::note::{NewNote, Note, NoteId};
use notes_infra::repository::NoteRepository;

use crate::error::ApiError;

/// ノート管理ユースケース
///
/// 入力の検証は行わない（空のタイトル・本文も受け付ける）。
/// 失敗するのはストレージ層がエラーを返した場合のみ。
pub struct NoteUseCaseImpl {
    note_repository: Arc<dyn NoteRepository>,
}

impl NoteUseCaseImpl {
    pub fn new(note_repository: Arc<dyn NoteRepository>) -> Self {
        Self { note_repository }
    }

    /// ノート一覧を取得する（ID 昇順）
    pub async fn list_notes(&self) -> Result<Vec<Note>, ApiError> {
        let notes = self.note_repository.find_all().await?;
        Ok(notes)
    }

    /// ノートを取得する
    ///
    /// 存在しない場合は `None`（エラーではない）。
    pub async fn get_note(&self, id: NoteId) -> Result<Option<Note>, ApiError> {
        let note = self.note_repository.find_by_id(&id).await?;
        Ok(note)
    }

    /// ノートを作成する
    ///
    /// 同じ内容でも呼ぶたびに新しいノートが作られる。
    pub async fn create_note(&self, input: NewNote) -> Result<Note, ApiError> {
        let note = self.note_repository.insert(&input).await?;
        tracing::info!(note_id = %note.id(), "ノートを作成しました");
        Ok(note)
    }

    /// ノートのタイトルと本文を置き換える
    ///
    /// 1. 既存ノートを取得（無ければ `None`、新規作成はしない）
    /// 2. ID を保持したまま内容を置き換えて上書き
    ///
    /// 1 と 2 の間に別のリクエストで削除された場合も `None` を返す。
    pub async fn update_note(&self, id: NoteId, input: NewNote) -> Result<Option<Note>, ApiError> {
        let Some(existing) = self.note_repository.find_by_id(&id).await? else {
            return Ok(None);
        };

        let revised = existing.revise(input);
        let updated = self.note_repository.update(&revised).await?;
        Ok(updated)
    }

    /// ノートを削除する
    ///
    /// 存在しない ID でも成功扱いとし、指定された ID をそのまま返す。
    pub async fn delete_note(&self, id: NoteId) -> Result<NoteId, ApiError> {
        self.note_repository.delete_by_id(&id).await?;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use notes_infra::{InfraError, repository::InMemoryNoteRepository};
    use pretty_assertions::assert_eq;

    use super::*;

    fn sut_with(repository: InMemoryNoteRepository) -> NoteUseCaseImpl {
        NoteUseCaseImpl::new(Arc::new(repository))
    }

    /// 常に失敗するリポジトリ
    struct FailingNoteRepository;

    #[async_trait]
    impl NoteRepository for FailingNoteRepository {
        async fn find_all(&self) -> Result<Vec<Note>, InfraError> {
            Err(InfraError::unexpected("down"))
        }

        async fn find_by_id(&self, _id: &NoteId) -> Result<Option<Note>, InfraError> {
            Err(InfraError::unexpected("down"))
        }

        async fn insert(&self, _note: &NewNote) -> Result<Note, InfraError> {
            Err(InfraError::unexpected("down"))
        }

        async fn update(&self, _note: &Note) -> Result<Option<Note>, InfraError> {
            Err(InfraError::unexpected("down"))
        }

        async fn delete_by_id(&self, _id: &NoteId) -> Result<(), InfraError> {
            Err(InfraError::unexpected("down"))
        }
    }

    /// 検索には成功するが、上書き時には行が消えているリポジトリ（同時削除の再現）
    struct VanishingNoteRepository;

    #[async_trait]
    impl NoteRepository for VanishingNoteRepository {
        async fn find_all(&self) -> Result<Vec<Note>, InfraError> {
            Ok(Vec::new())
        }

        async fn find_by_id(&self, id: &NoteId) -> Result<Option<Note>, InfraError> {
            Ok(Some(Note::from_db(*id, "old", "old")))
        }

        async fn insert(&self, _note: &NewNote) -> Result<Note, InfraError> {
            Err(InfraError::unexpected("insert は呼ばれない想定"))
        }

        async fn update(&self, _note: &Note) -> Result<Option<Note>, InfraError> {
            Ok(None)
        }

        async fn delete_by_id(&self, _id: &NoteId) -> Result<(), InfraError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_create_noteは採番されたノートを返しget_noteで取得できる() {
        // Given
        let sut = sut_with(InMemoryNoteRepository::new());

        // When
        let created = sut.create_note(NewNote::new("A", "B")).await.unwrap();

        // Then
        assert_eq!(created, Note::from_db(NoteId::from_i64(1), "A", "B"));
        assert_eq!(sut.get_note(created.id()).await.unwrap(), Some(created));
    }

    #[tokio::test]
    async fn test_存在しないノートのget_noteはnoneを返す() {
        let sut = sut_with(InMemoryNoteRepository::new());

        let found = sut.get_note(NoteId::from_i64(1)).await.unwrap();

        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn test_update_noteはidを保持して内容を置き換える() {
        // Given
        let sut = sut_with(InMemoryNoteRepository::new());
        let created = sut.create_note(NewNote::new("A", "B")).await.unwrap();

        // When
        let updated = sut
            .update_note(created.id(), NewNote::new("C", "D"))
            .await
            .unwrap();

        // Then
        let expected = Note::from_db(created.id(), "C", "D");
        assert_eq!(updated, Some(expected.clone()));
        assert_eq!(sut.get_note(created.id()).await.unwrap(), Some(expected));
    }

    #[tokio::test]
    async fn test_存在しないノートのupdate_noteはnoneを返し作成もしない() {
        // Given
        let sut = sut_with(InMemoryNoteRepository::new());
        sut.create_note(NewNote::new("A", "B")).await.unwrap();

        // When
        let updated = sut
            .update_note(NoteId::from_i64(99), NewNote::new("C", "D"))
            .await
            .unwrap();

        // Then
        assert_eq!(updated, None);
        assert_eq!(sut.list_notes().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_更新直前に削除されたノートのupdate_noteはnoneを返す() {
        let sut = NoteUseCaseImpl::new(Arc::new(VanishingNoteRepository));

        let updated = sut
            .update_note(NoteId::from_i64(1), NewNote::new("C", "D"))
            .await
            .unwrap();

        assert_eq!(updated, None);
    }

    #[tokio::test]
    async fn test_delete_noteは存在有無にかかわらず指定idを返す() {
        // Given
        let sut = sut_with(InMemoryNoteRepository::new());
        let created = sut.create_note(NewNote::new("A", "B")).await.unwrap();

        // When
        let deleted = sut.delete_note(created.id()).await.unwrap();
        let deleted_again = sut.delete_note(created.id()).await.unwrap();

        // Then
        assert_eq!(deleted, created.id());
        assert_eq!(deleted_again, created.id());
        assert_eq!(sut.get_note(created.id()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_notesの件数は作成数から削除数を引いた数になる() {
        // Given
        let sut = sut_with(InMemoryNoteRepository::new());
        for i in 0..4 {
            sut.create_note(NewNote::new(format!("t{i}"), "")).await.unwrap();
        }

        // When
        sut.delete_note(NoteId::from_i64(2)).await.unwrap();
        sut.delete_note(NoteId::from_i64(100)).await.unwrap();

        // Then
        let ids: Vec<i64> = sut
            .list_notes()
            .await
            .unwrap()
            .iter()
            .map(|n| n.id().as_i64())
            .collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[tokio::test]
    async fn test_ストレージ障害はdatabaseエラーとして伝播する() {
        let sut = NoteUseCaseImpl::new(Arc::new(FailingNoteRepository));

        assert!(matches!(sut.list_notes().await, Err(ApiError::Database(_))));
        assert!(matches!(
            sut.get_note(NoteId::from_i64(1)).await,
            Err(ApiError::Database(_))
        ));
        assert!(matches!(
            sut.create_note(NewNote::new("A", "B")).await,
            Err(ApiError::Database(_))
        ));
        assert!(matches!(
            sut.update_note(NoteId::from_i64(1), NewNote::new("A", "B")).await,
            Err(ApiError::Database(_))
        ));
        assert!(matches!(
            sut.delete_note(NoteId::from_i64(1)).await,
            Err(ApiError::Database(_))
        ));
    }
}
