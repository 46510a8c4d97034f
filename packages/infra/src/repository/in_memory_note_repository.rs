//! # InMemoryNoteRepository
//!
//! プロセス内のマップにノートを保持する [`NoteRepository`] 実装。
//! `NOTES_STORE=memory` での起動と、DB を使わないテストで使用する。
//!
//! ID は 1 から始まる単調増加のカウンタで採番し、削除済みの ID は再利用しない
//! （PostgreSQL の `BIGSERIAL` と同じ振る舞い）。

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard},
};

use async_trait::async_trait;
use notes_domain::note::{NewNote, Note, NoteId};

use super::NoteRepository;
use crate::error::InfraError;

#[derive(Debug, Default)]
struct State {
    notes:   BTreeMap<NoteId, Note>,
    last_id: i64,
}

/// インメモリ実装の NoteRepository
///
/// `Clone` したインスタンスは同じストアを共有する。
#[derive(Debug, Clone, Default)]
pub struct InMemoryNoteRepository {
    state: Arc<Mutex<State>>,
}

impl InMemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>, InfraError> {
        self.state
            .lock()
            .map_err(|_| InfraError::unexpected("インメモリストアのロックが汚染されています"))
    }
}

#[async_trait]
impl NoteRepository for InMemoryNoteRepository {
    async fn find_all(&self) -> Result<Vec<Note>, InfraError> {
        let state = self.lock()?;
        Ok(state.notes.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &NoteId) -> Result<Option<Note>, InfraError> {
        let state = self.lock()?;
        Ok(state.notes.get(id).cloned())
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, note: &NewNote) -> Result<Note, InfraError> {
        let mut state = self.lock()?;
        state.last_id += 1;
        let id = NoteId::from_i64(state.last_id);

        let created = Note::from_db(id, note.title(), note.content());
        state.notes.insert(id, created.clone());

        tracing::debug!(%id, "ノートを採番しました");
        Ok(created)
    }

    async fn update(&self, note: &Note) -> Result<Option<Note>, InfraError> {
        let mut state = self.lock()?;
        match state.notes.get_mut(&note.id()) {
            Some(stored) => {
                *stored = note.clone();
                Ok(Some(note.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: &NoteId) -> Result<(), InfraError> {
        let mut state = self.lock()?;
        state.notes.remove(id);
        Ok(())
    }
}
