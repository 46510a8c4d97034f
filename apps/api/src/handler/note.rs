//! # ノートハンドラ
//!
//! ノートの CRUD API を提供する。
//!
//! ## エンドポイント
//!
//! - `GET /api/notes` - ノート一覧
//! - `GET /api/notes/{id}` - ノート取得（存在しなければ `null`）
//! - `POST /api/notes` - ノート作成
//! - `PUT /api/notes/{id}` - ノート更新（存在しなければ `null`）
//! - `DELETE /api/notes/{id}` - ノート削除（テキストで確認メッセージを返す）

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use notes_domain::note::{NewNote, Note, NoteId};
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, usecase::NoteUseCaseImpl};

/// ノート API の共有状態
pub struct NoteState {
    pub usecase: NoteUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// ノート作成・更新リクエスト
///
/// 欠けたフィールドは空文字列として扱う。`id` を含む未知のフィールドは無視する。
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NoteRequest {
    pub title:   String,
    pub content: String,
}

impl From<NoteRequest> for NewNote {
    fn from(req: NoteRequest) -> Self {
        NewNote::new(req.title, req.content)
    }
}

/// ノート DTO
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoteDto {
    pub id:      i64,
    pub title:   String,
    pub content: String,
}

impl From<Note> for NoteDto {
    fn from(note: Note) -> Self {
        Self {
            id:      note.id().as_i64(),
            title:   note.title().to_string(),
            content: note.content().to_string(),
        }
    }
}

// --- ハンドラ ---

/// GET /api/notes
#[tracing::instrument(skip_all)]
pub async fn list_notes(
    State(state): State<Arc<NoteState>>,
) -> Result<impl IntoResponse, ApiError> {
    let notes = state.usecase.list_notes().await?;

    let items: Vec<NoteDto> = notes.into_iter().map(NoteDto::from).collect();
    Ok((StatusCode::OK, Json(items)))
}

/// GET /api/notes/{id}
///
/// 存在しない場合も 200 で `null` を返す。
#[tracing::instrument(skip_all, fields(%id))]
pub async fn get_note(
    State(state): State<Arc<NoteState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let note = state.usecase.get_note(NoteId::from_i64(id)).await?;

    Ok((StatusCode::OK, Json(note.map(NoteDto::from))))
}

/// POST /api/notes
///
/// ## レスポンス
///
/// - `201 Created`: 採番された ID を含むノート
#[tracing::instrument(skip_all)]
pub async fn create_note(
    State(state): State<Arc<NoteState>>,
    Json(req): Json<NoteRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let note = state.usecase.create_note(req.into()).await?;

    Ok((StatusCode::CREATED, Json(NoteDto::from(note))))
}

/// PUT /api/notes/{id}
///
/// 存在しない場合は新規作成せず、200 で `null` を返す。
#[tracing::instrument(skip_all, fields(%id))]
pub async fn update_note(
    State(state): State<Arc<NoteState>>,
    Path(id): Path<i64>,
    Json(req): Json<NoteRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let note = state
        .usecase
        .update_note(NoteId::from_i64(id), req.into())
        .await?;

    Ok((StatusCode::OK, Json(note.map(NoteDto::from))))
}

/// DELETE /api/notes/{id}
///
/// 存在しない ID でも 200 を返す。
#[tracing::instrument(skip_all, fields(%id))]
pub async fn delete_note(
    State(state): State<Arc<NoteState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = state.usecase.delete_note(NoteId::from_i64(id)).await?;

    Ok((StatusCode::OK, format!("Note deleted with id: {deleted}")))
}
