//! # アプリケーション構築
//!
//! DI（ユースケース・State）の初期化とルーター構築を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{Router, routing::get};
use notes_infra::repository::NoteRepository;
use notes_shared::{
    canonical_log::CanonicalLogLineLayer,
    observability::{MakeRequestUuidV7, make_request_span},
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    handler::{
        NoteState,
        ReadinessState,
        create_note,
        delete_note,
        get_note,
        health_check,
        list_notes,
        not_found,
        readiness_check,
        update_note,
    },
    usecase::NoteUseCaseImpl,
};

/// ノート API のパスプレフィックス
pub const API_PREFIX: &str = "/api";

/// DI コンテナの構築とルーター定義を行う
///
/// インフラ初期化済みの依存を受け取り、ユースケース → State → Router の
/// 順に組み立てる。
pub fn build_app(
    note_repository: Arc<dyn NoteRepository>,
    readiness_state: Arc<ReadinessState>,
) -> Router {
    let note_state = Arc::new(NoteState {
        usecase: NoteUseCaseImpl::new(note_repository),
    });

    let note_routes = Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route(
            "/notes/{id}",
            get(get_note).put(update_note).delete(delete_note),
        )
        .with_state(note_state);

    // 全オリジン・全メソッド・全ヘッダーを許可する
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .merge(
            Router::new()
                .route("/health/ready", get(readiness_check))
                .with_state(readiness_state),
        )
        .nest(API_PREFIX, note_routes)
        .fallback(not_found)
        .layer(cors)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(CanonicalLogLineLayer)
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
