//! 未定義ルートのフォールバック

use axum::{
    Json,
    http::{StatusCode, Uri},
    response::IntoResponse,
};
use notes_shared::ErrorResponse;

/// 未定義のルートに 404 の Problem Details を返す
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::not_found(format!(
            "{} は存在しません",
            uri.path()
        ))),
    )
}
