//! # Notes API エラー定義
//!
//! ハンドラから返されるエラーと、HTTP レスポンスへの変換を定義する。
//!
//! 「見つからない」はエラーではなく `None`（JSON `null`）で表すため、
//! ここに現れるのはストレージ障害のみ。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use notes_infra::InfraError;
use notes_shared::ErrorResponse;
use thiserror::Error;

/// Notes API で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
    /// データベースエラー
    #[error("データベースエラー: {0}")]
    Database(#[from] InfraError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match &self {
            ApiError::Database(e) => {
                tracing::error!(
                    error.category = "infrastructure",
                    error.kind = "database",
                    span_trace = %e.span_trace(),
                    "データベースエラー: {e}"
                );
                ErrorResponse::internal_error()
            }
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn test_データベースエラーは内部情報を含まない500になる() {
        let error = ApiError::from(InfraError::unexpected("connection refused at 10.0.0.5"));

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], 500);
        assert_eq!(body["detail"], "内部エラーが発生しました");
        assert!(!body.to_string().contains("10.0.0.5"));
    }
}
