//! # Notes 共有ユーティリティ
//!
//! ワークスペース全体で使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - 他のクレート（domain, infra, api）から依存される
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum などの Web フレームワークには依存しない（`IntoResponse` 変換は api の責務）
//!
//! ## モジュール構成
//!
//! - [`error_response`] - RFC 9457 Problem Details 形式のエラーボディ
//! - [`health`] - ヘルスチェック / Readiness チェックのレスポンス型
//! - [`observability`] - トレーシング初期化、リクエストスパン、Request ID 生成
//! - `canonical_log` - リクエスト完了サマリログの tower Layer（`observability` feature）

#[cfg(feature = "observability")]
pub mod canonical_log;
pub mod error_response;
pub mod health;
pub mod observability;

pub use error_response::ErrorResponse;
pub use health::{CheckStatus, HealthResponse, ReadinessResponse, ReadinessStatus};
