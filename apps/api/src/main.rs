//! # Notes API サーバー
//!
//! ノートの CRUD を提供する HTTP サーバーのエントリーポイント。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `NOTES_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `NOTES_PORT` | No | ポート番号（デフォルト: `8080`） |
//! | `NOTES_STORE` | No | `postgres`（デフォルト）または `memory` |
//! | `DATABASE_URL` | `postgres` のとき **Yes** | PostgreSQL 接続 URL |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # DB なしで起動（データは再起動で消える）
//! NOTES_STORE=memory cargo run -p notes-api
//!
//! # PostgreSQL を使用
//! DATABASE_URL=postgres://... cargo run -p notes-api --release
//! ```

use std::sync::Arc;

use anyhow::Context as _;
use notes_api::{
    app_builder::build_app,
    config::{NotesConfig, StoreKind},
    handler::ReadinessState,
};
use notes_infra::{
    db,
    repository::{InMemoryNoteRepository, NoteRepository, PostgresNoteRepository},
};
use notes_shared::observability::TracingConfig;
use tokio::net::TcpListener;

/// Notes API サーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. リポジトリの初期化（PostgreSQL の場合は接続とマイグレーション）
/// 5. ルーターの構築と HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let tracing_config = TracingConfig::from_env("notes-api");
    notes_shared::observability::init_tracing(&tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = "notes-api").entered();

    // 設定読み込み
    let config = NotesConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        store = ?config.store,
        "Notes API サーバーを起動します: {}",
        config.bind_address()
    );

    // リポジトリの初期化
    let (note_repository, readiness_state) = match &config.database {
        Some(database) => {
            let pool = db::create_pool(&database.url, database.max_connections)
                .await
                .context("データベース接続に失敗しました")?;
            tracing::info!("データベースに接続しました");

            db::run_migrations(&pool)
                .await
                .context("マイグレーションの適用に失敗しました")?;
            tracing::info!("マイグレーションを適用しました");

            let repository: Arc<dyn NoteRepository> =
                Arc::new(PostgresNoteRepository::new(pool.clone()));
            (repository, ReadinessState { pool: Some(pool) })
        }
        None => {
            debug_assert_eq!(config.store, StoreKind::Memory);
            tracing::warn!("インメモリストアで起動します（再起動でデータは失われます）");
            let repository: Arc<dyn NoteRepository> = Arc::new(InMemoryNoteRepository::new());
            (repository, ReadinessState { pool: None })
        }
    };

    let app = build_app(note_repository, Arc::new(readiness_state));

    // サーバー起動
    let listener = TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("{} へのバインドに失敗しました", config.bind_address()))?;
    tracing::info!("Notes API サーバーが起動しました: {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Notes API サーバーを停止しました");
    Ok(())
}

/// Ctrl-C または SIGTERM を待つ
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Ctrl-C ハンドラの登録に失敗しました");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "SIGTERM ハンドラの登録に失敗しました");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("シャットダウンシグナルを受信しました");
}
