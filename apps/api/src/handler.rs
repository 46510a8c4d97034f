//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## モジュール構成
//!
//! ```text
//! handler.rs          # 親モジュール（re-export）
//! └── handler/
//!     ├── fallback.rs # 未定義ルート
//!     ├── health.rs   # ヘルスチェック
//!     └── note.rs     # ノート CRUD
//! ```

pub mod fallback;
pub mod health;
pub mod note;

pub use fallback::not_found;
pub use health::{ReadinessState, health_check, readiness_check};
pub use note::{
    NoteDto,
    NoteRequest,
    NoteState,
    create_note,
    delete_note,
    get_note,
    list_notes,
    update_note,
};
