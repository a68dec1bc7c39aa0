//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュールで re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、整形ロジックは shared クレートに委譲
//!
//! ## ハンドラ一覧
//!
//! - `health`: ヘルスチェック
//! - `quran`: クルアーン一覧・ページ取得

pub mod health;
pub mod quran;

pub use health::health_check;
pub use quran::{QuranState, get_quran_page, list_quran};
