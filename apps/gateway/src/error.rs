//! # ゲートウェイエラーハンドリング
//!
//! HTTP API のエラーレスポンス定義と、axum レスポンスへの変換。
//!
//! 各ハンドラが共通で使うレスポンスヘルパーを集約する。内部のエラー詳細は
//! `tracing` のログにのみ出力し、クライアントへは固定メッセージだけを返す。

use std::any::Any;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mushaf_shared::ErrorResponse;

use crate::client::GlobalQuranError;

// --- レスポンスヘルパー ---

/// 一覧取得失敗レスポンス（500）
pub fn quran_list_failed_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("Failed to fetch Quran list")),
    )
        .into_response()
}

/// ページ取得失敗レスポンス（500）
pub fn quran_page_failed_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("Failed to fetch Quran page")),
    )
        .into_response()
}

/// ページが見つからないレスポンス（404）
pub fn page_not_found_response() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("Page not found")),
    )
        .into_response()
}

/// バリデーションエラーレスポンス（400）
pub fn validation_error_response(detail: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new(detail)),
    )
        .into_response()
}

/// アップストリームエラーをコンテキスト付きでログに出力する
///
/// レスポンスへの変換は呼び出し元がエンドポイント固有のヘルパーで行う
/// （500 のボディ文言がエンドポイントごとに異なるため）。
pub fn log_upstream_error(context: &str, err: &GlobalQuranError) {
    tracing::error!(
        error.category = "external_service",
        error.kind = "upstream",
        "{}で内部エラー: {}",
        context,
        err
    );
}

// --- プロセス全体のフォールバック ---

/// ハンドラの panic を汎用 500 レスポンスへ変換する
///
/// `CatchPanicLayer::custom` に渡して使う。捕捉漏れの異常はすべて
/// この 1 箇所で同じ形のレスポンスになる。
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    tracing::error!(error.category = "panic", "ハンドラが panic しました: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("Something went wrong!")),
    )
        .into_response()
}
