//! # ゲートウェイアプリケーション構築
//!
//! State の初期化とルーター構築を担当する。
//! `main.rs` は設定読み込みとサーバー起動に集中する。
//!
//! クライアントを引数で受け取るため、テストではスタブを注入して
//! ネットワークなしでルーター全体を検証できる。

use std::sync::Arc;

use axum::{Router, routing::get};
use mushaf_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    client::GlobalQuranClient,
    error::handle_panic,
    handler::{QuranState, get_quran_page, health_check, list_quran},
};

/// ルーター定義とミドルウェアの組み立てを行う
pub fn build_app(quran_client: Arc<dyn GlobalQuranClient>) -> Router {
    let quran_state = Arc::new(QuranState { quran_client });

    // ルーター構築
    // Request ID + TraceLayer により、すべての HTTP リクエストに request_id が付与されログに自動注入される
    Router::new()
        .route("/api/health", get(health_check))
        .route("/quran/list", get(list_quran))
        .route("/quran/page/{page_number}", get(get_quran_page))
        .with_state(quran_state)
        // レイヤー順序が重要: 下に書いたものが外側
        // 1. SetRequestIdLayer（最外）: リクエスト受信時に UUID v7 を生成（またはクライアント提供値を使用）
        // 2. TraceLayer: カスタムスパンに request_id を含め、全ログに自動注入
        // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
        // 4. CorsLayer: すべてのオリジンを許可
        // 5. CatchPanicLayer（最内）: 捕捉漏れの panic を汎用 500 に変換
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
