//! # Mushaf ゲートウェイサーバー
//!
//! GlobalQuran API を仲介する HTTP ゲートウェイ。
//!
//! ## 役割
//!
//! ゲートウェイはクライアントと GlobalQuran API の間に位置し、
//! 以下の責務を担う:
//!
//! - **レスポンス最適化**: キー付きマッピングを `id` 付きリストへ整形
//! - **ページネーション**: 一覧全体からのページ切り出しとメタデータ付与
//! - **エラー遮蔽**: アップストリームの失敗を固定メッセージの 500 に変換
//!
//! ## アーキテクチャ
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌───────────────┐
//! │   Client     │────▶│   Gateway    │────▶│  GlobalQuran  │
//! │              │     │  port: 5000  │     │      API      │
//! └──────────────┘     └──────────────┘     └───────────────┘
//! ```
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `GATEWAY_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `PORT` | No | ポート番号（デフォルト: `5000`） |
//! | `GLOBAL_QURAN_API_KEY` | **Yes** | GlobalQuran API の API キー |
//! | `GLOBAL_QURAN_BASE_URL` | No | アップストリームのベース URL |
//! | `LOG_FORMAT` | No | ログ出力形式（`json` / `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用）
//! cargo run -p mushaf-gateway
//!
//! # 本番環境（環境変数を直接指定）
//! PORT=5000 GLOBAL_QURAN_API_KEY=... cargo run -p mushaf-gateway --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use mushaf_gateway::{
    app_builder::build_app,
    client::{GlobalQuranClient, GlobalQuranClientImpl},
    config::GatewayConfig,
};
use mushaf_shared::observability::TracingConfig;
use tokio::net::TcpListener;

/// ゲートウェイサーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. ルーターの構築
/// 5. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    // 本番環境では .env ファイルは使用せず、環境変数を直接設定する
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let tracing_config = TracingConfig::from_env("gateway");
    mushaf_shared::observability::init_tracing(tracing_config);
    let _app_span = tracing::info_span!("app", service = "gateway").entered();

    // 設定読み込み
    let config = GatewayConfig::from_env().expect("設定の読み込みに失敗しました");

    tracing::info!(
        "ゲートウェイサーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    // アップストリームクライアントの初期化
    let quran_client: Arc<dyn GlobalQuranClient> =
        Arc::new(GlobalQuranClientImpl::new(&config.base_url, &config.api_key));

    // ルーター構築
    let app = build_app(quran_client);

    // サーバー起動
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("アドレスのパースに失敗しました");

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("ゲートウェイサーバーが起動しました: {}", addr);

    // Graceful shutdown は axum::serve が自動的に処理する
    axum::serve(listener, app).await?;

    Ok(())
}
