//! # Mushaf ゲートウェイライブラリ
//!
//! GlobalQuran API を仲介するゲートウェイサーバーのコアモジュール。
//!
//! ## モジュール構成
//!
//! - `app_builder`: ルーター構築（テストからも利用する）
//! - `client`: 外部 API クライアント（GlobalQuran API）
//! - `config`: 環境変数からの設定読み込み
//! - `error`: エラーレスポンスへの変換
//! - `handler`: HTTP ハンドラ
//! - `openapi`: OpenAPI 仕様定義

pub mod app_builder;
pub mod client;
pub mod config;
pub mod error;
pub mod handler;
pub mod openapi;
