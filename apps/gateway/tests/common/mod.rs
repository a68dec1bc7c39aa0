//! 統合テスト共通ヘルパー
//!
//! スタブクライアントとレスポンス検証ヘルパーを提供する。

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{Router, body::Body, http::StatusCode};
use mushaf_gateway::{
   app_builder::build_app,
   client::{GlobalQuranClient, GlobalQuranError, QuranListBody, QuranPageBody},
};
use serde_json::{Value, json};
use tower::ServiceExt;

/// 固定レスポンスを返すスタブクライアント
pub struct StubQuranClient {
   pub list: Result<QuranListBody, GlobalQuranError>,
   pub page: Result<QuranPageBody, GlobalQuranError>,
}

impl StubQuranClient {
   /// 両エンドポイントが常に失敗するスタブ
   pub fn failing() -> Self {
      Self {
         list: Err(GlobalQuranError::Network("connection refused".to_string())),
         page: Err(GlobalQuranError::Network("connection refused".to_string())),
      }
   }
}

#[async_trait]
impl GlobalQuranClient for StubQuranClient {
   async fn quran_list(&self) -> Result<QuranListBody, GlobalQuranError> {
      self.list.clone()
   }

   async fn quran_page(
      &self,
      _page_number: u32,
      _edition: &str,
   ) -> Result<QuranPageBody, GlobalQuranError> {
      self.page.clone()
   }
}

/// `n` 件のエントリを持つカタログレスポンスを作る
///
/// キーは `edition-000` 形式で挿入順に並ぶ。
pub fn catalog_body(n: usize) -> QuranListBody {
   let mut quran_list = serde_json::Map::new();
   for i in 0..n {
      quran_list.insert(
         format!("edition-{i:03}"),
         json!({ "name": format!("Edition {i}") }),
      );
   }
   QuranListBody { quran_list }
}

/// 指定エディションに `verses` 件の節を持つページレスポンスを作る
pub fn page_body(edition: &str, verses: usize) -> QuranPageBody {
   let mut verse_map = serde_json::Map::new();
   for i in 1..=verses {
      verse_map.insert(i.to_string(), json!({ "verse": format!("ayah {i}") }));
   }

   let mut quran = serde_json::Map::new();
   quran.insert(edition.to_string(), Value::Object(verse_map));
   QuranPageBody { quran: Some(quran) }
}

/// スタブクライアントからアプリケーションを構築する
pub fn test_app(client: StubQuranClient) -> Router {
   build_app(Arc::new(client))
}

/// GET リクエストを送り、ステータスと JSON ボディを返す
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
   let response = app
      .oneshot(
         http::Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
      )
      .await
      .unwrap();

   let status = response.status();
   let body = axum::body::to_bytes(response.into_body(), usize::MAX)
      .await
      .unwrap();
   let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
   (status, json)
}
