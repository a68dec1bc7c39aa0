//! # Request ID レイヤーのテスト
//!
//! ゲートウェイの Request ID レイヤー（SetRequestIdLayer +
//! PropagateRequestIdLayer + カスタム make_span_with）が正しく動作することを
//! 検証する。
//!
//! - レスポンスに `X-Request-Id` ヘッダーが含まれる
//! - クライアント提供の `X-Request-Id` がそのまま返される
//! - 自動生成の `X-Request-Id` が UUID v7 形式である

mod common;

use axum::{body::Body, http::StatusCode};
use common::{StubQuranClient, test_app};
use http::Request;
use tower::ServiceExt;

#[tokio::test]
async fn test_レスポンスにx_request_idヘッダーが含まれる() {
   let app = test_app(StubQuranClient::failing());

   let response = app
      .oneshot(
         Request::builder()
            .uri("/api/health")
            .body(Body::empty())
            .unwrap(),
      )
      .await
      .unwrap();

   assert_eq!(response.status(), StatusCode::OK);
   assert!(
      response.headers().contains_key("x-request-id"),
      "レスポンスに x-request-id ヘッダーが含まれること"
   );
}

#[tokio::test]
async fn test_クライアント提供のx_request_idがそのまま返される() {
   let app = test_app(StubQuranClient::failing());
   let custom_id = "client-provided-request-id-123";

   let response = app
      .oneshot(
         Request::builder()
            .uri("/api/health")
            .header("x-request-id", custom_id)
            .body(Body::empty())
            .unwrap(),
      )
      .await
      .unwrap();

   assert_eq!(response.status(), StatusCode::OK);
   assert_eq!(
      response
         .headers()
         .get("x-request-id")
         .unwrap()
         .to_str()
         .unwrap(),
      custom_id,
      "クライアント提供の Request ID がそのまま返されること"
   );
}

#[tokio::test]
async fn test_自動生成のx_request_idがuuid_v7形式である() {
   let app = test_app(StubQuranClient::failing());

   let response = app
      .oneshot(
         Request::builder()
            .uri("/api/health")
            .body(Body::empty())
            .unwrap(),
      )
      .await
      .unwrap();

   let request_id = response
      .headers()
      .get("x-request-id")
      .unwrap()
      .to_str()
      .unwrap();

   let uuid = uuid::Uuid::parse_str(request_id)
      .unwrap_or_else(|_| panic!("有効な UUID であること: {request_id}"));
   assert_eq!(
      uuid.get_version(),
      Some(uuid::Version::SortRand),
      "UUID v7（SortRand）であること"
   );
}
