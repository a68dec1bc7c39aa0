//! # エラーレスポンス
//!
//! 全エンドポイント共通のエラーレスポンス構造体を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換はゲートウェイ側の責務（shared に axum
//!   依存を入れない）
//! - ボディは `{ "error": "<メッセージ>" }` の 1 フィールドのみ。内部の
//!   エラー詳細はログに出し、レスポンスには固定メッセージだけを載せる

use serde::{Deserialize, Serialize};

/// エラーレスポンス
///
/// ## 使用例
///
/// ```
/// use mushaf_shared::ErrorResponse;
///
/// let response = ErrorResponse::new("Page not found");
/// assert_eq!(response.error, "Page not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
   pub error: String,
}

impl ErrorResponse {
   /// 新しい `ErrorResponse` を作成する
   pub fn new(message: impl Into<String>) -> Self {
      Self {
         error: message.into(),
      }
   }
}
