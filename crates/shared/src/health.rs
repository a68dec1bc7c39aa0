//! # ヘルスチェック共通型
//!
//! ヘルスチェックエンドポイントが返すレスポンス型を提供する。

use serde::{Deserialize, Serialize};

/// ヘルスチェックレスポンス
///
/// ## 使用例
///
/// ```
/// use mushaf_shared::HealthResponse;
///
/// let response = HealthResponse {
///     status:  "ok".to_string(),
///     message: "Server is running".to_string(),
/// };
/// assert_eq!(response.status, "ok");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HealthResponse {
    /// 稼働状態（常に `"ok"`）
    pub status:  String,
    /// 人間向けの稼働メッセージ
    pub message: String,
}
