//! # ヘルスチェックハンドラ
//!
//! ゲートウェイの稼働状態を確認するためのエンドポイント。
//! アップストリームへの呼び出しは行わず、常に 200 を返す。

use axum::Json;
use mushaf_shared::HealthResponse;

/// ゲートウェイのヘルスチェックエンドポイント
#[utoipa::path(
   get,
   path = "/api/health",
   tag = "health",
   responses(
      (status = 200, description = "サーバー稼働中", body = HealthResponse)
   )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status:  "ok".to_string(),
        message: "Server is running".to_string(),
    })
}
