//! # OpenAPI 仕様定義
//!
//! utoipa を使用してゲートウェイの OpenAPI 仕様を Rust の型から自動生成する。
//! `ApiDoc::openapi()` で OpenAPI ドキュメントを取得できる。

use utoipa::OpenApi;

use crate::handler::{health, quran};

#[derive(OpenApi)]
#[openapi(
   info(
      title = "Mushaf Gateway API",
      version = "0.1.0",
      description = "GlobalQuran API を仲介するゲートウェイの API"
   ),
   paths(
      // health
      health::health_check,
      // quran
      quran::list_quran,
      quran::get_quran_page,
   ),
   components(schemas(
      mushaf_shared::ErrorResponse,
      mushaf_shared::HealthResponse,
   )),
   tags(
      (name = "health", description = "ヘルスチェック"),
      (name = "quran", description = "クルアーンカタログ・ページ取得"),
   )
)]
pub struct ApiDoc;
