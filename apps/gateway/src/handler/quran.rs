//! # クルアーン API ハンドラ
//!
//! GlobalQuran API を仲介するエンドポイントを提供する。
//!
//! ## エンドポイント
//!
//! - `GET /quran/list` - クルアーン版カタログ（ページネーション付き）
//! - `GET /quran/page/{page_number}` - 指定ページの節一覧
//!
//! どちらも「パラメータ解析 → アップストリーム呼び出し → 整形 → 応答」の
//! 一本道で、失敗分岐はエラーレスポンスへの変換のみ。

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, Query, State},
   http::StatusCode,
   response::IntoResponse,
};
use mushaf_shared::{PageRequest, PaginationMeta, Record, paginate, to_record_list};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
   client::GlobalQuranClient,
   error::{
      log_upstream_error,
      page_not_found_response,
      quran_list_failed_response,
      quran_page_failed_response,
      validation_error_response,
   },
};

/// `edition` 未指定時のデフォルトエディション
pub const DEFAULT_EDITION: &str = "quran-simple";

/// クルアーン API の共有状態
pub struct QuranState {
   pub quran_client: Arc<dyn GlobalQuranClient>,
}

// --- クエリパラメータ ---

/// 一覧取得クエリパラメータ
///
/// 数値でない値をデフォルトへフォールバックさせるため、生の文字列で受けて
/// [`PageRequest::from_query`] でパースする。
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuranQuery {
   /// ページ番号（デフォルト 1）
   pub page:  Option<String>,
   /// 1 ページあたりの件数（デフォルト 10）
   pub limit: Option<String>,
}

/// ページ取得クエリパラメータ
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct QuranPageQuery {
   /// エディション名（デフォルト `quran-simple`）
   pub edition: Option<String>,
}

// --- レスポンス型 ---

/// 一覧取得レスポンス
#[derive(Debug, Serialize, ToSchema)]
pub struct QuranListData {
   /// 現在ページのレコード
   #[schema(value_type = Vec<Object>)]
   pub data:       Vec<Record>,
   /// ページネーションメタデータ
   pub pagination: PaginationMeta,
}

/// ページ取得レスポンス
#[derive(Debug, Serialize, ToSchema)]
pub struct QuranPageData {
   /// ページ番号
   pub page:    u32,
   /// エディション名
   pub edition: String,
   /// ページ内の節レコード
   #[schema(value_type = Vec<Object>)]
   pub verses:  Vec<Record>,
}

// --- ハンドラ ---

/// GET /quran/list
///
/// クルアーン版カタログを取得し、ページネーションして返す。
/// アップストリームは一覧全体を返すため、ページ切り出しはゲートウェイ側で
/// 行う。
#[utoipa::path(
   get,
   path = "/quran/list",
   tag = "quran",
   params(ListQuranQuery),
   responses(
      (status = 200, description = "カタログの 1 ページ", body = QuranListData),
      (status = 400, description = "ページネーションパラメータ不正", body = mushaf_shared::ErrorResponse),
      (status = 500, description = "アップストリーム呼び出し失敗", body = mushaf_shared::ErrorResponse)
   )
)]
pub async fn list_quran(
   State(state): State<Arc<QuranState>>,
   Query(query): Query<ListQuranQuery>,
) -> impl IntoResponse {
   let page_request =
      match PageRequest::from_query(query.page.as_deref(), query.limit.as_deref()) {
         Ok(request) => request,
         Err(e) => return validation_error_response(&e.to_string()),
      };

   match state.quran_client.quran_list().await {
      Ok(body) => {
         let records = to_record_list(body.quran_list);
         let window = paginate(records, page_request);

         let response = QuranListData {
            data:       window.items,
            pagination: window.pagination,
         };
         (StatusCode::OK, Json(response)).into_response()
      }
      Err(e) => {
         log_upstream_error("クルアーン一覧の取得", &e);
         quran_list_failed_response()
      }
   }
}

/// GET /quran/page/{page_number}
///
/// 指定ページの節一覧を取得する。アップストリームのレスポンスに
/// 該当エディションのマッピングがない場合は 404 を返す。
#[utoipa::path(
   get,
   path = "/quran/page/{page_number}",
   tag = "quran",
   params(
      ("page_number" = u32, Path, description = "ムスハフのページ番号"),
      QuranPageQuery
   ),
   responses(
      (status = 200, description = "ページ内の節一覧", body = QuranPageData),
      (status = 404, description = "ページまたはエディションが存在しない", body = mushaf_shared::ErrorResponse),
      (status = 500, description = "アップストリーム呼び出し失敗", body = mushaf_shared::ErrorResponse)
   )
)]
pub async fn get_quran_page(
   State(state): State<Arc<QuranState>>,
   Path(page_number): Path<u32>,
   Query(query): Query<QuranPageQuery>,
) -> impl IntoResponse {
   let edition = query.edition.unwrap_or_else(|| DEFAULT_EDITION.to_string());

   match state.quran_client.quran_page(page_number, &edition).await {
      Ok(body) => match body.verses_for(&edition) {
         Some(verses) => {
            let response = QuranPageData {
               page: page_number,
               edition,
               verses: to_record_list(verses),
            };
            (StatusCode::OK, Json(response)).into_response()
         }
         None => page_not_found_response(),
      },
      Err(e) => {
         log_upstream_error("クルアーンページの取得", &e);
         quran_page_failed_response()
      }
   }
}
