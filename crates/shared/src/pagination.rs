//! # ページネーション（ウィンドウイング）
//!
//! 取得済みの一覧に対するオフセットベースのページネーションを提供する。
//!
//! アップストリーム API は一覧全体を一括で返すため、ページ切り出しは
//! ゲートウェイ側で行う。`page` / `limit` はクエリ文字列から
//! [`PageRequest::from_query`] でパースし、[`paginate`] でウィンドウと
//! メタデータを計算する。

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// `page` のデフォルト値
pub const DEFAULT_PAGE: u32 = 1;

/// `limit` のデフォルト値
pub const DEFAULT_LIMIT: u32 = 10;

/// ページネーションのバリデーションエラー
///
/// メッセージはそのままレスポンスボディの `error` フィールドに載るため
/// 英語で記述する。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
   /// `page` が 0 以下
   #[error("page must be a positive integer")]
   NonPositivePage,

   /// `limit` が 0 以下
   #[error("limit must be a positive integer")]
   NonPositiveLimit,
}

/// 検証済みのページリクエスト
///
/// 構築経路が [`PageRequest::from_query`]（または [`Default`]）に限られる
/// ため、`page >= 1` と `limit >= 1` が常に成り立つ。`total_pages` の計算で
/// ゼロ除算が起きないのはこの不変条件による。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
   pub page:  u32,
   pub limit: u32,
}

impl Default for PageRequest {
   fn default() -> Self {
      Self {
         page:  DEFAULT_PAGE,
         limit: DEFAULT_LIMIT,
      }
   }
}

impl PageRequest {
   /// クエリ文字列の生値からページリクエストを構築する
   ///
   /// - 未指定、または整数としてパースできない値 → デフォルト
   ///   （page=1 / limit=10）
   /// - パースできたが 0 以下 → [`PaginationError`]
   pub fn from_query(page: Option<&str>, limit: Option<&str>) -> Result<Self, PaginationError> {
      let page =
         parse_positive_or_default(page, DEFAULT_PAGE).ok_or(PaginationError::NonPositivePage)?;
      let limit = parse_positive_or_default(limit, DEFAULT_LIMIT)
         .ok_or(PaginationError::NonPositiveLimit)?;

      Ok(Self { page, limit })
   }
}

/// 生値を正の整数としてパースする
///
/// 未指定・非整数はデフォルト値、0 以下は `None`（バリデーションエラー）。
fn parse_positive_or_default(raw: Option<&str>, default: u32) -> Option<u32> {
   let Some(raw) = raw else {
      return Some(default);
   };
   match raw.trim().parse::<i64>() {
      Err(_) => Some(default),
      Ok(value) if value <= 0 => None,
      Ok(value) => Some(u32::try_from(value).unwrap_or(u32::MAX)),
   }
}

/// ページネーションメタデータ
///
/// JSON 形式（キーは camelCase）:
///
/// ```json
/// { "total": 25, "currentPage": 1, "totalPages": 3, "limit": 10 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PaginationMeta {
   pub total:        usize,
   pub current_page: u32,
   pub total_pages:  usize,
   pub limit:        u32,
}

/// ページ切り出しの結果
#[derive(Debug, Clone, PartialEq)]
pub struct PageWindow<T> {
   pub items:      Vec<T>,
   pub pagination: PaginationMeta,
}

/// 一覧からページウィンドウを切り出す
///
/// `[(page-1)*limit, page*limit)` の範囲を一覧の境界にクランプして
/// 切り出す。範囲外のページはエラーではなく空のウィンドウになる。
/// `total_pages` は `ceil(total / limit)`（total が 0 のときは 0）。
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> PageWindow<T> {
   let total = items.len();
   let limit = request.limit as usize;
   let start = (request.page as usize).saturating_sub(1).saturating_mul(limit);

   let items: Vec<T> = items.into_iter().skip(start).take(limit).collect();

   PageWindow {
      items,
      pagination: PaginationMeta {
         total,
         current_page: request.page,
         total_pages: total.div_ceil(limit),
         limit: request.limit,
      },
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   // ===== PageRequest::from_query テスト =====

   #[test]
   fn test_from_query_未指定でデフォルト値を返す() {
      let request = PageRequest::from_query(None, None).unwrap();

      assert_eq!(request, PageRequest { page: 1, limit: 10 });
      assert_eq!(request, PageRequest::default());
   }

   #[test]
   fn test_from_query_指定値をそのまま使う() {
      let request = PageRequest::from_query(Some("3"), Some("25")).unwrap();

      assert_eq!(request, PageRequest { page: 3, limit: 25 });
   }

   #[test]
   fn test_from_query_整数でない値はデフォルトにフォールバックする() {
      let request = PageRequest::from_query(Some("abc"), Some("1.5")).unwrap();

      assert_eq!(request, PageRequest { page: 1, limit: 10 });
   }

   #[test]
   fn test_from_query_ゼロのpageはエラー() {
      let result = PageRequest::from_query(Some("0"), None);

      assert_eq!(result, Err(PaginationError::NonPositivePage));
   }

   #[test]
   fn test_from_query_負のlimitはエラー() {
      let result = PageRequest::from_query(None, Some("-3"));

      assert_eq!(result, Err(PaginationError::NonPositiveLimit));
   }

   // ===== paginate テスト =====

   fn numbers(n: usize) -> Vec<usize> {
      (0..n).collect()
   }

   #[test]
   fn test_paginate_先頭ページを切り出す() {
      let window = paginate(numbers(25), PageRequest { page: 1, limit: 10 });

      assert_eq!(window.items, (0..10).collect::<Vec<_>>());
      assert_eq!(
         window.pagination,
         PaginationMeta {
            total:        25,
            current_page: 1,
            total_pages:  3,
            limit:        10,
         }
      );
   }

   #[test]
   fn test_paginate_端数の最終ページを切り出す() {
      let window = paginate(numbers(25), PageRequest { page: 3, limit: 10 });

      assert_eq!(window.items, (20..25).collect::<Vec<_>>());
      assert_eq!(window.pagination.total_pages, 3);
   }

   #[test]
   fn test_paginate_範囲外のページは空ウィンドウ() {
      let window = paginate(numbers(25), PageRequest { page: 4, limit: 10 });

      assert!(window.items.is_empty());
      assert_eq!(window.pagination.total, 25);
      assert_eq!(window.pagination.current_page, 4);
   }

   #[test]
   fn test_paginate_空の一覧はtotal_pagesが0() {
      let window = paginate(Vec::<usize>::new(), PageRequest::default());

      assert!(window.items.is_empty());
      assert_eq!(window.pagination.total, 0);
      assert_eq!(window.pagination.total_pages, 0);
   }

   #[test]
   fn test_paginate_ちょうど割り切れる場合のtotal_pages() {
      let window = paginate(numbers(20), PageRequest { page: 2, limit: 10 });

      assert_eq!(window.items.len(), 10);
      assert_eq!(window.pagination.total_pages, 2);
   }

   #[test]
   fn test_paginate_巨大なpageでもオーバーフローしない() {
      let window = paginate(numbers(5), PageRequest {
         page:  u32::MAX,
         limit: u32::MAX,
      });

      assert!(window.items.is_empty());
      assert_eq!(window.pagination.total_pages, 1);
   }

   #[test]
   fn test_paginate_ウィンドウ長の恒等式() {
      // len(items) == min(limit, max(0, total - (page-1)*limit))
      let total = 10;
      for page in 1..=5u32 {
         for limit in 1..=4u32 {
            let window = paginate(numbers(total), PageRequest { page, limit });

            let expected = (total as i64 - (page as i64 - 1) * limit as i64)
               .clamp(0, limit as i64) as usize;
            assert_eq!(
               window.items.len(),
               expected,
               "page={page} limit={limit} で長さが一致すること"
            );
         }
      }
   }

   // ===== PaginationMeta テスト =====

   #[test]
   fn test_pagination_metaのserializeはcamelcase() {
      let meta = PaginationMeta {
         total:        25,
         current_page: 2,
         total_pages:  3,
         limit:        10,
      };
      let json = serde_json::to_value(&meta).unwrap();

      assert_eq!(
         json,
         serde_json::json!({
            "total": 25,
            "currentPage": 2,
            "totalPages": 3,
            "limit": 10
         })
      );
   }

   // ===== PaginationError テスト =====

   #[test]
   fn test_pagination_errorのメッセージ() {
      assert_eq!(
         PaginationError::NonPositivePage.to_string(),
         "page must be a positive integer"
      );
      assert_eq!(
         PaginationError::NonPositiveLimit.to_string(),
         "limit must be a positive integer"
      );
   }
}
