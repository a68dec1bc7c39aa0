//! # GlobalQuran API クライアント
//!
//! アップストリームの GlobalQuran API への通信を担当する。
//!
//! ## エンドポイント
//!
//! - `GET /quran` - 利用可能なクルアーン版の一覧（カタログ）
//! - `GET /page/{page_number}/{edition}` - 指定ページの節一覧
//!
//! いずれも API キーをクエリパラメータとして付与する。リトライや
//! サーキットブレーカーは持たず、1 リクエストにつき 1 回だけ呼び出す。

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// アップストリームが要求する API キーのクエリパラメータ名
///
/// GlobalQuran API は空白入りの `API Key` という名前を要求する。
/// URL エンコードは reqwest に任せる。
const API_KEY_PARAM: &str = "API Key";

/// アップストリーム呼び出しのタイムアウト
///
/// アップストリームが応答しない場合にリクエストを無期限に
/// 抱え込まないための上限。
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// GlobalQuran クライアントエラー
#[derive(Debug, Clone, Error)]
pub enum GlobalQuranError {
   /// ネットワークエラー（接続失敗・タイムアウト・ボディのパース失敗）
   #[error("ネットワークエラー: {0}")]
   Network(String),

   /// 予期しないエラー（非 2xx ステータス）
   #[error("予期しないエラー: {0}")]
   Unexpected(String),
}

impl From<reqwest::Error> for GlobalQuranError {
   fn from(err: reqwest::Error) -> Self {
      GlobalQuranError::Network(err.to_string())
   }
}

// --- レスポンス型 ---

/// `GET /quran` のレスポンスボディ
///
/// `quranList` はクルアーン版 ID をキーとするマッピング。
/// 値の中身は検証せず、そのまま通す。
#[derive(Debug, Clone, Deserialize)]
pub struct QuranListBody {
   #[serde(rename = "quranList")]
   pub quran_list: Map<String, Value>,
}

/// `GET /page/{page_number}/{edition}` のレスポンスボディ
///
/// `quran` はエディション名をキーとし、その下に節 ID → 節オブジェクトの
/// マッピングを持つ。ページやエディションが存在しない場合、アップストリームは
/// エラーではなく該当フィールドを欠いたボディを返すことがあるため、
/// `quran` は Option で受ける。
#[derive(Debug, Clone, Deserialize)]
pub struct QuranPageBody {
   #[serde(default)]
   pub quran: Option<Map<String, Value>>,
}

impl QuranPageBody {
   /// 指定エディションの節マッピングを取り出す
   ///
   /// `quran` フィールド自体がない、エディションのキーがない、または値が
   /// オブジェクトでない場合は `None`（= ページが見つからない）。
   pub fn verses_for(&self, edition: &str) -> Option<Map<String, Value>> {
      self.quran.as_ref()?.get(edition)?.as_object().cloned()
   }
}

// --- クライアント ---

/// GlobalQuran クライアントトレイト
///
/// テスト時にスタブを使用できるようトレイトで定義。
#[async_trait]
pub trait GlobalQuranClient: Send + Sync {
   /// クルアーン版カタログを取得する
   ///
   /// GlobalQuran API の `GET /quran` を呼び出す。
   async fn quran_list(&self) -> Result<QuranListBody, GlobalQuranError>;

   /// 指定ページの節一覧を取得する
   ///
   /// GlobalQuran API の `GET /page/{page_number}/{edition}` を呼び出す。
   async fn quran_page(
      &self,
      page_number: u32,
      edition: &str,
   ) -> Result<QuranPageBody, GlobalQuranError>;
}

/// GlobalQuran クライアント実装
#[derive(Clone)]
pub struct GlobalQuranClientImpl {
   base_url: String,
   api_key:  String,
   client:   reqwest::Client,
}

impl GlobalQuranClientImpl {
   /// 新しい GlobalQuranClient を作成する
   ///
   /// # 引数
   ///
   /// - `base_url`: GlobalQuran API のベース URL（例: `https://api.globalquran.com`）
   /// - `api_key`: API キー
   pub fn new(base_url: &str, api_key: &str) -> Self {
      Self {
         base_url: base_url.trim_end_matches('/').to_string(),
         api_key:  api_key.to_string(),
         client:   reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("HTTP クライアントの構築に失敗しました"),
      }
   }
}

#[async_trait]
impl GlobalQuranClient for GlobalQuranClientImpl {
   async fn quran_list(&self) -> Result<QuranListBody, GlobalQuranError> {
      let url = format!("{}/quran", self.base_url);

      let response = self
         .client
         .get(&url)
         .query(&[(API_KEY_PARAM, self.api_key.as_str())])
         .send()
         .await?;

      match response.status() {
         status if status.is_success() => {
            let body = response.json::<QuranListBody>().await?;
            Ok(body)
         }
         status => {
            let body = response.text().await.unwrap_or_default();
            Err(GlobalQuranError::Unexpected(format!(
               "予期しないステータス {}: {}",
               status, body
            )))
         }
      }
   }

   async fn quran_page(
      &self,
      page_number: u32,
      edition: &str,
   ) -> Result<QuranPageBody, GlobalQuranError> {
      let url = format!("{}/page/{}/{}", self.base_url, page_number, edition);

      let response = self
         .client
         .get(&url)
         .query(&[(API_KEY_PARAM, self.api_key.as_str())])
         .send()
         .await?;

      match response.status() {
         status if status.is_success() => {
            let body = response.json::<QuranPageBody>().await?;
            Ok(body)
         }
         status => {
            let body = response.text().await.unwrap_or_default();
            Err(GlobalQuranError::Unexpected(format!(
               "予期しないステータス {}: {}",
               status, body
            )))
         }
      }
   }
}
