//! # ゲートウェイ設定
//!
//! 環境変数からゲートウェイサーバーの設定を読み込む。
//! 設定は起動時に一度だけ構築し、以降は参照で引き回す。

use std::env;

/// `PORT` 未指定時のデフォルトポート
pub const DEFAULT_PORT: u16 = 5000;

/// `GLOBAL_QURAN_BASE_URL` 未指定時のアップストリームホスト
pub const DEFAULT_BASE_URL: &str = "https://api.globalquran.com";

/// ゲートウェイサーバーの設定
#[derive(Debug, Clone)]
pub struct GatewayConfig {
   /// バインドアドレス
   pub host:     String,
   /// ポート番号
   pub port:     u16,
   /// GlobalQuran API の API キー
   pub api_key:  String,
   /// GlobalQuran API のベース URL（末尾スラッシュなしに正規化済み）
   pub base_url: String,
}

impl GatewayConfig {
   /// 環境変数から設定を読み込む
   pub fn from_env() -> Result<Self, env::VarError> {
      Ok(Self {
         host: env::var("GATEWAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
         port: match env::var("PORT") {
            Ok(value) => {
               parse_port(&value).expect("PORT は有効なポート番号である必要があります")
            }
            Err(_) => DEFAULT_PORT,
         },
         api_key: env::var("GLOBAL_QURAN_API_KEY")
            .expect("GLOBAL_QURAN_API_KEY が設定されていません（GlobalQuran API の API キーを設定してください）"),
         base_url: env::var("GLOBAL_QURAN_BASE_URL")
            .map(|value| normalize_base_url(&value))
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
      })
   }
}

/// ポート番号文字列をパースする
fn parse_port(value: &str) -> Option<u16> {
   value.parse().ok()
}

/// ベース URL の末尾スラッシュを落とす
fn normalize_base_url(value: &str) -> String {
   value.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
   // テスト間で環境変数の競合を避けるため、
   // 純粋なパース関数で検証する

   use super::*;

   #[test]
   fn test_parse_port_有効なポート番号をパースする() {
      assert_eq!(parse_port("5000"), Some(5000));
      assert_eq!(parse_port("1"), Some(1));
      assert_eq!(parse_port("65535"), Some(65535));
   }

   #[test]
   fn test_parse_port_不正な値はnone() {
      assert_eq!(parse_port("abc"), None);
      assert_eq!(parse_port(""), None);
      assert_eq!(parse_port("70000"), None);
      assert_eq!(parse_port("-1"), None);
   }

   #[test]
   fn test_normalize_base_url_末尾スラッシュを落とす() {
      assert_eq!(
         normalize_base_url("https://api.globalquran.com/"),
         "https://api.globalquran.com"
      );
      assert_eq!(
         normalize_base_url("https://api.globalquran.com"),
         "https://api.globalquran.com"
      );
   }
}
