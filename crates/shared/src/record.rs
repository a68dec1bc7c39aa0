//! # レコード整形
//!
//! アップストリーム API が返す「キー付きマッピング」（id → オブジェクト）を、
//! 各要素に `id` フィールドを付与した順序付きリストへ変換する。

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// アップストリーム由来の 1 レコード
///
/// `id` はマッピングのキー、`fields` は元のオブジェクトのフィールドを
/// そのまま保持する。シリアライズ時は `id` が先頭に出て、残りのフィールドが
/// 元の順序のまま展開される:
///
/// ```json
/// { "id": "quran-simple", "name": "Simple", "language_code": "ar" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
   pub id: String,

   #[serde(flatten)]
   pub fields: Map<String, Value>,
}

/// キー付きマッピングをレコードのリストへ変換する
///
/// 順序は入力マッピングの反復順（アップストリームの JSON オブジェクト順、
/// `preserve_order` により保持される）に従い、このクレートでは並べ替えない。
/// オブジェクトでない値は `id` のみのレコードに縮退する。
pub fn to_record_list(mapping: Map<String, Value>) -> Vec<Record> {
   mapping
      .into_iter()
      .map(|(id, value)| Record {
         id,
         fields: match value {
            Value::Object(fields) => fields,
            _ => Map::new(),
         },
      })
      .collect()
}
