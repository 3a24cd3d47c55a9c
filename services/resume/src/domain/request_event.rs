// Lambdaリクエストイベント
//
// プラットフォームから渡されるイベントのうち、ボディ解析に必要な
// フィールドだけを型付けし、それ以外はそのまま保持する。

use serde::Deserialize;
use serde_json::{Map, Value};

/// 受信イベント
///
/// `body`と`isBase64Encoded`のみを型付きで扱い、
/// headers・path・requestContext等の残りは`extra`にそのまま保持する。
/// 受信したペイロード自体も保持し、ボディなしの場合はそれをそのまま返す。
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RequestEvent {
    /// リクエストボディ（プレーン文字列またはbase64文字列）
    #[serde(default)]
    pub body: Option<String>,

    /// ボディがbase64エンコードされているか
    #[serde(rename = "isBase64Encoded", default)]
    pub is_base64_encoded: Option<bool>,

    /// 未知フィールド
    #[serde(flatten)]
    pub extra: Map<String, Value>,

    /// 受信したペイロード（null値のキーも含めて保持）
    #[serde(skip)]
    payload: Value,
}

impl RequestEvent {
    /// Lambdaペイロードからイベントを構築
    ///
    /// オブジェクト以外のペイロードや、`body`が文字列でない・
    /// `isBase64Encoded`が真偽値でないペイロードはエラーになる。
    /// (`null`は未指定扱い)
    pub fn from_payload(payload: Value) -> Result<Self, serde_json::Error> {
        let mut event: Self = serde_json::from_value(payload.clone())?;
        event.payload = payload;
        Ok(event)
    }

    /// 空でないボディを持つか
    pub fn has_body(&self) -> bool {
        self.body.as_deref().is_some_and(|body| !body.is_empty())
    }

    /// base64エンコード済みか（未指定はfalse）
    pub fn is_base64_encoded(&self) -> bool {
        self.is_base64_encoded.unwrap_or(false)
    }

    /// 受信したイベント全体
    pub fn payload(&self) -> &Value {
        &self.payload
    }
}
