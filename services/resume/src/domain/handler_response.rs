// Lambdaレスポンス
//
// プラットフォームが期待する statusCode / headers / body 形式の
// レスポンスと、bodyに埋め込むJSONペイロードを定義する。

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// 成功時のステータスコード
pub const STATUS_OK: u16 = 200;

/// エラー時のステータスコード
pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// 全レスポンス共通のヘッダー
///
/// - Content-Type: application/json
/// - Access-Control-Allow-Origin: *
pub fn default_headers() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("Content-Type".to_string(), "application/json".to_string()),
        ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
    ])
}

/// 成功時のbodyペイロード
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuccessBody {
    /// リソース内容を埋め込んだ挨拶メッセージ
    pub message: String,

    /// 解析済みリクエストボディ
    pub event: Value,

    /// 外側と同じステータスコード（互換性のため）
    #[serde(rename = "statusCode", skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

/// エラー時のbodyペイロード
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Lambdaレスポンス
///
/// `body`は常に有効なJSON文字列。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HandlerResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl HandlerResponse {
    /// 200レスポンスを作成
    ///
    /// シリアライズに失敗した場合は500レスポンスにフォールバックする。
    pub fn ok(body: &SuccessBody) -> Self {
        match serde_json::to_string(body) {
            Ok(body) => Self {
                status_code: STATUS_OK,
                headers: default_headers(),
                body,
            },
            Err(err) => Self::error(err.to_string()),
        }
    }

    /// 500レスポンスを作成
    pub fn error(message: impl Into<String>) -> Self {
        let body = ErrorBody {
            error: message.into(),
        };
        // 文字列フィールドのみのためシリアライズは失敗しない
        let body = serde_json::to_string(&body)
            .unwrap_or_else(|_| r#"{"error":"internal error"}"#.to_string());

        Self {
            status_code: STATUS_INTERNAL_ERROR,
            headers: default_headers(),
            body,
        }
    }

    /// Lambdaランタイムへ返すJSON値に変換
    pub fn into_value(self) -> Value {
        let Self {
            status_code,
            headers,
            body,
        } = self;

        serde_json::json!({
            "statusCode": status_code,
            "headers": headers,
            "body": body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_response_shape() {
        let response = HandlerResponse::ok(&SuccessBody {
            message: "hello".to_string(),
            event: json!({"x": 1}),
            status_code: Some(STATUS_OK),
        });

        assert_eq!(response.status_code, 200);
        assert_eq!(response.headers, default_headers());

        let body: Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(
            body,
            json!({"message": "hello", "event": {"x": 1}, "statusCode": 200})
        );
    }

    /// statusCodeを含めない設定ではbodyから省略される
    #[test]
    fn test_ok_response_without_body_status_code() {
        let response = HandlerResponse::ok(&SuccessBody {
            message: "hello".to_string(),
            event: json!([1, 2]),
            status_code: None,
        });

        let body: Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body, json!({"message": "hello", "event": [1, 2]}));
    }

    #[test]
    fn test_error_response_shape() {
        let response = HandlerResponse::error("boom \"quoted\"");

        assert_eq!(response.status_code, 500);
        assert_eq!(response.headers, default_headers());

        let body: Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body, json!({"error": "boom \"quoted\""}));
    }

    #[test]
    fn test_headers_are_identical_for_ok_and_error() {
        let ok = HandlerResponse::ok(&SuccessBody {
            message: String::new(),
            event: json!({}),
            status_code: Some(STATUS_OK),
        });
        let error = HandlerResponse::error("x");

        assert_eq!(ok.headers, error.headers);
        assert_eq!(ok.headers.get("Content-Type").unwrap(), "application/json");
        assert_eq!(ok.headers.get("Access-Control-Allow-Origin").unwrap(), "*");
    }

    #[test]
    fn test_into_value_has_exactly_three_fields() {
        let value = HandlerResponse::error("x").into_value();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 3);
        assert_eq!(value["statusCode"], 500);
        assert_eq!(value["headers"]["Content-Type"], "application/json");
        assert!(value["body"].is_string());
    }
}
