/// リクエストボディパーサー
///
/// イベントのボディを必要に応じてbase64デコードし、JSONとして解析する。
/// JSONとして解析できないボディは`{"raw_body": ...}`に包んで返す。
use std::string::FromUtf8Error;

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::{DecodeError, Engine};
use serde_json::{json, Value};
use thiserror::Error;

use crate::domain::RequestEvent;

/// JSONでないボディを包むキー
pub const RAW_BODY_KEY: &str = "raw_body";

/// 末尾の余剰ビットを許容するデコーダー
///
/// パディングの検証は`decode_base64`側で行う。
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// ボディ解析エラー
///
/// JSONとして不正なボディはエラーにならない。
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BodyParseError {
    /// base64として不正
    #[error("invalid base64 body: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    /// デコード結果がUTF-8でない
    #[error("decoded body is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),
}

/// リクエストボディパーサー
pub struct BodyParser;

impl BodyParser {
    /// イベントのボディを解析
    ///
    /// # 戻り値
    /// * ボディなし（未指定・null・空文字）: イベント全体
    /// * JSONとして解析できる: 解析結果（オブジェクト・配列・スカラーいずれも可）
    /// * JSONとして解析できない: `{"raw_body": <デコード後の文字列>}`
    ///
    /// # 例
    /// ```
    /// use resume::application::BodyParser;
    /// use resume::domain::RequestEvent;
    /// use serde_json::json;
    ///
    /// let event = RequestEvent::from_payload(json!({"body": "{\"x\":1}"})).unwrap();
    /// assert_eq!(BodyParser::parse(&event).unwrap(), json!({"x": 1}));
    /// ```
    pub fn parse(event: &RequestEvent) -> Result<Value, BodyParseError> {
        let body = match event.body.as_deref() {
            Some(body) if event.has_body() => body,
            _ => return Ok(event.payload().clone()),
        };

        let text = if event.is_base64_encoded() {
            Self::decode_base64(body)?
        } else {
            body.to_string()
        };

        Ok(Self::parse_json_or_raw(text))
    }

    /// base64文字列をUTF-8文字列にデコード
    ///
    /// アルファベット外の文字（改行など）は読み飛ばし、最初の`=`以降のデータは無視する。
    /// データ長が4の倍数でない場合は、続く`=`で4文字に揃っている必要がある。
    fn decode_base64(body: &str) -> Result<String, BodyParseError> {
        let mut data = Vec::with_capacity(body.len());
        let mut padding = 0usize;

        for byte in body.bytes() {
            match byte {
                b'=' => padding += 1,
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'+' | b'/' if padding == 0 => {
                    data.push(byte)
                }
                _ => {}
            }
        }

        match data.len() % 4 {
            1 => return Err(DecodeError::InvalidLength(data.len()).into()),
            rem if rem > 0 && rem + padding < 4 => return Err(DecodeError::InvalidPadding.into()),
            _ => {}
        }

        let bytes = LENIENT_BASE64.decode(&data)?;
        Ok(String::from_utf8(bytes)?)
    }

    /// JSONとして解析し、失敗時は生文字列を包んで返す
    fn parse_json_or_raw(text: String) -> Value {
        match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(_) => json!({ RAW_BODY_KEY: text }),
        }
    }
}
