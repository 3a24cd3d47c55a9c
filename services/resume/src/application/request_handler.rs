// リクエストハンドラー
//
// イベントを受け取り、ボディ解析とリソース読み込みを行って
// 200または500のレスポンスを組み立てる。処理中のエラーはすべて
// ここで500レスポンスに変換され、呼び出し元へは伝播しない。

use serde_json::Value;
use thiserror::Error;
use tracing::{error, info};

use crate::application::body_parser::{BodyParseError, BodyParser};
use crate::domain::handler_response::STATUS_OK;
use crate::domain::{HandlerResponse, RequestEvent, SuccessBody};
use crate::infrastructure::{FileResourceReader, HandlerConfig, ResourceReadError, ResourceReader};

/// 成功メッセージの接頭辞
pub const GREETING_PREFIX: &str = "Hello again from the resume-lambda Lambda! Here even more";

/// リクエスト処理エラー
///
/// `Display`の内容がそのままエラーレスポンスの`error`になる。
#[derive(Debug, Error)]
pub enum HandlerError {
    /// イベントの形式が不正
    #[error("invalid event: {0}")]
    InvalidEvent(#[source] serde_json::Error),

    /// ボディのデコードに失敗
    #[error(transparent)]
    BodyParse(#[from] BodyParseError),

    /// リソースの読み込みに失敗
    #[error(transparent)]
    ResourceRead(#[from] ResourceReadError),
}

/// リクエストハンドラー
pub struct RequestHandler<R> {
    reader: R,
    include_body_status_code: bool,
}

impl RequestHandler<FileResourceReader> {
    /// 設定からハンドラーを作成
    ///
    /// `resource_path`のファイルを呼び出しごとに読み込む。
    pub fn from_config(config: &HandlerConfig) -> Self {
        Self::new(
            FileResourceReader::new(&config.resource_path),
            config.include_body_status_code,
        )
    }
}

impl<R: ResourceReader> RequestHandler<R> {
    /// 新しいハンドラーを作成
    ///
    /// # Arguments
    /// * `reader` - 呼び出しごとに読み込むリソース
    /// * `include_body_status_code` - 成功時のbodyにstatusCodeを含めるか
    pub fn new(reader: R, include_body_status_code: bool) -> Self {
        Self {
            reader,
            include_body_status_code,
        }
    }

    /// イベントを処理してレスポンスを返す
    ///
    /// # 処理フロー
    /// 1. 受信イベントを整形JSONでログ出力
    /// 2. ボディを解析
    /// 3. リソースを読み込み
    /// 4. 成功時は200、失敗時はエラーをログ出力して500を返却
    pub fn handle(&self, payload: Value) -> HandlerResponse {
        let pretty = serde_json::to_string_pretty(&payload).unwrap_or_else(|_| payload.to_string());
        info!("Received event: {}", pretty);

        match self.process(payload) {
            Ok(body) => HandlerResponse::ok(&body),
            Err(err) => {
                error!(error = %err, "Error processing request: {}", err);
                HandlerResponse::error(err.to_string())
            }
        }
    }

    /// 成功時のbodyペイロードを組み立てる
    fn process(&self, payload: Value) -> Result<SuccessBody, HandlerError> {
        let event = RequestEvent::from_payload(payload).map_err(HandlerError::InvalidEvent)?;
        let parsed = BodyParser::parse(&event)?;
        let content = self.reader.read_to_string()?;

        Ok(SuccessBody {
            message: greeting(&content),
            event: parsed,
            status_code: self.include_body_status_code.then_some(STATUS_OK),
        })
    }
}

/// リソース内容を埋め込んだ挨拶メッセージ
///
/// 既存クライアントとの互換のため、内容はPythonの`repr`と同じ形式で埋め込む。
pub fn greeting(content: &str) -> String {
    format!("{GREETING_PREFIX} content={}", quote_literal(content))
}

/// 文字列をPythonの`repr`形式の文字列リテラルにする
///
/// 基本は単一引用符で、`'`を含み`"`を含まない場合のみ二重引用符を使う。
/// 制御文字と空白以外の空白類文字はエスケープする。
fn quote_literal(content: &str) -> String {
    let quote = if content.contains('\'') && !content.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut literal = String::with_capacity(content.len() + 2);
    literal.push(quote);
    for c in content.chars() {
        match c {
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            c if c == quote => {
                literal.push('\\');
                literal.push(c);
            }
            c if c.is_control() || (c.is_whitespace() && c != ' ') => {
                let code = u32::from(c);
                let escaped = match code {
                    0..=0xff => format!("\\x{code:02x}"),
                    0x100..=0xffff => format!("\\u{code:04x}"),
                    _ => format!("\\U{code:08x}"),
                };
                literal.push_str(&escaped);
            }
            c => literal.push(c),
        }
    }
    literal.push(quote);
    literal
}
