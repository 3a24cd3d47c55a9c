// アプリケーション層モジュール
pub mod body_parser;
pub mod request_handler;

// 再エクスポート
pub use body_parser::{BodyParseError, BodyParser, RAW_BODY_KEY};
pub use request_handler::{HandlerError, RequestHandler, GREETING_PREFIX};
