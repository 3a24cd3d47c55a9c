/// resume-lambda エントリポイント
///
/// Lambda Function URL / API Gateway経由のHTTPイベントを受け取り、
/// ボディ解析結果とローカルリソースの内容を含むJSONレスポンスを返す。
/// 処理中のエラーは500レスポンスとして返却し、ランタイムへは伝播させない。
use lambda_runtime::{service_fn, Error, LambdaEvent};
use resume::application::RequestHandler;
use resume::infrastructure::{init_logging, FileResourceReader, HandlerConfig};
use serde_json::Value;
use tracing::{info, info_span};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    // 環境変数から設定を読み込み
    let config = HandlerConfig::from_env();
    info!(resource_path = %config.resource_path, "resume-lambda関数を初期化");

    let request_handler = RequestHandler::from_config(&config);
    let request_handler = &request_handler;

    // Lambda関数を実行
    lambda_runtime::run(service_fn(move |event| handler(request_handler, event))).await
}

/// Lambda関数のメインハンドラー
///
/// リクエスト処理の失敗はレスポンス本文で表現するため、常に`Ok`を返す。
async fn handler(
    request_handler: &RequestHandler<FileResourceReader>,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    let (payload, context) = event.into_parts();

    let span = info_span!("invocation", request_id = %context.request_id);
    let response = span.in_scope(|| request_handler.handle(payload));

    info!(
        request_id = %context.request_id,
        status_code = response.status_code,
        "レスポンス送信"
    );

    Ok(response.into_value())
}
