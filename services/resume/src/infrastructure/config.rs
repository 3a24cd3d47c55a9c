// ハンドラー設定
//
// 環境変数からハンドラーの動作設定を読み込む。

/// リソースファイルのデフォルトパス（作業ディレクトリ相対）
pub const DEFAULT_RESOURCE_PATH: &str = "test";

/// ハンドラー設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerConfig {
    /// 読み込むリソースファイルのパス (RESOURCE_PATH環境変数)
    pub resource_path: String,

    /// 成功レスポンスのbodyにstatusCodeを含めるか
    /// (INCLUDE_BODY_STATUS_CODE環境変数、デフォルト: true)
    pub include_body_status_code: bool,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            resource_path: DEFAULT_RESOURCE_PATH.to_string(),
            include_body_status_code: true,
        }
    }
}

impl HandlerConfig {
    /// 環境変数から設定を読み込み
    ///
    /// - RESOURCE_PATH: リソースファイルのパス（空文字はデフォルト）
    /// - INCLUDE_BODY_STATUS_CODE: `false`/`0`/`no`/`off`で無効、それ以外は有効
    pub fn from_env() -> Self {
        let resource_path = std::env::var("RESOURCE_PATH")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_RESOURCE_PATH.to_string());

        let include_body_status_code = std::env::var("INCLUDE_BODY_STATUS_CODE")
            .map(|v| parse_flag(&v))
            .unwrap_or(true);

        Self {
            resource_path,
            include_body_status_code,
        }
    }

    /// テスト用に明示的な値で作成
    pub fn new(resource_path: impl Into<String>, include_body_status_code: bool) -> Self {
        Self {
            resource_path: resource_path.into(),
            include_body_status_code,
        }
    }
}

/// フラグ文字列を解釈する
fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}
