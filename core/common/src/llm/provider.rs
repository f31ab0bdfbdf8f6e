//! 補完プロバイダのトレイト定義

use crate::error::Error;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 補完プロバイダのトレイト
///
/// 各プロバイダ（ollama の generate / chat など）はこのトレイトを実装する。
/// HTTP の送受信はドライバが HttpTransport 経由で行い、プロバイダはペイロードの組み立てと解釈だけを担う。
pub trait CompletionProvider: Send + Sync {
    /// プロバイダ名を返す
    fn name(&self) -> &str;

    /// POST 先の URL
    fn url(&self) -> String;

    /// リクエストペイロードを生成
    ///
    /// # Arguments
    /// * `messages` - 送信するメッセージ列（順序を保つ）
    fn make_request_payload(&self, messages: &[Message]) -> Result<Value, Error>;

    /// 2xx レスポンスの本文を ProviderReply に変換
    ///
    /// 期待した形でない本文は `Error::Json`、本文中の `error` は `Error::Http`。
    fn parse_response(&self, response_json: &str) -> Result<ProviderReply, Error>;
}

/// プロバイダ固有レスポンスから取り出した値
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderReply {
    pub text: String,
    /// 推論モデルの thinking（あれば）
    pub reasoning: Option<String>,
    pub done_reason: Option<String>,
    pub prompt_tokens: Option<u32>,
    pub completion_tokens: Option<u32>,
}

/// メッセージ構造体（role と content のみ）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }
}

/// サーバが返したエラー本文からメッセージを取り出す
///
/// Ollama は `{"error": "..."}`、OpenAI 互換は `{"error": {"message": "..."}}` を返す。
pub(crate) fn server_error_message(v: &Value) -> Option<String> {
    let err = v.get("error")?;
    if let Some(s) = err.as_str() {
        return Some(s.to_string());
    }
    err["message"].as_str().map(|s| s.to_string())
}
