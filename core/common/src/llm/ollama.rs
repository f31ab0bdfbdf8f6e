//! Ollama /api/generate プロバイダ（model 識別子の prefix: `ollama/`）
//!
//! メッセージ列を 1 本のプロンプトに変換して送る。system メッセージは `system` フィールドに分離する。

use crate::error::Error;
use crate::llm::provider::{server_error_message, CompletionProvider, Message, ProviderReply};
use serde::Deserialize;
use serde_json::{json, Value};

/// ローカル Ollama サーバのデフォルト URL
pub const DEFAULT_OLLAMA_API_BASE: &str = "http://localhost:11434";

/// Ollama generate プロバイダ
pub struct OllamaProvider {
    model: String,
    api_base: String,
}

impl OllamaProvider {
    /// 新しいプロバイダを作成
    ///
    /// * `model` - サーバに渡すモデル名（例: gpt-oss:20b）
    /// * `api_base` - ベース URL（None のとき DEFAULT_OLLAMA_API_BASE）
    pub fn new(model: impl Into<String>, api_base: Option<String>) -> Self {
        Self {
            model: model.into(),
            api_base: normalize_api_base(api_base),
        }
    }
}

/// 末尾の `/` を落とし、未指定ならデフォルトを使う
pub(crate) fn normalize_api_base(api_base: Option<String>) -> String {
    api_base
        .unwrap_or_else(|| DEFAULT_OLLAMA_API_BASE.to_string())
        .trim_end_matches('/')
        .to_string()
}

/// role の先頭を大文字にする（user -> User）
fn capitalize(role: &str) -> String {
    let mut chars = role.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// system 以外のメッセージを `### <Role>:\n<content>\n\n` の連結にする
pub fn messages_to_prompt(messages: &[Message]) -> String {
    messages
        .iter()
        .filter(|m| m.role != "system")
        .map(|m| format!("### {}:\n{}\n\n", capitalize(&m.role), m.content))
        .collect()
}

fn system_prompt(messages: &[Message]) -> Option<String> {
    let parts: Vec<&str> = messages
        .iter()
        .filter(|m| m.role == "system")
        .map(|m| m.content.as_str())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("\n"))
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
    #[serde(default)]
    thinking: Option<String>,
    #[serde(default)]
    done_reason: Option<String>,
    #[serde(default)]
    prompt_eval_count: Option<u32>,
    #[serde(default)]
    eval_count: Option<u32>,
}

impl CompletionProvider for OllamaProvider {
    fn name(&self) -> &str {
        "ollama"
    }

    fn url(&self) -> String {
        format!("{}/api/generate", self.api_base)
    }

    fn make_request_payload(&self, messages: &[Message]) -> Result<Value, Error> {
        let mut payload = json!({
            "model": self.model,
            "prompt": messages_to_prompt(messages),
            "stream": false,
            "options": {}
        });
        if let Some(system) = system_prompt(messages) {
            payload["system"] = json!(system);
        }
        Ok(payload)
    }

    fn parse_response(&self, response_json: &str) -> Result<ProviderReply, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;

        if let Some(msg) = server_error_message(&v) {
            return Err(Error::http(format!("Ollama error: {}", msg)));
        }

        let r: GenerateResponse = serde_json::from_value(v)
            .map_err(|e| Error::json(format!("Invalid Ollama generate response: {}", e)))?;
        Ok(ProviderReply {
            text: r.response,
            reasoning: r.thinking,
            done_reason: r.done_reason,
            prompt_tokens: r.prompt_eval_count,
            completion_tokens: r.eval_count,
        })
    }
}
