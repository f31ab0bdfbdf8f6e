//! Ollama /api/chat プロバイダ（model 識別子の prefix: `ollama_chat/`）

use crate::error::Error;
use crate::llm::ollama::normalize_api_base;
use crate::llm::provider::{server_error_message, CompletionProvider, Message, ProviderReply};
use serde::Deserialize;
use serde_json::{json, Value};

/// Ollama chat プロバイダ
pub struct OllamaChatProvider {
    model: String,
    api_base: String,
}

impl OllamaChatProvider {
    pub fn new(model: impl Into<String>, api_base: Option<String>) -> Self {
        Self {
            model: model.into(),
            api_base: normalize_api_base(api_base),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: String,
    #[serde(default)]
    thinking: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: ChatMessage,
    #[serde(default)]
    done_reason: Option<String>,
    #[serde(default)]
    prompt_eval_count: Option<u32>,
    #[serde(default)]
    eval_count: Option<u32>,
}

impl CompletionProvider for OllamaChatProvider {
    fn name(&self) -> &str {
        "ollama_chat"
    }

    fn url(&self) -> String {
        format!("{}/api/chat", self.api_base)
    }

    fn make_request_payload(&self, messages: &[Message]) -> Result<Value, Error> {
        let messages: Vec<Value> = messages
            .iter()
            .map(|m| json!({ "role": m.role, "content": m.content }))
            .collect();
        Ok(json!({
            "model": self.model,
            "messages": messages,
            "stream": false,
            "options": {}
        }))
    }

    fn parse_response(&self, response_json: &str) -> Result<ProviderReply, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;

        if let Some(msg) = server_error_message(&v) {
            return Err(Error::http(format!("Ollama error: {}", msg)));
        }

        let r: ChatResponse = serde_json::from_value(v)
            .map_err(|e| Error::json(format!("Invalid Ollama chat response: {}", e)))?;
        Ok(ProviderReply {
            text: r.message.content,
            reasoning: r.message.thinking,
            done_reason: r.done_reason,
            prompt_tokens: r.prompt_eval_count,
            completion_tokens: r.eval_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url() {
        let p = OllamaChatProvider::new("llama3", None);
        assert_eq!(p.url(), "http://localhost:11434/api/chat");
    }

    #[test]
    fn test_make_request_payload_keeps_order() {
        let p = OllamaChatProvider::new("llama3", None);
        let payload = p
            .make_request_payload(&[Message::system("S"), Message::user("U")])
            .unwrap();
        assert_eq!(payload["model"], "llama3");
        assert_eq!(payload["stream"], false);
        let messages = payload["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[1]["role"], "user");
        assert_eq!(messages[1]["content"], "U");
    }

    #[test]
    fn test_parse_response() {
        let p = OllamaChatProvider::new("llama3", None);
        let json = r#"{"model":"llama3","message":{"role":"assistant","content":"Hello","thinking":"hm"},"done":true,"done_reason":"length","prompt_eval_count":5,"eval_count":9}"#;
        let reply = p.parse_response(json).unwrap();
        assert_eq!(reply.text, "Hello");
        assert_eq!(reply.reasoning.as_deref(), Some("hm"));
        assert_eq!(reply.done_reason.as_deref(), Some("length"));
        assert_eq!(reply.prompt_tokens, Some(5));
        assert_eq!(reply.completion_tokens, Some(9));
    }

    #[test]
    fn test_parse_response_missing_message() {
        let p = OllamaChatProvider::new("llama3", None);
        assert!(matches!(
            p.parse_response(r#"{"done":true}"#),
            Err(Error::Json(_))
        ));
    }
}
