//! プロバイダファクトリー
//!
//! モデル識別子の prefix から適切なプロバイダを作成する。

use crate::error::Error;
use crate::llm::ollama::OllamaProvider;
use crate::llm::ollama_chat::OllamaChatProvider;
use crate::llm::provider::{CompletionProvider, Message, ProviderReply};
use crate::llm::request::CompletionRequest;
use serde_json::Value;

/// プロバイダタイプ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderType {
    /// Ollama /api/generate
    Ollama,
    /// Ollama /api/chat
    OllamaChat,
}

impl ProviderType {
    /// 文字列からプロバイダタイプを解析
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ollama" => Some(Self::Ollama),
            "ollama_chat" => Some(Self::OllamaChat),
            _ => None,
        }
    }

    /// プロバイダタイプを文字列に変換
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ollama => "ollama",
            Self::OllamaChat => "ollama_chat",
        }
    }
}

/// プロバイダのenumラッパー
pub enum AnyProvider {
    Ollama(OllamaProvider),
    OllamaChat(OllamaChatProvider),
}

impl CompletionProvider for AnyProvider {
    fn name(&self) -> &str {
        match self {
            Self::Ollama(p) => p.name(),
            Self::OllamaChat(p) => p.name(),
        }
    }

    fn url(&self) -> String {
        match self {
            Self::Ollama(p) => p.url(),
            Self::OllamaChat(p) => p.url(),
        }
    }

    fn make_request_payload(&self, messages: &[Message]) -> Result<Value, Error> {
        match self {
            Self::Ollama(p) => p.make_request_payload(messages),
            Self::OllamaChat(p) => p.make_request_payload(messages),
        }
    }

    fn parse_response(&self, response_json: &str) -> Result<ProviderReply, Error> {
        match self {
            Self::Ollama(p) => p.parse_response(response_json),
            Self::OllamaChat(p) => p.parse_response(response_json),
        }
    }
}

/// リクエストのモデル識別子からプロバイダを作成する
pub fn create_provider(request: &CompletionRequest) -> Result<AnyProvider, Error> {
    let id = request.model();
    let provider_type = ProviderType::from_str(id.provider()).ok_or_else(|| {
        Error::invalid_argument(format!(
            "Unsupported LLM provider '{}' in model identifier '{}' (supported: ollama, ollama_chat)",
            id.provider(),
            id
        ))
    })?;
    let model = id.model().to_string();
    let api_base = request.api_base().map(str::to_string);
    Ok(match provider_type {
        ProviderType::Ollama => AnyProvider::Ollama(OllamaProvider::new(model, api_base)),
        ProviderType::OllamaChat => {
            AnyProvider::OllamaChat(OllamaChatProvider::new(model, api_base))
        }
    })
}
