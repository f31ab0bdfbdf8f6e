//! ドメイン型（Newtype）
//!
//! String を直接運ばず、意味のある型に包んで境界を明確にする。

use crate::error::Error;

/// プロバイダ名（ollama, ollama_chat 等）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderName(String);

impl ProviderName {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl std::ops::Deref for ProviderName {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ProviderName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// モデル名（サーバに渡す名前。例: gpt-oss:20b）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelName(String);

impl ModelName {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl std::ops::Deref for ModelName {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ModelName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// モデル識別子 `<provider>/<model>`（例: ollama/gpt-oss:20b）
///
/// 最初の `/` で分割する。モデル名側には `/` や `:` が含まれてもよい。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelId {
    raw: String,
    provider: ProviderName,
    model: ModelName,
}

impl ModelId {
    pub fn parse(s: impl Into<String>) -> Result<Self, Error> {
        let raw = s.into();
        let (provider, model) = raw.split_once('/').ok_or_else(|| {
            Error::invalid_argument(format!(
                "LLM provider not provided in model identifier '{}' (expected <provider>/<model>, e.g. ollama/llama3)",
                raw
            ))
        })?;
        if provider.trim().is_empty() {
            return Err(Error::invalid_argument(format!(
                "Empty provider in model identifier '{}'",
                raw
            )));
        }
        if model.trim().is_empty() {
            return Err(Error::invalid_argument(format!(
                "Empty model name in model identifier '{}'",
                raw
            )));
        }
        let provider = ProviderName::new(provider);
        let model = ModelName::new(model);
        Ok(Self {
            raw,
            provider,
            model,
        })
    }

    pub fn provider(&self) -> &ProviderName {
        &self.provider
    }

    pub fn model(&self) -> &ModelName {
        &self.model
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.raw.fmt(f)
    }
}

/// レスポンス ID（chatcmpl-<uuid>）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseId(String);

impl ResponseId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl std::ops::Deref for ResponseId {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ResponseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ResponseId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_id_parse_ollama() {
        let id = ModelId::parse("ollama/gpt-oss:20b").unwrap();
        assert_eq!(&**id.provider(), "ollama");
        assert_eq!(&**id.model(), "gpt-oss:20b");
        assert_eq!(id.as_str(), "ollama/gpt-oss:20b");
        assert_eq!(id.to_string(), "ollama/gpt-oss:20b");
    }

    #[test]
    fn test_model_id_splits_on_first_slash() {
        let id = ModelId::parse("ollama_chat/library/qwen2.5:7b").unwrap();
        assert_eq!(&**id.provider(), "ollama_chat");
        assert_eq!(&**id.model(), "library/qwen2.5:7b");
    }

    #[test]
    fn test_model_id_without_provider() {
        let err = ModelId::parse("gpt-oss:20b").unwrap_err();
        assert!(err.to_string().contains("LLM provider not provided"));
        assert_eq!(err.exit_code(), 64);
    }

    #[test]
    fn test_model_id_empty_parts() {
        assert!(ModelId::parse("/gpt-oss").is_err());
        assert!(ModelId::parse("ollama/").is_err());
        assert!(ModelId::parse("").is_err());
    }
}
