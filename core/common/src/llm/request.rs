//! 補完リクエスト
//!
//! 呼び出し前に全フィールドが揃っていることを new で保証し、以後は変更しない。

use crate::domain::ModelId;
use crate::error::Error;
use crate::llm::provider::Message;

/// 1 回の補完呼び出しに渡すリクエスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    model: ModelId,
    messages: Vec<Message>,
    api_base: Option<String>,
}

impl CompletionRequest {
    /// # Arguments
    /// * `model` - `<provider>/<model>` 形式のモデル識別子
    /// * `messages` - 1 件以上のメッセージ
    /// * `api_base` - ベース URL（None のときプロバイダのデフォルト）
    pub fn new(
        model: &str,
        messages: Vec<Message>,
        api_base: Option<String>,
    ) -> Result<Self, Error> {
        let model = ModelId::parse(model)?;
        if messages.is_empty() {
            return Err(Error::invalid_argument(
                "messages must contain at least one message",
            ));
        }
        let api_base = api_base.filter(|s| !s.trim().is_empty());
        Ok(Self {
            model,
            messages,
            api_base,
        })
    }

    pub fn model(&self) -> &ModelId {
        &self.model
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn api_base(&self) -> Option<&str> {
        self.api_base.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_populated() {
        let req = CompletionRequest::new(
            "ollama/gpt-oss:20b",
            vec![Message::user("hi")],
            Some("http://localhost:11434".to_string()),
        )
        .unwrap();
        assert_eq!(req.model().as_str(), "ollama/gpt-oss:20b");
        assert_eq!(req.messages().len(), 1);
        assert_eq!(req.api_base(), Some("http://localhost:11434"));
    }

    #[test]
    fn test_new_rejects_empty_messages() {
        let err = CompletionRequest::new("ollama/llama3", vec![], None).unwrap_err();
        assert!(err.to_string().contains("at least one message"));
        assert_eq!(err.exit_code(), 64);
    }

    #[test]
    fn test_new_rejects_bad_model() {
        assert!(CompletionRequest::new("llama3", vec![Message::user("x")], None).is_err());
    }

    #[test]
    fn test_blank_api_base_is_none() {
        let req =
            CompletionRequest::new("ollama/llama3", vec![Message::user("x")], Some("  ".into()))
                .unwrap();
        assert_eq!(req.api_base(), None);
    }
}
