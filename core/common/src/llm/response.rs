//! 正規化された補完レスポンス（chat.completion 形式）
//!
//! プロバイダごとに異なるレスポンスを同じ形にそろえる。Display は整形済み JSON。

use crate::domain::{ModelId, ResponseId};
use crate::llm::provider::ProviderReply;
use serde::{Deserialize, Serialize};

/// `object` フィールドの固定値
pub const CHAT_COMPLETION_OBJECT: &str = "chat.completion";

/// 補完レスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelResponse {
    pub id: String,
    /// Unix 秒
    pub created: i64,
    pub model: String,
    pub object: String,
    pub choices: Vec<Choice>,
    pub usage: Usage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub index: u32,
    pub finish_reason: String,
    pub message: ResponseMessage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMessage {
    pub role: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning_content: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl Usage {
    pub fn new(prompt_tokens: u32, completion_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens.saturating_add(completion_tokens),
        }
    }
}

/// done_reason を finish_reason に変換（未指定は stop、未知の値はそのまま）
pub fn finish_reason(done_reason: Option<&str>) -> String {
    match done_reason {
        None | Some("") | Some("stop") => "stop".to_string(),
        Some("length") => "length".to_string(),
        Some(other) => other.to_string(),
    }
}

impl ModelResponse {
    /// ProviderReply から 1 choice のレスポンスを組み立てる
    pub fn from_reply(id: ResponseId, created: i64, model: &ModelId, reply: ProviderReply) -> Self {
        let usage = Usage::new(
            reply.prompt_tokens.unwrap_or(0),
            reply.completion_tokens.unwrap_or(0),
        );
        Self {
            id: id.to_string(),
            created,
            model: model.to_string(),
            object: CHAT_COMPLETION_OBJECT.to_string(),
            choices: vec![Choice {
                index: 0,
                finish_reason: finish_reason(reply.done_reason.as_deref()),
                message: ResponseMessage {
                    role: "assistant".to_string(),
                    content: reply.text,
                    reasoning_content: reply.reasoning.filter(|s| !s.is_empty()),
                },
            }],
            usage,
        }
    }

    /// 先頭 choice の本文
    pub fn content(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }
}

impl std::fmt::Display for ModelResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string_pretty(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}
