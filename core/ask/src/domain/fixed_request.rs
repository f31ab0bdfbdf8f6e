//! 送信するリクエスト（すべて固定値）
//!
//! 環境変数や引数では変えられない。

use common::error::Error;
use common::llm::{CompletionRequest, Message};

/// モデル識別子
pub const FIXED_MODEL_ID: &str = "ollama/gpt-oss:20b";
/// ローカル推論サーバのベース URL
pub const FIXED_API_BASE: &str = "http://localhost:11434";
/// user メッセージの本文
pub const FIXED_PROMPT: &str = "respond in 20 words. who are you?";

/// 固定のリクエストを組み立てる（user メッセージ 1 件）
pub fn fixed_request() -> Result<CompletionRequest, Error> {
    CompletionRequest::new(
        FIXED_MODEL_ID,
        vec![Message::user(FIXED_PROMPT)],
        Some(FIXED_API_BASE.to_string()),
    )
}
