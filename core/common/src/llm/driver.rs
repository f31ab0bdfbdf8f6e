//! 補完ドライバーの実装
//!
//! プロバイダに依存しない共通処理（送信・ステータス判定・レスポンス正規化）を提供する。

use crate::error::Error;
use crate::llm::provider::{server_error_message, CompletionProvider};
use crate::llm::request::CompletionRequest;
use crate::llm::response::ModelResponse;
use crate::ports::outbound::{Clock, HttpTransport, IdGenerator};
use serde_json::Value;

/// ドライバーが使う外界への依存
pub struct CompletionDeps<'a> {
    pub transport: &'a dyn HttpTransport,
    pub clock: &'a dyn Clock,
    pub ids: &'a dyn IdGenerator,
}

/// 補完ドライバー
pub struct CompletionDriver<P: CompletionProvider> {
    provider: P,
}

impl<P: CompletionProvider> CompletionDriver<P> {
    /// 新しいドライバーを作成
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// 1 回だけリクエストを送り、レスポンスを正規化して返す
    ///
    /// リトライ・フォールバックはしない。
    pub fn complete(
        &self,
        request: &CompletionRequest,
        deps: &CompletionDeps<'_>,
    ) -> Result<ModelResponse, Error> {
        let payload = self.provider.make_request_payload(request.messages())?;
        let request_json = serde_json::to_string(&payload)
            .map_err(|e| Error::json(format!("Failed to serialize request: {}", e)))?;

        let url = self.provider.url();
        tracing::debug!(
            provider = self.provider.name(),
            url = %url,
            messages = request.messages().len(),
            "sending completion request"
        );

        let reply = deps.transport.post_json(&url, &request_json)?;
        tracing::debug!(status = reply.status, bytes = reply.body.len(), "received response");

        if !reply.is_success() {
            let detail = serde_json::from_str::<Value>(&reply.body)
                .ok()
                .and_then(|v| server_error_message(&v))
                .unwrap_or_else(|| reply.body.trim().to_string());
            return Err(Error::http(format!(
                "{} request failed: HTTP {}: {}",
                self.provider.name(),
                reply.status,
                detail
            )));
        }

        let parsed = self.provider.parse_response(&reply.body)?;
        let response = ModelResponse::from_reply(
            deps.ids.next_id(),
            deps.clock.now_unix(),
            request.model(),
            parsed,
        );
        tracing::info!(
            id = %response.id,
            model = %response.model,
            prompt_tokens = response.usage.prompt_tokens,
            completion_tokens = response.usage.completion_tokens,
            "completion finished"
        );
        Ok(response)
    }

    /// プロバイダを取得
    pub fn provider(&self) -> &P {
        &self.provider
    }
}
