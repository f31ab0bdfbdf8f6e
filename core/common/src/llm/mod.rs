//! 補完ルーティングと Ollama プロバイダの実装
//!
//! モデル識別子 `<provider>/<model>` の prefix でプロバイダを選び、1 回だけリクエストを送る。

pub mod driver;
pub mod factory;
pub mod ollama;
pub mod ollama_chat;
pub mod provider;
pub mod request;
pub mod response;

pub use driver::{CompletionDeps, CompletionDriver};
pub use factory::{create_provider, AnyProvider, ProviderType};
pub use ollama::DEFAULT_OLLAMA_API_BASE;
pub use provider::{CompletionProvider, Message, ProviderReply};
pub use request::CompletionRequest;
pub use response::{Choice, ModelResponse, ResponseMessage, Usage};

use crate::error::Error;

/// 補完を 1 回実行する
///
/// モデル識別子からプロバイダを解決し、ドライバー経由で送信する。失敗はそのまま返す。
pub fn completion(
    request: &CompletionRequest,
    deps: &CompletionDeps<'_>,
) -> Result<ModelResponse, Error> {
    let provider = create_provider(request)?;
    CompletionDriver::new(provider).complete(request, deps)
}
