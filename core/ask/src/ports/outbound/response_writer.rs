//! レスポンス書き出し Outbound ポート

use common::error::Error;
use common::llm::ModelResponse;

/// 補完レスポンスを表示する抽象
///
/// 実装は `StdoutResponseWriter` やテスト用のバッファなど。
pub trait ResponseWriter: Send + Sync {
    fn write_response(&self, response: &ModelResponse) -> Result<(), Error>;
}
