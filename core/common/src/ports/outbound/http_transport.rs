//! HTTP 送信 Outbound ポート
//!
//! ドライバはこの trait 経由でのみネットワークに触れる。テストでは固定レスポンスを返す実装を渡す。

use crate::error::Error;

/// HTTP レスポンス（ステータスと本文）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// JSON を POST する抽象（Outbound ポート）
///
/// 実装は `common::adapter::ReqwestTransport` やテスト用のモックなど。
/// 接続できなかった場合は `Error::Http`。非 2xx は Err ではなく HttpReply で返す。
pub trait HttpTransport: Send + Sync {
    fn post_json(&self, url: &str, body: &str) -> Result<HttpReply, Error>;
}
