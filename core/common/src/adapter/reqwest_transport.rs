//! reqwest（blocking）による HttpTransport 実装
//!
//! タイムアウトは設定しない。サーバが応答するか接続エラーになるまでブロックする。

use crate::error::Error;
use crate::ports::outbound::{HttpReply, HttpTransport};
use std::time::Duration;

/// reqwest::blocking::Client を使う HttpTransport 実装
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| Error::system(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn post_json(&self, url: &str, body: &str) -> Result<HttpReply, Error> {
        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .body(body.to_string())
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;
        Ok(HttpReply { status, body })
    }
}
