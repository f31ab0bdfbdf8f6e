//! 標準出力へレスポンスを表示する ResponseWriter

use crate::ports::outbound::ResponseWriter;
use common::error::Error;
use common::llm::ModelResponse;
use std::io::{self, Write};

/// レスポンスの Display（整形 JSON）を 1 回だけ stdout に書き出す
pub struct StdoutResponseWriter;

impl StdoutResponseWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutResponseWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// `writer` にレスポンスと改行を書く
pub(crate) fn write_to<W: Write>(writer: &mut W, response: &ModelResponse) -> Result<(), Error> {
    writeln!(writer, "{}", response)
        .and_then(|_| writer.flush())
        .map_err(|e| Error::io_msg(format!("Failed to write response to stdout: {}", e)))
}

impl ResponseWriter for StdoutResponseWriter {
    fn write_response(&self, response: &ModelResponse) -> Result<(), Error> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        write_to(&mut lock, response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::domain::{ModelId, ResponseId};
    use common::llm::ProviderReply;

    #[test]
    fn test_write_to_buffer() {
        let model = ModelId::parse("ollama/gpt-oss:20b").unwrap();
        let response = ModelResponse::from_reply(
            ResponseId::new("chatcmpl-1"),
            1,
            &model,
            ProviderReply {
                text: "hi".to_string(),
                ..Default::default()
            },
        );
        let mut buf: Vec<u8> = Vec::new();
        write_to(&mut buf, &response).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.ends_with('\n'));
        let v: serde_json::Value = serde_json::from_str(out.trim_end()).unwrap();
        assert_eq!(v["id"], "chatcmpl-1");
        assert_eq!(v["choices"][0]["message"]["content"], "hi");
    }

    struct BrokenPipe;
    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_io_error() {
        let model = ModelId::parse("ollama/x").unwrap();
        let response =
            ModelResponse::from_reply(ResponseId::new("r"), 0, &model, ProviderReply::default());
        let err = write_to(&mut BrokenPipe, &response).unwrap_err();
        assert_eq!(err.exit_code(), 74);
    }
}
