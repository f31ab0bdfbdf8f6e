//! 補完要求ユースケース
//!
//! 固定リクエストを 1 回だけ送り、結果を ResponseWriter に渡す。リトライ・フォールバックはしない。

use crate::domain::fixed_request;
use crate::ports::outbound::ResponseWriter;
use common::error::Error;
use common::llm::{completion, CompletionDeps, ModelResponse};
use common::ports::outbound::{Clock, HttpTransport, IdGenerator};
use std::sync::Arc;

pub struct AskUseCase {
    transport: Arc<dyn HttpTransport>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    writer: Arc<dyn ResponseWriter>,
}

impl AskUseCase {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
        writer: Arc<dyn ResponseWriter>,
    ) -> Self {
        Self {
            transport,
            clock,
            ids,
            writer,
        }
    }

    /// 補完を 1 回実行して表示する
    pub fn run(&self) -> Result<ModelResponse, Error> {
        let request = fixed_request()?;
        let deps = CompletionDeps {
            transport: self.transport.as_ref(),
            clock: self.clock.as_ref(),
            ids: self.ids.as_ref(),
        };
        let response = completion(&request, &deps)?;
        self.writer.write_response(&response)?;
        Ok(response)
    }
}
