//! 配線: 標準アダプタで UseCase を組み立てる

use std::sync::Arc;

use common::adapter::{ReqwestTransport, StdClock, StdIdGenerator};
use common::error::Error;

use crate::adapter::StdoutResponseWriter;
use crate::usecase::AskUseCase;

/// main が使う依存一式
pub struct App {
    pub ask_use_case: AskUseCase,
}

/// 配線: 標準アダプタで App を組み立てる
pub fn wire_ask() -> Result<App, Error> {
    let transport = Arc::new(ReqwestTransport::new()?);
    let ask_use_case = AskUseCase::new(
        transport,
        Arc::new(StdClock),
        Arc::new(StdIdGenerator::new()),
        Arc::new(StdoutResponseWriter::new()),
    );
    Ok(App { ask_use_case })
}
