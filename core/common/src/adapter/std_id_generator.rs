//! ResponseId を生成する IdGenerator の標準実装（chatcmpl-<uuid v4>）

use crate::domain::ResponseId;
use crate::ports::outbound::IdGenerator;

/// レスポンス ID の prefix
pub const RESPONSE_ID_PREFIX: &str = "chatcmpl-";

/// UUID v4 で ResponseId を生成する標準実装
#[derive(Debug, Clone, Default)]
pub struct StdIdGenerator;

impl StdIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for StdIdGenerator {
    fn next_id(&self) -> ResponseId {
        ResponseId::new(format!("{}{}", RESPONSE_ID_PREFIX, uuid::Uuid::new_v4()))
    }
}
