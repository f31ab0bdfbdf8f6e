//! Outbound ポート: ライブラリが外界（HTTP・時刻・ID）を使うための trait

pub mod clock;
pub mod http_transport;
pub mod id_generator;
pub mod llm_provider;

pub use clock::Clock;
pub use http_transport::{HttpReply, HttpTransport};
pub use id_generator::IdGenerator;
pub use llm_provider::CompletionProvider;
