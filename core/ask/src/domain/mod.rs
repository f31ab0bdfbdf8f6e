//! ask 固有のドメイン型（型と不変条件）

pub mod command;
pub mod fixed_request;

pub use command::AskCommand;
pub use fixed_request::{fixed_request, FIXED_API_BASE, FIXED_MODEL_ID, FIXED_PROMPT};
