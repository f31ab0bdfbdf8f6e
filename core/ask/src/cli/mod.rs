//! コマンドライン解析

pub mod args;

pub use args::{config_to_command, parse_args, Config};
#[cfg(test)]
pub use args::parse_args_from;
