//! ログ初期化（tracing + tracing-subscriber）
//!
//! 出力先は stderr のみ。stdout はレスポンス表示専用に空けておく。

use tracing_subscriber::{fmt, EnvFilter};

/// デフォルトのフィルタ
pub const DEFAULT_FILTER: &str = "warn";
/// -v 指定時のフィルタ
pub const VERBOSE_FILTER: &str = "debug";

/// RUST_LOG があればそれを、なければ verbose に応じたフィルタを返す
pub fn filter_directive(rust_log: Option<&str>, verbose: bool) -> String {
    match rust_log.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => s.to_string(),
        None if verbose => VERBOSE_FILTER.to_string(),
        None => DEFAULT_FILTER.to_string(),
    }
}

/// グローバル subscriber を設定する（2 回目以降は何もしない）
pub fn init_tracing(verbose: bool) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let directive = filter_directive(rust_log.as_deref(), verbose);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive(None, false), "warn");
        assert_eq!(filter_directive(None, true), "debug");
        assert_eq!(filter_directive(Some("common=trace"), false), "common=trace");
        assert_eq!(filter_directive(Some("  "), true), "debug");
    }

    #[test]
    fn test_init_tracing_twice() {
        init_tracing(false);
        init_tracing(true);
    }
}
