use super::fakes::{use_case, BufferWriter, RecordingTransport, GENERATE_OK};
use crate::cli::{parse_args_from, Config};
use crate::ports::inbound::UseCaseRunner;
use crate::wiring::App;
use common::error::Error;
use std::sync::Arc;

/// 固定実装で App を組み立て、Runner で run する
fn run_app(config: Config, transport: Arc<RecordingTransport>) -> Result<i32, Error> {
    let app = App {
        ask_use_case: use_case(transport, Arc::new(BufferWriter::default())),
    };
    let runner = crate::Runner { app };
    runner.run(config)
}

#[test]
fn test_run_app_with_help() {
    let transport = Arc::new(RecordingTransport::replying(200, GENERATE_OK));
    let config = Config {
        help: true,
        ..Default::default()
    };
    assert_eq!(run_app(config, Arc::clone(&transport)).unwrap(), 0);
    assert!(transport.calls().is_empty());
}

#[test]
fn test_run_app_with_version() {
    let transport = Arc::new(RecordingTransport::replying(200, GENERATE_OK));
    let config = Config {
        version: true,
        ..Default::default()
    };
    assert_eq!(run_app(config, Arc::clone(&transport)).unwrap(), 0);
    assert!(transport.calls().is_empty());
}

#[test]
fn test_run_app_success_exits_zero() {
    let transport = Arc::new(RecordingTransport::replying(200, GENERATE_OK));
    assert_eq!(run_app(Config::default(), Arc::clone(&transport)).unwrap(), 0);
    assert_eq!(transport.calls().len(), 1);
}

#[test]
fn test_run_app_verbose_does_not_change_request() {
    let quiet = Arc::new(RecordingTransport::replying(200, GENERATE_OK));
    let verbose = Arc::new(RecordingTransport::replying(200, GENERATE_OK));
    let config = parse_args_from(&["ask".to_string(), "-v".to_string()]).unwrap();
    run_app(Config::default(), Arc::clone(&quiet)).unwrap();
    run_app(config, Arc::clone(&verbose)).unwrap();
    assert_eq!(quiet.calls(), verbose.calls());
}

#[test]
fn test_run_app_unreachable_server_fails() {
    let transport = Arc::new(RecordingTransport::failing(Error::http(
        "HTTP request failed: connection refused",
    )));
    let err = run_app(Config::default(), transport).unwrap_err();
    assert_ne!(err.exit_code(), 0);
    assert!(!err.is_usage());
}
