use crate::domain::AskCommand;
use clap::builder::ArgAction;
use common::error::Error;

/// コマンドライン設定
///
/// リクエストの中身（モデル・メッセージ・URL）を変えるオプションは持たない。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub help: bool,
    /// -V / --version: バージョンを表示
    pub version: bool,
    /// -v / --verbose: 不具合調査用の冗長ログを stderr に出力する
    pub verbose: bool,
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("ask")
        .about("Send one fixed chat message to the local Ollama server and print the response")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("version")
                .short('V')
                .long("version")
                .help("Show version")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Emit verbose debug logs to stderr (for troubleshooting)")
                .action(ArgAction::SetTrue),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    Config {
        help: matches.get_flag("help"),
        version: matches.get_flag("version"),
        verbose: matches.get_flag("verbose"),
    }
}

/// コマンドラインを解析する
pub fn parse_args() -> Result<Config, Error> {
    let matches = build_clap_command()
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// テスト用: 引数スライスから解析する（先頭はプログラム名）
#[allow(dead_code)]
pub fn parse_args_from(args: &[String]) -> Result<Config, Error> {
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// Config を AskCommand に変換する
pub fn config_to_command(config: &Config) -> AskCommand {
    if config.help {
        return AskCommand::Help;
    }
    if config.version {
        return AskCommand::Version;
    }
    AskCommand::Complete
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        std::iter::once("ask")
            .chain(v.iter().copied())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(!config.help);
        assert!(!config.version);
        assert!(!config.verbose);
    }

    #[test]
    fn test_parse_no_args() {
        let config = parse_args_from(&args(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config_to_command(&config), AskCommand::Complete);
    }

    #[test]
    fn test_parse_flags() {
        let config = parse_args_from(&args(&["-v"])).unwrap();
        assert!(config.verbose);
        assert_eq!(config_to_command(&config), AskCommand::Complete);

        let config = parse_args_from(&args(&["--help"])).unwrap();
        assert_eq!(config_to_command(&config), AskCommand::Help);

        let config = parse_args_from(&args(&["-V"])).unwrap();
        assert_eq!(config_to_command(&config), AskCommand::Version);
    }

    #[test]
    fn test_help_wins_over_version() {
        let config = parse_args_from(&args(&["-V", "-h"])).unwrap();
        assert_eq!(config_to_command(&config), AskCommand::Help);
    }

    #[test]
    fn test_parse_rejects_request_overrides() {
        for extra in [&["--model", "ollama/llama3"][..], &["hello"][..], &["--api-base", "http://x"][..]] {
            let err = parse_args_from(&args(extra)).unwrap_err();
            assert_eq!(err.exit_code(), 64);
            assert!(err.is_usage());
        }
    }
}
