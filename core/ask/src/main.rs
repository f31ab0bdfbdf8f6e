mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use cli::{config_to_command, parse_args, Config};
use common::error::Error;
use common::logging::init_tracing;
use domain::{AskCommand, FIXED_API_BASE, FIXED_MODEL_ID, FIXED_PROMPT};
use ports::inbound::UseCaseRunner;
use std::process;
use wiring::{wire_ask, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        match config_to_command(&config) {
            AskCommand::Help => {
                print_help();
                Ok(0)
            }
            AskCommand::Version => {
                println!("ask {}", env!("CARGO_PKG_VERSION"));
                Ok(0)
            }
            AskCommand::Complete => {
                tracing::info!(model = FIXED_MODEL_ID, api_base = FIXED_API_BASE, "command started");
                match self.app.ask_use_case.run() {
                    Ok(_) => Ok(0),
                    Err(e) => {
                        tracing::error!(exit_code = e.exit_code(), error = %e, "completion failed");
                        Err(e)
                    }
                }
            }
        }
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("ask: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = parse_args()?;
    init_tracing(config.verbose);
    let app = wire_ask()?;
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: ask [-h] [-V] [-v]");
}

fn print_help() {
    println!("Usage: ask [options]");
    println!("Options:");
    println!("  -h, --help       Show this help message");
    println!("  -V, --version    Show version");
    println!("  -v, --verbose    Emit debug logs to stderr");
    println!();
    println!("Environment:");
    println!("  RUST_LOG         Log filter for stderr (e.g. debug). Does not change the request.");
    println!();
    println!("Description:");
    println!("  Send one fixed message to the local Ollama server and print the response.");
    println!("    model:    {}", FIXED_MODEL_ID);
    println!("    api_base: {}", FIXED_API_BASE);
    println!("    message:  user: {}", FIXED_PROMPT);
}
