use anyhow::Result;
use clap::Parser;
use env_logger::{Builder, Env};
use keyspan::cli::{self as lib_cli, EXIT_OK};

mod cli;
mod util;
mod cmd_bounds;
mod cmd_dump;
mod cmd_contains;
mod cmd_split_check;
mod cmd_overlaps;
mod cmd_verify;

fn init_logger() {
    // Уровень берём из RUST_LOG, иначе дефолт: info.
    // Пример: RUST_LOG=debug keyspan verify
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn main() {
    init_logger();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("error: {:#}", e);
            std::process::exit(lib_cli::EXIT_FAILURE);
        }
    }
}

/// Returns the process exit code (split-check reports "protected" as 2, not as an error).
fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    match cli.cmd {
        cli::Cmd::Bounds { json } => cmd_bounds::exec(json).map(|_| EXIT_OK),

        cli::Cmd::Dump { set, json } => cmd_dump::exec(set, json).map(|_| EXIT_OK),

        cli::Cmd::Contains { key, set, json } => cmd_contains::exec(key, set, json).map(|_| EXIT_OK),

        cli::Cmd::SplitCheck { key, set, json } => cmd_split_check::exec(key, set, json),

        cli::Cmd::Overlaps { start, end, set, json } =>
            cmd_overlaps::exec(start, end, set, json).map(|_| EXIT_OK),

        cli::Cmd::Verify { json } => cmd_verify::exec(json),
    }
}
