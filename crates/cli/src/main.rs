// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Checkpatch CLI entry point.

use tracing_subscriber::{EnvFilter, fmt};

use checkpatch::cli::Cli;
use checkpatch::error::ExitCode;

mod cmd_check;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("CHECKPATCH_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("checkpatch: {}", e);
            match e.downcast_ref::<checkpatch::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse_normalized();
    cmd_check::run(&cli)
}
