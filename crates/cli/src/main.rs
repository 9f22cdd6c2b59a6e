// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! tcm: emit TeamCity service messages from test runs

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod libtest;

#[derive(Parser)]
#[command(
    name = "tcm",
    version,
    about = "Detect a TeamCity supervisor and emit service messages"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Exit 0 if running under a TeamCity supervisor, 1 otherwise
    Detect,
    /// Emit a single service message to stdout
    Send {
        /// Message name, e.g. testStarted
        name: String,
        /// Attributes as KEY=VALUE, emitted in the order given
        #[arg(value_name = "KEY=VALUE")]
        attributes: Vec<String>,
    },
    /// Translate libtest JSON events (stdin) into service messages (stdout)
    ///
    /// Feed it `cargo test -- -Z unstable-options --format json`; lines
    /// that are not libtest events pass through unchanged.
    Libtest {
        /// Suite name wrapped around the translated run
        #[arg(long, default_value = "rust")]
        suite_name: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Detect => {
            if !tcm_core::is_under_teamcity() {
                std::process::exit(1);
            }
            Ok(())
        }
        Command::Send { name, attributes } => commands::send(&name, &attributes),
        Command::Libtest { suite_name } => commands::libtest(&suite_name),
    }
}
