#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::needless_pass_by_value)]
//! # Stride
//!
//! Entry point for the `stride` binary.
//!
//! `stride show <kind> <name>` resolves a configuration preset and prints it
//! as JSON for the training framework; `stride list` shows every registered
//! preset and its chain of parents.

mod app;
mod cli;
mod watcher;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    app::run(cli)
}
