// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use portico::Cli;

fn main() {
    let cli = Cli::parse();
    portico::logging::init();
    if let Err(e) = portico::run(cli) {
        tracing::debug!("command failed: {:?}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
