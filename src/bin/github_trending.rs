// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! github-trending: shows recently created GitHub repositories with the most stars.

use clap::Parser;
use clifetch::cli::{self, trending::Config};
use clifetch::conf;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    conf::load_dotenv();
    let config = Config::parse();
    cli::init_logging(config.verbosity());

    if let Err(err) = cli::trending::main(config).await {
        cli::die(1, &err.to_string());
    }
}
