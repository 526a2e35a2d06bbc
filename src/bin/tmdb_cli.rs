// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! tmdb-cli: shows movies from The Movie Database.

use clap::Parser;
use clifetch::cli::{self, movies::Config};
use clifetch::conf;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    conf::load_dotenv();
    let config = Config::parse();
    cli::init_logging(config.verbosity());

    if let Err(err) = cli::movies::main(config).await {
        cli::die(1, &err.to_string());
    }
}
