// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Drives the command-line programs.
//!
//! Each program has its own submodule holding its [`clap`] configuration
//! and a `run` function that writes the report to any [`std::io::Write`].
//! The binaries under `src/bin` only parse arguments, set up logging, and
//! report fatal errors with [`die()`].

pub mod activity;
pub mod movies;
pub mod trending;

use crate::auth::AuthError;
use crate::http::HTTPError;
use clap_verbosity_flag::Verbosity;
use std::{io, process};
use thiserror::Error;

/// Prints `message` to standard error and exits with `error_code`.
pub fn die(error_code: i32, message: &str) -> ! {
    eprintln!("{}", message);
    process::exit(error_code);
}

/// Sends log output to standard error at the level chosen by `verbosity`.
///
/// `$RUST_LOG`, if set, takes precedence.
pub fn init_logging(verbosity: Verbosity) {
    let _ = env_logger::Builder::new()
        .filter_level(verbosity.log_level_filter())
        .parse_default_env()
        .try_init();
}

/// Reasons a program can stop before printing its report.
#[derive(Debug, Error)]
pub enum Error {
    /// A required API key is not available.
    #[error("Error: {0} not found in environment. Check your .env file.")]
    MissingCredential(&'static str, #[source] AuthError),

    /// The HTTP client could not be set up.
    #[error("Error: {0}")]
    Service(#[from] HTTPError),

    /// The report could not be written.
    #[error("Error: Could not write output: {0}")]
    Output(#[from] io::Error),

    /// The activity feed could not be retrieved.
    #[error(transparent)]
    Activity(#[from] activity::Error),
}

/// An error retrieving or parsing a single API response.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request failed or returned an unsuccessful response.
    #[error(transparent)]
    Service(#[from] HTTPError),

    /// The response body was not the JSON that was expected.
    #[error("Could not parse response: {0}")]
    Parse(#[from] serde_json::Error),
}
