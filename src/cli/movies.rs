// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! The movie report: `tmdb-cli`.

use crate::auth::Auth;
use crate::cli::{Error, FetchError};
use crate::conf;
use crate::tmdb::{Category, MovieListing, MovieReport, Service, TmdbService};
use crate::view::Viewable;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::warn;
use std::io::{self, Write};

/// Program configuration.
#[derive(Debug, Parser)]
#[command(name = "tmdb-cli", version)]
#[command(about = "Shows movies from The Movie Database", long_about = None)]
pub struct Config {
    #[command(flatten)]
    verbosity: Verbosity,

    /// Category of movies to fetch
    #[arg(long = "type", value_enum)]
    category: Category,

    /// Number of movies to display
    #[arg(long, default_value_t = 1)]
    count: usize,
}

impl Config {
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

/// Runs `tmdb-cli` against the public TMDB API and prints to standard output.
///
/// The API key is read from `$TMDB_API_KEY`; without it no request is made.
pub async fn main(config: Config) -> Result<(), Error> {
    let auth = Auth::from_env(conf::TMDB_API_KEY)
        .map_err(|err| Error::MissingCredential(conf::TMDB_API_KEY, err))?;
    let service = TmdbService::with_base_url(auth, conf::tmdb_api_url())?;
    run(&config, &service, &mut io::stdout()).await?;
    Ok(())
}

/// Fetches the movies described by `config` from `service` and writes the
/// report to `out`.
///
/// Fetch failures are reported in the output and treated as an empty
/// listing; only failures to write `out` are returned.
pub async fn run<S: Service, W: Write>(config: &Config, service: &S, out: &mut W) -> io::Result<()> {
    write!(out, "\n Fetching data from TMDB... ")?;
    out.flush()?;

    let listing = match fetch(service, config.category()).await {
        Ok(listing) => listing,
        Err(err) => {
            warn!("Could not fetch {} movies: {err}", config.category());
            writeln!(out, "Error fetching data: {err}")?;
            MovieListing::default()
        }
    };
    writeln!(out, "Done! ✓")?;

    let report = MovieReport::new(config.category(), listing, config.count());
    writeln!(out, "{}", report.view())
}

async fn fetch<S: Service>(service: &S, category: Category) -> Result<MovieListing, FetchError> {
    let body = service.get_listing(category).await?;
    Ok(MovieListing::parse(&body)?)
}
