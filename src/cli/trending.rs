// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! The trending repository report: `github-trending`.

use crate::cli::{Error, FetchError};
use crate::clock::{Clock, SystemClock};
use crate::conf;
use crate::github::{GitHubService, Period, SearchQuery, SearchResults, Service, TrendingReport};
use crate::view::Viewable;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::{debug, warn};
use std::io::{self, Write};

/// Program configuration.
#[derive(Debug, Parser)]
#[command(name = "github-trending", version)]
#[command(about = "Shows the most starred GitHub repositories created recently", long_about = None)]
pub struct Config {
    #[command(flatten)]
    verbosity: Verbosity,

    /// Time range for trending repositories
    #[arg(long, value_enum, default_value_t = Period::Daily)]
    duration: Period,

    /// Programming language to filter by (e.g., python, javascript)
    #[arg(long, default_value = "")]
    lang: String,

    /// Number of repositories to display
    #[arg(long, default_value_t = 5)]
    count: usize,
}

impl Config {
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    pub fn duration(&self) -> Period {
        self.duration
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

/// Runs `github-trending` against the public GitHub API and prints to
/// standard output.
pub async fn main(config: Config) -> Result<(), Error> {
    let service = GitHubService::with_base_url(None, conf::github_api_url())?;
    run(&config, &service, &SystemClock, &mut io::stdout()).await?;
    Ok(())
}

/// Searches `service` for the repositories described by `config`, using
/// `clock` to find the cutoff date, and writes the report to `out`.
///
/// Fetch failures are reported in the output and treated as an empty
/// result; only failures to write `out` are returned.
pub async fn run<S, C, W>(config: &Config, service: &S, clock: &C, out: &mut W) -> io::Result<()>
where
    S: Service,
    C: Clock,
    W: Write,
{
    let query = SearchQuery::new(config.duration(), config.lang(), clock);
    debug!("Searching for {query}");

    write!(out, "\n Fetching data from GitHub... ")?;
    out.flush()?;

    let results = match fetch(service, &query, config.count()).await {
        Ok(results) => results,
        Err(err) => {
            warn!("Could not search for {query}: {err}");
            writeln!(out, "Error fetching data: {err}")?;
            SearchResults::default()
        }
    };
    writeln!(out, "Done! ✓")?;

    let report = TrendingReport::new(&query, config.duration(), results, config.count());
    writeln!(out, "{}", report.view())
}

async fn fetch<S: Service>(
    service: &S,
    query: &SearchQuery,
    per_page: usize,
) -> Result<SearchResults, FetchError> {
    let body = service.search_repositories(query, per_page).await?;
    Ok(SearchResults::parse(&body)?)
}
