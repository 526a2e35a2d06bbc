// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! The public activity report: `github-activity`.
//!
//! Unlike the other programs, a failed request here is fatal: the
//! program exits with an error describing what went wrong.

use crate::auth::Auth;
use crate::conf;
use crate::github::{ActivityReport, Event, GitHubService, Service};
use crate::http::HTTPError;
use crate::view::Viewable;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::debug;
use reqwest::StatusCode;
use std::io::{self, Write};
use thiserror::Error;

/// Program configuration.
#[derive(Debug, Parser)]
#[command(name = "github-activity", version)]
#[command(about = "Shows a GitHub user's recent public activity", long_about = None)]
pub struct Config {
    #[command(flatten)]
    verbosity: Verbosity,

    /// GitHub username to look up
    #[arg(long)]
    username: String,

    /// Maximum number of events to display
    #[arg(long, default_value_t = 10)]
    max: usize,
}

impl Config {
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn max(&self) -> usize {
        self.max
    }
}

// GitHub usernames are alphanumerics and hyphens; anything else would
// change the path of the request.
fn is_valid_username(username: &str) -> bool {
    !username.is_empty()
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Reasons the activity report could not be produced.
#[derive(Debug, Error)]
pub enum Error {
    /// The username cannot name a GitHub account, so it was never requested.
    #[error("Error: Could not fetch data for '{0}'. Invalid GitHub username.")]
    InvalidUsername(String),

    /// GitHub could not be reached.
    #[error("Error: Could not connect to GitHub API. {0}")]
    Connection(#[source] HTTPError),

    /// GitHub answered with an unsuccessful status.
    #[error(
        "Error: Could not fetch data for '{username}'. Status code: {}{}",
        .status.as_u16(),
        status_hint(.status)
    )]
    Status { username: String, status: StatusCode },

    /// GitHub answered with something other than JSON.
    #[error("Error: Unexpected response from GitHub API. {0}")]
    Response(#[source] HTTPError),

    /// The response was JSON, but not a list of events.
    #[error("Error: Could not parse response from GitHub API. {0}")]
    Parse(#[from] serde_json::Error),

    /// The report could not be written.
    #[error("Error: Could not write output: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Classifies an error returned while fetching the events of `username`.
    pub fn from_http(username: &str, err: HTTPError) -> Self {
        match err {
            HTTPError::Http(status) => Self::Status {
                username: username.to_string(),
                status,
            },
            err if err.is_transport() => Self::Connection(err),
            err => Self::Response(err),
        }
    }
}

fn status_hint(status: &StatusCode) -> &'static str {
    match *status {
        StatusCode::NOT_FOUND => "\nUser not found.",
        StatusCode::FORBIDDEN => "\nAPI rate limit exceeded. Please try again later.",
        _ => "",
    }
}

/// Runs `github-activity` against the public GitHub API and prints to
/// standard output.
///
/// Requests are authenticated with `$GITHUB_API_KEY` when it is set.
pub async fn main(config: Config) -> Result<(), crate::cli::Error> {
    let auth = Auth::optional_from_env(conf::GITHUB_API_KEY);
    let service = GitHubService::with_base_url(auth, conf::github_api_url())?;
    run(&config, &service, &mut io::stdout()).await?;
    Ok(())
}

/// Fetches the public events of the user named in `config` and writes
/// the report to `out`.
pub async fn run<S: Service, W: Write>(config: &Config, service: &S, out: &mut W) -> Result<(), Error> {
    let username = config.username();
    if !is_valid_username(username) {
        return Err(Error::InvalidUsername(username.to_string()));
    }

    let body = service
        .user_events(username, config.max())
        .await
        .map_err(|err| Error::from_http(username, err))?;
    let events = Event::parse_all(&body)?;
    debug!("Retrieved {} events for {username}", events.len());

    if events.is_empty() {
        writeln!(out, "No recent public activity found.")?;
        return Ok(());
    }

    let report = ActivityReport::new(username, events, config.max());
    writeln!(out, "{}", report.view())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{TestService, do_logging, load_output};

    fn config(args: &[&str]) -> Config {
        let args = ["github-activity"].iter().chain(args.iter());
        Config::try_parse_from(args).expect("invalid arguments")
    }

    async fn output(config: &Config, service: &TestService<'_>) -> Result<String, Error> {
        let mut out = Vec::new();
        run(config, service, &mut out).await?;
        Ok(String::from_utf8(out).expect("output is not UTF-8"))
    }

    mod config {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn it_requires_a_username() {
            assert!(Config::try_parse_from(["github-activity"]).is_err());
        }

        #[test]
        fn it_shows_ten_events_by_default() {
            let config = config(&["--username", "ferris"]);
            assert_eq!(config.username(), "ferris");
            assert_eq!(config.max(), 10);
        }

        #[test]
        fn it_accepts_a_maximum() {
            let config = config(&["--username", "rust-lang", "--max", "3"]);
            assert_eq!(config.username(), "rust-lang");
            assert_eq!(config.max(), 3);
        }

        #[test]
        fn it_accepts_any_username() {
            let config = config(&["--username", "ferris/../octo"]);
            assert_eq!(config.username(), "ferris/../octo");
        }
    }

    mod errors {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn it_explains_missing_users() {
            let err = Error::from_http("ghost", HTTPError::Http(StatusCode::NOT_FOUND));
            assert_eq!(
                err.to_string(),
                "Error: Could not fetch data for 'ghost'. Status code: 404\nUser not found."
            );
        }

        #[test]
        fn it_explains_rate_limits() {
            let err = Error::from_http("ferris", HTTPError::Http(StatusCode::FORBIDDEN));
            assert_eq!(
                err.to_string(),
                "Error: Could not fetch data for 'ferris'. Status code: 403\nAPI rate limit exceeded. Please try again later."
            );
        }

        #[test]
        fn it_reports_other_statuses_by_code() {
            let err = Error::from_http("ferris", HTTPError::Http(StatusCode::BAD_GATEWAY));
            assert_eq!(
                err.to_string(),
                "Error: Could not fetch data for 'ferris'. Status code: 502"
            );
        }

        #[test]
        fn it_separates_content_problems_from_connection_problems() {
            let err = Error::from_http("ferris", HTTPError::MissingContentType);
            assert!(matches!(err, Error::Response(_)));
        }
    }

    mod run {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn it_prints_an_activity_report() {
            do_logging();
            let config = config(&["--username", "ferris"]);
            let actual = output(&config, &TestService::new("github_events"))
                .await
                .expect("activity report failed");
            assert_eq!(actual.trim_end(), load_output("github_activity"));
        }

        #[tokio::test]
        async fn it_prints_at_most_max_events() {
            let config = config(&["--username", "ferris", "--max", "2"]);
            let actual = output(&config, &TestService::new("github_events"))
                .await
                .expect("activity report failed");
            assert_eq!(actual.matches("• ").count(), 2);
            assert!(actual.contains("Last 2 public events for ferris"));
        }

        #[tokio::test]
        async fn it_succeeds_without_events() {
            let config = config(&["--username", "ferris"]);
            let actual = output(&config, &TestService::new("github_events_empty"))
                .await
                .expect("activity report failed");
            assert_eq!(actual, "No recent public activity found.\n");
        }

        #[tokio::test]
        async fn it_fails_for_unsuccessful_statuses() {
            let config = config(&["--username", "ferris"]);
            for (suffix, status) in [
                ("404", StatusCode::NOT_FOUND),
                ("403", StatusCode::FORBIDDEN),
                ("500", StatusCode::INTERNAL_SERVER_ERROR),
            ] {
                let err = output(&config, &TestService::new(suffix))
                    .await
                    .expect_err("unsuccessful status was accepted");
                match err {
                    Error::Status { status: actual, .. } => assert_eq!(actual, status),
                    err => panic!("unexpected error: {err:?}"),
                }
            }
        }

        #[tokio::test]
        async fn it_fails_for_usernames_that_are_not_path_safe() {
            for username in ["", "ferris/../octo", "fer ris"] {
                let config = config(&["--username", username]);
                let err = output(&config, &TestService::new("github_events"))
                    .await
                    .expect_err("unsafe username was requested");
                assert!(
                    matches!(&err, Error::InvalidUsername(name) if name == username),
                    "unexpected error for {username:?}: {err:?}"
                );
            }
        }

        #[tokio::test]
        async fn it_fails_for_unparseable_responses() {
            let config = config(&["--username", "ferris"]);
            let err = output(&config, &TestService::new("garbage"))
                .await
                .expect_err("invalid JSON was accepted");
            assert!(matches!(err, Error::Parse(_)));
        }
    }
}
