// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! clifetch is a small collection of command-line tools that fetch
//! data from public web APIs and print it as formatted text in the
//! terminal.
//!
//! # Examples
//!
//! Show the five most popular movies on The Movie Database:
//!
//! ```bash
//! tmdb-cli --type popular --count 5
//! ```
//!
//! Show the most starred Rust repositories created in the last week:
//!
//! ```bash
//! github-trending --duration weekly --lang rust
//! ```
//!
//! Show a GitHub user's last 20 public events:
//!
//! ```bash
//! github-activity --username octocat --max 20
//! ```
//!
//! Each tool accepts `-v` (repeatable) to log what it is doing to
//! standard error, and `--help` for usage.
//!
//! # API Setup
//!
//! `tmdb-cli` requires a [TMDB API key] in `$TMDB_API_KEY`. Without one
//! it exits before making any request. `github-activity` sends
//! `$GITHUB_API_KEY` as a [personal access token] if it is set, which
//! raises GitHub's rate limit; otherwise it makes anonymous requests.
//! `github-trending` always makes anonymous requests.
//!
//! Both variables may be kept in a `.env` file in the working directory:
//!
//! ```bash
//! TMDB_API_KEY=copied-api-key
//! GITHUB_API_KEY=ghp_copied-token
//! ```
//!
//! # License
//!
//! clifetch is licensed under the terms of the [Apache License 2.0]. Please
//! see the LICENSE file accompanying this source code or visit the previous
//! link for more information on licensing.
//!
//! [Apache License 2.0]: https://www.apache.org/licenses/LICENSE-2.0
//! [TMDB API key]: https://developer.themoviedb.org/docs/getting-started
//! [personal access token]: https://docs.github.com/en/authentication/keeping-your-account-and-data-secure/managing-your-personal-access-tokens

pub mod auth;
pub mod cli;
pub mod clock;
pub mod conf;
pub mod count;
pub mod github;
pub mod http;
pub mod text;
pub mod tmdb;
pub mod view;

#[cfg(test)]
mod test_utils;
