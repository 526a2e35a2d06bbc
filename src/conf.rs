//! Environment and configuration utilities.
//!
//! Configuration is read once, at process start, by each binary and then
//! passed explicitly into services and runners. Nothing in this module
//! caches what it reads.

use log::debug;
use std::env;

/// Environment variable holding the TMDB API key.
pub const TMDB_API_KEY: &str = "TMDB_API_KEY";

/// Environment variable holding an optional GitHub access token.
pub const GITHUB_API_KEY: &str = "GITHUB_API_KEY";

/// Environment variable that overrides the TMDB API base URL.
pub const TMDB_API_URL: &str = "TMDB_API_URL";

/// Environment variable that overrides the GitHub API base URL.
pub const GITHUB_API_URL: &str = "GITHUB_API_URL";

/// Base URL of version 3 of the TMDB API.
pub const DEFAULT_TMDB_API_URL: &str = "https://api.themoviedb.org/3";

/// Base URL of the GitHub REST API.
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Loads variables from a `.env` file in the working directory, if there
/// is one.
///
/// Variables already present in the environment take precedence.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(err) if err.not_found() => debug!("No .env file found"),
        Err(err) => debug!("Could not load .env file: {err}"),
    }
}

/// The TMDB API base URL, without a trailing slash.
///
/// # Examples
///
/// ```
/// use clifetch::conf::{DEFAULT_TMDB_API_URL, tmdb_api_url};
/// # use temp_env::with_var_unset;
/// # with_var_unset("TMDB_API_URL", || {
/// assert_eq!(tmdb_api_url(), DEFAULT_TMDB_API_URL);
/// # });
/// ```
pub fn tmdb_api_url() -> String {
    base_url(TMDB_API_URL, DEFAULT_TMDB_API_URL)
}

/// The GitHub API base URL, without a trailing slash.
///
/// # Examples
///
/// ```
/// use clifetch::conf::github_api_url;
/// # use temp_env::with_var;
/// # with_var("GITHUB_API_URL", Some("http://127.0.0.1:8080/"), || {
/// assert_eq!(github_api_url(), "http://127.0.0.1:8080");
/// # });
/// ```
pub fn github_api_url() -> String {
    base_url(GITHUB_API_URL, DEFAULT_GITHUB_API_URL)
}

fn base_url(envvar: &str, default: &str) -> String {
    let url = env::var(envvar)
        .ok()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| default.to_string());
    url.trim().trim_end_matches('/').to_string()
}
