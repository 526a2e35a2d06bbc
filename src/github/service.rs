// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! HTTPS connector for the GitHub REST API.
//!
//! Service structures in this module provide a low-level way to interact
//! with the GitHub API over HTTPS, essentially a specialized HTTPS client
//! specifically for GitHub.

use crate::auth::Auth;
use crate::conf;
use crate::github::SearchQuery;
use crate::http::{self, HTTPResult, HTTPService};
use log::debug;
use reqwest::{Client, RequestBuilder, header};

/// Media type GitHub recommends for REST API requests.
pub const ACCEPT: &str = "application/vnd.github+json";

/// The most results GitHub will return on a single page.
pub const MAX_PER_PAGE: usize = 100;

/// A service for retrieving repositories and events from GitHub.
///
/// Using this trait, clients can implement different ways of connecting
/// to the GitHub API, such as an actual connector for production code,
/// and a mocked connector for testing purposes.
pub trait Service {
    /// Searches for repositories matching `query`, most stars first, and
    /// returns the raw JSON response.
    fn search_repositories(
        &self,
        query: &SearchQuery,
        per_page: usize,
    ) -> impl Future<Output = HTTPResult<String>> + Send;

    /// Retrieves the public events of `username`, most recent first, and
    /// returns the raw JSON response.
    fn user_events(
        &self,
        username: &str,
        per_page: usize,
    ) -> impl Future<Output = HTTPResult<String>> + Send;
}

/// A service that contacts the GitHub API directly to retrieve information.
#[derive(Debug)]
pub struct GitHubService {
    client: Client,
    base_url: String,
    auth: Option<Auth>,
}

impl HTTPService for GitHubService {}

impl GitHubService {
    /// Creates a new GitHub service.
    ///
    /// Requests are authenticated with `auth` if it is given, and sent
    /// anonymously otherwise.
    pub fn new(auth: Option<Auth>) -> HTTPResult<Self> {
        Self::with_base_url(auth, conf::DEFAULT_GITHUB_API_URL)
    }

    /// Creates a new GitHub service that sends requests to `base_url`
    /// instead of the public API.
    pub fn with_base_url(auth: Option<Auth>, base_url: impl Into<String>) -> HTTPResult<Self> {
        let client = Self::client()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            client,
            base_url,
            auth,
        })
    }

    /// True if requests will carry an access token.
    pub fn is_authenticated(&self) -> bool {
        self.auth.is_some()
    }

    fn search_uri(&self) -> String {
        format!("{}/search/repositories", self.base_url)
    }

    fn events_uri(&self, username: &str) -> String {
        format!("{}/users/{username}/events/public", self.base_url)
    }

    fn authorization(&self) -> Option<String> {
        self.auth
            .as_ref()
            .map(|auth| format!("Bearer {}", auth.api_key()))
    }

    fn request(&self, uri: &str) -> RequestBuilder {
        let request = self.client.get(uri).header(header::ACCEPT, ACCEPT);
        match self.authorization() {
            Some(authorization) => request.header(header::AUTHORIZATION, authorization),
            None => request,
        }
    }
}

impl Service for GitHubService {
    async fn search_repositories(&self, query: &SearchQuery, per_page: usize) -> HTTPResult<String> {
        let uri = self.search_uri();
        let terms = query.terms();
        let per_page = clamp_per_page(per_page).to_string();
        debug!("GET {uri} q={query} per_page={per_page}");

        let resp = self
            .request(&uri)
            .query(&[
                ("q", terms.as_str()),
                ("sort", "stars"),
                ("order", "desc"),
                ("per_page", per_page.as_str()),
            ])
            .send()
            .await?;

        http::json_body(resp).await
    }

    async fn user_events(&self, username: &str, per_page: usize) -> HTTPResult<String> {
        let uri = self.events_uri(username);
        let per_page = clamp_per_page(per_page).to_string();
        debug!(
            "GET {uri} per_page={per_page} (authenticated: {})",
            self.is_authenticated()
        );

        let resp = self
            .request(&uri)
            .query(&[("per_page", per_page.as_str())])
            .send()
            .await?;

        http::json_body(resp).await
    }
}

/// Keeps a page size within the range GitHub accepts.
///
/// # Examples
///
/// ```
/// use clifetch::github::service::clamp_per_page;
/// assert_eq!(clamp_per_page(5), 5);
/// assert_eq!(clamp_per_page(0), 1);
/// assert_eq!(clamp_per_page(500), 100);
/// ```
pub fn clamp_per_page(per_page: usize) -> usize {
    per_page.clamp(1, MAX_PER_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_returns_a_search_uri() {
        let service = GitHubService::new(None).unwrap();
        assert_eq!(
            service.search_uri(),
            "https://api.github.com/search/repositories"
        );
    }

    #[test]
    fn it_returns_an_events_uri() {
        let service = GitHubService::new(None).unwrap();
        assert_eq!(
            service.events_uri("ferris"),
            "https://api.github.com/users/ferris/events/public"
        );
    }

    #[test]
    fn it_returns_uris_relative_to_a_custom_base_url() {
        let service = GitHubService::with_base_url(None, "http://127.0.0.1:8080/").unwrap();
        assert_eq!(
            service.events_uri("ferris"),
            "http://127.0.0.1:8080/users/ferris/events/public"
        );
    }

    #[test]
    fn it_sends_no_authorization_without_a_token() {
        let service = GitHubService::new(None).unwrap();
        assert!(!service.is_authenticated());
        assert_eq!(service.authorization(), None);
    }

    #[test]
    fn it_sends_a_bearer_token_when_one_is_available() {
        let service = GitHubService::new(Some(Auth::new("ghp_abc123"))).unwrap();
        assert!(service.is_authenticated());
        assert_eq!(service.authorization(), Some("Bearer ghp_abc123".to_string()));
    }
}
