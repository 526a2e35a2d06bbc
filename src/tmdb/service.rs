// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! HTTPS connector for the TMDB API.

use crate::auth::Auth;
use crate::conf;
use crate::http::{self, HTTPError, HTTPResult, HTTPService};
use crate::tmdb::Category;
use log::debug;
use reqwest::Client;

/// Listings are always requested in this language.
pub const LANGUAGE: &str = "en-US";

/// A service for retrieving movie listings.
///
/// Using this trait, clients can implement different ways of connecting
/// to the TMDB API, such as an actual connector for production code,
/// and a mocked connector for testing purposes.
pub trait Service {
    /// Retrieves the first page of movies in `category` as a raw JSON
    /// response.
    fn get_listing(&self, category: Category) -> impl Future<Output = HTTPResult<String>> + Send;
}

/// A service that contacts the TMDB API directly to retrieve information.
#[derive(Debug)]
pub struct TmdbService {
    client: Client,
    base_url: String,
    auth: Auth,
}

impl HTTPService for TmdbService {}

impl TmdbService {
    /// Creates a new TMDB service that authenticates with `auth`.
    pub fn new(auth: Auth) -> HTTPResult<Self> {
        Self::with_base_url(auth, conf::DEFAULT_TMDB_API_URL)
    }

    /// Creates a new TMDB service that sends requests to `base_url`
    /// instead of the public API.
    pub fn with_base_url(auth: Auth, base_url: impl Into<String>) -> HTTPResult<Self> {
        let client = Self::client()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            client,
            base_url,
            auth,
        })
    }

    fn uri(&self, category: Category) -> String {
        format!("{}/movie/{}", self.base_url, category.endpoint())
    }

    fn query(&self) -> [(&str, &str); 3] {
        [
            ("api_key", self.auth.api_key()),
            ("language", LANGUAGE),
            ("page", "1"),
        ]
    }
}

impl Service for TmdbService {
    async fn get_listing(&self, category: Category) -> HTTPResult<String> {
        let uri = self.uri(category);
        debug!("GET {uri}");

        // The key travels in the query string, so keep URLs out of errors.
        let resp = self
            .client
            .get(&uri)
            .query(&self.query())
            .send()
            .await
            .map_err(|err| HTTPError::Request(err.without_url()))?;

        http::json_body(resp).await
    }
}
