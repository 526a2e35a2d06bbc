// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! GitHub API clients and services for communicating with GitHub over HTTP.
//!
//! Two endpoints are used: repository search, for finding recently
//! created repositories with the most stars, and a user's public event
//! feed.

pub mod event;
pub mod repository;
pub mod service;

pub use event::{ActivityReport, Event, EventKind};
pub use repository::{Period, Repository, SearchQuery, SearchResults, TrendingReport};
pub use service::{GitHubService, Service};
