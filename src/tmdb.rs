// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! The Movie Database (TMDB) API clients and services.
//!
//! Only one endpoint family is used: the per-category movie listings
//! under `/movie/{category}`, which return a page of movies as JSON.

pub mod movie;
pub mod service;

pub use movie::{Category, Movie, MovieListing, MovieReport};
pub use service::{Service, TmdbService};
