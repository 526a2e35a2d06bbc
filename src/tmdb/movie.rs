// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Movies and movie listings.

use clap::ValueEnum;
use log::trace;
use serde::Deserialize;
use std::fmt;

/// A category of movie listings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Category {
    /// Movies currently in theaters.
    Playing,

    /// Movies ordered by popularity.
    Popular,

    /// Movies ordered by rating.
    Top,

    /// Movies that will be released soon.
    Upcoming,
}

impl Category {
    /// Every category, in the order they are listed in `--help`.
    pub const ALL: [Category; 4] = [
        Category::Playing,
        Category::Popular,
        Category::Top,
        Category::Upcoming,
    ];

    /// The path segment of the TMDB endpoint that lists movies in this
    /// category.
    ///
    /// # Examples
    ///
    /// ```
    /// use clifetch::tmdb::Category;
    /// assert_eq!(Category::Top.endpoint(), "top_rated");
    /// ```
    pub fn endpoint(&self) -> &'static str {
        match self {
            Category::Playing => "now_playing",
            Category::Popular => "popular",
            Category::Top => "top_rated",
            Category::Upcoming => "upcoming",
        }
    }

    /// The name of the category as it is given on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Playing => "playing",
            Category::Popular => "popular",
            Category::Top => "top",
            Category::Upcoming => "upcoming",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single movie from a TMDB listing.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Movie {
    title: String,

    #[serde(default)]
    release_date: Option<String>,

    vote_average: f64,

    #[serde(default)]
    overview: Option<String>,
}

impl Movie {
    /// The movie's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The movie's release date as reported by TMDB, usually `YYYY-MM-DD`.
    ///
    /// TMDB sometimes sends an empty string for movies without a release
    /// date; that is treated the same as a missing date.
    pub fn release_date(&self) -> Option<&str> {
        non_empty(&self.release_date)
    }

    /// The average user rating, from 0 to 10.
    pub fn rating(&self) -> f64 {
        self.vote_average
    }

    /// A short synopsis of the movie.
    pub fn overview(&self) -> Option<&str> {
        non_empty(&self.overview)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// One page of movies from a TMDB listing endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct MovieListing {
    #[serde(default)]
    results: Vec<Movie>,
}

impl MovieListing {
    /// Parses a JSON response from a TMDB listing endpoint.
    pub fn parse(data: &str) -> serde_json::Result<Self> {
        let listing: MovieListing = serde_json::from_str(data)?;
        trace!("Parsed {} movies", listing.results.len());
        Ok(listing)
    }

    /// Movies in the listing, in the order TMDB returned them.
    pub fn movies(&self) -> impl Iterator<Item = &Movie> {
        self.results.iter()
    }

    /// Number of movies in the listing.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// True if TMDB returned no movies.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// The movies shown for a single run of the movie report.
#[derive(Debug)]
pub struct MovieReport {
    category: Category,
    movies: Vec<Movie>,
}

impl MovieReport {
    /// Builds a report from at most `limit` movies of the `listing`.
    pub fn new(category: Category, listing: MovieListing, limit: usize) -> Self {
        let movies = listing.results.into_iter().take(limit).collect();
        Self { category, movies }
    }

    /// The category the movies were listed from.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The movies that will be shown.
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }
}
