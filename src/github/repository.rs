// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Repository search.

use crate::clock::{Clock, DateTime, Utc};
use clap::ValueEnum;
use log::trace;
use serde::Deserialize;
use std::fmt;

/// How far back to look for newly created repositories.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Period {
    /// Repositories created in the last day.
    #[default]
    Daily,

    /// Repositories created in the last week.
    Weekly,

    /// Repositories created in the last 30 days.
    Monthly,
}

impl Period {
    /// Length of the period in days.
    pub fn days(&self) -> i64 {
        match self {
            Period::Daily => 1,
            Period::Weekly => 7,
            Period::Monthly => 30,
        }
    }

    /// The earliest creation time included in the period, counting back
    /// from the current time of `clock`.
    pub fn cutoff<C: Clock>(&self, clock: &C) -> DateTime<Utc> {
        clock.days_ago(self.days())
    }

    /// The name of the period as it is given on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A GitHub repository search for repositories created after a cutoff
/// date, optionally restricted to one language.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchQuery {
    cutoff: DateTime<Utc>,
    language: Option<String>,
}

impl SearchQuery {
    /// Builds a query for repositories created during `period`.
    ///
    /// An empty `language` means repositories in any language.
    pub fn new<C: Clock>(period: Period, language: &str, clock: &C) -> Self {
        let cutoff = period.cutoff(clock);
        let language = Some(language.trim())
            .filter(|lang| !lang.is_empty())
            .map(String::from);
        Self { cutoff, language }
    }

    /// The cutoff date in the `YYYY-MM-DD` format GitHub expects.
    pub fn cutoff_date(&self) -> String {
        self.cutoff.format("%Y-%m-%d").to_string()
    }

    /// The language filter, if any.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// The individual search qualifiers, such as `created:>2025-05-22`.
    pub fn qualifiers(&self) -> Vec<String> {
        let mut qualifiers = vec![format!("created:>{}", self.cutoff_date())];
        if let Some(language) = &self.language {
            qualifiers.push(format!("language:{language}"));
        }
        qualifiers
    }

    /// The value of the `q` parameter before URL encoding.
    ///
    /// Qualifiers are separated by spaces, which become the `+` of
    /// [`SearchQuery`]'s display form once encoded.
    pub fn terms(&self) -> String {
        self.qualifiers().join(" ")
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qualifiers().join("+"))
    }
}

/// A repository returned by a GitHub search.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Repository {
    #[serde(default = "not_available")]
    full_name: String,

    #[serde(default)]
    stargazers_count: u64,

    #[serde(default)]
    forks_count: u64,

    #[serde(default)]
    language: Option<String>,

    #[serde(default)]
    description: Option<String>,

    #[serde(default)]
    html_url: String,
}

fn not_available() -> String {
    String::from("N/A")
}

impl Repository {
    /// The repository's name, including its owner, like `rust-lang/rust`.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Number of stars.
    pub fn stars(&self) -> u64 {
        self.stargazers_count
    }

    /// Number of forks.
    pub fn forks(&self) -> u64 {
        self.forks_count
    }

    /// The repository's primary language, if GitHub detected one.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// The repository's description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|s| !s.is_empty())
    }

    /// Web URL of the repository.
    pub fn url(&self) -> &str {
        &self.html_url
    }
}

/// One page of GitHub repository search results.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    items: Vec<Repository>,
}

impl SearchResults {
    /// Parses a JSON response from the repository search endpoint.
    pub fn parse(data: &str) -> serde_json::Result<Self> {
        let results: SearchResults = serde_json::from_str(data)?;
        trace!("Parsed {} repositories", results.items.len());
        Ok(results)
    }

    /// Repositories in the order GitHub ranked them.
    pub fn repositories(&self) -> impl Iterator<Item = &Repository> {
        self.items.iter()
    }

    /// Number of repositories returned.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the search matched nothing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The repositories shown for a single run of the trending report.
#[derive(Debug)]
pub struct TrendingReport {
    period: Period,
    language: Option<String>,
    repositories: Vec<Repository>,
}

impl TrendingReport {
    /// Builds a report from at most `limit` of the search `results`.
    pub fn new(query: &SearchQuery, period: Period, results: SearchResults, limit: usize) -> Self {
        let repositories = results.items.into_iter().take(limit).collect();
        let language = query.language().map(String::from);
        Self {
            period,
            language,
            repositories,
        }
    }

    /// The period the repositories were created in.
    pub fn period(&self) -> Period {
        self.period
    }

    /// The language filter, if any.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// The repositories that will be shown.
    pub fn repositories(&self) -> &[Repository] {
        &self.repositories
    }
}

#[cfg(test)]
mod tests {
    mod period {
        use crate::clock::{Clock, TimeDelta};
        use crate::github::Period;
        use crate::test_utils::FrozenClock;

        #[test]
        fn it_defaults_to_daily() {
            assert_eq!(Period::default(), Period::Daily);
        }

        #[test]
        fn it_cuts_off_daily_searches_one_day_ago() {
            let clock = FrozenClock::default();
            let delta = clock.now() - Period::Daily.cutoff(&clock);
            assert_eq!(delta, TimeDelta::days(1));
        }

        #[test]
        fn it_cuts_off_weekly_searches_seven_days_ago() {
            let clock = FrozenClock::default();
            let delta = clock.now() - Period::Weekly.cutoff(&clock);
            assert_eq!(delta, TimeDelta::days(7));
        }

        #[test]
        fn it_cuts_off_monthly_searches_thirty_days_ago() {
            let clock = FrozenClock::default();
            let delta = clock.now() - Period::Monthly.cutoff(&clock);
            assert_eq!(delta, TimeDelta::days(30));
        }
    }

    mod search_query {
        use crate::github::{Period, SearchQuery};
        use crate::test_utils::FrozenClock;
        use pretty_assertions::assert_eq;

        #[test]
        fn it_formats_the_cutoff_date() {
            let query = SearchQuery::new(Period::Daily, "", &FrozenClock::default());
            assert_eq!(query.cutoff_date(), "2025-05-22");
        }

        #[test]
        fn it_builds_an_unfiltered_query() {
            let query = SearchQuery::new(Period::Weekly, "", &FrozenClock::default());
            assert_eq!(query.to_string(), "created:>2025-05-16");
            assert_eq!(query.language(), None);
        }

        #[test]
        fn it_builds_a_query_filtered_by_language() {
            let query = SearchQuery::new(Period::Monthly, "rust", &FrozenClock::default());
            assert_eq!(query.to_string(), "created:>2025-04-23+language:rust");
            assert_eq!(query.language(), Some("rust"));
        }

        #[test]
        fn it_ignores_blank_languages() {
            let query = SearchQuery::new(Period::Daily, "   ", &FrozenClock::default());
            assert_eq!(query.language(), None);
        }

        #[test]
        fn it_separates_terms_with_spaces_for_encoding() {
            let query = SearchQuery::new(Period::Daily, "python", &FrozenClock::default());
            assert_eq!(query.terms(), "created:>2025-05-22 language:python");
        }
    }

    mod results {
        use crate::github::SearchResults;
        use crate::test_utils::load_data;

        #[test]
        fn it_parses_repositories() {
            let results = SearchResults::parse(&load_data("github_search")).unwrap();
            assert_eq!(results.len(), 3);

            let repo = results.repositories().next().unwrap();
            assert_eq!(repo.full_name(), "ferris/crabwise");
            assert_eq!(repo.stars(), 12873);
            assert_eq!(repo.forks(), 1024);
            assert_eq!(repo.language(), Some("Rust"));
            assert_eq!(repo.url(), "https://github.com/ferris/crabwise");
        }

        #[test]
        fn it_handles_missing_optional_fields() {
            let results = SearchResults::parse(&load_data("github_search")).unwrap();
            let repo = results.repositories().nth(2).unwrap();
            assert_eq!(repo.full_name(), "N/A");
            assert_eq!(repo.stars(), 0);
            assert_eq!(repo.forks(), 0);
            assert_eq!(repo.language(), None);
            assert_eq!(repo.description(), None);
            assert_eq!(repo.url(), "");
        }

        #[test]
        fn it_parses_responses_without_items() {
            let results = SearchResults::parse(r#"{"total_count": 0}"#).unwrap();
            assert!(results.is_empty());
        }
    }

    mod report {
        use crate::github::{Period, SearchQuery, SearchResults, TrendingReport};
        use crate::test_utils::{FrozenClock, load_data};

        fn results() -> SearchResults {
            SearchResults::parse(&load_data("github_search")).unwrap()
        }

        #[test]
        fn it_limits_the_number_of_repositories() {
            let query = SearchQuery::new(Period::Daily, "", &FrozenClock::default());
            let report = TrendingReport::new(&query, Period::Daily, results(), 1);
            assert_eq!(report.repositories().len(), 1);
        }

        #[test]
        fn it_shows_fewer_repositories_when_fewer_are_available() {
            let query = SearchQuery::new(Period::Daily, "", &FrozenClock::default());
            let report = TrendingReport::new(&query, Period::Daily, results(), 5);
            assert_eq!(report.repositories().len(), 3);
        }

        #[test]
        fn it_remembers_the_language_filter() {
            let query = SearchQuery::new(Period::Weekly, "go", &FrozenClock::default());
            let report = TrendingReport::new(&query, Period::Weekly, results(), 5);
            assert_eq!(report.language(), Some("go"));
            assert_eq!(report.period(), Period::Weekly);
        }
    }
}
