use crate::clock::{Clock, DateTime, Utc};
use crate::github::{self, SearchQuery};
use crate::http::{HTTPError, HTTPResult};
use crate::tmdb::{self, Category};
use reqwest::StatusCode;
use std::fs;

pub fn do_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn load_data(file: &str) -> String {
    fs::read_to_string(format!("tests/data/{file}.json")).expect("could not find test data")
}

pub fn load_output(filename: &str) -> String {
    let filename = format!("tests/output/{filename}.out");
    String::from(
        fs::read_to_string(&filename)
            .expect(&format!("could not load test data from {filename}"))
            .trim_end(),
    )
}

/// Answers every request from a fixture named by `suffix`.
///
/// A numeric suffix is answered with that HTTP status instead, and
/// `"garbage"` with a body that is not JSON.
pub struct TestService<'a> {
    suffix: &'a str,
}

impl<'a> TestService<'a> {
    pub fn new(suffix: &'a str) -> Self {
        Self { suffix }
    }

    fn respond(&self) -> HTTPResult<String> {
        if let Ok(code) = self.suffix.parse::<u16>() {
            let status = StatusCode::from_u16(code).expect("invalid status code");
            return Err(HTTPError::Http(status));
        }

        match self.suffix {
            "garbage" => Ok(String::from("<html>we are having some trouble</html>")),
            suffix => Ok(load_data(suffix)),
        }
    }
}

impl<'a> tmdb::Service for TestService<'a> {
    async fn get_listing(&self, _category: Category) -> HTTPResult<String> {
        self.respond()
    }
}

impl<'a> github::Service for TestService<'a> {
    async fn search_repositories(
        &self,
        _query: &SearchQuery,
        _per_page: usize,
    ) -> HTTPResult<String> {
        self.respond()
    }

    async fn user_events(&self, _username: &str, _per_page: usize) -> HTTPResult<String> {
        self.respond()
    }
}

pub struct FrozenClock {
    datetime: DateTime<Utc>,
}

impl FrozenClock {
    pub fn new(datetime: DateTime<Utc>) -> Self {
        FrozenClock { datetime }
    }
}

impl Default for FrozenClock {
    fn default() -> Self {
        let datetime = DateTime::parse_from_rfc3339("2025-05-23T10:13:00-07:00")
            .expect("invalid date supplied")
            .with_timezone(&Utc);
        Self::new(datetime)
    }
}

impl Clock for FrozenClock {
    fn now(&self) -> DateTime<Utc> {
        self.datetime
    }
}
