// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Public user events.
//!
//! GitHub tags every event with a `type` and carries type-specific data in
//! a `payload` object. Only the handful of payload fields the activity
//! report actually prints are parsed; everything else is dropped.

use crate::count::{ActivityTally, HasEventType};
use log::{trace, warn};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A single public event from a user's activity feed.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(from = "RawEvent")]
pub struct Event {
    kind: EventKind,
    repo_name: String,
    created_at: String,
}

impl Event {
    /// Parses a JSON array of events from the user events endpoint.
    pub fn parse_all(data: &str) -> serde_json::Result<Vec<Self>> {
        let events: Vec<Event> = serde_json::from_str(data)?;
        trace!("Parsed {} events", events.len());
        Ok(events)
    }

    /// What happened, along with the details needed to describe it.
    pub fn kind(&self) -> &EventKind {
        &self.kind
    }

    /// Name of the repository the event happened in, like `rust-lang/rust`.
    pub fn repo_name(&self) -> &str {
        &self.repo_name
    }

    /// When the event happened, as the ISO 8601 timestamp GitHub sent.
    pub fn created_at(&self) -> &str {
        &self.created_at
    }
}

impl HasEventType for Event {
    fn event_type(&self) -> &str {
        self.kind.type_name()
    }
}

/// The kinds of event the activity report knows how to describe.
#[derive(Clone, Debug, PartialEq)]
pub enum EventKind {
    /// Commits pushed to a branch.
    Push {
        /// The pushed commits. GitHub may omit these entirely.
        commits: Vec<Commit>,
    },

    /// A pull request was opened, closed, or otherwise changed.
    PullRequest {
        /// What happened to the pull request, like `opened`.
        action: String,

        /// The pull request's title.
        title: Option<String>,
    },

    /// An issue was opened, closed, or otherwise changed.
    Issues {
        /// What happened to the issue, like `closed`.
        action: String,

        /// The issue's title.
        title: Option<String>,
    },

    /// A branch, tag, or repository was created.
    Create {
        /// `branch`, `tag`, or `repository`.
        ref_type: String,

        /// Name of the branch or tag. Absent for repositories.
        ref_name: Option<String>,
    },

    /// The repository was starred.
    Watch,

    /// The repository was forked.
    Fork {
        /// Full name of the new fork.
        forkee: String,
    },

    /// Any other event, identified only by its type.
    Other(String),
}

impl EventKind {
    /// Builds the event kind for the GitHub `event_type` from its `payload`.
    ///
    /// A payload that does not have the expected shape is logged and
    /// replaced with empty details instead of failing the whole feed.
    pub fn from_payload(event_type: &str, payload: Value) -> Self {
        match event_type {
            "PushEvent" => {
                let payload: PushPayload = parse_payload(event_type, payload);
                EventKind::Push {
                    commits: payload.commits.unwrap_or_default(),
                }
            }
            "PullRequestEvent" => {
                let payload: PullRequestPayload = parse_payload(event_type, payload);
                EventKind::PullRequest {
                    action: payload.action.unwrap_or_else(unknown),
                    title: payload.pull_request.and_then(|pr| pr.title),
                }
            }
            "IssuesEvent" => {
                let payload: IssuesPayload = parse_payload(event_type, payload);
                EventKind::Issues {
                    action: payload.action.unwrap_or_else(unknown),
                    title: payload.issue.and_then(|issue| issue.title),
                }
            }
            "CreateEvent" => {
                let payload: CreatePayload = parse_payload(event_type, payload);
                EventKind::Create {
                    ref_type: payload.ref_type.unwrap_or_else(unknown),
                    ref_name: payload.ref_name,
                }
            }
            "WatchEvent" => EventKind::Watch,
            "ForkEvent" => {
                let payload: ForkPayload = parse_payload(event_type, payload);
                EventKind::Fork {
                    forkee: payload
                        .forkee
                        .and_then(|forkee| forkee.full_name)
                        .unwrap_or_default(),
                }
            }
            other => EventKind::Other(other.to_string()),
        }
    }

    /// The GitHub event type, like `PushEvent`.
    pub fn type_name(&self) -> &str {
        match self {
            EventKind::Push { .. } => "PushEvent",
            EventKind::PullRequest { .. } => "PullRequestEvent",
            EventKind::Issues { .. } => "IssuesEvent",
            EventKind::Create { .. } => "CreateEvent",
            EventKind::Watch => "WatchEvent",
            EventKind::Fork { .. } => "ForkEvent",
            EventKind::Other(event_type) => event_type.as_str(),
        }
    }
}

/// A commit included in a push.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Commit {
    #[serde(default)]
    message: Option<String>,
}

impl Commit {
    /// Creates a commit with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        let message = Some(message.into());
        Self { message }
    }

    /// The first line of the commit message, or `No message` if the
    /// message is missing.
    pub fn summary(&self) -> &str {
        match &self.message {
            Some(message) => message.lines().next().unwrap_or(""),
            None => "No message",
        }
    }
}

/// The events shown for a single run of the activity report.
#[derive(Debug)]
pub struct ActivityReport {
    username: String,
    max: usize,
    events: Vec<Event>,
}

impl ActivityReport {
    /// Builds a report from at most `max` of the user's `events`.
    pub fn new(username: impl Into<String>, events: Vec<Event>, max: usize) -> Self {
        let username = username.into();
        let events = events.into_iter().take(max).collect();
        Self {
            username,
            max,
            events,
        }
    }

    /// The user whose activity is reported.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The maximum number of events requested.
    pub fn max(&self) -> usize {
        self.max
    }

    /// The events that will be shown.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Counts the shown events by type.
    pub fn tally(&self) -> ActivityTally {
        ActivityTally::from_iter(self.events.iter())
    }
}

#[derive(Debug, Deserialize)]
struct RawEvent {
    #[serde(rename = "type")]
    event_type: String,

    #[serde(default)]
    repo: RawRepo,

    #[serde(default)]
    created_at: String,

    #[serde(default)]
    payload: Value,
}

#[derive(Debug, Default, Deserialize)]
struct RawRepo {
    #[serde(default)]
    name: String,
}

impl From<RawEvent> for Event {
    fn from(raw: RawEvent) -> Self {
        let kind = EventKind::from_payload(&raw.event_type, raw.payload);
        Event {
            kind,
            repo_name: raw.repo.name,
            created_at: raw.created_at,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct PushPayload {
    #[serde(default)]
    commits: Option<Vec<Commit>>,
}

#[derive(Debug, Default, Deserialize)]
struct PullRequestPayload {
    #[serde(default)]
    action: Option<String>,

    #[serde(default)]
    pull_request: Option<Titled>,
}

#[derive(Debug, Default, Deserialize)]
struct IssuesPayload {
    #[serde(default)]
    action: Option<String>,

    #[serde(default)]
    issue: Option<Titled>,
}

#[derive(Debug, Default, Deserialize)]
struct Titled {
    #[serde(default)]
    title: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct CreatePayload {
    #[serde(default)]
    ref_type: Option<String>,

    #[serde(default, rename = "ref")]
    ref_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ForkPayload {
    #[serde(default)]
    forkee: Option<Forkee>,
}

#[derive(Debug, Default, Deserialize)]
struct Forkee {
    #[serde(default)]
    full_name: Option<String>,
}

fn unknown() -> String {
    String::from("unknown")
}

fn parse_payload<T: DeserializeOwned + Default>(event_type: &str, payload: Value) -> T {
    if payload.is_null() {
        return T::default();
    }
    serde_json::from_value(payload).unwrap_or_else(|err| {
        warn!("Ignoring unexpected {event_type} payload: {err}");
        T::default()
    })
}
