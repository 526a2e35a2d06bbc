//! General-purpose counting capabilities.

use counter::Counter;
use std::fmt;

/// A thing that has a GitHub event type, like `PushEvent`.
pub trait HasEventType {
    /// The event's type.
    fn event_type(&self) -> &str;
}

impl<T: HasEventType> HasEventType for &T {
    fn event_type(&self) -> &str {
        T::event_type(self)
    }
}

/// The groups events are tallied into.
///
/// Only pushes, pull requests, and issues get a group of their own; every
/// other kind of event is counted as [`TallyBucket::Other`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TallyBucket {
    /// `PushEvent`s.
    Push,

    /// `PullRequestEvent`s.
    PullRequest,

    /// `IssuesEvent`s.
    Issues,

    /// Everything else.
    Other,
}

impl TallyBucket {
    /// Every bucket, in the order the summary lists them.
    pub const ALL: [TallyBucket; 4] = [
        TallyBucket::Push,
        TallyBucket::PullRequest,
        TallyBucket::Issues,
        TallyBucket::Other,
    ];

    /// The bucket an event of type `event_type` is counted in.
    ///
    /// # Examples
    ///
    /// ```
    /// use clifetch::count::TallyBucket;
    /// assert_eq!(TallyBucket::for_event_type("PushEvent"), TallyBucket::Push);
    /// assert_eq!(TallyBucket::for_event_type("WatchEvent"), TallyBucket::Other);
    /// ```
    pub fn for_event_type(event_type: &str) -> Self {
        match event_type {
            "PushEvent" => TallyBucket::Push,
            "PullRequestEvent" => TallyBucket::PullRequest,
            "IssuesEvent" => TallyBucket::Issues,
            _ => TallyBucket::Other,
        }
    }

    /// The label printed in activity summaries.
    pub fn label(&self) -> &'static str {
        match self {
            TallyBucket::Push => "PushEvent",
            TallyBucket::PullRequest => "PullRequestEvent",
            TallyBucket::Issues => "IssuesEvent",
            TallyBucket::Other => "Other",
        }
    }
}

impl fmt::Display for TallyBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A pair of tally bucket and count.
pub type BucketCount = (TallyBucket, usize);

/// Groups events into [`TallyBucket`]s and counts the events in each.
#[derive(Debug)]
pub struct ActivityTally {
    counts: Counter<TallyBucket>,
}

impl ActivityTally {
    /// Groups and counts events.
    ///
    /// `iter` is an iterator of events, or anything that has an event
    /// type attached to it.
    pub fn from_iter<T: HasEventType>(iter: impl Iterator<Item = T>) -> Self {
        let counts = iter
            .map(|item| TallyBucket::for_event_type(item.event_type()))
            .collect::<Counter<_>>();
        Self { counts }
    }

    /// Number of events counted in `bucket`.
    pub fn get(&self, bucket: TallyBucket) -> usize {
        self.counts.get(&bucket).copied().unwrap_or(0)
    }

    /// Total number of events counted.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Buckets with at least one event, in [`TallyBucket::ALL`] order.
    pub fn nonzero(&self) -> impl Iterator<Item = BucketCount> + '_ {
        TallyBucket::ALL
            .into_iter()
            .map(|bucket| (bucket, self.get(bucket)))
            .filter(|(_, count)| *count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug)]
    struct TestEvent(&'static str);

    impl HasEventType for TestEvent {
        fn event_type(&self) -> &str {
            self.0
        }
    }

    fn events(types: &[&'static str]) -> Vec<TestEvent> {
        types.iter().map(|t| TestEvent(*t)).collect()
    }

    #[test]
    fn it_counts_events_by_bucket() {
        let events = events(&[
            "PushEvent",
            "PushEvent",
            "PullRequestEvent",
            "UnknownEvent",
            "PushEvent",
            "UnknownEvent",
        ]);
        let tally = ActivityTally::from_iter(events.iter());
        assert_eq!(tally.get(TallyBucket::Push), 3);
        assert_eq!(tally.get(TallyBucket::PullRequest), 1);
        assert_eq!(tally.get(TallyBucket::Issues), 0);
        assert_eq!(tally.get(TallyBucket::Other), 2);
        assert_eq!(tally.total(), 6);
    }

    #[test]
    fn it_omits_empty_buckets() {
        let events = events(&[
            "UnknownEvent",
            "PushEvent",
            "PushEvent",
            "PullRequestEvent",
            "UnknownEvent",
            "PushEvent",
        ]);
        let actual: Vec<BucketCount> = ActivityTally::from_iter(events.into_iter())
            .nonzero()
            .collect();
        let expected = vec![
            (TallyBucket::Push, 3),
            (TallyBucket::PullRequest, 1),
            (TallyBucket::Other, 2),
        ];
        assert_eq!(actual, expected);
    }

    #[test]
    fn it_lists_buckets_in_a_fixed_order() {
        let events = events(&["ForkEvent", "IssuesEvent", "PullRequestEvent", "PushEvent"]);
        let labels: Vec<_> = ActivityTally::from_iter(events.iter())
            .nonzero()
            .map(|(bucket, _)| bucket.label())
            .collect();
        assert_eq!(
            labels,
            vec!["PushEvent", "PullRequestEvent", "IssuesEvent", "Other"]
        );
    }

    #[test]
    fn it_counts_create_watch_and_fork_events_as_other() {
        let events = events(&["CreateEvent", "WatchEvent", "ForkEvent"]);
        let tally = ActivityTally::from_iter(events.iter());
        assert_eq!(tally.get(TallyBucket::Other), 3);
    }

    #[test]
    fn it_has_nothing_to_show_without_events() {
        let tally = ActivityTally::from_iter(Vec::<TestEvent>::new().into_iter());
        assert_eq!(tally.nonzero().count(), 0);
        assert_eq!(tally.total(), 0);
    }
}
