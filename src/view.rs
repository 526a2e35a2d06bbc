// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Draws viewable objects into a terminal window.
//!
//! Movie and repository reports are drawn as a boxed banner followed by
//! one "card" per item. The activity report uses plain `=` rules instead.

use crate::count::ActivityTally;
use crate::github::{ActivityReport, Event, EventKind, Repository, TrendingReport};
use crate::text::{SUMMARY_WIDTH, thousands, truncate};
use crate::tmdb::{Movie, MovieReport};
use indoc::formatdoc;

/// Inner width of banners and card footers.
pub const BOX_WIDTH: usize = 68;

/// Width of the `=` rules framing the activity report.
pub const RULE_WIDTH: usize = 60;

/// Placeholder for fields the API did not return.
pub const NOT_AVAILABLE: &str = "N/A";

// "┌─ " and the space after the heading, so headers line up with footers.
const CARD_HEADER_OVERHEAD: usize = 4;

/// Marks an item that can be converted into a string for display on a terminal.
pub trait Viewable {
    /// Converts the item into a string for display on a terminal.
    fn view(&self) -> String;
}

fn banner(title: &str) -> String {
    let rule = "═".repeat(BOX_WIDTH);
    formatdoc! {"
        ╔{}╗
        ║ {:<width$}║
        ╚{}╝",
        rule,
        title,
        rule,
        width = BOX_WIDTH - 1,
    }
}

fn card(heading: &str, fields: &[(&str, String)]) -> String {
    let fill = (BOX_WIDTH + 1).saturating_sub(CARD_HEADER_OVERHEAD + heading.chars().count());
    let mut lines = vec![format!("┌─ {heading} {}", "─".repeat(fill))];
    lines.extend(
        fields
            .iter()
            .map(|(label, value)| format!("│ {label:<11}: {value}")),
    );
    lines.push(format!("└{}", "─".repeat(BOX_WIDTH)));
    lines.join("\n")
}

fn boxed_report(title: &str, cards: impl Iterator<Item = String>) -> String {
    let cards = cards.map(|card| format!("{card}\n")).collect::<Vec<_>>();
    format!("\n{}\n\n{}", banner(title), cards.join("\n"))
}

fn movie_card(n: usize, movie: &Movie) -> String {
    let overview = movie
        .overview()
        .map(|overview| truncate(overview, SUMMARY_WIDTH))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    card(
        &format!("Movie #{n}"),
        &[
            ("Title", movie.title().to_string()),
            (
                "Released",
                movie.release_date().unwrap_or(NOT_AVAILABLE).to_string(),
            ),
            ("Rating", format!("{:?}/10", movie.rating())),
            ("Overview", overview),
        ],
    )
}

impl Viewable for MovieReport {
    fn view(&self) -> String {
        if self.movies().is_empty() {
            return String::from("No movies found or API error.");
        }

        let title = format!("{} MOVIES", self.category().name().to_uppercase());
        let cards = self
            .movies()
            .iter()
            .enumerate()
            .map(|(i, movie)| movie_card(i + 1, movie));
        boxed_report(&title, cards)
    }
}

fn repository_card(n: usize, repo: &Repository) -> String {
    let description = repo
        .description()
        .map(|description| truncate(description, SUMMARY_WIDTH))
        .unwrap_or_else(|| String::from("No description"));
    card(
        &format!("Repository #{n}"),
        &[
            ("Name", repo.full_name().to_string()),
            (
                "Language",
                repo.language().unwrap_or(NOT_AVAILABLE).to_string(),
            ),
            (
                "Stars",
                format!(
                    "⭐ {} | Forks: {}",
                    thousands(repo.stars()),
                    thousands(repo.forks())
                ),
            ),
            ("Description", description),
            ("URL", repo.url().to_string()),
        ],
    )
}

impl Viewable for TrendingReport {
    fn view(&self) -> String {
        if self.repositories().is_empty() {
            return String::from("No repositories found or API error.");
        }

        let language = self
            .language()
            .map(str::to_uppercase)
            .unwrap_or_else(|| String::from("ALL LANGUAGES"));
        let title = format!(
            "{} TRENDING - {language}",
            self.period().name().to_uppercase()
        );
        let cards = self
            .repositories()
            .iter()
            .enumerate()
            .map(|(i, repo)| repository_card(i + 1, repo));
        boxed_report(&title, cards)
    }
}

impl Viewable for Event {
    fn view(&self) -> String {
        let mut lines = vec![
            format!("• {} in {}", self.kind().type_name(), self.repo_name()),
            format!("  Time: {}", self.created_at()),
        ];

        match self.kind() {
            EventKind::Push { commits } if commits.is_empty() => {
                lines.push(String::from("    No commits in this push"));
            }
            EventKind::Push { commits } => {
                lines.push(format!("  Commits ({}):", commits.len()));
                lines.extend(
                    commits
                        .iter()
                        .map(|commit| format!("    - {}", commit.summary())),
                );
            }
            EventKind::PullRequest { action, title } => {
                lines.push(format!("  Action: {action}"));
                if let Some(title) = title.as_deref().filter(|t| !t.is_empty()) {
                    lines.push(format!("  PR: {title}"));
                }
            }
            EventKind::Issues { action, title } => {
                lines.push(format!("  Action: {action}"));
                if let Some(title) = title.as_deref().filter(|t| !t.is_empty()) {
                    lines.push(format!("  Issue: {title}"));
                }
            }
            EventKind::Create { ref_type, ref_name } => {
                let created = format!("  Created: {ref_type} {}", ref_name.as_deref().unwrap_or(""));
                lines.push(created.trim_end().to_string());
            }
            EventKind::Watch => lines.push(String::from("  Starred the repository")),
            EventKind::Fork { forkee } => lines.push(format!("  Forked to: {forkee}")),
            EventKind::Other(_) => {}
        }

        lines.join("\n")
    }
}

impl Viewable for ActivityTally {
    fn view(&self) -> String {
        self.nonzero()
            .map(|(bucket, count)| format!("{bucket}: {count}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Viewable for ActivityReport {
    fn view(&self) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let events = self
            .events()
            .iter()
            .map(|event| format!("{}\n\n", event.view()))
            .collect::<String>();
        let tally = self.tally().view();
        let tally = if tally.is_empty() {
            tally
        } else {
            format!("{tally}\n")
        };

        formatdoc! {"

            {}
            Last {} public events for {}
            {}

            {}{}
            Summary of activity:
            {}
            {}",
            rule,
            self.max(),
            self.username(),
            rule,
            events,
            rule,
            rule,
            tally,
        }
    }
}
