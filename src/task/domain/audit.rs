//! Append-only audit trail entries for task records.
//!
//! A record's audit trail is its activity history plus its comment log.
//! Both grow monotonically and are kept in non-decreasing timestamp order
//! after every mutation. Entries are immutable once appended.

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A single entry in a task's activity history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    description: String,
    timestamp: DateTime<Utc>,
}

impl Activity {
    /// Creates an activity entry stamped with the current clock time.
    #[must_use]
    pub fn new(description: impl Into<String>, clock: &impl Clock) -> Self {
        Self {
            description: description.into(),
            timestamp: clock.utc(),
        }
    }

    /// Returns the entry text.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns when the entry was recorded.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// A comment left on a task by an operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    author: String,
    message: String,
    timestamp: DateTime<Utc>,
}

impl Comment {
    /// Creates a comment stamped with the current clock time.
    #[must_use]
    pub fn new(author: impl Into<String>, message: impl Into<String>, clock: &impl Clock) -> Self {
        Self {
            author: author.into(),
            message: message.into(),
            timestamp: clock.utc(),
        }
    }

    /// Returns the comment author.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the comment text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns when the comment was recorded.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Restores non-decreasing timestamp order after an append.
///
/// The clock is injected and not required to be monotonic, so a freshly
/// appended entry may be backdated relative to existing ones. The sort is
/// stable: entries sharing a timestamp keep insertion order.
pub(super) fn sort_chronological<T>(entries: &mut [T], timestamp: fn(&T) -> DateTime<Utc>) {
    entries.sort_by_key(timestamp);
}
