//! Identifier types and the monotonic sequence that issues them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a project within a tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(u64);

impl ProjectId {
    /// Wraps a raw identifier value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a task within a tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Wraps a raw identifier value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic counter handing out identifiers.
///
/// The first call to [`IdSequence::next_id`] on a fresh sequence returns 1.
/// Values are never handed out twice, even after the entity they named has
/// been removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdSequence {
    current: u64,
}

impl IdSequence {
    /// Creates a sequence whose first issued value is 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { current: 0 }
    }

    /// Creates a sequence that continues after `last_issued`.
    #[must_use]
    pub const fn starting_after(last_issued: u64) -> Self {
        Self {
            current: last_issued,
        }
    }

    /// Returns the most recently issued value, or 0 if none was issued.
    #[must_use]
    pub const fn current(&self) -> u64 {
        self.current
    }

    /// Advances the counter and returns the new value.
    pub const fn next_id(&mut self) -> u64 {
        self.current = self.current.saturating_add(1);
        self.current
    }
}
