//! Input history for terminal command recall.
//!
//! Stores previously submitted command lines newest first, with Up/Down
//! navigation support.

use crate::NonEmptyString;

/// Navigation state over the history.
///
/// `Idle` means the user is editing a fresh draft.
/// `Active` means the user is browsing history entries.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum NavState {
    #[default]
    Idle,
    Active {
        index: usize,
    },
}

/// Result of a navigation attempt: either we moved to an entry (or back to
/// an empty draft), or we're already at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    Moved(String),
    AtBoundary,
}

/// Submitted command lines, newest first.
///
/// # Navigation Behavior
///
/// When the user presses Up:
/// 1. If not navigating, show the most recent entry
/// 2. If already navigating, show the next older entry; at the oldest entry
///    nothing changes
///
/// When the user presses Down:
/// 1. If at the newest entry, leave navigation and return an empty draft
/// 2. Otherwise, show the next newer entry
///
/// Navigation is reset after submitting a command.
#[derive(Debug, Default, Clone)]
pub struct InputHistory {
    entries: Vec<String>,
    nav: NavState,
}

impl InputHistory {
    /// Record a submitted line as the newest entry and reset navigation.
    ///
    /// Entries are never deduplicated or evicted.
    pub fn push(&mut self, line: NonEmptyString) {
        self.entries.insert(0, line.into_inner());
        self.nav = NavState::Idle;
    }

    /// Move to the previous (older) entry.
    ///
    /// Returns `AtBoundary` if history is empty or already at the oldest entry.
    pub fn navigate_up(&mut self) -> NavOutcome {
        let next = match self.nav {
            NavState::Idle => 0,
            NavState::Active { index } => index + 1,
        };
        match self.entries.get(next) {
            Some(entry) => {
                self.nav = NavState::Active { index: next };
                NavOutcome::Moved(entry.clone())
            }
            None => NavOutcome::AtBoundary,
        }
    }

    /// Move to the next (newer) entry.
    ///
    /// From the newest entry this leaves navigation and yields an empty
    /// draft. Returns `AtBoundary` if not currently navigating.
    pub fn navigate_down(&mut self) -> NavOutcome {
        match self.nav {
            NavState::Idle => NavOutcome::AtBoundary,
            NavState::Active { index: 0 } => {
                self.nav = NavState::Idle;
                NavOutcome::Moved(String::new())
            }
            NavState::Active { index } => {
                let new_idx = index - 1;
                self.nav = NavState::Active { index: new_idx };
                NavOutcome::Moved(self.entries[new_idx].clone())
            }
        }
    }

    pub fn reset_navigation(&mut self) {
        self.nav = NavState::Idle;
    }

    /// Index of the entry being shown, `None` while editing a fresh draft.
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        match self.nav {
            NavState::Idle => None,
            NavState::Active { index } => Some(index),
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
