//! Resolved configuration types shared across crates.
//!
//! Raw TOML deserialization structs (with `Option` fields) stay in
//! `folio-config`. The config loader resolves them into these types at the
//! parse boundary, so consumers never deal with missing values.

use std::time::Duration;

use crate::{Language, Theme};

pub const DEFAULT_PROMPT: &str = "guest@folio:~$";
pub const DEFAULT_EXIT_DELAY: Duration = Duration::from_millis(1000);
pub const DEFAULT_CLEAR_DELAY: Duration = Duration::ZERO;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalSettings {
    pub prompt: String,
    /// Delay between the `exit` farewell and the widget closing.
    pub exit_delay: Duration,
    /// Delay between the `clear` echo and the scrollback being cleared.
    pub clear_delay: Duration,
}

impl Default for TerminalSettings {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            exit_delay: DEFAULT_EXIT_DELAY,
            clear_delay: DEFAULT_CLEAR_DELAY,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteSettings {
    pub language: Language,
    pub theme: Theme,
    pub terminal: TerminalSettings,
}
