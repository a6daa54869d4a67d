//! Core domain types for Folio.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod category;
mod ids;
mod output;
mod preferences;
mod project;
mod settings;
pub mod ui;

pub use category::{CategoryFilter, ProjectCategory, UnknownCategoryError};
pub use ids::ProjectId;
pub use output::{CommandOutput, Link, Row};
pub use preferences::{Language, Theme, UnknownLanguageError, UnknownThemeError};
pub use project::{
    ArchitectureLayer, CostOptimization, ImpactMetric, MediaItem, PressMention, Project,
    ProjectDetail, UnknownProjectError,
};
pub use settings::{
    DEFAULT_CLEAR_DELAY, DEFAULT_EXIT_DELAY, DEFAULT_PROMPT, SiteSettings, TerminalSettings,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// NonEmpty String Types
// ============================================================================

/// A string guaranteed to be non-empty (after trimming).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NonEmptyString(String);

#[derive(Debug, Error)]
#[error("input must not be empty")]
pub struct EmptyStringError;

impl NonEmptyString {
    pub fn new(value: impl Into<String>) -> Result<Self, EmptyStringError> {
        let value = value.into();
        if value.trim().is_empty() {
            Err(EmptyStringError)
        } else {
            Ok(Self(value))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for NonEmptyString {
    type Error = EmptyStringError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for NonEmptyString {
    type Error = EmptyStringError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> Self {
        value.0
    }
}

impl std::ops::Deref for NonEmptyString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for NonEmptyString {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::NonEmptyString;

    #[test]
    fn non_empty_string_rejects_whitespace() {
        assert!(NonEmptyString::new("").is_err());
        assert!(NonEmptyString::new("   \t").is_err());
    }

    #[test]
    fn non_empty_string_keeps_original_text() {
        let s = NonEmptyString::new("  about ").unwrap();
        assert_eq!(s.as_str(), "  about ");
        assert_eq!(s.into_inner(), "  about ");
    }

    #[test]
    fn non_empty_string_serde_roundtrip_rejects_empty() {
        let parsed: Result<NonEmptyString, _> = serde_json::from_str("\"\"");
        assert!(parsed.is_err());
        let parsed: NonEmptyString = serde_json::from_str("\"help\"").unwrap();
        assert_eq!(&*parsed, "help");
    }
}
