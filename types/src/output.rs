//! Command output handed to renderers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub label: String,
    pub value: String,
}

impl Row {
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

impl Link {
    #[must_use]
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Result of running a terminal command.
///
/// The interpreter treats this as opaque; renderers decide how each variant
/// looks. `NotFound` is an ordinary result, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CommandOutput {
    Text {
        text: String,
    },
    Lines {
        heading: Option<String>,
        lines: Vec<String>,
    },
    Rows {
        rows: Vec<Row>,
    },
    Links {
        links: Vec<Link>,
    },
    NotFound {
        command: String,
        message: String,
    },
}

impl CommandOutput {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        CommandOutput::Text { text: text.into() }
    }

    #[must_use]
    pub fn lines(heading: Option<String>, lines: Vec<String>) -> Self {
        CommandOutput::Lines { heading, lines }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, CommandOutput::NotFound { .. })
    }

    /// Flatten to plain text, one line per row/link/list item.
    #[must_use]
    pub fn plain_text(&self) -> String {
        match self {
            CommandOutput::Text { text } => text.clone(),
            CommandOutput::Lines { heading, lines } => heading
                .iter()
                .chain(lines.iter())
                .cloned()
                .collect::<Vec<_>>()
                .join("\n"),
            CommandOutput::Rows { rows } => rows
                .iter()
                .map(|row| format!("{}  {}", row.label, row.value))
                .collect::<Vec<_>>()
                .join("\n"),
            CommandOutput::Links { links } => links
                .iter()
                .map(|link| format!("{}: {}", link.label, link.url))
                .collect::<Vec<_>>()
                .join("\n"),
            CommandOutput::NotFound { message, .. } => message.clone(),
        }
    }
}
