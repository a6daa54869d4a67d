//! Shared fixtures for the scenario suite.

#![allow(dead_code)]

use std::time::Duration;

use folio_engine::{ScrollbackEntry, Site, SiteSettings};

/// Site with default settings and bundled English content.
pub fn site() -> Site {
    Site::new(SiteSettings::default()).expect("bundled content loads")
}

/// Site with the given exit and clear delays.
pub fn site_with_delays(exit: Duration, clear: Duration) -> Site {
    let mut settings = SiteSettings::default();
    settings.terminal.exit_delay = exit;
    settings.terminal.clear_delay = clear;
    Site::new(settings).expect("bundled content loads")
}

/// Raw command lines currently in the open terminal's scrollback.
pub fn commands_in_scrollback(site: &Site) -> Vec<String> {
    site.terminal()
        .map(|terminal| {
            terminal
                .scrollback()
                .entries()
                .iter()
                .filter_map(|entry| match entry {
                    ScrollbackEntry::Command { command, .. } => Some(command.clone()),
                    ScrollbackEntry::System(_) => None,
                })
                .collect()
        })
        .unwrap_or_default()
}

pub fn selected_id(site: &Site) -> Option<&str> {
    site.browser().selected_project_id().map(|id| id.as_str())
}
