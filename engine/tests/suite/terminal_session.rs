//! Terminal sessions hosted by the site, including deferred effects.

use std::time::Duration;

use folio_engine::{CommandOutput, ScrollbackEntry, SiteEvent};

use crate::common::{commands_in_scrollback, site, site_with_delays};

#[test]
fn session_records_every_submission_in_order() {
    let mut site = site();
    site.open_terminal();
    for line in ["help", "about", "  ", "skills cloud", "bogus"] {
        site.submit(line);
    }

    assert_eq!(
        commands_in_scrollback(&site),
        ["help", "about", "skills cloud", "bogus"]
    );
    let terminal = site.terminal().unwrap();
    assert_eq!(
        terminal.history().entries(),
        ["bogus", "skills cloud", "about", "help"]
    );
    assert!(matches!(
        terminal.scrollback().last(),
        Some(ScrollbackEntry::Command { output, .. }) if output.is_not_found()
    ));
}

#[test]
fn clear_then_tick_empties_scrollback_but_keeps_history() {
    let mut site = site();
    site.open_terminal();
    site.submit("about");
    site.submit("clear");
    assert_eq!(commands_in_scrollback(&site), ["about", "clear"]);

    let events = site.tick(Duration::from_millis(16));
    assert_eq!(events, [SiteEvent::TerminalCleared]);
    assert!(commands_in_scrollback(&site).is_empty());
    assert_eq!(site.terminal().unwrap().history().len(), 2);

    site.recall_previous();
    assert_eq!(site.terminal().unwrap().draft(), "clear");
}

#[test]
fn deferred_close_hits_reopened_terminal() {
    let mut site = site_with_delays(Duration::from_millis(100), Duration::ZERO);
    site.open_terminal();
    site.submit("exit");

    site.close_terminal();
    site.open_terminal();
    site.submit("help");
    assert!(site.tick(Duration::from_millis(50)).is_empty());
    assert!(site.is_terminal_open());

    assert_eq!(
        site.tick(Duration::from_millis(50)),
        [SiteEvent::TerminalClosed]
    );
    assert!(!site.is_terminal_open());
}

#[test]
fn clear_and_exit_in_one_frame_fire_in_order() {
    let mut site = site_with_delays(Duration::ZERO, Duration::ZERO);
    site.open_terminal();
    site.submit("clear");
    site.submit("exit");

    assert_eq!(
        site.tick(Duration::ZERO),
        [SiteEvent::TerminalCleared, SiteEvent::TerminalClosed]
    );
    assert_eq!(site.pending_effects(), 0);
}

#[test]
fn reopened_terminal_starts_fresh() {
    let mut site = site();
    site.open_terminal();
    site.submit("about");
    site.close_terminal();

    let terminal = site.open_terminal();
    assert!(terminal.history().is_empty());
    assert_eq!(terminal.scrollback().command_count(), 0);
}

#[test]
fn outputs_serialize_for_renderers() {
    let mut site = site();
    site.open_terminal();
    site.submit("contact");
    site.submit("nope");

    let outputs: Vec<&CommandOutput> = site
        .terminal()
        .unwrap()
        .scrollback()
        .entries()
        .iter()
        .filter_map(|entry| match entry {
            ScrollbackEntry::Command { output, .. } => Some(output),
            ScrollbackEntry::System(_) => None,
        })
        .collect();

    let contact = serde_json::to_value(outputs[0]).unwrap();
    assert_eq!(contact["kind"], "links");
    let missing = serde_json::to_value(outputs[1]).unwrap();
    assert_eq!(missing["kind"], "not_found");
    assert_eq!(missing["command"], "nope");
}
