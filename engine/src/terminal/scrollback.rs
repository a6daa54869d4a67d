//! Terminal scrollback.

use folio_types::CommandOutput;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollbackEntry {
    /// Banner lines written by the terminal itself (welcome, cleared).
    System(String),
    /// A submitted line, exactly as typed, and what it produced.
    Command {
        command: String,
        output: CommandOutput,
    },
}

/// Scrollback with a monotonic revision counter.
///
/// The revision is bumped whenever the buffer mutates, so renderers can use
/// it as a cache key. Entries are only ever appended or replaced wholesale.
#[derive(Debug, Clone, Default)]
pub struct Scrollback {
    entries: Vec<ScrollbackEntry>,
    revision: usize,
}

impl Scrollback {
    #[must_use]
    pub fn with_banner(banner: impl Into<String>) -> Self {
        let mut scrollback = Self::default();
        scrollback.push(ScrollbackEntry::System(banner.into()));
        scrollback
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[ScrollbackEntry] {
        &self.entries
    }

    #[inline]
    #[must_use]
    pub fn revision(&self) -> usize {
        self.revision
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&ScrollbackEntry> {
        self.entries.last()
    }

    /// Number of command entries, ignoring system banners.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| matches!(entry, ScrollbackEntry::Command { .. }))
            .count()
    }

    pub fn push(&mut self, entry: ScrollbackEntry) {
        self.entries.push(entry);
        self.bump();
    }

    /// Replace everything with a single system message.
    pub fn reset(&mut self, banner: impl Into<String>) {
        self.entries = vec![ScrollbackEntry::System(banner.into())];
        self.bump();
    }

    #[inline]
    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<'a> IntoIterator for &'a Scrollback {
    type Item = &'a ScrollbackEntry;
    type IntoIter = std::slice::Iter<'a, ScrollbackEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{Scrollback, ScrollbackEntry};
    use folio_types::CommandOutput;

    fn command(text: &str) -> ScrollbackEntry {
        ScrollbackEntry::Command {
            command: text.to_string(),
            output: CommandOutput::text(text),
        }
    }

    #[test]
    fn banner_is_first_entry() {
        let scrollback = Scrollback::with_banner("welcome");
        assert_eq!(scrollback.len(), 1);
        assert_eq!(
            scrollback.last(),
            Some(&ScrollbackEntry::System("welcome".into()))
        );
        assert_eq!(scrollback.command_count(), 0);
    }

    #[test]
    fn every_mutation_bumps_revision() {
        let mut scrollback = Scrollback::default();
        let start = scrollback.revision();
        scrollback.push(command("echo"));
        assert_eq!(scrollback.revision(), start + 1);
        scrollback.reset("cleared");
        assert_eq!(scrollback.revision(), start + 2);
    }

    #[test]
    fn reset_leaves_single_system_entry() {
        let mut scrollback = Scrollback::with_banner("welcome");
        scrollback.push(command("about"));
        scrollback.push(command("help"));
        scrollback.reset("cleared");
        assert_eq!(
            scrollback.entries(),
            [ScrollbackEntry::System("cleared".into())]
        );
        assert_eq!(scrollback.command_count(), 0);
    }

    #[test]
    fn iterates_in_insertion_order() {
        let mut scrollback = Scrollback::default();
        scrollback.push(command("a"));
        scrollback.push(command("b"));
        let commands: Vec<&str> = (&scrollback)
            .into_iter()
            .filter_map(|entry| match entry {
                ScrollbackEntry::Command { command, .. } => Some(command.as_str()),
                ScrollbackEntry::System(_) => None,
            })
            .collect();
        assert_eq!(commands, ["a", "b"]);
    }
}
