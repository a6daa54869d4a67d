//! The embedded terminal widget: command interpreter, scrollback and recall.

mod commands;
mod scrollback;

pub use commands::{CommandContext, CommandReply, CommandSpec, command_specs, find_command};
pub use scrollback::{Scrollback, ScrollbackEntry};

use folio_content::{Localizer, SiteContent};
use folio_types::NonEmptyString;
use folio_types::ui::{InputHistory, NavOutcome};

use crate::DeferredEffect;

#[derive(Debug, Clone)]
pub struct Terminal {
    scrollback: Scrollback,
    history: InputHistory,
    draft: String,
    prompt: String,
}

impl Terminal {
    /// A fresh terminal showing the welcome banner.
    #[must_use]
    pub fn new(localizer: &dyn Localizer, prompt: impl Into<String>) -> Self {
        Self {
            scrollback: Scrollback::with_banner(localizer.text("terminal.welcome")),
            history: InputHistory::default(),
            draft: String::new(),
            prompt: prompt.into(),
        }
    }

    /// Evaluate one line of input.
    ///
    /// Blank input is ignored entirely. Otherwise the line and its output are
    /// appended to the scrollback and the line is recorded in history. The
    /// returned effect, if any, must be scheduled by the caller; it runs after
    /// the append has already happened.
    pub fn submit(&mut self, raw: &str, content: &SiteContent) -> Option<DeferredEffect> {
        let Ok(line) = NonEmptyString::new(raw) else {
            return None;
        };

        let reply = commands::dispatch(line.trim(), &CommandContext { content });

        self.scrollback.push(ScrollbackEntry::Command {
            command: raw.to_string(),
            output: reply.output,
        });
        self.history.push(line);
        self.draft.clear();

        reply.effect
    }

    /// Step back to an older history entry. No-op at the oldest one.
    pub fn recall_previous(&mut self) {
        if let NavOutcome::Moved(text) = self.history.navigate_up() {
            self.draft = text;
        }
    }

    /// Step toward the newest entry; past it the draft is cleared.
    pub fn recall_next(&mut self) {
        if let NavOutcome::Moved(text) = self.history.navigate_down() {
            self.draft = text;
        }
    }

    /// Replace the scrollback with the "cleared" banner. History survives.
    pub fn clear_scrollback(&mut self, localizer: &dyn Localizer) {
        self.scrollback.reset(localizer.text("terminal.cleared"));
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replace the draft, as when the user types. Leaves history navigation.
    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
        self.history.reset_navigation();
    }

    #[must_use]
    pub fn history_cursor(&self) -> Option<usize> {
        self.history.cursor()
    }

    #[must_use]
    pub fn history(&self) -> &InputHistory {
        &self.history
    }

    #[must_use]
    pub fn scrollback(&self) -> &Scrollback {
        &self.scrollback
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

#[cfg(test)]
mod tests {
    use super::{ScrollbackEntry, Terminal};
    use crate::DeferredEffect;
    use folio_content::SiteContent;
    use folio_types::{CommandOutput, Language};

    fn setup() -> (Terminal, SiteContent) {
        let content = SiteContent::bundled(Language::En).unwrap();
        let terminal = Terminal::new(content.localizer(), "guest$");
        (terminal, content)
    }

    #[test]
    fn starts_with_welcome_banner() {
        let (terminal, _) = setup();
        assert_eq!(terminal.scrollback().len(), 1);
        assert!(matches!(
            terminal.scrollback().last(),
            Some(ScrollbackEntry::System(text)) if text.contains("help")
        ));
        assert_eq!(terminal.prompt(), "guest$");
        assert_eq!(terminal.history_cursor(), None);
    }

    #[test]
    fn blank_input_is_a_no_op() {
        let (mut terminal, content) = setup();
        for raw in ["", "   ", "\t\n"] {
            let revision = terminal.scrollback().revision();
            assert_eq!(terminal.submit(raw, &content), None);
            assert_eq!(terminal.scrollback().revision(), revision);
            assert!(terminal.history().is_empty());
        }
    }

    #[test]
    fn submit_appends_exactly_one_entry() {
        let (mut terminal, content) = setup();
        let before = terminal.scrollback().len();

        terminal.submit("help", &content);
        terminal.submit("nonsense", &content);

        assert_eq!(terminal.scrollback().len(), before + 2);
        assert_eq!(terminal.history().entries(), ["nonsense", "help"]);
    }

    #[test]
    fn scrollback_keeps_raw_input() {
        let (mut terminal, content) = setup();
        terminal.submit("  Echo Hi  ", &content);

        match terminal.scrollback().last() {
            Some(ScrollbackEntry::Command { command, output }) => {
                assert_eq!(command, "  Echo Hi  ");
                assert_eq!(output, &CommandOutput::text("hi"));
            }
            other => panic!("expected command entry, got {other:?}"),
        }
    }

    #[test]
    fn submit_resets_cursor_and_draft() {
        let (mut terminal, content) = setup();
        terminal.submit("about", &content);
        terminal.recall_previous();
        assert_eq!(terminal.draft(), "about");

        terminal.submit("contact", &content);
        assert_eq!(terminal.history_cursor(), None);
        assert_eq!(terminal.draft(), "");
    }

    #[test]
    fn recall_walks_history_and_clamps() {
        let (mut terminal, content) = setup();
        for line in ["a", "b", "c"] {
            terminal.submit(line, &content);
        }

        terminal.recall_previous();
        assert_eq!(terminal.draft(), "c");
        terminal.recall_previous();
        assert_eq!(terminal.draft(), "b");
        terminal.recall_previous();
        assert_eq!(terminal.draft(), "a");
        assert_eq!(terminal.history_cursor(), Some(2));

        terminal.recall_previous();
        assert_eq!(terminal.draft(), "a");
        assert_eq!(terminal.history_cursor(), Some(2));

        terminal.recall_next();
        terminal.recall_next();
        assert_eq!(terminal.draft(), "c");
        assert_eq!(terminal.history_cursor(), Some(0));

        terminal.recall_next();
        assert_eq!(terminal.draft(), "");
        assert_eq!(terminal.history_cursor(), None);

        terminal.recall_next();
        assert_eq!(terminal.history_cursor(), None);
    }

    #[test]
    fn recall_round_trip() {
        let (mut terminal, content) = setup();
        terminal.submit("about", &content);
        terminal.submit("skills backend", &content);

        terminal.recall_previous();
        assert_eq!(terminal.draft(), "skills backend");
        terminal.recall_previous();
        assert_eq!(terminal.draft(), "about");
        assert_eq!(terminal.history_cursor(), Some(1));
        terminal.recall_previous();
        assert_eq!(terminal.draft(), "about");

        terminal.recall_next();
        assert_eq!(terminal.draft(), "skills backend");
        assert_eq!(terminal.history_cursor(), Some(0));
        terminal.recall_next();
        assert_eq!(terminal.draft(), "");
        assert_eq!(terminal.history_cursor(), None);
    }

    #[test]
    fn recall_on_empty_history_does_nothing() {
        let (mut terminal, _) = setup();
        terminal.set_draft("typing");
        terminal.recall_previous();
        terminal.recall_next();
        assert_eq!(terminal.draft(), "typing");
        assert_eq!(terminal.history_cursor(), None);
    }

    #[test]
    fn clear_returns_effect_after_appending() {
        let (mut terminal, content) = setup();
        let effect = terminal.submit("clear", &content);

        assert_eq!(effect, Some(DeferredEffect::ClearScrollback));
        assert_eq!(terminal.scrollback().command_count(), 1);

        terminal.clear_scrollback(content.localizer());
        assert_eq!(terminal.scrollback().command_count(), 0);
        assert_eq!(terminal.history().entries(), ["clear"]);
    }

    #[test]
    fn exit_answers_before_closing() {
        let (mut terminal, content) = setup();
        let effect = terminal.submit("exit", &content);

        assert_eq!(effect, Some(DeferredEffect::CloseTerminal));
        assert!(matches!(
            terminal.scrollback().last(),
            Some(ScrollbackEntry::Command { output, .. })
                if output.plain_text().contains("Goodbye")
        ));
    }

    #[test]
    fn set_draft_leaves_history_navigation() {
        let (mut terminal, content) = setup();
        terminal.submit("help", &content);
        terminal.recall_previous();
        assert_eq!(terminal.history_cursor(), Some(0));

        terminal.set_draft("hel");
        assert_eq!(terminal.history_cursor(), None);
        assert_eq!(terminal.draft(), "hel");
    }
}
