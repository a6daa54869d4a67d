//! The site host.
//!
//! Owns everything a visitor interacts with: localized content, the project
//! browser, the (optional) terminal widget and the deferred effect queue.
//! The scheduler lives here rather than inside [`Terminal`], so an effect
//! queued by one terminal fires against whatever terminal is open when it
//! comes due, including a freshly reopened one.

use std::time::Duration;

use folio_content::{ContentError, SiteContent};
use folio_types::{Language, SiteSettings, Theme};

use crate::{DeferredEffect, ProjectBrowser, Scheduler, Terminal};

/// Observable result of a deferred effect firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteEvent {
    TerminalCleared,
    TerminalClosed,
}

#[derive(Debug)]
pub struct Site {
    settings: SiteSettings,
    content: SiteContent,
    browser: ProjectBrowser,
    terminal: Option<Terminal>,
    scheduler: Scheduler,
}

impl Site {
    /// Load bundled content for the configured language and mount the browser.
    pub fn new(settings: SiteSettings) -> Result<Self, ContentError> {
        let content = SiteContent::bundled(settings.language)?;
        let mut browser = ProjectBrowser::new(content.catalog().clone());
        browser.mount();
        tracing::info!(
            language = %settings.language,
            theme = %settings.theme,
            projects = content.catalog().len(),
            "Site mounted"
        );

        Ok(Self {
            settings,
            content,
            browser,
            terminal: None,
            scheduler: Scheduler::new(),
        })
    }

    /// Open the terminal, or return the one already open.
    pub fn open_terminal(&mut self) -> &mut Terminal {
        let content = &self.content;
        let prompt = &self.settings.terminal.prompt;
        self.terminal.get_or_insert_with(|| {
            tracing::info!("Terminal opened");
            Terminal::new(content.localizer(), prompt.clone())
        })
    }

    /// Close the terminal, dropping its scrollback and history.
    ///
    /// Pending effects stay queued.
    pub fn close_terminal(&mut self) {
        if self.terminal.take().is_some() {
            tracing::info!("Terminal closed");
        }
    }

    /// Submit a line to the open terminal.
    ///
    /// Returns `false` when no terminal is open.
    pub fn submit(&mut self, raw: &str) -> bool {
        let Some(terminal) = self.terminal.as_mut() else {
            return false;
        };
        if let Some(effect) = terminal.submit(raw, &self.content) {
            let delay = match effect {
                DeferredEffect::ClearScrollback => self.settings.terminal.clear_delay,
                DeferredEffect::CloseTerminal => self.settings.terminal.exit_delay,
            };
            self.scheduler.schedule(effect, delay);
        }
        true
    }

    pub fn recall_previous(&mut self) {
        if let Some(terminal) = self.terminal.as_mut() {
            terminal.recall_previous();
        }
    }

    pub fn recall_next(&mut self) {
        if let Some(terminal) = self.terminal.as_mut() {
            terminal.recall_next();
        }
    }

    /// Advance host time and apply every effect that came due.
    ///
    /// Effects whose target no longer exists produce no event.
    pub fn tick(&mut self, delta: Duration) -> Vec<SiteEvent> {
        let mut events = Vec::new();
        for effect in self.scheduler.advance(delta) {
            match effect {
                DeferredEffect::ClearScrollback => {
                    if let Some(terminal) = self.terminal.as_mut() {
                        terminal.clear_scrollback(self.content.localizer());
                        events.push(SiteEvent::TerminalCleared);
                    }
                }
                DeferredEffect::CloseTerminal => {
                    if self.terminal.take().is_some() {
                        tracing::info!("Terminal closed by exit");
                        events.push(SiteEvent::TerminalClosed);
                    }
                }
            }
        }
        events
    }

    /// Switch to the other bundled language.
    pub fn toggle_language(&mut self) -> Result<Language, ContentError> {
        let next = self.settings.language.toggled();
        self.set_language(next)?;
        Ok(next)
    }

    /// Rebuild content for `language`, keeping browser state.
    ///
    /// The open terminal keeps its scrollback as written; new output uses the
    /// new language.
    pub fn set_language(&mut self, language: Language) -> Result<(), ContentError> {
        if language == self.settings.language {
            return Ok(());
        }
        let content = SiteContent::bundled(language)?;
        self.browser.relocalize(content.catalog().clone());
        self.content = content;
        self.settings.language = language;
        tracing::info!(%language, "Language switched");
        Ok(())
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.settings.theme = self.settings.theme.toggled();
        tracing::debug!(theme = %self.settings.theme, "Theme switched");
        self.settings.theme
    }

    #[must_use]
    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.settings.language
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.settings.theme
    }

    #[must_use]
    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    #[must_use]
    pub fn browser(&self) -> &ProjectBrowser {
        &self.browser
    }

    pub fn browser_mut(&mut self) -> &mut ProjectBrowser {
        &mut self.browser
    }

    #[must_use]
    pub fn terminal(&self) -> Option<&Terminal> {
        self.terminal.as_ref()
    }

    pub fn terminal_mut(&mut self) -> Option<&mut Terminal> {
        self.terminal.as_mut()
    }

    #[must_use]
    pub fn is_terminal_open(&self) -> bool {
        self.terminal.is_some()
    }

    #[must_use]
    pub fn pending_effects(&self) -> usize {
        self.scheduler.len()
    }

    /// Time until the next deferred effect is due, if any.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.scheduler.next_due()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{Site, SiteEvent};
    use folio_types::{Language, SiteSettings, Theme};

    fn site() -> Site {
        Site::new(SiteSettings::default()).unwrap()
    }

    #[test]
    fn new_site_mounts_browser() {
        let site = site();
        assert_eq!(
            site.browser().selected_project_id().map(|id| id.as_str()),
            Some("rfid-inventory")
        );
        assert!(!site.browser().has_explored_once());
        assert!(!site.is_terminal_open());
    }

    #[test]
    fn submit_without_terminal_is_rejected() {
        let mut site = site();
        assert!(!site.submit("help"));
        assert_eq!(site.pending_effects(), 0);
    }

    #[test]
    fn open_terminal_is_idempotent() {
        let mut site = site();
        site.open_terminal();
        assert!(site.submit("help"));
        site.open_terminal();
        assert_eq!(site.terminal().unwrap().history().len(), 1);
    }

    #[test]
    fn clear_fires_on_next_tick_with_default_delay() {
        let mut site = site();
        site.open_terminal();
        site.submit("about");
        site.submit("clear");
        assert_eq!(site.pending_effects(), 1);

        assert_eq!(site.tick(Duration::ZERO), vec![SiteEvent::TerminalCleared]);
        assert_eq!(site.terminal().unwrap().scrollback().command_count(), 0);
    }

    #[test]
    fn exit_closes_after_delay() {
        let mut site = site();
        site.open_terminal();
        site.submit("exit");

        assert!(site.tick(Duration::from_millis(999)).is_empty());
        assert!(site.is_terminal_open());
        assert_eq!(site.tick(Duration::from_millis(1)), vec![SiteEvent::TerminalClosed]);
        assert!(!site.is_terminal_open());
    }

    #[test]
    fn effect_without_terminal_is_silent() {
        let mut site = site();
        site.open_terminal();
        site.submit("clear");
        site.close_terminal();

        assert!(site.tick(Duration::ZERO).is_empty());
        assert_eq!(site.pending_effects(), 0);
    }

    #[test]
    fn configured_delays_are_used() {
        let mut settings = SiteSettings::default();
        settings.terminal.clear_delay = Duration::from_millis(40);
        let mut site = Site::new(settings).unwrap();
        site.open_terminal();
        site.submit("clear");

        assert_eq!(site.next_due(), Some(Duration::from_millis(40)));
        assert!(site.tick(Duration::from_millis(20)).is_empty());
        assert_eq!(site.tick(Duration::from_millis(20)), vec![SiteEvent::TerminalCleared]);
    }

    #[test]
    fn toggles() {
        let mut site = site();
        assert_eq!(site.toggle_theme(), Theme::Light);
        assert_eq!(site.theme(), Theme::Light);
        assert_eq!(site.toggle_language().unwrap(), Language::Es);
        assert_eq!(site.content().language(), Language::Es);
        assert_eq!(site.toggle_language().unwrap(), Language::En);
    }

    #[test]
    fn set_same_language_is_a_no_op() {
        let mut site = site();
        site.set_language(Language::En).unwrap();
        assert_eq!(site.language(), Language::En);
    }
}
