//! CLI application state: routes key actions to the site host.
//!
//! While the terminal widget is open, keys edit its draft and Enter submits
//! to the interpreter. Otherwise a small host prompt drives the project
//! browser (`projects`, `open <id>`, `next`, ...).

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use folio_engine::{CategoryFilter, ScrollbackEntry, Site, SiteEvent, UnknownCategoryError};

use crate::input::Action;

/// A command typed at the host prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    Help,
    Projects,
    Open(String),
    Next,
    Previous,
    Back,
    Filter(CategoryFilter),
    Terminal,
    Language,
    Theme,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    Unknown(String),
    MissingArgument(&'static str),
    Category(UnknownCategoryError),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::Unknown(command) => write!(f, "unknown command: {command}"),
            HostError::MissingArgument(command) => write!(f, "{command} needs an argument"),
            HostError::Category(err) => write!(f, "{err}"),
        }
    }
}

impl FromStr for HostCommand {
    type Err = HostError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let command = tokens.next().unwrap_or_default().to_lowercase();
        let argument = tokens.next();

        Ok(match command.as_str() {
            "help" | "?" => HostCommand::Help,
            "projects" | "ls" => HostCommand::Projects,
            "open" => HostCommand::Open(
                argument
                    .ok_or(HostError::MissingArgument("open"))?
                    .to_string(),
            ),
            "next" | "n" => HostCommand::Next,
            "prev" | "p" => HostCommand::Previous,
            "back" => HostCommand::Back,
            "filter" => HostCommand::Filter(
                argument
                    .unwrap_or("all")
                    .parse()
                    .map_err(HostError::Category)?,
            ),
            "term" | "terminal" => HostCommand::Terminal,
            "lang" => HostCommand::Language,
            "theme" => HostCommand::Theme,
            "quit" | "q" => HostCommand::Quit,
            _ => return Err(HostError::Unknown(command)),
        })
    }
}

/// Host-side output queued for the next frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Hint,
    /// Filtered project grid.
    Grid,
    /// The current view: the carousel card or, with a selection, its detail.
    Current,
    Message(String),
}

pub struct App {
    site: Site,
    line: String,
    notices: Vec<Notice>,
    /// Scrollback entries of the open terminal already written out.
    printed: usize,
    redraw: bool,
    dirty: bool,
    quit: bool,
}

impl App {
    #[must_use]
    pub fn new(site: Site) -> Self {
        Self {
            site,
            line: String::new(),
            notices: vec![Notice::Current, Notice::Hint],
            printed: 0,
            redraw: false,
            dirty: true,
            quit: false,
        }
    }

    pub fn handle(&mut self, action: Action) {
        self.dirty = true;
        if action == Action::Quit {
            self.quit = true;
            return;
        }
        if self.site.is_terminal_open() {
            self.handle_terminal(action);
        } else {
            self.handle_host(action);
        }
    }

    fn handle_terminal(&mut self, action: Action) {
        match action {
            Action::Insert(c) => self.edit_draft(|draft| draft.push(c)),
            Action::Backspace => self.edit_draft(|draft| {
                draft.pop();
            }),
            Action::Submit => {
                let draft = self
                    .site
                    .terminal()
                    .map(|terminal| terminal.draft().to_string())
                    .unwrap_or_default();
                self.site.submit(&draft);
            }
            Action::RecallPrevious => self.site.recall_previous(),
            Action::RecallNext => self.site.recall_next(),
            Action::Back => {
                self.site.close_terminal();
                self.printed = 0;
                self.notices.push(Notice::Current);
            }
            Action::Previous | Action::Next | Action::Quit => {}
        }
    }

    fn edit_draft(&mut self, edit: impl FnOnce(&mut String)) {
        if let Some(terminal) = self.site.terminal_mut() {
            let mut draft = terminal.draft().to_string();
            edit(&mut draft);
            terminal.set_draft(draft);
        }
    }

    fn handle_host(&mut self, action: Action) {
        match action {
            Action::Insert(c) => self.line.push(c),
            Action::Backspace => {
                self.line.pop();
            }
            Action::Submit => {
                let line = std::mem::take(&mut self.line);
                if !line.trim().is_empty() {
                    self.run_host(&line);
                }
            }
            Action::Previous => self.run(HostCommand::Previous),
            Action::Next => self.run(HostCommand::Next),
            Action::Back => self.run(HostCommand::Back),
            Action::RecallPrevious | Action::RecallNext | Action::Quit => {}
        }
    }

    fn run_host(&mut self, line: &str) {
        match line.parse::<HostCommand>() {
            Ok(command) => self.run(command),
            Err(HostError::Unknown(command)) => {
                let message = self
                    .site
                    .content()
                    .localizer()
                    .format("host.unknown", &[("command", command.as_str())]);
                self.notices.push(Notice::Message(message));
            }
            Err(err) => self.notices.push(Notice::Message(err.to_string())),
        }
    }

    /// Apply a host command.
    pub fn run(&mut self, command: HostCommand) {
        self.dirty = true;
        match command {
            HostCommand::Help => self.notices.push(Notice::Hint),
            HostCommand::Projects => self.notices.push(Notice::Grid),
            HostCommand::Open(id) => match self.site.browser_mut().select_project(&id) {
                Ok(()) => self.notices.push(Notice::Current),
                Err(err) => self.notices.push(Notice::Message(err.to_string())),
            },
            HostCommand::Next => {
                self.site.browser_mut().next();
                self.notices.push(Notice::Current);
            }
            HostCommand::Previous => {
                self.site.browser_mut().previous();
                self.notices.push(Notice::Current);
            }
            HostCommand::Back => {
                self.site.browser_mut().clear_selection();
                self.notices.push(Notice::Current);
            }
            HostCommand::Filter(filter) => {
                self.site.browser_mut().set_filter(filter);
                self.notices.push(Notice::Grid);
            }
            HostCommand::Terminal => {
                self.site.open_terminal();
                self.printed = 0;
            }
            HostCommand::Language => match self.site.toggle_language() {
                Ok(language) => {
                    let message = self.site.content().localizer().format(
                        "host.language",
                        &[("language", language.display_name())],
                    );
                    self.notices.push(Notice::Message(message));
                }
                Err(err) => {
                    tracing::error!("Language switch failed: {err}");
                    self.notices.push(Notice::Message(err.to_string()));
                }
            },
            HostCommand::Theme => {
                let theme = self.site.toggle_theme();
                let localizer = self.site.content().localizer();
                let name = localizer.text(&format!("theme.{theme}"));
                let message = localizer.format("host.theme", &[("theme", &*name)]);
                self.notices.push(Notice::Message(message));
            }
            HostCommand::Quit => self.quit = true,
        }
    }

    /// Advance host time and react to deferred effects.
    pub fn tick(&mut self, delta: Duration) {
        for event in self.site.tick(delta) {
            self.dirty = true;
            match event {
                SiteEvent::TerminalCleared => self.redraw = true,
                SiteEvent::TerminalClosed => {
                    self.printed = 0;
                    self.notices.push(Notice::Current);
                }
            }
        }
    }

    #[must_use]
    pub fn site(&self) -> &Site {
        &self.site
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// The text being edited: the terminal draft or the host line.
    #[must_use]
    pub fn line(&self) -> &str {
        match self.site.terminal() {
            Some(terminal) => terminal.draft(),
            None => &self.line,
        }
    }

    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn take_redraw(&mut self) -> bool {
        let redraw = std::mem::take(&mut self.redraw);
        if redraw {
            self.printed = 0;
        }
        redraw
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Scrollback entries not yet written out; marks them written.
    pub fn take_unprinted(&mut self) -> Vec<ScrollbackEntry> {
        let Some(terminal) = self.site.terminal() else {
            return Vec::new();
        };
        let entries = terminal.scrollback().entries();
        let fresh = entries.get(self.printed..).unwrap_or_default().to_vec();
        self.printed = entries.len();
        fresh
    }
}
