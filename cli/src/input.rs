//! Keyboard input for the Folio CLI.
//!
//! A blocking reader thread polls crossterm and forwards events over a
//! bounded channel; the frame loop drains it without ever blocking.

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25);
const INPUT_CHANNEL_CAPACITY: usize = 256;
const MAX_EVENTS_PER_FRAME: usize = 64;

/// What a key press means to the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Insert(char),
    Backspace,
    Submit,
    /// Up arrow: older history entry.
    RecallPrevious,
    /// Down arrow: newer history entry.
    RecallNext,
    /// Left arrow: previous project.
    Previous,
    /// Right arrow: next project.
    Next,
    /// Esc: leave the terminal or the detail view.
    Back,
    Quit,
}

/// Map a terminal event to an [`Action`]; `None` for anything we ignore.
#[must_use]
pub fn action_for(event: &Event) -> Option<Action> {
    let Event::Key(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press | KeyEventKind::Repeat,
        ..
    }) = event
    else {
        return None;
    };

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c' | 'd') => Some(Action::Quit),
            _ => None,
        };
    }

    match code {
        KeyCode::Char(c) => Some(Action::Insert(*c)),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Up => Some(Action::RecallPrevious),
        KeyCode::Down => Some(Action::RecallNext),
        KeyCode::Left => Some(Action::Previous),
        KeyCode::Right => Some(Action::Next),
        KeyCode::Esc => Some(Action::Back),
        _ => None,
    }
}

enum InputMsg {
    Event(Event),
    Error(String),
}

pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(&stop2, &tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    /// Drain queued events into actions, at most one frame's worth.
    pub fn drain(&mut self) -> Result<Vec<Action>> {
        let mut actions = Vec::new();
        for _ in 0..MAX_EVENTS_PER_FRAME {
            let event = match self.rx.try_recv() {
                Ok(InputMsg::Event(event)) => event,
                Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
                Err(mpsc::error::TryRecvError::Empty) => break,
                Err(mpsc::error::TryRecvError::Disconnected) => {
                    return Err(anyhow!("input pump disconnected"));
                }
            };
            if let Some(action) = action_for(&event) {
                actions.push(action);
            }
        }
        Ok(actions)
    }

    pub async fn shutdown(&mut self) {
        // Unblock a reader stuck on a full channel before waiting for it.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: &AtomicBool, tx: &mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, action_for};
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn plain_keys_map_to_actions() {
        let none = KeyModifiers::NONE;
        assert_eq!(
            action_for(&press(KeyCode::Char('h'), none)),
            Some(Action::Insert('h'))
        );
        assert_eq!(
            action_for(&press(KeyCode::Char('H'), KeyModifiers::SHIFT)),
            Some(Action::Insert('H'))
        );
        assert_eq!(action_for(&press(KeyCode::Enter, none)), Some(Action::Submit));
        assert_eq!(
            action_for(&press(KeyCode::Up, none)),
            Some(Action::RecallPrevious)
        );
        assert_eq!(action_for(&press(KeyCode::Down, none)), Some(Action::RecallNext));
        assert_eq!(action_for(&press(KeyCode::Esc, none)), Some(Action::Back));
    }

    #[test]
    fn ctrl_c_quits() {
        assert_eq!(
            action_for(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(
            action_for(&press(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn releases_and_other_events_are_ignored() {
        let mut release = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(action_for(&Event::Key(release)), None);
        assert_eq!(action_for(&Event::Resize(80, 24)), None);
        assert_eq!(action_for(&Event::FocusGained), None);
    }
}
