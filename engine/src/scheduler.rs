//! Deferred side effects.
//!
//! Commands like `clear` and `exit` do not act immediately: they schedule an
//! effect that fires once the host has advanced time past its delay. There is
//! no cancellation; a scheduled effect always fires, against whatever state
//! exists at that moment.

use std::time::Duration;

use folio_types::ui::EffectTimer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredEffect {
    /// Reset the open terminal's scrollback.
    ClearScrollback,
    /// Close the terminal widget.
    CloseTerminal,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    pending: Vec<(DeferredEffect, EffectTimer)>,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, effect: DeferredEffect, delay: Duration) {
        tracing::debug!(?effect, ?delay, "Scheduled deferred effect");
        self.pending.push((effect, EffectTimer::new(delay)));
    }

    /// Advance every timer by `delta` and return the effects now due, in the
    /// order they were scheduled.
    pub fn advance(&mut self, delta: Duration) -> Vec<DeferredEffect> {
        let mut due = Vec::new();
        self.pending.retain_mut(|(effect, timer)| {
            timer.advance(delta);
            if timer.is_finished() {
                due.push(*effect);
                false
            } else {
                true
            }
        });
        due
    }

    /// Time until the earliest pending effect is due.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.pending
            .iter()
            .map(|(_, timer)| timer.remaining())
            .min()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
