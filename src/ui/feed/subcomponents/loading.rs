// SPDX-License-Identifier: MPL-2.0
//! Loading state sub-component with animated spinner.

use crate::config::defaults::LOADING_TIMEOUT_SECS;
use std::f32::consts::TAU;
use std::time::{Duration, Instant};

/// Timeout before considering a page fetch as potentially stuck.
const LOADING_TIMEOUT: Duration = Duration::from_secs(LOADING_TIMEOUT_SECS);

/// Spinner rotation speed in radians per tick.
const SPINNER_SPEED: f32 = 0.12;

/// Loading state for the feed.
#[derive(Debug, Clone, Default)]
pub struct State {
    is_loading: bool,
    /// When loading started (for timeout detection).
    started_at: Option<Instant>,
    /// Current spinner rotation angle in radians.
    spinner_rotation: f32,
    /// Whether the timeout for the current fetch has already been reported.
    timeout_reported: bool,
}

/// Messages for the loading state sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A page fetch was dispatched.
    Started,
    /// The fetch settled (success or failure).
    Finished,
    /// Animate the spinner.
    Tick,
}

/// Effects produced by the loading state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// The current fetch has been outstanding for too long. Reported at
    /// most once per fetch.
    TimedOut,
}

impl State {
    /// Handle a loading state message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Started => {
                self.is_loading = true;
                self.started_at = Some(Instant::now());
                self.timeout_reported = false;
                Effect::None
            }
            Message::Finished => {
                self.is_loading = false;
                self.started_at = None;
                self.spinner_rotation = 0.0;
                Effect::None
            }
            Message::Tick => {
                if self.is_loading {
                    self.spinner_rotation = (self.spinner_rotation + SPINNER_SPEED) % TAU;

                    if let Some(started) = self.started_at {
                        if !self.timeout_reported && started.elapsed() > LOADING_TIMEOUT {
                            self.timeout_reported = true;
                            return Effect::TimedOut;
                        }
                    }
                }
                Effect::None
            }
        }
    }

    /// Check if a page fetch is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Get the current spinner rotation angle in radians.
    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    /// Get when loading started (if currently loading).
    #[must_use]
    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn started_sets_state() {
        let mut state = State::default();
        assert!(!state.is_loading());

        state.handle(Message::Started);

        assert!(state.is_loading());
        assert!(state.started_at().is_some());
    }

    #[test]
    fn finished_clears_state() {
        let mut state = State::default();
        state.handle(Message::Started);
        state.handle(Message::Finished);

        assert!(!state.is_loading());
        assert!(state.started_at().is_none());
        assert_eq!(state.spinner_rotation(), 0.0);
    }

    #[test]
    fn tick_advances_rotation_while_loading() {
        let mut state = State::default();
        state.handle(Message::Started);

        let initial = state.spinner_rotation();
        state.handle(Message::Tick);
        assert!(state.spinner_rotation() > initial);
    }

    #[test]
    fn tick_is_inert_when_idle() {
        let mut state = State::default();
        let effect = state.handle(Message::Tick);
        assert_eq!(effect, Effect::None);
        assert_eq!(state.spinner_rotation(), 0.0);
    }

    #[test]
    fn stuck_fetch_times_out_once() {
        let mut state = State::default();
        state.handle(Message::Started);
        // Backdate the start to simulate a stuck fetch.
        state.started_at = Some(Instant::now() - LOADING_TIMEOUT - Duration::from_secs(1));

        assert_eq!(state.handle(Message::Tick), Effect::TimedOut);
        assert_eq!(state.handle(Message::Tick), Effect::None);
        assert!(state.is_loading());
    }
}
