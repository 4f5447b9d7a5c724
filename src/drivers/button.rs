//! Button debounce state machine.
//!
//! Converts the noisy instantaneous GPIO level into a stable logical
//! state using run-length counting: the state commits only after the
//! same raw level has been observed for a configured number of
//! consecutive base-tick samples (3 samples at 20 ms = 60 ms), and a
//! single contradicting sample restarts the candidate run.
//!
//! No timestamps are involved — the sampling period itself is the time
//! base, which keeps the machine deterministic under the fixed tick.

use crate::app::ports::Level;

/// Debounced logical button state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Pressed,
    Released,
}

/// Two-state debounce machine with run-length hysteresis.
pub struct Debouncer {
    stable: ButtonState,
    /// Consecutive samples at the pressed level.
    pressed_run: u8,
    /// Consecutive samples at the released level.
    released_run: u8,
    /// Samples required to commit a state.
    threshold: u8,
    /// Electrical level that means "pressed" (Low for active-low wiring).
    pressed_level: Level,
}

impl Debouncer {
    pub fn new(threshold: u8, pressed_level: Level) -> Self {
        Self {
            stable: ButtonState::Released,
            pressed_run: 0,
            released_run: 0,
            threshold,
            pressed_level,
        }
    }

    /// Feed one raw sample, taken once per base tick.
    ///
    /// Returns the newly committed state when the stable state changes,
    /// `None` otherwise.  An input that alternates every sample never
    /// reaches the threshold and never changes state — intended behavior.
    pub fn sample(&mut self, raw: Level) -> Option<ButtonState> {
        if raw == self.pressed_level {
            self.pressed_run += 1;
            self.released_run = 0;
        } else {
            self.released_run += 1;
            self.pressed_run = 0;
        }

        let committed = if self.pressed_run >= self.threshold {
            Some(ButtonState::Pressed)
        } else if self.released_run >= self.threshold {
            Some(ButtonState::Released)
        } else {
            None
        };

        if let Some(next) = committed {
            self.pressed_run = 0;
            self.released_run = 0;
            if next != self.stable {
                self.stable = next;
                return Some(next);
            }
        }
        None
    }

    /// The debounced state.  Pure read, no side effects.
    pub fn state(&self) -> ButtonState {
        self.stable
    }
}
