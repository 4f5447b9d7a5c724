//! System configuration parameters
//!
//! All tunable parameters for the PanelCtl scheduler and task set.
//! The defaults reproduce the reference board timing: a 20 ms base tick
//! with the button task on every tick, the LED refresh on every second
//! tick, and the application task on every third.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Scheduler timing ---
    /// Base hardware tick period (milliseconds).  Every task period must
    /// be a whole multiple of this.
    pub base_tick_ms: u32,
    /// Button/debounce task period (milliseconds)
    pub button_task_period_ms: u32,
    /// LED refresh task period (milliseconds)
    pub led_task_period_ms: u32,
    /// Application logic task period (milliseconds)
    pub app_task_period_ms: u32,

    // --- Debounce ---
    /// Consecutive agreeing samples required before the logical button
    /// state commits (3 samples at 20 ms = 60 ms of agreement).
    pub debounce_samples: u8,
    /// Whether the button reads electrically low when pressed
    /// (active-low wiring with external pull-up).
    pub button_active_low: bool,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Timing
            base_tick_ms: 20,
            button_task_period_ms: 20,
            led_task_period_ms: 40,
            app_task_period_ms: 60,

            // Debounce
            debounce_samples: 3,
            button_active_low: true,
        }
    }
}

impl SystemConfig {
    /// Validate the configuration before the scheduler is built.
    ///
    /// Period-vs-base-tick divisibility is re-checked per task at
    /// registration time; this catches the values that would make the
    /// system inert or meaningless.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.base_tick_ms == 0 {
            return Err(Error::Config("base tick must be non-zero"));
        }
        if self.debounce_samples == 0 {
            return Err(Error::Config("debounce threshold must be non-zero"));
        }
        if self.button_task_period_ms == 0
            || self.led_task_period_ms == 0
            || self.app_task_period_ms == 0
        {
            return Err(Error::Config("task periods must be non-zero"));
        }
        Ok(())
    }
}
