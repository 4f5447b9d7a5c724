//! The periodic task set.
//!
//! Three cooperative tasks cover the panel:
//!
//! | Task        | Period | Work                                       |
//! |-------------|--------|--------------------------------------------|
//! | button      | 20 ms  | sample GPIO, run debounce, publish state   |
//! | led         | 40 ms  | refresh the LED output latch               |
//! | app         | 60 ms  | mirror debounced button state onto the LED |
//!
//! The debounced state crosses from the button task to the app task
//! through a [`Cell`] — both run in the main context, dispatched
//! synchronously by the scheduler, so no atomics are needed here.

use core::cell::Cell;

use log::debug;

use crate::app::ports::{Channel, DioPort, Level};
use crate::drivers::button::{ButtonState, Debouncer};
use crate::drivers::led::LedDriver;
use crate::scheduler::Task;

// ───────────────────────────────────────────────────────────────
// Button task (input)
// ───────────────────────────────────────────────────────────────

/// Samples the raw button level once per base tick and publishes the
/// debounced state.
pub struct ButtonTask<'a, D: DioPort> {
    dio: &'a D,
    debouncer: Debouncer,
    state: &'a Cell<ButtonState>,
}

impl<'a, D: DioPort> ButtonTask<'a, D> {
    pub fn new(
        dio: &'a D,
        debounce_samples: u8,
        pressed_level: Level,
        state: &'a Cell<ButtonState>,
    ) -> Self {
        state.set(ButtonState::Released);
        Self {
            dio,
            debouncer: Debouncer::new(debounce_samples, pressed_level),
            state,
        }
    }
}

impl<D: DioPort> Task for ButtonTask<'_, D> {
    fn name(&self) -> &'static str {
        "button"
    }

    fn run(&mut self) {
        let raw = self.dio.read_channel(Channel::Button);
        if let Some(edge) = self.debouncer.sample(raw) {
            debug!("button: {:?}", edge);
        }
        self.state.set(self.debouncer.state());
    }
}

// ───────────────────────────────────────────────────────────────
// LED task (output)
// ───────────────────────────────────────────────────────────────

/// Re-asserts the LED output latch each period.
pub struct LedTask<'a, D: DioPort> {
    led: LedDriver<'a, D>,
}

impl<'a, D: DioPort> LedTask<'a, D> {
    pub fn new(dio: &'a D) -> Self {
        Self {
            led: LedDriver::new(dio),
        }
    }
}

impl<D: DioPort> Task for LedTask<'_, D> {
    fn name(&self) -> &'static str {
        "led"
    }

    fn run(&mut self) {
        self.led.refresh_output();
    }
}

// ───────────────────────────────────────────────────────────────
// Application task
// ───────────────────────────────────────────────────────────────

/// Panel logic: LED lit while the debounced button state is pressed.
pub struct AppTask<'a, D: DioPort> {
    led: LedDriver<'a, D>,
    button: &'a Cell<ButtonState>,
}

impl<'a, D: DioPort> AppTask<'a, D> {
    pub fn new(dio: &'a D, button: &'a Cell<ButtonState>) -> Self {
        Self {
            led: LedDriver::new(dio),
            button,
        }
    }
}

impl<D: DioPort> Task for AppTask<'_, D> {
    fn name(&self) -> &'static str {
        "app"
    }

    fn run(&mut self) {
        match self.button.get() {
            ButtonState::Pressed => self.led.set_on(),
            ButtonState::Released => self.led.set_off(),
        }
    }
}
