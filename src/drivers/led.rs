//! Panel LED driver.
//!
//! Thin driver over the [`DioPort`] LED channel: direct on/off/toggle
//! plus the periodic `refresh_output`, which re-asserts the currently
//! latched level so a glitched output register self-heals within one
//! refresh period.

use crate::app::ports::{Channel, DioPort, Level};

/// Output level that lights the LED (active HIGH).
const LED_ON: Level = Level::High;
const LED_OFF: Level = Level::Low;

pub struct LedDriver<'a, D: DioPort> {
    dio: &'a D,
}

impl<'a, D: DioPort> LedDriver<'a, D> {
    pub fn new(dio: &'a D) -> Self {
        Self { dio }
    }

    pub fn set_on(&self) {
        self.dio.write_channel(Channel::Led, LED_ON);
    }

    pub fn set_off(&self) {
        self.dio.write_channel(Channel::Led, LED_OFF);
    }

    /// Invert the LED; returns `true` if it is lit after the flip.
    pub fn toggle(&self) -> bool {
        self.dio.toggle_channel(Channel::Led) == LED_ON
    }

    /// Re-write the currently latched level.
    pub fn refresh_output(&self) {
        let level = self.dio.read_channel(Channel::Led);
        self.dio.write_channel(Channel::Led, level);
    }

    pub fn is_on(&self) -> bool {
        self.dio.read_channel(Channel::Led) == LED_ON
    }
}
