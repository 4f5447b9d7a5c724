//! GPIO adapter: [`DioPort`] over the raw pin helpers in `hw_init`.
//!
//! Maps the logical [`Channel`]s onto the physical pins from
//! [`crate::pins`].  Stateless — the latch lives in the GPIO hardware
//! (the LED pin is configured input/output so the latched level can be
//! read back for refresh and toggle).

use crate::app::ports::{Channel, DioPort, Level};
use crate::drivers::hw_init;
use crate::pins;

#[derive(Debug, Clone, Copy, Default)]
pub struct GpioDio;

impl GpioDio {
    pub fn new() -> Self {
        Self
    }

    fn pin(channel: Channel) -> i32 {
        match channel {
            Channel::Button => pins::BUTTON_GPIO,
            Channel::Led => pins::LED_GPIO,
        }
    }
}

impl DioPort for GpioDio {
    fn read_channel(&self, channel: Channel) -> Level {
        if hw_init::gpio_read(Self::pin(channel)) {
            Level::High
        } else {
            Level::Low
        }
    }

    fn write_channel(&self, channel: Channel, level: Level) {
        hw_init::gpio_write(Self::pin(channel), level == Level::High);
    }

    fn toggle_channel(&self, channel: Channel) -> Level {
        let next = self.read_channel(channel).flipped();
        self.write_channel(channel, next);
        next
    }
}
