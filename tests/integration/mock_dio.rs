//! Mock DIO adapter for integration tests.
//!
//! Holds the instantaneous level of each channel and records every write
//! so tests can assert on the full output history without touching real
//! GPIO registers.

use std::cell::RefCell;

use panelctl::app::ports::{Channel, DioPort, Level};

/// One recorded output write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DioWrite {
    pub channel: Channel,
    pub level: Level,
}

pub struct MockDio {
    button: RefCell<Level>,
    led: RefCell<Level>,
    pub writes: RefCell<Vec<DioWrite>>,
}

#[allow(dead_code)]
impl MockDio {
    pub fn new() -> Self {
        Self {
            // Active-low button idles high (released); LED starts off.
            button: RefCell::new(Level::High),
            led: RefCell::new(Level::Low),
            writes: RefCell::new(Vec::new()),
        }
    }

    /// Drive the raw (pre-debounce) button line.
    pub fn set_button_raw(&self, pressed: bool) {
        *self.button.borrow_mut() = if pressed { Level::Low } else { Level::High };
    }

    pub fn led_on(&self) -> bool {
        *self.led.borrow() == Level::High
    }

    pub fn led_write_count(&self) -> usize {
        self.writes
            .borrow()
            .iter()
            .filter(|w| w.channel == Channel::Led)
            .count()
    }
}

impl Default for MockDio {
    fn default() -> Self {
        Self::new()
    }
}

impl DioPort for MockDio {
    fn read_channel(&self, channel: Channel) -> Level {
        match channel {
            Channel::Button => *self.button.borrow(),
            Channel::Led => *self.led.borrow(),
        }
    }

    fn write_channel(&self, channel: Channel, level: Level) {
        match channel {
            Channel::Button => *self.button.borrow_mut() = level,
            Channel::Led => *self.led.borrow_mut() = level,
        }
        self.writes.borrow_mut().push(DioWrite { channel, level });
    }

    fn toggle_channel(&self, channel: Channel) -> Level {
        let next = self.read_channel(channel).flipped();
        self.write_channel(channel, next);
        next
    }
}
