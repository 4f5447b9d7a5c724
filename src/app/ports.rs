//! Port traits — the boundary between the task set and the hardware.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ periodic tasks (domain)
//! ```
//!
//! The GPIO adapter implements [`DioPort`]; the tasks consume it via
//! generics, so the scheduler core never touches hardware directly and
//! the full task set runs against a mock on the host.

/// Electrical level of a digital channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

impl Level {
    /// The opposite level.
    pub fn flipped(self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::High => Self::Low,
        }
    }
}

/// Digital channels of the panel board.
///
/// A closed enum rather than a raw channel id: an invalid channel is a
/// compile error, not a runtime developer-error report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Momentary push-button input.
    Button,
    /// Panel indicator LED output.
    Led,
}

/// Digital I/O port.
///
/// All three primitives are synchronous, non-blocking, and side-effecting
/// with no error return observable to the caller — channel validity and
/// pin configuration are fixed at startup.
pub trait DioPort {
    /// Sample the instantaneous level of a channel.
    fn read_channel(&self, channel: Channel) -> Level;

    /// Drive an output channel to the given level.
    fn write_channel(&self, channel: Channel, level: Level);

    /// Invert an output channel; returns the level after the flip.
    fn toggle_channel(&self, channel: Channel) -> Level;
}
