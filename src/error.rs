//! Unified error types for the PanelCtl firmware.
//!
//! Follows embedded fail-fast practice: every fallible setup path funnels
//! into a single `Error` enum that the entry point inspects once.  All
//! variants are `Copy` so they can be passed around without allocation.
//! There are no recoverable error paths in the core — a reported error
//! means the build-time configuration is wrong, and `main` halts.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Task registration was rejected by the scheduler.
    Scheduler(SchedulerError),
    /// Peripheral initialisation failed.
    Init(&'static str),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scheduler(e) => write!(f, "scheduler: {e}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Scheduler errors
// ---------------------------------------------------------------------------

/// Task-table registration errors.  Detected once at startup, before the
/// first dispatch; the table is immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerError {
    /// All task slots are occupied.
    TableFull,
    /// A task period of zero was requested.
    ZeroPeriod,
    /// The task period is not a whole multiple of the base tick.
    PeriodNotMultipleOfBase,
}

impl fmt::Display for SchedulerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TableFull => write!(f, "task table full"),
            Self::ZeroPeriod => write!(f, "task period is zero"),
            Self::PeriodNotMultipleOfBase => {
                write!(f, "task period is not a multiple of the base tick")
            }
        }
    }
}

impl From<SchedulerError> for Error {
    fn from(e: SchedulerError) -> Self {
        Self::Scheduler(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
