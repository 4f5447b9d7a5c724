//! Input/output drivers and hardware bring-up helpers.

pub mod button;
pub mod hw_init;
pub mod hw_timer;
pub mod led;
