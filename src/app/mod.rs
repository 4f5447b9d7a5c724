//! Application layer: the port boundary and the periodic task set.

pub mod ports;
pub mod tasks;
