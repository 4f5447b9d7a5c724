//! Hardware adapters implementing the port traits.

pub mod gpio;
