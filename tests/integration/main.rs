//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises the wired-up task set
//! against the mock DIO adapter.  All tests run on the host (x86_64)
//! with no real hardware required.

mod dispatch_flow_tests;
mod mock_dio;
