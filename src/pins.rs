//! GPIO / peripheral pin assignments for the PanelCtl main board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// User button (active-low with external pull-up)
// ---------------------------------------------------------------------------

/// Momentary push-button, sampled by the 20 ms debounce task.
pub const BUTTON_GPIO: i32 = 16;

// ---------------------------------------------------------------------------
// Panel LED
// ---------------------------------------------------------------------------

/// Digital output driving the panel indicator LED (active HIGH).
pub const LED_GPIO: i32 = 11;

// ---------------------------------------------------------------------------
// UART debug
// ---------------------------------------------------------------------------

pub const UART_TX_GPIO: i32 = 17;
pub const UART_RX_GPIO: i32 = 18;
