//! Interrupt-to-main-loop tick handoff.
//!
//! [`TickSource`] is the only state shared between the timer interrupt and
//! the normal execution context.  The ISR calls [`TickSource::on_tick`];
//! the dispatch loop observes the pending flag, dispatches, and clears it.
//!
//! ```text
//! ┌─────────────┐  on_tick()   ┌──────────────┐   pending?   ┌──────────────┐
//! │ Timer ISR   │─────────────▶│  TickSource  │─────────────▶│ Dispatch loop│
//! │ (20 ms)     │              │  (atomics)   │◀─────────────│  (consumer)  │
//! └─────────────┘              └──────────────┘ clear / wrap └──────────────┘
//! ```
//!
//! Orderings: the ISR stores the pending flag with `Release` after
//! incrementing the counter; the loop loads with `Acquire` so the counter
//! increment is visible before the flag is observed.  The loop clears the
//! flag only after all tasks due at the observed tick value have run, so a
//! single hardware tick produces at most one dispatch round.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

/// Shared tick state, owned by the entry point (typically as a `static`
/// so the timer callback can reference it from interrupt context).
pub struct TickSource {
    /// Base-tick units elapsed since the last cycle wrap.
    elapsed_ticks: AtomicU32,
    /// Set by the ISR, cleared by the dispatch loop after dispatch.
    tick_pending: AtomicBool,
}

impl TickSource {
    pub const fn new() -> Self {
        Self {
            elapsed_ticks: AtomicU32::new(0),
            tick_pending: AtomicBool::new(false),
        }
    }

    /// ISR side.  O(1), non-blocking, no task logic: advance the elapsed
    /// counter and flag the main loop.  The hardware timer cannot re-enter
    /// itself (interrupt latency << base tick period), so plain atomic
    /// increments suffice.
    pub fn on_tick(&self) {
        self.elapsed_ticks.fetch_add(1, Ordering::Relaxed);
        self.tick_pending.store(true, Ordering::Release);
    }

    /// Whether a hardware tick is awaiting dispatch.
    pub fn pending(&self) -> bool {
        self.tick_pending.load(Ordering::Acquire)
    }

    /// Elapsed base-tick units since the last cycle wrap.
    pub fn elapsed_ticks(&self) -> u32 {
        self.elapsed_ticks.load(Ordering::Acquire)
    }

    /// Dispatch-loop side: acknowledge the tick after all due tasks ran.
    pub fn clear_pending(&self) {
        self.tick_pending.store(false, Ordering::Release);
    }

    /// Dispatch-loop side: wrap the elapsed counter at the cycle boundary.
    ///
    /// Subtracts rather than stores zero, so a tick that lands between the
    /// counter read and the wrap is carried into the next cycle instead of
    /// being lost.  Under nominal load the subtraction yields exactly zero.
    pub fn wrap(&self, cycle_ticks: u32) {
        self.elapsed_ticks.fetch_sub(cycle_ticks, Ordering::AcqRel);
    }
}

impl Default for TickSource {
    fn default() -> Self {
        Self::new()
    }
}
