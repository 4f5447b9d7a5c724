//! Cooperative tick scheduler.
//!
//! Translates the fixed-frequency hardware tick into deterministic
//! dispatch of a static set of periodic tasks.  The timer ISR only flags
//! a [`TickSource`]; the dispatch loop runs in normal context and invokes
//! every task whose period divides the current cycle position.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Timer ISR ──▶ TickSource.on_tick()                          │
//! │                     │                                        │
//! │                     ▼                                        │
//! │  run_forever() ──▶ service_pending()                         │
//! │                     │  for each slot (ascending period):     │
//! │                     │    elapsed % period == 0 → task.run()  │
//! │                     │  clear pending, wrap at cycle length   │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The task table is fixed after registration: no dynamic add/remove, no
//! priorities, no preemption.  A task that overruns the base tick simply
//! delays subsequent ticks; the scheduler does not detect it.

use heapless::Vec;
use log::{info, trace};

use crate::error::SchedulerError;
use crate::tick::TickSource;

// ═══════════════════════════════════════════════════════════════
//  Task abstraction
// ═══════════════════════════════════════════════════════════════

/// A periodic task invoked synchronously by the dispatch loop.
///
/// Implementations must not block and should complete well within one
/// base tick period.  A blocking task is a design violation, not a
/// runtime-detected error.
pub trait Task {
    /// Human-readable label for logs.
    fn name(&self) -> &'static str;

    /// Run one invocation to completion.
    fn run(&mut self);
}

/// Maximum number of registered tasks (stack-allocated table).
pub const MAX_TASKS: usize = 8;

/// Internal bookkeeping for a registered task.
struct TaskSlot<'a> {
    /// Dispatch period in base-tick units.
    period_ticks: u32,
    task: &'a mut dyn Task,
}

// ═══════════════════════════════════════════════════════════════
//  Scheduler engine
// ═══════════════════════════════════════════════════════════════

/// The scheduler engine.
///
/// An explicit context object owned by the entry point — there is no
/// hidden process-wide singleton.  The only interrupt-shared state is the
/// borrowed [`TickSource`]; everything else lives in normal context.
pub struct TickScheduler<'a> {
    /// Registered tasks, kept in ascending-period then registration order.
    slots: Vec<TaskSlot<'a>, MAX_TASKS>,
    /// Base tick period in milliseconds (for period validation and logs).
    base_tick_ms: u32,
    /// Least common multiple of all registered periods, in base ticks.
    cycle_ticks: u32,
    /// Interrupt-shared tick state.
    tick: &'a TickSource,
}

impl<'a> TickScheduler<'a> {
    pub fn new(base_tick_ms: u32, tick: &'a TickSource) -> Self {
        Self {
            slots: Vec::new(),
            base_tick_ms,
            cycle_ticks: 1,
            tick,
        }
    }

    /// Register a task with the given period.  Returns the slot index.
    ///
    /// The table keeps ascending-period order, with registration order
    /// breaking ties, so coincident tasks always run in the same relative
    /// order (input before output before application logic in the
    /// reference set).  Registration is startup-only; the table is
    /// immutable once dispatch begins.
    pub fn add(
        &mut self,
        period_ms: u32,
        task: &'a mut dyn Task,
    ) -> Result<usize, SchedulerError> {
        if period_ms == 0 {
            return Err(SchedulerError::ZeroPeriod);
        }
        if period_ms % self.base_tick_ms != 0 {
            return Err(SchedulerError::PeriodNotMultipleOfBase);
        }
        if self.slots.is_full() {
            return Err(SchedulerError::TableFull);
        }

        let period_ticks = period_ms / self.base_tick_ms;
        let index = self
            .slots
            .iter()
            .position(|s| s.period_ticks > period_ticks)
            .unwrap_or(self.slots.len());

        info!(
            "scheduler: added '{}' every {}ms at slot {}",
            task.name(),
            period_ms,
            index
        );

        let slot = TaskSlot { period_ticks, task };
        // Capacity was checked above; insert cannot fail.
        if self.slots.insert(index, slot).is_err() {
            return Err(SchedulerError::TableFull);
        }

        self.cycle_ticks = lcm(self.cycle_ticks, period_ticks);
        Ok(index)
    }

    /// Cycle length in base-tick units (LCM of all registered periods).
    pub fn cycle_ticks(&self) -> u32 {
        self.cycle_ticks
    }

    /// Number of registered tasks.
    pub fn task_count(&self) -> usize {
        self.slots.len()
    }

    /// One dispatch round.  Returns `true` if a pending tick was serviced.
    ///
    /// Invariant: the pending flag is cleared only after every task due at
    /// the observed tick value has run to completion, so each hardware
    /// tick produces at most one dispatch round.
    pub fn service_pending(&mut self) -> bool {
        if !self.tick.pending() {
            return false;
        }

        let position = self.tick.elapsed_ticks();
        for slot in &mut self.slots {
            if position % slot.period_ticks == 0 {
                trace!("scheduler: tick {} → '{}'", position, slot.task.name());
                slot.task.run();
            }
        }

        self.tick.clear_pending();
        if position >= self.cycle_ticks {
            self.tick.wrap(self.cycle_ticks);
        }
        true
    }

    /// The scheduling loop.  Never returns.
    ///
    /// Between ticks the loop spins; on the target the 20 ms base tick
    /// makes this a short busy-wait in the idle portion of each period.
    pub fn run_forever(&mut self) -> ! {
        info!(
            "scheduler: running {} tasks, cycle {}ms",
            self.slots.len(),
            self.cycle_ticks * self.base_tick_ms
        );
        loop {
            if !self.service_pending() {
                core::hint::spin_loop();
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════
//  Period arithmetic
// ═══════════════════════════════════════════════════════════════

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

fn lcm(a: u32, b: u32) -> u32 {
    (a / gcd(a, b)) * b
}

// ═══════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════
