//! PanelCtl Firmware — Main Entry Point
//!
//! Boot sequence, in the order the hardware needs it:
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │ 1. platform bootstrap + logger                             │
//! │ 2. peripheral bring-up (button input, LED output)          │
//! │ 3. init task: LED to a known-off state                     │
//! │ 4. task registration (button 20ms · led 40ms · app 60ms)   │
//! │ 5. base-tick timer start → TickSource.on_tick (ISR)        │
//! │ 6. TickScheduler::run_forever (never returns)              │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Any setup failure is fatal: log it and stop all forward progress.
//! There is nothing sensible a button/LED panel can do with a broken
//! task table or a dead timer.
#![deny(unused_must_use)]

use core::cell::Cell;

use anyhow::Result;
use log::{error, info};

use panelctl::adapters::gpio::GpioDio;
use panelctl::app::ports::Level;
use panelctl::app::tasks::{AppTask, ButtonTask, LedTask};
use panelctl::config::SystemConfig;
use panelctl::drivers::button::ButtonState;
use panelctl::drivers::led::LedDriver;
use panelctl::drivers::{hw_init, hw_timer};
use panelctl::error::Error;
use panelctl::scheduler::TickScheduler;
use panelctl::tick::TickSource;

/// The single interrupt-shared tick state.  Static so the esp_timer
/// callback can reference it; all other scheduler state lives on the
/// main stack.
static TICK_SOURCE: TickSource = TickSource::new();

/// Fail loud, fail stopped: configuration and bring-up errors indicate a
/// broken build, not a runtime condition to recover from.  In production
/// the watchdog resets the board after the timeout.
fn halt(err: Error) -> ! {
    error!("fatal: {} — halting", err);
    #[allow(clippy::empty_loop)]
    loop {}
}

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  PanelCtl v{}                     ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    let config = SystemConfig::default();
    if let Err(e) = config.validate() {
        halt(e);
    }

    // ── 2. Peripheral bring-up ────────────────────────────────
    if let Err(e) = hw_init::init_peripherals() {
        error!("hw_init: {}", e);
        halt(Error::Init("peripheral init failed"));
    }

    let dio = GpioDio::new();

    // ── 3. Init task: LED to a known state before dispatch ────
    LedDriver::new(&dio).set_off();

    // ── 4. Task set + registration ────────────────────────────
    let button_state = Cell::new(ButtonState::Released);
    let pressed_level = if config.button_active_low {
        Level::Low
    } else {
        Level::High
    };

    let mut button_task =
        ButtonTask::new(&dio, config.debounce_samples, pressed_level, &button_state);
    let mut led_task = LedTask::new(&dio);
    let mut app_task = AppTask::new(&dio, &button_state);

    let mut sched = TickScheduler::new(config.base_tick_ms, &TICK_SOURCE);
    if let Err(e) = sched.add(config.button_task_period_ms, &mut button_task) {
        halt(e.into());
    }
    if let Err(e) = sched.add(config.led_task_period_ms, &mut led_task) {
        halt(e.into());
    }
    if let Err(e) = sched.add(config.app_task_period_ms, &mut app_task) {
        halt(e.into());
    }

    // ── 5. Start the base tick ────────────────────────────────
    if let Err(e) = hw_timer::start_tick_timer(&TICK_SOURCE, config.base_tick_ms) {
        error!("hw_timer: {}", e);
        halt(Error::Init("tick timer start failed"));
    }

    info!("System ready. Entering dispatch loop.");

    // ── 6. Dispatch loop ──────────────────────────────────────
    sched.run_forever()
}
