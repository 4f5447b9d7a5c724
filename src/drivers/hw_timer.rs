//! Base-tick hardware timer using ESP-IDF's esp_timer API.
//!
//! Creates one periodic timer at the base tick period whose callback is
//! [`TickSource::on_tick`] — the counter increment and pending flag, and
//! nothing else.  On host targets a sleeper thread approximates the tick
//! so the dispatch loop behaves the same in simulation.

use crate::drivers::hw_init::HwInitError;
use crate::tick::TickSource;

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
static mut TICK_TIMER: esp_timer_handle_t = core::ptr::null_mut();

#[cfg(target_os = "espidf")]
unsafe extern "C" fn tick_cb(arg: *mut core::ffi::c_void) {
    // SAFETY: `arg` is the &'static TickSource passed at timer creation;
    // it lives for the whole program and on_tick takes &self.
    let tick = unsafe { &*(arg as *const TickSource) };
    tick.on_tick();
}

/// Start the periodic base-tick timer.
///
/// `tick` must be `'static` — the timer callback fires from the esp_timer
/// task for the remaining lifetime of the program.
#[cfg(target_os = "espidf")]
pub fn start_tick_timer(tick: &'static TickSource, period_ms: u32) -> Result<(), HwInitError> {
    // SAFETY: TICK_TIMER is written here once at boot from the single
    // main-task context before any timer callbacks fire.  The callback
    // itself only touches the TickSource atomics, which are ISR-safe.
    unsafe {
        let args = esp_timer_create_args_t {
            callback: Some(tick_cb),
            arg: tick as *const TickSource as *mut core::ffi::c_void,
            dispatch_method: esp_timer_dispatch_t_ESP_TIMER_TASK,
            name: b"base_tick\0".as_ptr() as *const _,
            skip_unhandled_events: false,
        };
        let ret = esp_timer_create(&args, &raw mut TICK_TIMER);
        if ret != ESP_OK {
            return Err(HwInitError::TimerInitFailed(ret));
        }
        let ret = esp_timer_start_periodic(TICK_TIMER, u64::from(period_ms) * 1000);
        if ret != ESP_OK {
            return Err(HwInitError::TimerInitFailed(ret));
        }
    }

    info!("hw_timer: base tick started ({}ms)", period_ms);
    Ok(())
}

/// Stop the base tick.  The pending flag and elapsed counter are left
/// as-is; dispatch simply starves.  Unused by the steady-state firmware
/// (the scheduler never returns) but part of the timer driver contract.
#[cfg(target_os = "espidf")]
pub fn stop_tick_timer() {
    // SAFETY: TICK_TIMER was created in start_tick_timer() from the same
    // main-task context; esp_timer_stop on a running handle is benign.
    unsafe {
        let handle = TICK_TIMER;
        if !handle.is_null() {
            let _ = esp_timer_stop(handle);
        }
    }
}

#[cfg(not(target_os = "espidf"))]
static SIM_TICK_RUNNING: core::sync::atomic::AtomicBool =
    core::sync::atomic::AtomicBool::new(false);

/// Host simulation: a sleeper thread stands in for the hardware timer.
#[cfg(not(target_os = "espidf"))]
pub fn start_tick_timer(tick: &'static TickSource, period_ms: u32) -> Result<(), HwInitError> {
    use core::sync::atomic::Ordering;

    SIM_TICK_RUNNING.store(true, Ordering::Release);
    std::thread::spawn(move || {
        while SIM_TICK_RUNNING.load(Ordering::Acquire) {
            std::thread::sleep(std::time::Duration::from_millis(u64::from(period_ms)));
            tick.on_tick();
        }
    });
    log::info!("hw_timer(sim): base tick thread started ({}ms)", period_ms);
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn stop_tick_timer() {
    SIM_TICK_RUNNING.store(false, core::sync::atomic::Ordering::Release);
}
