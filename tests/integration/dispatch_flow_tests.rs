//! End-to-end dispatch flow: tick source → scheduler → task set → mock DIO.
//!
//! Wires the reference task set (button 20 ms, led 40 ms, app 60 ms) the
//! same way `main()` does and drives hardware ticks by hand.

use std::cell::Cell;

use panelctl::app::ports::Level;
use panelctl::app::tasks::{AppTask, ButtonTask, LedTask};
use panelctl::config::SystemConfig;
use panelctl::drivers::button::ButtonState;
use panelctl::scheduler::TickScheduler;
use panelctl::tick::TickSource;

use crate::mock_dio::MockDio;

/// One hardware tick plus its dispatch round.
fn step(ts: &TickSource, sched: &mut TickScheduler<'_>) {
    ts.on_tick();
    assert!(sched.service_pending());
}

#[test]
fn press_reaches_the_led_after_the_debounce_window() {
    let config = SystemConfig::default();
    let dio = MockDio::new();
    let ts = TickSource::new();
    let state = Cell::new(ButtonState::Released);

    let mut button = ButtonTask::new(&dio, config.debounce_samples, Level::Low, &state);
    let mut led = LedTask::new(&dio);
    let mut app = AppTask::new(&dio, &state);

    let mut sched = TickScheduler::new(config.base_tick_ms, &ts);
    sched.add(config.button_task_period_ms, &mut button).unwrap();
    sched.add(config.led_task_period_ms, &mut led).unwrap();
    sched.add(config.app_task_period_ms, &mut app).unwrap();

    // Button held down from the very first sample.
    dio.set_button_raw(true);

    // Ticks 1–2 (20–40 ms): debounce still counting, LED stays off.
    step(&ts, &mut sched);
    assert!(!dio.led_on());
    step(&ts, &mut sched);
    assert!(!dio.led_on());
    assert_eq!(state.get(), ButtonState::Released);

    // Tick 3 (60 ms): third agreeing sample commits PRESSED, and the app
    // task — due on the same tick, after the button task — lights the LED.
    step(&ts, &mut sched);
    assert_eq!(state.get(), ButtonState::Pressed);
    assert!(dio.led_on());
}

#[test]
fn bounce_delays_the_commit() {
    let config = SystemConfig::default();
    let dio = MockDio::new();
    let ts = TickSource::new();
    let state = Cell::new(ButtonState::Released);

    let mut button = ButtonTask::new(&dio, config.debounce_samples, Level::Low, &state);
    let mut led = LedTask::new(&dio);
    let mut app = AppTask::new(&dio, &state);

    let mut sched = TickScheduler::new(config.base_tick_ms, &ts);
    sched.add(config.button_task_period_ms, &mut button).unwrap();
    sched.add(config.led_task_period_ms, &mut led).unwrap();
    sched.add(config.app_task_period_ms, &mut app).unwrap();

    // Raw line: pressed, bounce to released, then solidly pressed.
    let raw = [true, false, true, true, true];
    for (i, &pressed) in raw.iter().enumerate() {
        dio.set_button_raw(pressed);
        step(&ts, &mut sched);
        if i < raw.len() - 1 {
            assert_eq!(state.get(), ButtonState::Released, "sample {}", i + 1);
        }
    }

    // The bounce at sample 2 restarted the run: commit lands on sample 5.
    assert_eq!(state.get(), ButtonState::Pressed);

    // LED follows at the next app tick (tick 6, 120 ms).
    assert!(!dio.led_on());
    step(&ts, &mut sched);
    assert!(dio.led_on());
    assert_eq!(ts.elapsed_ticks(), 0); // 120 ms cycle wrapped
}

#[test]
fn release_turns_the_led_back_off() {
    let config = SystemConfig::default();
    let dio = MockDio::new();
    let ts = TickSource::new();
    let state = Cell::new(ButtonState::Released);

    let mut button = ButtonTask::new(&dio, config.debounce_samples, Level::Low, &state);
    let mut led = LedTask::new(&dio);
    let mut app = AppTask::new(&dio, &state);

    let mut sched = TickScheduler::new(config.base_tick_ms, &ts);
    sched.add(config.button_task_period_ms, &mut button).unwrap();
    sched.add(config.led_task_period_ms, &mut led).unwrap();
    sched.add(config.app_task_period_ms, &mut app).unwrap();

    dio.set_button_raw(true);
    for _ in 0..6 {
        step(&ts, &mut sched);
    }
    assert!(dio.led_on());

    // Release: three agreeing samples (ticks 7–9), commit on tick 9,
    // where the app task is also due and clears the LED in the same round.
    dio.set_button_raw(false);
    step(&ts, &mut sched);
    step(&ts, &mut sched);
    assert!(dio.led_on());
    step(&ts, &mut sched);
    assert_eq!(state.get(), ButtonState::Released);
    assert!(!dio.led_on());
}

#[test]
fn idle_panel_stays_dark_across_cycle_wraps() {
    let config = SystemConfig::default();
    let dio = MockDio::new();
    let ts = TickSource::new();
    let state = Cell::new(ButtonState::Released);

    let mut button = ButtonTask::new(&dio, config.debounce_samples, Level::Low, &state);
    let mut led = LedTask::new(&dio);
    let mut app = AppTask::new(&dio, &state);

    let mut sched = TickScheduler::new(config.base_tick_ms, &ts);
    sched.add(config.button_task_period_ms, &mut button).unwrap();
    sched.add(config.led_task_period_ms, &mut led).unwrap();
    sched.add(config.app_task_period_ms, &mut app).unwrap();
    assert_eq!(sched.cycle_ticks(), 6);

    // Two full 120 ms cycles without a press.
    for _ in 0..12 {
        step(&ts, &mut sched);
        assert!(!dio.led_on());
    }
    assert_eq!(ts.elapsed_ticks(), 0);

    // Every LED write was Low: refreshes and app writes, no glitches.
    assert!(dio
        .writes
        .borrow()
        .iter()
        .all(|w| w.level == Level::Low));
}
