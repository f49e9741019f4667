// TremorWatch — Blink Task
//
// Polls the published LED mode every few milliseconds and drives the
// indicator through the blink phase state machine.  The poll quantum is well
// under the fastest blink interval, so a mode switch takes effect within one
// poll rather than waiting out a stale toggle period.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::config::BLINK_POLL_MS;
use crate::drivers::led::LedDriver;
use crate::events::LedMode;
use crate::indicator::Blinker;

pub fn blink_task(mut led: LedDriver<'static>, led_mode: Arc<AtomicU8>) {
    log::info!("Blink task started");

    let poll = Duration::from_millis(BLINK_POLL_MS);
    let mut blinker = Blinker::new(Instant::now());

    loop {
        let mode = LedMode::from_u8(led_mode.load(Ordering::Acquire));
        if let Some(level) = blinker.tick(mode, Instant::now()) {
            led.set(level);
        }
        thread::sleep(poll);
    }
}
