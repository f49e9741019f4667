// TremorWatch — Sampler Task
//
// Reads one Z-axis sample per 10 ms tick and pushes it into the shared ring
// buffer.  When a push completes a window, the window-ready flag goes up with
// Release ordering; the analysis task consumes it with a swap.  The tick body
// never touches the spectral pipeline.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use crate::config::*;
use crate::drivers::imu::{Lsm6dsl, SharedBus};
use crate::ring::RingBuffer;

pub fn sampler_task(
    bus: SharedBus,
    ring: Arc<Mutex<RingBuffer>>,
    window_ready: Arc<AtomicBool>,
) {
    log::info!("Sampler task started ({} Hz)", SAMPLE_RATE_HZ);

    let imu = Lsm6dsl::new(bus);
    let interval = Duration::from_millis(SAMPLE_INTERVAL_MS);

    loop {
        let tick_start = Instant::now();

        match imu.read_z_mg() {
            Ok(sample) => {
                let window_complete = ring.lock().unwrap().push(sample);
                if window_complete {
                    // A still-set flag just coalesces: the analysis task will
                    // pick up whatever window is newest when it gets there.
                    window_ready.store(true, Ordering::Release);
                }
            }
            Err(e) => {
                log::warn!("IMU read error: {}", e);
            }
        }

        // Sleep for the remainder of the sampling interval to hold 100 Hz.
        let elapsed = tick_start.elapsed();
        if elapsed < interval {
            thread::sleep(interval - elapsed);
        }
    }
}
