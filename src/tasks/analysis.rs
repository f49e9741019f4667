// TremorWatch — Analysis Loop (control core)
//
// Continuously polls the window-ready flag; when a window completes, copies
// it out of the ring buffer, runs the spectral + classification stages and
// publishes the resulting LED mode.  Runs on the main task and never blocks
// on I/O — each idle iteration yields a small fixed duration.
//
// Consuming the flag with `swap` gives the coalescing policy for free: if
// this loop falls behind the 2.56 s window cadence, intermediate windows are
// skipped silently and only the newest complete window is analysed.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use crate::classifier::{band_peak, classify, DYSK_BAND, TREMOR_BAND};
use crate::config::*;
use crate::events::{Classification, LedMode};
use crate::indicator::ModeController;
use crate::ring::RingBuffer;
use crate::spectral::SpectralAnalyzer;

pub fn analysis_loop(
    ring: Arc<Mutex<RingBuffer>>,
    window_ready: Arc<AtomicBool>,
    led_mode: Arc<AtomicU8>,
) -> ! {
    log::info!("Analysis loop started");

    let mut analyzer = SpectralAnalyzer::new();
    let mut controller = ModeController::new();
    let yield_for = Duration::from_millis(ANALYSIS_YIELD_MS);

    loop {
        if window_ready.swap(false, Ordering::AcqRel) {
            // Copy out promptly — the sampler keeps writing at 100 Hz, and
            // the copy must finish long before it reaches the copied slots.
            let window = ring.lock().unwrap().window();

            let label = classify_window(&mut analyzer, &window);

            // Publish every window; the mapping has no hysteresis.
            led_mode.store(LedMode::from(label).as_u8(), Ordering::Release);

            if let Some(mode) = controller.update(label) {
                log::info!(">> {} — LED mode {:?}", label.display_name(), mode);
            }
        }

        thread::sleep(yield_for);
    }
}

/// One window through windowing, FFT, band peaks and the decision rule.
pub fn classify_window(
    analyzer: &mut SpectralAnalyzer,
    window: &[i16; N_SAMPLES],
) -> Classification {
    log::debug!("window ready — running FFT");

    let mags = analyzer.magnitudes(window);
    let peak_tremor = band_peak(&mags, TREMOR_BAND);
    let peak_dysk = band_peak(&mags, DYSK_BAND);

    log::debug!("peak_tremor={:.0}  peak_dysk={:.0}", peak_tremor, peak_dysk);

    classify(peak_tremor, peak_dysk)
}
