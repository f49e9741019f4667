// TremorWatch — Firmware Entry Point
//
// Pipeline:
//   1. Sampler task: 100 Hz Z-axis tick → ring buffer → window-ready flag.
//   2. Analysis loop (main task): Hamming + FFT → band peaks →
//      strict-dominance classification → LED mode.
//   3. Blink task: drives the indicator at the mode's rate
//      (tremor 2 Hz, dyskinesia 8 Hz, otherwise off).
//
// If the accelerometer fails to init, the firmware drops into a permanent
// fault blink and classification never starts.

mod classifier;
mod config;
mod drivers;
mod events;
mod indicator;
mod ring;
mod spectral;
mod tasks;

use std::sync::atomic::{AtomicBool, AtomicU8};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use anyhow::ensure;
use esp_idf_hal::gpio::{AnyOutputPin, Output, OutputPin, PinDriver};
use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_hal::prelude::*;

use crate::config::*;
use crate::drivers::imu::Lsm6dsl;
use crate::drivers::led::LedDriver;
use crate::events::LedMode;
use crate::ring::RingBuffer;

fn main() -> anyhow::Result<()> {
    // Link esp-idf-sys runtime patches and initialise logging.
    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();
    log::info!("=== Tremor / Dyskinesia Detector ===");
    log::info!(
        "window {:.2} s, {:.3} Hz/bin — tremor bins {}..={}, dyskinesia bins {}..={}",
        WINDOW_SEC,
        HZ_PER_BIN,
        TREMOR_BIN_START,
        TREMOR_BIN_END,
        DYSK_BIN_START,
        DYSK_BIN_END,
    );

    // Integer policy constants are checked at compile time in `config`; the
    // float thresholds get their once-only check here.
    ensure!(
        MAG_THRESHOLD_TREMOR > 0.0 && MAG_THRESHOLD_DYSK > 0.0,
        "magnitude thresholds must be positive"
    );

    // ---- Peripherals ------------------------------------------------------
    let peripherals = Peripherals::take()?;

    // ---- I2C bus (LSM6DSL) ------------------------------------------------
    let i2c_config = I2cConfig::new().baudrate(400u32.kHz().into());
    let i2c = I2cDriver::new(
        peripherals.i2c0,
        peripherals.pins.gpio6, // SDA
        peripherals.pins.gpio7, // SCL
        &i2c_config,
    )?;
    // SAFETY: The I2C peripheral is a singleton obtained from `Peripherals::take()`.
    // It will live for the entire programme duration (embedded firmware never exits).
    let i2c_bus: &'static Mutex<I2cDriver<'static>> =
        Box::leak(Box::new(Mutex::new(unsafe { core::mem::transmute(i2c) })));

    // ---- Indicator LED ----------------------------------------------------
    let led_pin = PinDriver::output(peripherals.pins.gpio4.downgrade_output())?;
    // SAFETY: GPIO peripheral lives forever, same argument as I2C above.
    let led_pin: PinDriver<'static, AnyOutputPin, Output> =
        unsafe { core::mem::transmute(led_pin) };
    let led = LedDriver::new(led_pin);

    // ---- Sensor bring-up --------------------------------------------------
    let imu = Lsm6dsl::new(i2c_bus);
    if !imu.is_connected() {
        log::error!("LSM6DSL not responding on I2C (WHO_AM_I mismatch)");
        fault_blink(led);
    }
    if let Err(e) = imu.init() {
        log::error!("LSM6DSL init FAILED: {}", e);
        fault_blink(led);
    }

    // ---- Shared state -----------------------------------------------------
    let ring = Arc::new(Mutex::new(RingBuffer::new()));
    let window_ready = Arc::new(AtomicBool::new(false));
    let led_mode = Arc::new(AtomicU8::new(LedMode::Off.as_u8()));

    // ---- Spawn tasks (map to FreeRTOS tasks via std::thread) ---------------

    // Sampler task — tightest timing, short body.
    let sampler_ring = Arc::clone(&ring);
    let sampler_ready = Arc::clone(&window_ready);
    thread::Builder::new()
        .name("sampler".into())
        .stack_size(STACK_SAMPLER)
        .spawn(move || {
            tasks::sampler::sampler_task(i2c_bus, sampler_ring, sampler_ready);
        })?;

    // Blink task — indicator toggle at the published mode's rate.
    let blink_mode = Arc::clone(&led_mode);
    thread::Builder::new()
        .name("blink".into())
        .stack_size(STACK_BLINK)
        .spawn(move || {
            tasks::blink::blink_task(led, blink_mode);
        })?;

    // The analysis loop owns the main task and never returns.
    log::info!("Boot complete — entering analysis loop");
    tasks::analysis::analysis_loop(ring, window_ready, led_mode)
}

/// Permanent degraded-indicator loop for a failed sensor bring-up: a steady
/// 100 ms blink, visually distinct from both classification rates.
/// Does not return.
fn fault_blink(mut led: LedDriver<'static>) -> ! {
    let period = Duration::from_millis(BLINK_FAULT_MS);
    let mut level = false;
    loop {
        level = !level;
        led.set(level);
        thread::sleep(period);
    }
}
