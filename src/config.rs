// TremorWatch — Hardware & DSP Policy Configuration
// Target: Seeed Studio Xiao ESP32-C3 (RISC-V) + LSM6DSL accelerometer

// ---------------------------------------------------------------------------
// GPIO Pin Definitions (Xiao ESP32-C3 pinout)
// ---------------------------------------------------------------------------
pub const PIN_LED: i32 = 4;         // D2 — Indicator LED (active HIGH)
pub const PIN_I2C_SDA: i32 = 6;     // D4 — I2C data line
pub const PIN_I2C_SCL: i32 = 7;     // D5 — I2C clock line

// ---------------------------------------------------------------------------
// I2C Bus
// ---------------------------------------------------------------------------
pub const I2C_ADDR_LSM6DSL: u8 = 0x6A;
pub const I2C_TIMEOUT_TICKS: u32 = 1000; // FreeRTOS ticks

// ---------------------------------------------------------------------------
// Task Stack Sizes (bytes)
// ---------------------------------------------------------------------------
pub const STACK_SAMPLER: usize = 4096;
pub const STACK_BLINK: usize = 4096;
pub const STACK_ANALYSIS: usize = 8192;

// ---------------------------------------------------------------------------
// Sampling & Window
// ---------------------------------------------------------------------------
pub const SAMPLE_RATE_HZ: u32 = 100;
pub const SAMPLE_INTERVAL_MS: u64 = 10;      // 1 / SAMPLE_RATE_HZ
pub const N_SAMPLES: usize = 256;            // window length, must be a power of two
pub const WINDOW_SEC: f32 = N_SAMPLES as f32 / SAMPLE_RATE_HZ as f32; // ≈2.56 s
pub const HZ_PER_BIN: f32 = SAMPLE_RATE_HZ as f32 / N_SAMPLES as f32; // ≈0.39 Hz

// ---------------------------------------------------------------------------
// Frequency Bands (bin = f · N / Fs, inclusive ranges)
// ---------------------------------------------------------------------------
pub const TREMOR_BIN_START: usize = 7;  // ≈2.7 Hz
pub const TREMOR_BIN_END: usize = 10;   // <4.5 Hz
pub const DYSK_BIN_START: usize = 12;   // ≈4.7 Hz
pub const DYSK_BIN_END: usize = 18;     // <7.0 Hz

// ---------------------------------------------------------------------------
// Classification Thresholds (raw pipeline magnitude scale, field-tunable)
// ---------------------------------------------------------------------------
pub const MAG_THRESHOLD_TREMOR: f32 = 1500.0;
pub const MAG_THRESHOLD_DYSK: f32 = 1500.0;

// ---------------------------------------------------------------------------
// Indicator Timing (milliseconds)
// ---------------------------------------------------------------------------
pub const BLINK_TREMOR_MS: u64 = 250;   // 2 Hz blink
pub const BLINK_DYSK_MS: u64 = 63;      // 8 Hz blink
pub const BLINK_FAULT_MS: u64 = 100;    // sensor-init failure pattern
pub const BLINK_POLL_MS: u64 = 5;       // blink task poll quantum
pub const ANALYSIS_YIELD_MS: u64 = 2;   // analysis loop cooperative yield

// ---------------------------------------------------------------------------
// Compile-time policy checks — a bad constant set must not build
// ---------------------------------------------------------------------------
const _: () = assert!(N_SAMPLES.is_power_of_two(), "N_SAMPLES must be a power of two");
const _: () = assert!(TREMOR_BIN_START <= TREMOR_BIN_END, "tremor band is empty");
const _: () = assert!(DYSK_BIN_START <= DYSK_BIN_END, "dyskinesia band is empty");
const _: () = assert!(TREMOR_BIN_END < DYSK_BIN_START, "bands must be disjoint");
const _: () = assert!(DYSK_BIN_END < N_SAMPLES / 2, "band exceeds Nyquist bin");
