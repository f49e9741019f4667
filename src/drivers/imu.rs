// TremorWatch — LSM6DSL Accelerometer Driver
//
// Custom register-level driver over shared I2C bus.
// Avoids external crate version conflicts with esp-idf-hal.
// Only the Z axis is read — the classifier works on a single axis.

use std::sync::Mutex;

use esp_idf_hal::i2c::I2cDriver;

use crate::config::*;

/// Thread-safe handle to a shared I2C bus.
pub type SharedBus = &'static Mutex<I2cDriver<'static>>;

// LSM6DSL register addresses
const REG_WHO_AM_I: u8 = 0x0F;
const REG_CTRL1_XL: u8 = 0x10;
const REG_CTRL3_C: u8 = 0x12;
const REG_OUTZ_L_XL: u8 = 0x2C; // Z-axis low byte, high byte follows
const WHO_AM_I_EXPECTED: u8 = 0x6A;

// Accelerometer sensitivity at ±2 g (mg per LSB)
const SENS_MG_PER_LSB_2G: f32 = 0.061;

pub struct Lsm6dsl {
    bus: SharedBus,
}

impl Lsm6dsl {
    pub fn new(bus: SharedBus) -> Self {
        Self { bus }
    }

    /// Verify the device is reachable on the I2C bus.
    pub fn is_connected(&self) -> bool {
        let mut bus = self.bus.lock().unwrap();
        let mut buf = [0u8; 1];
        match bus.write_read(I2C_ADDR_LSM6DSL, &[REG_WHO_AM_I], &mut buf, I2C_TIMEOUT_TICKS) {
            Ok(()) => buf[0] == WHO_AM_I_EXPECTED,
            Err(_) => false,
        }
    }

    /// Enable the accelerometer: block data update + auto-increment, then
    /// ODR 104 Hz at ±2 g.  104 Hz is the closest ODR above the 100 Hz
    /// sampling tick, so every tick sees a fresh sample.
    pub fn init(&self) -> anyhow::Result<()> {
        let mut bus = self.bus.lock().unwrap();

        // BDU = 1, IF_INC = 1
        bus.write(I2C_ADDR_LSM6DSL, &[REG_CTRL3_C, 0x44], I2C_TIMEOUT_TICKS)?;

        // Accelerometer: ODR 104 Hz, full scale ±2 g
        bus.write(I2C_ADDR_LSM6DSL, &[REG_CTRL1_XL, 0x40], I2C_TIMEOUT_TICKS)?;

        log::info!("LSM6DSL initialised (104 Hz, ±2g)");
        Ok(())
    }

    /// Read the Z-axis acceleration in milli-g.
    pub fn read_z_mg(&self) -> anyhow::Result<i16> {
        let mut bus = self.bus.lock().unwrap();
        let mut raw = [0u8; 2];
        bus.write_read(I2C_ADDR_LSM6DSL, &[REG_OUTZ_L_XL], &mut raw, I2C_TIMEOUT_TICKS)?;

        let lsb = i16::from_le_bytes(raw);
        Ok((lsb as f32 * SENS_MG_PER_LSB_2G) as i16)
    }
}
