// TremorWatch — Indicator LED Driver
//
// Single GPIO output; the blink task owns the toggle phase, this driver only
// sets the line level.

use esp_idf_hal::gpio::{AnyOutputPin, Output, PinDriver};

pub struct LedDriver<'d> {
    pin: PinDriver<'d, AnyOutputPin, Output>,
}

impl<'d> LedDriver<'d> {
    pub fn new(pin: PinDriver<'d, AnyOutputPin, Output>) -> Self {
        Self { pin }
    }

    /// Drive the LED line high or low.  GPIO writes on this pin cannot fail
    /// meaningfully; errors are dropped rather than rippling into the tasks.
    pub fn set(&mut self, level: bool) {
        if level {
            let _ = self.pin.set_high();
        } else {
            let _ = self.pin.set_low();
        }
    }
}
