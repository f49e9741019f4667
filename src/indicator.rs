// TremorWatch — Output Mode Controller & Blink Phase
//
// `ModeController` maps each window's classification straight onto an LED
// mode — no hysteresis, no debounce, no memory beyond the current mode.
// `Blinker` owns the toggle phase the blink task drives; a mode change
// invalidates any toggle in flight and re-arms at the new rate.

use std::time::Instant;

use crate::events::{Classification, LedMode};

// ---------------------------------------------------------------------------
// Mode controller — pure function of the latest label
// ---------------------------------------------------------------------------
#[derive(Debug, Default)]
pub struct ModeController {
    current: LedMode,
}

impl ModeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> LedMode {
        self.current
    }

    /// Re-evaluate the mode from this window's label.  Returns the new mode
    /// when it changed, so the caller can log the transition; the mapping
    /// itself ignores all history.
    pub fn update(&mut self, label: Classification) -> Option<LedMode> {
        let next = LedMode::from(label);
        if next != self.current {
            self.current = next;
            Some(next)
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Blink phase — polled by the blink task
// ---------------------------------------------------------------------------
pub struct Blinker {
    mode: LedMode,
    level: bool,
    last_toggle: Instant,
}

impl Blinker {
    pub fn new(now: Instant) -> Self {
        Self {
            mode: LedMode::Off,
            level: false,
            last_toggle: now,
        }
    }

    /// Advance one poll against the published mode.  Returns `Some(level)`
    /// when the LED line must change.
    ///
    /// Entering a different mode forces the line low and restarts the phase
    /// timer, so a half-elapsed slow toggle never bleeds into the fast rate.
    /// `Off` holds the line low and never toggles.
    pub fn tick(&mut self, mode: LedMode, now: Instant) -> Option<bool> {
        if mode != self.mode {
            self.mode = mode;
            self.last_toggle = now;
            if self.level {
                self.level = false;
                return Some(false);
            }
            return None;
        }

        let interval = self.mode.blink_interval()?;
        if now.duration_since(self.last_toggle) >= interval {
            self.last_toggle = now;
            self.level = !self.level;
            Some(self.level)
        } else {
            None
        }
    }
}
