// TremorWatch — Shared Types
//
// Classification labels produced by the analysis task and the LED modes they
// map onto.  `LedMode` crosses task boundaries through an `AtomicU8` cell, so
// it carries explicit u8 conversions.

use std::time::Duration;

use crate::config::*;

// ---------------------------------------------------------------------------
// Classification label — output of one window's band analysis
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Classification {
    #[default]
    None,
    Tremor,
    Dyskinesia,
}

impl Classification {
    /// Human-readable label for log lines.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Tremor => "tremor",
            Self::Dyskinesia => "dyskinesia",
        }
    }
}

// ---------------------------------------------------------------------------
// LED mode — one-to-one with the classification label
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LedMode {
    #[default]
    Off,
    Tremor,
    Dysk,
}

impl From<Classification> for LedMode {
    fn from(label: Classification) -> Self {
        match label {
            Classification::None => Self::Off,
            Classification::Tremor => Self::Tremor,
            Classification::Dyskinesia => Self::Dysk,
        }
    }
}

impl LedMode {
    /// Toggle period for the blinking modes; `None` means the LED is held low.
    pub fn blink_interval(&self) -> Option<Duration> {
        match self {
            Self::Off => None,
            Self::Tremor => Some(Duration::from_millis(BLINK_TREMOR_MS)),
            Self::Dysk => Some(Duration::from_millis(BLINK_DYSK_MS)),
        }
    }

    pub fn as_u8(self) -> u8 {
        match self {
            Self::Off => 0,
            Self::Tremor => 1,
            Self::Dysk => 2,
        }
    }

    /// Inverse of [`as_u8`](Self::as_u8).  Unknown values decode to `Off` —
    /// the inactive level is the safe default for a corrupted cell.
    pub fn from_u8(raw: u8) -> Self {
        match raw {
            1 => Self::Tremor,
            2 => Self::Dysk,
            _ => Self::Off,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_maps_one_to_one_onto_mode() {
        assert_eq!(LedMode::from(Classification::None), LedMode::Off);
        assert_eq!(LedMode::from(Classification::Tremor), LedMode::Tremor);
        assert_eq!(LedMode::from(Classification::Dyskinesia), LedMode::Dysk);
    }

    #[test]
    fn mode_round_trips_through_u8_cell() {
        for mode in [LedMode::Off, LedMode::Tremor, LedMode::Dysk] {
            assert_eq!(LedMode::from_u8(mode.as_u8()), mode);
        }
        // Garbage decodes to the inactive mode.
        assert_eq!(LedMode::from_u8(0xFF), LedMode::Off);
    }

    #[test]
    fn blink_rates_are_distinct_and_off_has_none() {
        let tremor = LedMode::Tremor.blink_interval().unwrap();
        let dysk = LedMode::Dysk.blink_interval().unwrap();
        assert!(dysk < tremor, "dyskinesia blink must be faster");
        assert!(LedMode::Off.blink_interval().is_none());
    }
}
