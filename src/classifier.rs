// TremorWatch — Band Classifier
//
// Scans the tremor and dyskinesia bin ranges of a magnitude spectrum and
// applies the strict-dominance threshold rule.  A band wins only if its peak
// exceeds both its own threshold and the other band's peak; everything else,
// including an exact tie with both peaks above threshold, classifies as
// `None` — ambiguous readings must not raise an alarm.
//
// Precondition (checked at compile time in `config`): the two bands are
// disjoint bin ranges below Nyquist.

use std::ops::RangeInclusive;

use crate::config::*;
use crate::events::Classification;

pub const TREMOR_BAND: RangeInclusive<usize> = TREMOR_BIN_START..=TREMOR_BIN_END;
pub const DYSK_BAND: RangeInclusive<usize> = DYSK_BIN_START..=DYSK_BIN_END;

/// Peak magnitude over an inclusive bin range.
pub fn band_peak(mags: &[f32], band: RangeInclusive<usize>) -> f32 {
    mags[band].iter().fold(0.0f32, |peak, &m| peak.max(m))
}

/// Threshold + dominance decision, evaluated in fixed priority.
pub fn classify(peak_tremor: f32, peak_dysk: f32) -> Classification {
    if peak_tremor > MAG_THRESHOLD_TREMOR && peak_tremor > peak_dysk {
        Classification::Tremor
    } else if peak_dysk > MAG_THRESHOLD_DYSK && peak_dysk > peak_tremor {
        Classification::Dyskinesia
    } else {
        Classification::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_spectrum_is_none() {
        assert_eq!(classify(0.0, 0.0), Classification::None);
        assert_eq!(classify(MAG_THRESHOLD_TREMOR * 0.9, MAG_THRESHOLD_DYSK * 0.9), Classification::None);
    }

    #[test]
    fn dominant_tremor_peak_fires_tremor() {
        assert_eq!(classify(MAG_THRESHOLD_TREMOR + 1.0, 0.0), Classification::Tremor);
        assert_eq!(
            classify(MAG_THRESHOLD_TREMOR * 3.0, MAG_THRESHOLD_DYSK * 2.0),
            Classification::Tremor
        );
    }

    #[test]
    fn dominant_dysk_peak_fires_dyskinesia() {
        assert_eq!(classify(0.0, MAG_THRESHOLD_DYSK + 1.0), Classification::Dyskinesia);
        assert_eq!(
            classify(MAG_THRESHOLD_TREMOR * 2.0, MAG_THRESHOLD_DYSK * 3.0),
            Classification::Dyskinesia
        );
    }

    #[test]
    fn tie_above_both_thresholds_is_none() {
        // Strict dominance: neither branch's strict inequality holds on an
        // exact tie, so the safe default wins.  Intentional, do not "fix".
        let peak = MAG_THRESHOLD_TREMOR.max(MAG_THRESHOLD_DYSK) * 2.0;
        assert_eq!(classify(peak, peak), Classification::None);
    }

    #[test]
    fn peak_exactly_at_threshold_is_none() {
        assert_eq!(classify(MAG_THRESHOLD_TREMOR, 0.0), Classification::None);
        assert_eq!(classify(0.0, MAG_THRESHOLD_DYSK), Classification::None);
    }

    #[test]
    fn raising_the_tremor_peak_never_flips_tremor_away() {
        let dysk = MAG_THRESHOLD_DYSK * 1.5;
        let mut tremor = dysk + 1.0;
        assert_eq!(classify(tremor, dysk), Classification::Tremor);
        for _ in 0..8 {
            tremor *= 2.0;
            assert_eq!(classify(tremor, dysk), Classification::Tremor);
        }
    }

    #[test]
    fn band_peak_takes_the_maximum_over_the_range() {
        let mut mags = [0.0f32; N_SAMPLES];
        mags[TREMOR_BIN_START] = 10.0;
        mags[TREMOR_BIN_END] = 40.0;
        mags[TREMOR_BIN_END + 1] = 99.0; // outside the band
        assert_eq!(band_peak(&mags, TREMOR_BAND), 40.0);
        assert_eq!(band_peak(&mags, DYSK_BAND), 0.0);
    }
}
