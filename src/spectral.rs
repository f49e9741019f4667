// TremorWatch — Spectral Analyzer
//
// Hamming window + forward FFT + magnitudes for one sample window.  The FFT
// plan is built once at startup and reused; the hot path allocates nothing.

use std::f32::consts::PI;
use std::sync::Arc;

use rustfft::{num_complex::Complex, Fft, FftPlanner};

use crate::config::N_SAMPLES;

pub struct SpectralAnalyzer {
    fft: Arc<dyn Fft<f32>>,
    scratch: Vec<Complex<f32>>,
}

impl SpectralAnalyzer {
    pub fn new() -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(N_SAMPLES);
        let scratch = vec![Complex::new(0.0, 0.0); fft.get_inplace_scratch_len()];
        Self { fft, scratch }
    }

    /// Compute the magnitude spectrum of one time-ordered window.
    ///
    /// The input is Hamming-windowed to tame leakage from the rectangular
    /// truncation, transformed in place, then collapsed to per-bin magnitudes.
    /// Only bins below `N_SAMPLES / 2` are meaningful for the real-valued
    /// input; downstream only reads the two bands of interest.  Magnitudes are
    /// on the raw (uncalibrated) scale the thresholds were tuned against.
    pub fn magnitudes(&mut self, window: &[i16; N_SAMPLES]) -> [f32; N_SAMPLES] {
        let mut bins = [Complex::new(0.0f32, 0.0); N_SAMPLES];
        for (i, (&sample, bin)) in window.iter().zip(bins.iter_mut()).enumerate() {
            bin.re = sample as f32 * hamming(i, N_SAMPLES);
        }

        self.fft.process_with_scratch(&mut bins, &mut self.scratch);

        let mut mags = [0.0f32; N_SAMPLES];
        for (mag, bin) in mags.iter_mut().zip(bins.iter()) {
            *mag = bin.norm();
        }
        mags
    }
}

impl Default for SpectralAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Hamming window coefficient for `index` in a window of `size`.
pub fn hamming(index: usize, size: usize) -> f32 {
    0.54 - 0.46 * ((2.0 * PI * index as f32) / (size as f32 - 1.0)).cos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SAMPLE_RATE_HZ;

    fn sine_window(freq_hz: f32, amplitude: f32) -> [i16; N_SAMPLES] {
        let mut window = [0i16; N_SAMPLES];
        for (i, slot) in window.iter_mut().enumerate() {
            let t = i as f32 / SAMPLE_RATE_HZ as f32;
            *slot = (amplitude * (2.0 * PI * freq_hz * t).sin()) as i16;
        }
        window
    }

    /// Index of the strongest bin below Nyquist, skipping DC.
    fn peak_bin(mags: &[f32; N_SAMPLES]) -> usize {
        (1..N_SAMPLES / 2)
            .max_by(|&a, &b| mags[a].partial_cmp(&mags[b]).unwrap())
            .unwrap()
    }

    #[test]
    fn hamming_is_symmetric_with_small_endpoints() {
        assert!((hamming(0, N_SAMPLES) - 0.08).abs() < 1e-3);
        assert!((hamming(N_SAMPLES - 1, N_SAMPLES) - 0.08).abs() < 1e-3);
        for i in 0..N_SAMPLES {
            let mirror = hamming(N_SAMPLES - 1 - i, N_SAMPLES);
            assert!((hamming(i, N_SAMPLES) - mirror).abs() < 1e-5);
        }
        // Centre of the window is near unity gain.
        assert!(hamming(N_SAMPLES / 2, N_SAMPLES) > 0.99);
    }

    #[test]
    fn sinusoid_peaks_in_its_own_bin() {
        // 3.125 Hz lands exactly on bin 8 (8 · 100 / 256).
        let window = sine_window(3.125, 800.0);
        let mut analyzer = SpectralAnalyzer::new();
        let mags = analyzer.magnitudes(&window);
        assert_eq!(peak_bin(&mags), 8);
        // Hamming coherent gain ≈ 0.54, so the peak is ≈ A·N·0.54/2.
        assert!(mags[8] > 800.0 * N_SAMPLES as f32 * 0.2);
    }

    #[test]
    fn constant_input_concentrates_at_dc() {
        let window = [500i16; N_SAMPLES];
        let mut analyzer = SpectralAnalyzer::new();
        let mags = analyzer.magnitudes(&window);
        for k in 4..N_SAMPLES / 2 {
            assert!(mags[0] > mags[k]);
        }
    }

    #[test]
    fn magnitudes_are_deterministic() {
        let window = sine_window(5.5, 300.0);
        let mut analyzer = SpectralAnalyzer::new();
        let first = analyzer.magnitudes(&window);
        let second = analyzer.magnitudes(&window);
        assert_eq!(first, second, "identical windows must yield identical spectra");
    }
}
