// TremorWatch — Sample Ring Buffer & Window Detection
//
// Fixed-capacity circular store for raw acceleration samples.  The sampler
// task is the only writer (one push per 10 ms tick); the analysis task copies
// a full window out whenever the write position wraps.  Capacity is a power
// of two so the wraparound is a mask, not a modulo.

use crate::config::N_SAMPLES;

const INDEX_MASK: usize = N_SAMPLES - 1;

pub struct RingBuffer {
    samples: [i16; N_SAMPLES],
    write_pos: usize,
}

impl RingBuffer {
    pub fn new() -> Self {
        Self {
            samples: [0; N_SAMPLES],
            write_pos: 0,
        }
    }

    /// Write one sample at the current position and advance.  Returns `true`
    /// exactly when the position wraps back to 0, i.e. a full window of the
    /// most recent `N_SAMPLES` values has just been completed.  Never blocks,
    /// never fails; the caller owns cross-task signalling.
    #[inline]
    pub fn push(&mut self, sample: i16) -> bool {
        self.samples[self.write_pos] = sample;
        self.write_pos = (self.write_pos + 1) & INDEX_MASK;
        self.write_pos == 0
    }

    /// Copy out the most recent `N_SAMPLES` values, oldest first.
    ///
    /// Indexing starts at `write_pos` (the next slot to be overwritten is by
    /// definition the oldest), so the copy stays correct even if window
    /// boundaries are ever decoupled from the buffer capacity.  Returning a
    /// copy rather than a view matters: the spectral stage mutates its input
    /// in place and the sampler keeps writing while analysis runs.
    pub fn window(&self) -> [i16; N_SAMPLES] {
        let mut out = [0i16; N_SAMPLES];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self.samples[(self.write_pos + i) & INDEX_MASK];
        }
        out
    }
}

impl Default for RingBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[test]
    fn window_ready_fires_every_n_pushes() {
        let mut ring = RingBuffer::new();
        for i in 1..=(3 * N_SAMPLES) {
            let ready = ring.push(i as i16);
            assert_eq!(ready, i % N_SAMPLES == 0, "push #{}", i);
        }
    }

    #[test]
    fn window_is_last_n_samples_oldest_first() {
        let mut ring = RingBuffer::new();
        // Push N + 37 samples so the window straddles the wraparound.
        let total = N_SAMPLES + 37;
        for i in 0..total {
            ring.push(i as i16);
        }
        let window = ring.window();
        for (i, &v) in window.iter().enumerate() {
            assert_eq!(v as usize, total - N_SAMPLES + i);
        }
    }

    #[test]
    fn extraction_is_deterministic_without_intervening_pushes() {
        let mut ring = RingBuffer::new();
        for i in 0..N_SAMPLES {
            ring.push((i * 3) as i16);
        }
        assert_eq!(ring.window(), ring.window());
    }

    #[test]
    fn first_window_needs_exactly_n_pushes() {
        let mut ring = RingBuffer::new();
        for i in 0..N_SAMPLES - 1 {
            assert!(!ring.push(i as i16));
        }
        assert!(ring.push(0));
    }

    #[test]
    fn pending_windows_coalesce_to_the_latest() {
        // Same primitives the tasks use: a bool flag raised on wrap and
        // consumed with swap.  Two wraparounds before the consumer polls must
        // yield exactly one window — the latest one.
        let ready = AtomicBool::new(false);
        let mut ring = RingBuffer::new();
        let total = 2 * N_SAMPLES;
        for i in 0..total {
            if ring.push(i as i16) {
                ready.store(true, Ordering::Release);
            }
        }
        assert!(ready.swap(false, Ordering::AcqRel));
        let window = ring.window();
        assert_eq!(window[0] as usize, total - N_SAMPLES);
        assert_eq!(window[N_SAMPLES - 1] as usize, total - 1);
        // No second pending signal.
        assert!(!ready.swap(false, Ordering::AcqRel));
    }
}
