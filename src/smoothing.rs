//! Moving-average smoothing for noisy sensor readings.

use heapless::Vec;

/// Default smoothing window size.
pub const SMOOTHING_SAMPLES: usize = 5;

/// Fixed-size circular buffer producing a running average.
///
/// The buffer starts zero-filled and the returned mean always spans all
/// `N` slots; there is no separate fill-up phase. The first few averages
/// are therefore pulled toward zero, which the sampling loop tolerates.
/// Feed a reading `N` times to prime the filter if that matters.
///
/// State is owned by one caller and mutated in place; serialize access
/// yourself if the firmware grows interrupts or multiple tasks.
/// RAM cost: N * 4 bytes plus the cursor.
#[derive(Debug, Clone)]
pub struct SmoothingFilter<const N: usize = SMOOTHING_SAMPLES> {
    buffer: Vec<f32, N>,
    cursor: usize,
}

impl<const N: usize> SmoothingFilter<N> {
    /// Create a filter with a zero-filled window.
    pub fn new() -> Self {
        debug_assert!(N > 0);

        let mut buffer = Vec::new();
        for _ in 0..N {
            let _ = buffer.push(0.0);
        }

        Self { buffer, cursor: 0 }
    }

    /// Add a reading and return the mean of the window.
    ///
    /// Overwrites the oldest slot, advances the cursor with wrap-around,
    /// then averages all `N` slots. Always returns a finite value for
    /// finite input.
    pub fn apply(&mut self, value: f32) -> f32 {
        self.buffer[self.cursor] = value;
        self.cursor = (self.cursor + 1) % N;

        let sum: f32 = self.buffer.iter().sum();
        sum / N as f32
    }

    /// Zero the window and rewind the cursor.
    pub fn reset(&mut self) {
        self.cursor = 0;
        for slot in self.buffer.iter_mut() {
            *slot = 0.0;
        }
    }

    /// Current window contents, oldest-to-newest order not guaranteed.
    pub fn samples(&self) -> &[f32] {
        &self.buffer
    }
}

impl<const N: usize> Default for SmoothingFilter<N> {
    fn default() -> Self {
        Self::new()
    }
}
