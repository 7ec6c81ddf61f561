//! Synthesized Waveform
//!
//! Two equal-length sequences: raw `f32` timestamps (strictly increasing)
//! and amplitude values, where `amplitudes[i]` is the signal value at
//! `times[i]`. Raw timestamps are the primary output; chart consumers that
//! key off string x-axis categories use [`Waveform::time_labels`], which
//! rounds each timestamp to exactly two decimal places. The labels are
//! lossy; do not reconstruct timestamps from them.

/// The result of one synthesis call
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Waveform {
    times: Vec<f32>,
    amplitudes: Vec<f32>,
}

impl Waveform {
    pub(crate) fn with_capacity(samples: usize) -> Self {
        Waveform {
            times: Vec::with_capacity(samples),
            amplitudes: Vec::with_capacity(samples),
        }
    }

    pub(crate) fn push(&mut self, time: f32, amplitude: f32) {
        self.times.push(time);
        self.amplitudes.push(amplitude);
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }

    /// Raw sample timestamps, strictly increasing
    pub fn times(&self) -> &[f32] {
        &self.times
    }

    /// Amplitude values, one per timestamp
    pub fn amplitudes(&self) -> &[f32] {
        &self.amplitudes
    }

    /// Timestamps rendered to two decimal places, rounded to the nearest
    /// hundredth
    pub fn time_labels(&self) -> Vec<String> {
        self.times.iter().map(|t| format!("{t:.2}")).collect()
    }

    /// Iterate over `(time, amplitude)` pairs
    pub fn samples(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.times.iter().copied().zip(self.amplitudes.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths_stay_in_lockstep() {
        let mut waveform = Waveform::with_capacity(2);
        waveform.push(0.0, 1.0);
        waveform.push(0.1, -1.0);
        assert_eq!(waveform.times().len(), waveform.amplitudes().len());
        assert_eq!(waveform.len(), 2);
    }

    #[test]
    fn test_time_labels_round_to_two_decimals() {
        let mut waveform = Waveform::with_capacity(3);
        // 9 * 0.1 accumulates to 0.90000004 in f32; the label must still
        // read "0.90"
        waveform.push(9.0 * 0.1_f32, 0.0);
        waveform.push(1.0, 0.0);
        waveform.push(1.256, 0.0);
        let labels = waveform.time_labels();
        assert_eq!(labels[0], "0.90");
        assert_eq!(labels[1], "1.00");
        // rounding, not truncation
        assert_eq!(labels[2], "1.26");
    }

    #[test]
    fn test_empty_waveform() {
        let waveform = Waveform::default();
        assert!(waveform.is_empty());
        assert!(waveform.time_labels().is_empty());
    }
}
