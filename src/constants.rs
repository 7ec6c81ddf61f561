//! Fixed sampling parameters for waveform synthesis
//!
//! These are part of the synthesizer's contract and are not user-configurable:
//! 10 samples per symbol at 0.1 time-unit spacing densely tile each 1.0-unit
//! symbol interval with no gap or overlap between consecutive symbols.

/// Number of samples generated for each modulation symbol
pub const SAMPLES_PER_SYMBOL: usize = 10;

/// Spacing between consecutive samples, in time units
pub const SAMPLE_INTERVAL: f32 = 0.1;

/// Duration of one symbol on the time axis, in time units
pub const SYMBOL_DURATION: f32 = 1.0;

/// Base carrier frequency, in cycles per time unit
pub const CARRIER_FREQUENCY: f32 = 1.0;

/// Base carrier amplitude (full scale)
pub const AMPLITUDE: f32 = 1.0;
