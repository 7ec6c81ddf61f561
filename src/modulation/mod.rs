//! Waveform Synthesis
//!
//! Partitions a bitstream into modulation symbols and emits
//! [`SAMPLES_PER_SYMBOL`] time-domain samples per symbol. Symbol `i`
//! occupies the time interval `[i, i+1)`; sample `j` of that symbol is
//! taken at the absolute time `t = i + j * SAMPLE_INTERVAL`. Each scheme
//! contributes only its amplitude formula through [`SchemeModulator`];
//! framing and timing live here.

use std::f32::consts::PI;

use tracing::debug;

use crate::bitstream::{Bitstream, Symbol};
use crate::constants::{SAMPLES_PER_SYMBOL, SAMPLE_INTERVAL, SYMBOL_DURATION};
use crate::error::SynthesisError;
use crate::scheme::ModulationScheme;
use crate::waveform::Waveform;

mod ask;
mod fsk;
mod pam;
mod psk;
mod qam;

pub use ask::Ask;
pub use fsk::Fsk;
pub use pam::Pam;
pub use psk::Psk;
pub use qam::Qam;

/// Per-scheme waveform math: symbol width plus amplitude at a sample time
///
/// Implementations must be pure; the synthesis driver calls
/// [`SchemeModulator::amplitude_at`] once per sample with the absolute
/// sample time, never a symbol-relative one.
pub trait SchemeModulator {
    /// Bits consumed per symbol
    fn symbol_width(&self) -> usize;

    /// Signal value for `symbol` at absolute time `t`
    fn amplitude_at(&self, symbol: &Symbol<'_>, t: f32) -> f32;
}

/// The base carrier `sin(2π f t)`
pub(crate) fn carrier(t: f32, frequency: f32) -> f32 {
    (2.0 * PI * frequency * t).sin()
}

/// Synthesize a waveform from a `'0'`/`'1'` string
///
/// Validates the bitstream first; a non-binary character anywhere rejects
/// the whole call with [`SynthesisError::InvalidInput`] and no samples are
/// produced. An empty bitstream yields an empty waveform, not an error.
///
/// # Example
/// ```
/// use modscope::{synthesize, ModulationScheme};
///
/// let waveform = synthesize("101", ModulationScheme::Ask)?;
/// assert_eq!(waveform.len(), 30);
/// # Ok::<(), modscope::SynthesisError>(())
/// ```
pub fn synthesize(bits: &str, scheme: ModulationScheme) -> Result<Waveform, SynthesisError> {
    let bitstream = Bitstream::parse(bits)?;
    Ok(synthesize_bitstream(&bitstream, scheme))
}

/// Synthesize a waveform from an already-validated bitstream
///
/// Output length is `SAMPLES_PER_SYMBOL * ceil(bits / symbol_width)`; the
/// sample density is continuous across symbol boundaries.
pub fn synthesize_bitstream(bitstream: &Bitstream, scheme: ModulationScheme) -> Waveform {
    let modulator = scheme.modulator();
    let width = modulator.symbol_width();
    let symbol_count = bitstream.symbol_count(width);

    debug!(%scheme, bits = bitstream.len(), symbols = symbol_count, "synthesizing waveform");

    let mut waveform = Waveform::with_capacity(symbol_count * SAMPLES_PER_SYMBOL);

    for (i, symbol) in bitstream.symbols(width).enumerate() {
        let symbol_start = i as f32 * SYMBOL_DURATION;
        for j in 0..SAMPLES_PER_SYMBOL {
            let t = symbol_start + j as f32 * SAMPLE_INTERVAL;
            waveform.push(t, modulator.amplitude_at(&symbol, t));
        }
    }

    waveform
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_count_per_symbol() {
        crate::tracing_init::init_test_tracing();
        let waveform = synthesize("1", ModulationScheme::Fsk).unwrap();
        assert_eq!(waveform.len(), SAMPLES_PER_SYMBOL);
    }

    #[test]
    fn test_sample_times_tile_symbol_intervals() {
        let waveform = synthesize("10", ModulationScheme::Psk).unwrap();
        let times = waveform.times();
        assert_eq!(times[0], 0.0);
        // second symbol starts exactly at t = 1.0, no gap or overlap
        assert_eq!(times[SAMPLES_PER_SYMBOL], 1.0);
        for pair in times.windows(2) {
            assert!(pair[1] > pair[0], "sample times must be strictly increasing");
        }
    }

    #[test]
    fn test_invalid_character_rejects_whole_call() {
        let err = synthesize("102", ModulationScheme::Ask).unwrap_err();
        assert!(matches!(
            err,
            SynthesisError::InvalidInput {
                character: '2',
                position: 2
            }
        ));
    }

    #[test]
    fn test_empty_bitstream_yields_empty_waveform() {
        for scheme in ModulationScheme::ALL {
            let waveform = synthesize("", scheme).unwrap();
            assert!(waveform.is_empty(), "{scheme} should produce no samples");
        }
    }

    #[test]
    fn test_carrier_is_unit_sine() {
        assert_eq!(carrier(0.0, 1.0), 0.0);
        // quarter period of the base tone
        assert!((carrier(0.25, 1.0) - 1.0).abs() < 1e-6);
    }
}
