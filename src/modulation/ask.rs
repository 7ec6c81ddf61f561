use crate::bitstream::Symbol;
use crate::constants::{AMPLITUDE, CARRIER_FREQUENCY};
use crate::modulation::{carrier, SchemeModulator};

/// Amplitude-shift keying
///
/// A `1` bit transmits the carrier at full scale; a `0` bit transmits
/// nothing, so every sample of a `0` symbol is exactly zero.
pub struct Ask;

impl SchemeModulator for Ask {
    fn symbol_width(&self) -> usize {
        1
    }

    fn amplitude_at(&self, symbol: &Symbol<'_>, t: f32) -> f32 {
        if symbol.bit(0) {
            AMPLITUDE * carrier(t, CARRIER_FREQUENCY)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modulation::synthesize;
    use crate::scheme::ModulationScheme;

    #[test]
    fn test_one_bit_is_full_scale_carrier() {
        let waveform = synthesize("1", ModulationScheme::Ask).unwrap();
        for (j, &amplitude) in waveform.amplitudes().iter().enumerate() {
            let t = j as f32 * 0.1;
            assert_eq!(amplitude, AMPLITUDE * carrier(t, CARRIER_FREQUENCY));
        }
    }

    #[test]
    fn test_zero_bit_is_exactly_silent() {
        let waveform = synthesize("0", ModulationScheme::Ask).unwrap();
        assert_eq!(waveform.amplitudes(), &[0.0; 10]);
    }

    #[test]
    fn test_zero_symbols_inside_mixed_stream() {
        let waveform = synthesize("101", ModulationScheme::Ask).unwrap();
        // middle symbol occupies samples 10..20
        for &amplitude in &waveform.amplitudes()[10..20] {
            assert_eq!(amplitude, 0.0);
        }
    }
}
