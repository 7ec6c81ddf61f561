use crate::bitstream::Symbol;
use crate::constants::AMPLITUDE;
use crate::modulation::SchemeModulator;

/// Pulse-amplitude modulation
///
/// The symbol's base-2 integer value sets a flat, carrier-free level.
/// With the current 1-bit symbol width that level is always 0 or
/// [`AMPLITUDE`]; the computation already handles wider symbols, so
/// multilevel PAM only needs [`SchemeModulator::symbol_width`] to change.
pub struct Pam;

impl SchemeModulator for Pam {
    fn symbol_width(&self) -> usize {
        1
    }

    fn amplitude_at(&self, symbol: &Symbol<'_>, _t: f32) -> f32 {
        symbol.value() as f32 * AMPLITUDE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitstream::Bitstream;
    use crate::modulation::synthesize;
    use crate::scheme::ModulationScheme;

    #[test]
    fn test_levels_are_flat_across_the_symbol() {
        let waveform = synthesize("10", ModulationScheme::Pam).unwrap();
        assert_eq!(&waveform.amplitudes()[..10], &[AMPLITUDE; 10]);
        assert_eq!(&waveform.amplitudes()[10..], &[0.0; 10]);
    }

    #[test]
    fn test_level_generalizes_to_wider_symbols() {
        // not reachable through the 1-bit scheme width today, but the level
        // math must scale linearly if the width ever becomes multi-bit
        let bitstream = Bitstream::parse("11").unwrap();
        let symbol = bitstream.symbols(2).next().unwrap();
        assert_eq!(Pam.amplitude_at(&symbol, 0.0), 3.0 * AMPLITUDE);
    }
}
