use crate::bitstream::Symbol;
use crate::constants::CARRIER_FREQUENCY;
use crate::modulation::{carrier, SchemeModulator};

/// Frequency-shift keying
///
/// A `1` bit doubles the carrier frequency; a `0` bit keeps the base tone.
/// The carrier amplitude is not scaled.
pub struct Fsk;

impl SchemeModulator for Fsk {
    fn symbol_width(&self) -> usize {
        1
    }

    fn amplitude_at(&self, symbol: &Symbol<'_>, t: f32) -> f32 {
        let frequency = if symbol.bit(0) {
            2.0 * CARRIER_FREQUENCY
        } else {
            CARRIER_FREQUENCY
        };
        carrier(t, frequency)
    }
}
