use std::f32::consts::PI;

use crate::bitstream::Symbol;
use crate::constants::{AMPLITUDE, CARRIER_FREQUENCY};
use crate::modulation::SchemeModulator;

/// Phase-shift keying
///
/// A `1` bit transmits the carrier in phase; a `0` bit shifts it by pi.
pub struct Psk;

impl SchemeModulator for Psk {
    fn symbol_width(&self) -> usize {
        1
    }

    fn amplitude_at(&self, symbol: &Symbol<'_>, t: f32) -> f32 {
        let phase = if symbol.bit(0) { 0.0 } else { PI };
        AMPLITUDE * (2.0 * PI * CARRIER_FREQUENCY * t + phase).sin()
    }
}
