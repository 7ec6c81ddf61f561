use std::f32::consts::PI;

use num::complex::Complex;

use crate::bitstream::Symbol;
use crate::constants::CARRIER_FREQUENCY;
use crate::modulation::SchemeModulator;

/// 4-QAM (quadrature amplitude modulation)
///
/// Each 2-bit code selects an I/Q constellation point; the output combines
/// the in-phase component on a cosine carrier with the quadrature component
/// on a sine carrier. A short trailing symbol is right-padded with `0`
/// before lookup, so it always resolves to a code ending in `0`.
pub struct Qam;

/// Constellation point for a 2-bit code
///
/// Codes outside the 2-bit range resolve to the origin, which synthesizes
/// zero amplitude. That arm is unreachable through normal partitioning and
/// padding; it is a defensive default, not a signaling convention.
fn constellation(code: u32) -> Complex<f32> {
    match code {
        0b00 => Complex::new(1.0, 1.0),
        0b01 => Complex::new(-1.0, 1.0),
        0b10 => Complex::new(-1.0, -1.0),
        0b11 => Complex::new(1.0, -1.0),
        _ => Complex::new(0.0, 0.0),
    }
}

impl SchemeModulator for Qam {
    fn symbol_width(&self) -> usize {
        2
    }

    fn amplitude_at(&self, symbol: &Symbol<'_>, t: f32) -> f32 {
        let point = constellation(symbol.padded_value(self.symbol_width()));
        let omega_t = 2.0 * PI * CARRIER_FREQUENCY * t;
        point.re * omega_t.cos() + point.im * omega_t.sin()
    }
}
