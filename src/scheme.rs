//! Modulation Scheme Selection
//!
//! The five supported schemes form a closed set. Each variant dispatches to
//! a [`SchemeModulator`] implementation that owns its symbol width and
//! per-sample amplitude formula, so adding a scheme means adding a variant
//! and a modulator, and the compiler flags every match that needs updating.

use std::fmt;
use std::str::FromStr;

use crate::error::SynthesisError;
use crate::modulation::{Ask, Fsk, Pam, Psk, Qam, SchemeModulator};

/// One of the five supported digital-modulation schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModulationScheme {
    /// Amplitude-shift keying: bit toggles carrier amplitude between 0 and full scale
    Ask,
    /// Frequency-shift keying: bit toggles between two carrier tones
    Fsk,
    /// Phase-shift keying: bit toggles carrier phase by pi
    Psk,
    /// Pulse-amplitude modulation: symbol value sets a carrier-free level
    Pam,
    /// Quadrature amplitude modulation: 2-bit symbol selects an I/Q constellation point
    Qam,
}

impl ModulationScheme {
    /// All supported schemes, in selector order
    pub const ALL: [ModulationScheme; 5] = [
        ModulationScheme::Ask,
        ModulationScheme::Fsk,
        ModulationScheme::Psk,
        ModulationScheme::Pam,
        ModulationScheme::Qam,
    ];

    /// Canonical upper-case name
    pub fn name(&self) -> &'static str {
        match self {
            ModulationScheme::Ask => "ASK",
            ModulationScheme::Fsk => "FSK",
            ModulationScheme::Psk => "PSK",
            ModulationScheme::Pam => "PAM",
            ModulationScheme::Qam => "QAM",
        }
    }

    /// The modulator implementing this scheme's waveform math
    pub fn modulator(&self) -> &'static dyn SchemeModulator {
        match self {
            ModulationScheme::Ask => &Ask,
            ModulationScheme::Fsk => &Fsk,
            ModulationScheme::Psk => &Psk,
            ModulationScheme::Pam => &Pam,
            ModulationScheme::Qam => &Qam,
        }
    }

    /// Bits consumed per symbol under this scheme
    pub fn symbol_width(&self) -> usize {
        self.modulator().symbol_width()
    }
}

impl fmt::Display for ModulationScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModulationScheme {
    type Err = SynthesisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ASK" => Ok(ModulationScheme::Ask),
            "FSK" => Ok(ModulationScheme::Fsk),
            "PSK" => Ok(ModulationScheme::Psk),
            "PAM" => Ok(ModulationScheme::Pam),
            "QAM" => Ok(ModulationScheme::Qam),
            _ => Err(SynthesisError::UnsupportedScheme {
                name: s.to_string(),
            }),
        }
    }
}
