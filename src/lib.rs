//! Digital-modulation waveform synthesis for visualization
//!
//! Converts a binary bitstream into a sampled time-domain waveform under one
//! of five modulation schemes (ASK, FSK, PSK, PAM, QAM). The synthesizer is
//! a pure function: it partitions the bitstream into symbols, emits a fixed
//! number of samples per symbol from the scheme's carrier formula, and
//! returns paired time/amplitude sequences ready for charting.
//!
//! ```
//! use modscope::{synthesize, ModulationScheme};
//!
//! let waveform = synthesize("101001", ModulationScheme::Fsk)?;
//! assert_eq!(waveform.times().len(), waveform.amplitudes().len());
//! # Ok::<(), modscope::SynthesisError>(())
//! ```

pub mod bitstream;
pub mod constants;
pub mod error;
pub mod modulation;
pub mod plot;
pub mod scheme;
pub mod tracing_init;
pub mod wav;
pub mod waveform;

pub use bitstream::Bitstream;
pub use error::SynthesisError;
pub use modulation::{synthesize, synthesize_bitstream, SchemeModulator};
pub use scheme::ModulationScheme;
pub use waveform::Waveform;
