use snafu::Snafu;

/// Errors the synthesizer can report
///
/// Both kinds are detected before any samples are produced; a failed call
/// never returns a partial waveform.
#[derive(Debug, Clone, PartialEq, Snafu)]
pub enum SynthesisError {
    /// Bitstream contains a character other than '0' or '1'
    #[snafu(display("bitstream contains invalid character '{character}' at position {position}"))]
    InvalidInput { character: char, position: usize },

    /// Scheme name is not one of ASK, FSK, PSK, PAM, QAM
    #[snafu(display("unsupported modulation scheme '{name}'"))]
    UnsupportedScheme { name: String },
}
