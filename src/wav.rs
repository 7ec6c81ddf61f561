//! WAV Export
//!
//! Writes a synthesized waveform to a 16-bit PCM mono WAV file so the
//! modulated signal can be listened to as well as plotted. Amplitudes are
//! peak-normalized into [-1.0, 1.0] before conversion; QAM reaches ±√2 and
//! would otherwise clip.

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::waveform::Waveform;

/// Write `waveform` to `path` as 16-bit PCM mono at `sample_rate` Hz
///
/// The waveform's own time axis is in abstract symbol units; `sample_rate`
/// only sets the playback speed of the exported file.
pub fn write_wav_file(path: &str, waveform: &Waveform, sample_rate: u32) -> Result<(), hound::Error> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec)?;

    let peak = peak_amplitude(waveform.amplitudes()).max(1.0);
    for &amplitude in waveform.amplitudes() {
        let int_sample = ((amplitude / peak) * i16::MAX as f32) as i16;
        writer.write_sample(int_sample)?;
    }

    writer.finalize()
}

fn peak_amplitude(amplitudes: &[f32]) -> f32 {
    amplitudes.iter().fold(0.0, |peak, a| peak.max(a.abs()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modulation::synthesize;
    use crate::scheme::ModulationScheme;

    #[test]
    fn test_peak_amplitude() {
        assert_eq!(peak_amplitude(&[0.5, -1.5, 1.0]), 1.5);
        assert_eq!(peak_amplitude(&[]), 0.0);
    }

    #[test]
    fn test_write_wav_file_roundtrip() {
        let waveform = synthesize("1010", ModulationScheme::Qam).unwrap();
        let path = std::env::temp_dir().join("modscope_qam_test.wav");
        let path = path.to_str().unwrap();

        write_wav_file(path, &waveform, 8000).unwrap();

        let mut reader = hound::WavReader::open(path).unwrap();
        assert_eq!(reader.spec().channels, 1);
        assert_eq!(reader.spec().sample_rate, 8000);
        let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(samples.len(), waveform.len());
        // normalization keeps everything inside 16-bit range without clipping flat
        assert!(samples.iter().any(|&s| s != 0));

        std::fs::remove_file(path).ok();
    }
}
