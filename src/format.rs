//! PCM format description and validation.

/// Sample representation of an audio format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFormat {
    /// 16-bit signed integer PCM.
    Int16,
    /// 32-bit signed integer PCM.
    Int32,
    /// 32-bit float PCM.
    Float32,
    /// 64-bit float PCM.
    Float64,
    /// Opus-compressed payload, not PCM.
    Opus,
}

impl SampleFormat {
    /// Returns true for linear PCM representations.
    pub fn is_pcm(&self) -> bool {
        !matches!(self, Self::Opus)
    }
}

/// Describes the PCM shape a decoder session produces.
///
/// Formats are plain values: immutable once constructed and freely
/// shareable. A format says nothing about whether the decoder accepts
/// it; that is what [`is_valid_format`] decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioFormat {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of channels.
    pub channels: u32,
    /// Sample representation.
    pub sample_format: SampleFormat,
    /// True if channels are interleaved within each sample frame.
    pub interleaved: bool,
}

impl AudioFormat {
    /// Creates a new format.
    pub const fn new(
        sample_rate: u32,
        channels: u32,
        sample_format: SampleFormat,
        interleaved: bool,
    ) -> Self {
        Self {
            sample_rate,
            channels,
            sample_format,
            interleaved,
        }
    }

    /// Creates an interleaved mono format.
    pub const fn mono(sample_rate: u32, sample_format: SampleFormat) -> Self {
        Self::new(sample_rate, 1, sample_format, true)
    }

    /// Creates an interleaved stereo format.
    pub const fn stereo(sample_rate: u32, sample_format: SampleFormat) -> Self {
        Self::new(sample_rate, 2, sample_format, true)
    }
}

/// Sample rates libopus decodes at.
const SUPPORTED_SAMPLE_RATES: [u32; 5] = [8000, 12000, 16000, 24000, 48000];

/// Returns true if `format` is one the decoder can produce.
///
/// All conditions must hold: a native Opus sample rate (8000, 12000,
/// 16000, 24000, or 48000 Hz), one or two channels, 16-bit integer or
/// 32-bit float samples, and interleaved layout. Everything else is
/// rejected, including compressed (non-PCM) format descriptions.
pub fn is_valid_format(format: &AudioFormat) -> bool {
    SUPPORTED_SAMPLE_RATES.contains(&format.sample_rate)
        && (format.channels == 1 || format.channels == 2)
        && matches!(
            format.sample_format,
            SampleFormat::Int16 | SampleFormat::Float32
        )
        && format.interleaved
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_formats() {
        let valid = [
            AudioFormat::mono(48000, SampleFormat::Int16),
            AudioFormat::stereo(48000, SampleFormat::Int16),
            AudioFormat::mono(48000, SampleFormat::Float32),
            AudioFormat::stereo(48000, SampleFormat::Float32),
        ];
        for format in valid {
            assert!(is_valid_format(&format), "{:?}", format);
        }
    }

    #[test]
    fn test_all_supported_sample_rates() {
        for rate in [8000, 12000, 16000, 24000, 48000] {
            let format = AudioFormat::mono(rate, SampleFormat::Int16);
            assert!(is_valid_format(&format), "{:?}", format);
        }
    }

    #[test]
    fn test_unsupported_sample_rates() {
        // Rates close to supported ones still fail
        for rate in [0, 7999, 8001, 11025, 22050, 44100, 47999, 48001, 96000] {
            for channels in [1, 2] {
                for sf in [SampleFormat::Int16, SampleFormat::Float32] {
                    let format = AudioFormat::new(rate, channels, sf, true);
                    assert!(!is_valid_format(&format), "{:?}", format);
                }
            }
        }
    }

    #[test]
    fn test_unsupported_channel_counts() {
        for channels in [0, 3, 4, 8, 255] {
            let format = AudioFormat::new(48000, channels, SampleFormat::Int16, true);
            assert!(!is_valid_format(&format), "{:?}", format);
        }
    }

    #[test]
    fn test_unsupported_sample_formats() {
        for sf in [SampleFormat::Int32, SampleFormat::Float64] {
            assert!(!is_valid_format(&AudioFormat::mono(48000, sf)));
            assert!(!is_valid_format(&AudioFormat::stereo(48000, sf)));
        }
    }

    #[test]
    fn test_non_interleaved_rejected() {
        // Otherwise fully valid
        let format = AudioFormat::new(48000, 2, SampleFormat::Int16, false);
        assert!(!is_valid_format(&format));
    }

    #[test]
    fn test_compressed_format_rejected() {
        assert!(!is_valid_format(&AudioFormat::mono(48000, SampleFormat::Opus)));
        assert!(!is_valid_format(&AudioFormat::stereo(48000, SampleFormat::Opus)));
    }

    #[test]
    fn test_is_pcm() {
        assert!(SampleFormat::Int16.is_pcm());
        assert!(SampleFormat::Int32.is_pcm());
        assert!(SampleFormat::Float32.is_pcm());
        assert!(SampleFormat::Float64.is_pcm());
        assert!(!SampleFormat::Opus.is_pcm());
    }

    #[test]
    fn test_format_constructors() {
        let mono = AudioFormat::mono(16000, SampleFormat::Int16);
        assert_eq!(mono.sample_rate, 16000);
        assert_eq!(mono.channels, 1);
        assert!(mono.interleaved);

        let stereo = AudioFormat::stereo(48000, SampleFormat::Float32);
        assert_eq!(stereo.channels, 2);
        assert_eq!(stereo.sample_format, SampleFormat::Float32);
    }
}
