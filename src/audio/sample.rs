use std::{io::Read, path::Path, sync::Arc};

use tracing::info;

use crate::{CHANNELS, SAMPLE_RATE};

/// Decoded 16-bit mono PCM at [`SAMPLE_RATE`].
///
/// Cloning is cheap (the samples are shared). Keep one clone alive for as
/// long as the mixer runs so the audio thread never frees sample memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleBuffer {
    data: Arc<[i16]>,
}

/// Errors raised while loading a sample from a WAV stream.
#[derive(Debug, thiserror::Error)]
pub enum SampleError {
    #[error("failed to read wav: {0}")]
    Wav(#[from] hound::Error),
    #[error("expected 16-bit signed integer samples, got {bits}-bit {format:?}")]
    Format {
        bits: u16,
        format: hound::SampleFormat,
    },
    #[error("expected mono audio, got {0} channels")]
    Channels(u16),
    #[error("expected {expected} Hz, got {0} Hz", expected = SAMPLE_RATE)]
    SampleRate(u32),
}

impl SampleBuffer {
    pub fn new(samples: impl Into<Arc<[i16]>>) -> Self {
        Self {
            data: samples.into(),
        }
    }

    /// Load a WAV file that already matches the output format.
    pub fn load_wav(path: impl AsRef<Path>) -> Result<Self, SampleError> {
        let path = path.as_ref();
        let reader = hound::WavReader::open(path)?;
        let sample = Self::from_wav_reader(reader)?;
        info!(path = %path.display(), frames = sample.len(), "loaded sample");
        Ok(sample)
    }

    /// Decode from an open WAV stream. No conversion is attempted: the stream
    /// must be 16-bit signed, mono, 48 kHz.
    pub fn from_wav_reader<R: Read>(reader: hound::WavReader<R>) -> Result<Self, SampleError> {
        let spec = reader.spec();

        if spec.bits_per_sample != 16 || spec.sample_format != hound::SampleFormat::Int {
            return Err(SampleError::Format {
                bits: spec.bits_per_sample,
                format: spec.sample_format,
            });
        }
        if spec.channels != CHANNELS {
            return Err(SampleError::Channels(spec.channels));
        }
        if spec.sample_rate != SAMPLE_RATE {
            return Err(SampleError::SampleRate(spec.sample_rate));
        }

        let samples = reader
            .into_samples::<i16>()
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(samples))
    }

    pub fn samples(&self) -> &[i16] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Playback length in seconds.
    pub fn duration_secs(&self) -> f32 {
        self.data.len() as f32 / SAMPLE_RATE as f32
    }
}

impl From<Vec<i16>> for SampleBuffer {
    fn from(samples: Vec<i16>) -> Self {
        Self::new(samples)
    }
}
