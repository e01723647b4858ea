//! Sample decoding: MP3 via minimp3, WAV via hound.
//!
//! Everything is decoded to interleaved stereo `f32` at the file's own sample
//! rate. Mono sources are duplicated into both channels; sources with more than
//! two channels keep only the first two.

use std::path::Path;

use thiserror::Error;

/// Errors that can occur while decoding a sample file.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// MP3 stream could not be decoded.
    #[error("MP3 decode error: {0}")]
    Mp3(String),

    /// WAV file could not be read.
    #[error("WAV decode error: {0}")]
    Wav(#[from] hound::Error),

    /// File extension is not a supported sample format.
    #[error("unsupported sample format: '{0}'")]
    UnsupportedFormat(String),

    /// The file decoded to zero frames.
    #[error("sample contains no audio frames")]
    Empty,
}

/// A decoded percussion sample: interleaved stereo at its native rate.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedSample {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl DecodedSample {
    /// Wraps interleaved stereo data. A trailing half frame is dropped.
    pub fn stereo(mut samples: Vec<f32>, sample_rate: u32) -> Self {
        samples.truncate(samples.len() - samples.len() % 2);
        Self {
            samples,
            sample_rate,
        }
    }

    /// Builds a sample from mono data by duplicating it into both channels.
    pub fn mono(samples: &[f32], sample_rate: u32) -> Self {
        Self::from_interleaved(samples, 1, sample_rate)
    }

    /// Builds a sample from interleaved data with any channel count.
    pub fn from_interleaved(data: &[f32], channels: usize, sample_rate: u32) -> Self {
        let mut samples = Vec::with_capacity(data.len() / channels.max(1) * 2);
        push_stereo(&mut samples, data, channels);
        Self {
            samples,
            sample_rate,
        }
    }

    /// Interleaved stereo samples.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Native sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of stereo frames.
    pub fn frames(&self) -> usize {
        self.samples.len() / 2
    }

    /// Left and right values of one frame.
    pub fn frame(&self, index: usize) -> [f32; 2] {
        [self.samples[index * 2], self.samples[index * 2 + 1]]
    }

    /// Whether the sample has no frames.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Appends `data` (interleaved, `channels` wide) to `out` as stereo frames.
fn push_stereo(out: &mut Vec<f32>, data: &[f32], channels: usize) {
    match channels {
        0 => {}
        1 => {
            for &s in data {
                out.push(s);
                out.push(s);
            }
        }
        _ => {
            for frame in data.chunks_exact(channels) {
                out.push(frame[0]);
                out.push(frame[1]);
            }
        }
    }
}

/// Decode a sample file, choosing the decoder by extension.
pub fn decode_sample(path: &Path) -> Result<DecodedSample, DecodeError> {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    let sample = match extension.as_str() {
        "mp3" => decode_mp3(&std::fs::read(path)?)?,
        "wav" | "wave" => decode_wav(path)?,
        _ => return Err(DecodeError::UnsupportedFormat(extension)),
    };

    if sample.is_empty() {
        return Err(DecodeError::Empty);
    }
    Ok(sample)
}

/// Decode an MP3 stream held in memory.
///
/// The sample rate is taken from the last decoded frame.
pub fn decode_mp3(data: &[u8]) -> Result<DecodedSample, DecodeError> {
    let mut decoder = minimp3::Decoder::new(data);
    let mut samples = Vec::new();
    let mut sample_rate = 0;

    loop {
        match decoder.next_frame() {
            Ok(frame) => {
                sample_rate = frame.sample_rate.max(0) as u32;
                let pcm: Vec<f32> = frame.data.iter().map(|&s| s as f32 / 32768.0).collect();
                push_stereo(&mut samples, &pcm, frame.channels);
            }
            Err(minimp3::Error::Eof) => break,
            Err(e) => return Err(DecodeError::Mp3(format!("{e:?}"))),
        }
    }

    if samples.is_empty() {
        return Err(DecodeError::Empty);
    }
    Ok(DecodedSample {
        samples,
        sample_rate,
    })
}

/// Decode a WAV file.
///
/// Integer PCM is scaled by `1 / 2^(bits - 1)`; float PCM is taken as is.
pub fn decode_wav(path: &Path) -> Result<DecodedSample, DecodeError> {
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();

    let data: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Int => {
            let scale = 1.0 / (1u64 << (spec.bits_per_sample.max(1) - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 * scale))
                .collect::<Result<_, _>>()?
        }
        hound::SampleFormat::Float => reader.samples::<f32>().collect::<Result<_, _>>()?,
    };

    Ok(DecodedSample::from_interleaved(
        &data,
        spec.channels as usize,
        spec.sample_rate,
    ))
}
