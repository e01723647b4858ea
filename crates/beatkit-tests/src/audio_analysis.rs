//! Audio analysis helpers for checking rendered mixes.
//!
//! Samples are interleaved stereo `f32` in [-1.0, 1.0].

use std::path::Path;

/// A decoded 16-bit WAV file.
#[derive(Debug, Clone)]
pub struct WavContents {
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
    /// Interleaved samples scaled to [-1.0, 1.0].
    pub samples: Vec<f32>,
}

impl WavContents {
    /// Number of frames.
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels.max(1) as usize
    }
}

/// Read a 16-bit PCM WAV from disk.
pub fn read_wav(path: &Path) -> Result<WavContents, String> {
    let mut reader = hound::WavReader::open(path).map_err(|e| e.to_string())?;
    let spec = reader.spec();
    let samples = reader
        .samples::<i16>()
        .map(|s| s.map(|v| v as f32 / 32768.0))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| e.to_string())?;
    Ok(WavContents {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        samples,
    })
}

/// Left channel of interleaved stereo.
pub fn left_channel(samples: &[f32]) -> Vec<f32> {
    samples.iter().step_by(2).copied().collect()
}

/// Root mean square of the samples; 0.0 for empty input.
pub fn calculate_rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_of_squares: f64 = samples.iter().map(|&s| (s as f64) * (s as f64)).sum();
    ((sum_of_squares / samples.len() as f64).sqrt()) as f32
}

/// Largest absolute sample value.
pub fn peak_amplitude(samples: &[f32]) -> f32 {
    samples.iter().fold(0.0f32, |acc, &s| acc.max(s.abs()))
}

/// Peak of a mono signal in `[start, start + len)`, clamped to the signal.
pub fn window_peak(mono: &[f32], start: usize, len: usize) -> f32 {
    let start = start.min(mono.len());
    let end = (start + len).min(mono.len());
    peak_amplitude(&mono[start..end])
}
