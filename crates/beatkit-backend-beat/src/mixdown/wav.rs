//! 16-bit PCM WAV output.

use std::io::{self, Write};
use std::path::Path;

use crate::error::{BeatError, BeatResult};

/// WAV file format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (always 16 here).
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// 16-bit stereo at `sample_rate`.
    pub fn stereo(sample_rate: u32) -> Self {
        Self {
            channels: 2,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    /// Bytes per frame.
    pub fn block_align(&self) -> u16 {
        self.channels * (self.bits_per_sample / 8)
    }

    /// Bytes per second.
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}

/// Convert float samples to little-endian 16-bit PCM.
///
/// Each sample is clamped to [-1, 1], scaled by 32767 and truncated toward zero.
pub fn samples_to_pcm16(samples: &[f32]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        let value = (sample.clamp(-1.0, 1.0) * 32767.0) as i16;
        pcm.extend_from_slice(&value.to_le_bytes());
    }
    pcm
}

/// Write a complete RIFF/WAVE file around raw PCM data.
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    writer.write_all(&wav_bytes(format, pcm_data))
}

/// Encode interleaved stereo float samples as a 16-bit WAV file in memory.
pub fn encode_wav(samples: &[f32], sample_rate: u32) -> Vec<u8> {
    wav_bytes(&WavFormat::stereo(sample_rate), &samples_to_pcm16(samples))
}

fn wav_bytes(format: &WavFormat, pcm_data: &[u8]) -> Vec<u8> {
    let data_size = pcm_data.len() as u32;
    let file_size = 36 + data_size;

    let mut buffer = Vec::with_capacity(44 + pcm_data.len());
    buffer.extend_from_slice(b"RIFF");
    buffer.extend_from_slice(&file_size.to_le_bytes());
    buffer.extend_from_slice(b"WAVE");

    buffer.extend_from_slice(b"fmt ");
    buffer.extend_from_slice(&16u32.to_le_bytes());
    buffer.extend_from_slice(&1u16.to_le_bytes()); // PCM
    buffer.extend_from_slice(&format.channels.to_le_bytes());
    buffer.extend_from_slice(&format.sample_rate.to_le_bytes());
    buffer.extend_from_slice(&format.byte_rate().to_le_bytes());
    buffer.extend_from_slice(&format.block_align().to_le_bytes());
    buffer.extend_from_slice(&format.bits_per_sample.to_le_bytes());

    buffer.extend_from_slice(b"data");
    buffer.extend_from_slice(&data_size.to_le_bytes());
    buffer.extend_from_slice(pcm_data);
    buffer
}

/// Write encoded WAV bytes to `path`.
pub fn write_wav_file(path: &Path, bytes: &[u8]) -> BeatResult<()> {
    std::fs::write(path, bytes).map_err(|e| BeatError::io(path, e))
}
