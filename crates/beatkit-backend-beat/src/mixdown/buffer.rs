//! Stereo mix buffer with additive sample placement.

use beatkit_spec::timing::tick_to_seconds;

use crate::bank::DecodedSample;

/// Interleaved stereo accumulation buffer at a fixed output rate.
#[derive(Debug, Clone, PartialEq)]
pub struct MixBuffer {
    samples: Vec<f32>,
    sample_rate: u32,
    hits: usize,
}

impl MixBuffer {
    /// A silent buffer of `frames` stereo frames.
    pub fn new(frames: usize, sample_rate: u32) -> Self {
        Self {
            samples: vec![0.0; frames * 2],
            sample_rate,
            hits: 0,
        }
    }

    /// A silent buffer sized for `duration_seconds` plus one second of tail,
    /// so hits near the end ring out before trimming.
    pub fn for_duration(sample_rate: u32, duration_seconds: f64) -> Self {
        let frames = (sample_rate as f64 * duration_seconds) as usize + sample_rate as usize;
        Self::new(frames, sample_rate)
    }

    /// Output rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of stereo frames.
    pub fn frames(&self) -> usize {
        self.samples.len() / 2
    }

    /// Number of `mix_sample` calls that wrote at least one frame.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Interleaved samples.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Consume the buffer, returning its interleaved samples.
    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }

    /// Add `sample`, scaled by `gain`, starting at frame `offset`.
    ///
    /// Samples at a different rate are stepped through with nearest-neighbour
    /// lookup: destination frame `i` reads source frame `floor(i * ratio)`,
    /// where `ratio` is source rate over output rate. Placement stops at the end
    /// of the buffer or of the source, whichever comes first. Returns the number
    /// of frames written.
    pub fn mix_sample(&mut self, offset: usize, sample: &DecodedSample, gain: f32) -> usize {
        let total = self.frames();
        if offset >= total {
            return 0;
        }
        let remaining = total - offset;
        let source_frames = sample.frames();
        let ratio = sample.sample_rate() as f64 / self.sample_rate as f64;

        let frames_to_mix = if ratio == 1.0 {
            source_frames.min(remaining)
        } else {
            ((source_frames as f64 / ratio) as usize).min(remaining)
        };

        let source = sample.samples();
        let mut mixed = 0;
        for i in 0..frames_to_mix {
            let src = (i as f64 * ratio) as usize;
            if src >= source_frames {
                break;
            }
            let dst = (offset + i) * 2;
            self.samples[dst] += source[src * 2] * gain;
            self.samples[dst + 1] += source[src * 2 + 1] * gain;
            mixed += 1;
        }
        if mixed > 0 {
            self.hits += 1;
        }
        mixed
    }

    /// Drop everything after `frames` frames (no-op if already shorter).
    pub fn trimmed(mut self, frames: usize) -> Self {
        self.samples.truncate(frames * 2);
        self
    }
}

/// Frame at which a tick starts, at a constant tempo.
pub fn frame_offset(tick: u32, bpm: u32, sample_rate: u32) -> usize {
    (tick_to_seconds(tick, bpm) * sample_rate as f64) as usize
}
