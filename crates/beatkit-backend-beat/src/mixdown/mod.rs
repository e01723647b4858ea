//! Offline mixdown of a note sequence against a sample bank.
//!
//! Every note whose voice is in the bank is placed at its frame offset, scaled
//! by `velocity / 127`, and summed into a stereo buffer that runs one second
//! past the requested length. The buffer is then trimmed back to the requested
//! length, scaled down if it clips, and encoded as 16-bit WAV.
//!
//! Samples at another rate are resampled with nearest-neighbour lookup.

mod buffer;
mod normalize;
pub mod wav;

#[cfg(test)]
mod tests_buffer;
#[cfg(test)]
mod tests_mix;
#[cfg(test)]
mod tests_normalize;
#[cfg(test)]
mod tests_wav;

use beatkit_spec::NoteEvent;
use tracing::debug;

use crate::bank::SampleBank;

pub use buffer::{frame_offset, MixBuffer};
pub use normalize::{peak, peak_normalize};
pub use wav::{encode_wav, samples_to_pcm16, write_wav, WavFormat};

/// Mix `notes` into a padded buffer at `sample_rate`.
///
/// Notes without a sample in the bank, or that start past the end of the
/// buffer, are skipped. The buffer is returned untrimmed.
pub fn mix_notes(
    bank: &SampleBank,
    notes: &[NoteEvent],
    bpm: u32,
    sample_rate: u32,
    duration_seconds: f64,
) -> MixBuffer {
    let mut buffer = MixBuffer::for_duration(sample_rate, duration_seconds);

    for note in notes {
        let Some(sample) = bank.get(note.pitch) else {
            continue;
        };
        let offset = frame_offset(note.tick, bpm, sample_rate);
        buffer.mix_sample(offset, sample, note.gain());
    }

    debug!(
        notes = notes.len(),
        hits = buffer.hits(),
        frames = buffer.frames(),
        "mixed note sequence"
    );
    buffer
}

/// Frames kept after trimming the tail padding.
pub fn output_frames(sample_rate: u32, duration_seconds: f64, buffer_frames: usize) -> usize {
    ((sample_rate as f64 * duration_seconds) as usize).min(buffer_frames)
}
