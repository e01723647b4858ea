//! Tests for sample placement in the mix buffer.

use super::*;
use crate::bank::DecodedSample;
use pretty_assertions::assert_eq;

#[test]
fn test_padded_length() {
    let buffer = MixBuffer::for_duration(44100, 8.0);
    assert_eq!(buffer.frames(), 352_800 + 44_100);
    assert!(buffer.samples().iter().all(|&s| s == 0.0));
}

#[test]
fn test_mix_at_offset_with_gain() {
    let mut buffer = MixBuffer::new(4, 44100);
    let sample = DecodedSample::mono(&[1.0, 0.5], 44100);

    assert_eq!(buffer.mix_sample(1, &sample, 0.5), 2);
    assert_eq!(
        buffer.samples(),
        &[0.0, 0.0, 0.5, 0.5, 0.25, 0.25, 0.0, 0.0]
    );
    assert_eq!(buffer.hits(), 1);
}

#[test]
fn test_overlapping_hits_sum() {
    let mut buffer = MixBuffer::new(3, 44100);
    let sample = DecodedSample::stereo(vec![0.4, -0.2, 0.3, 0.1], 44100);

    buffer.mix_sample(0, &sample, 1.0);
    buffer.mix_sample(0, &sample, 1.0);
    assert_eq!(buffer.samples(), &[0.8, -0.4, 0.6, 0.2, 0.0, 0.0]);
    assert_eq!(buffer.hits(), 2);
}

#[test]
fn test_clipped_at_buffer_end() {
    let mut buffer = MixBuffer::new(4, 44100);
    let sample = DecodedSample::mono(&[0.5, 0.5, 0.5], 44100);

    assert_eq!(buffer.mix_sample(3, &sample, 1.0), 1);
    assert_eq!(&buffer.samples()[6..], &[0.5, 0.5]);
}

#[test]
fn test_offset_past_end_is_ignored() {
    let mut buffer = MixBuffer::new(4, 44100);
    let sample = DecodedSample::mono(&[0.5], 44100);

    assert_eq!(buffer.mix_sample(4, &sample, 1.0), 0);
    assert_eq!(buffer.mix_sample(1000, &sample, 1.0), 0);
    assert_eq!(buffer.hits(), 0);
    assert!(buffer.samples().iter().all(|&s| s == 0.0));
}

#[test]
fn test_half_rate_sample_is_stretched() {
    let mut buffer = MixBuffer::new(10, 44100);
    let sample = DecodedSample::mono(&[0.1, 0.2, 0.3], 22050);

    // floor(i * 0.5) walks each source frame twice, then the source runs out
    assert_eq!(buffer.mix_sample(0, &sample, 1.0), 6);
    let left: Vec<f32> = buffer.samples().iter().step_by(2).copied().collect();
    assert_eq!(left, vec![0.1, 0.1, 0.2, 0.2, 0.3, 0.3, 0.0, 0.0, 0.0, 0.0]);
}

#[test]
fn test_double_rate_sample_is_decimated() {
    let mut buffer = MixBuffer::new(10, 44100);
    let sample = DecodedSample::mono(&[0.1, 0.2, 0.3, 0.4, 0.5], 88200);

    assert_eq!(buffer.mix_sample(0, &sample, 1.0), 2);
    let left: Vec<f32> = buffer.samples().iter().step_by(2).take(3).copied().collect();
    assert_eq!(left, vec![0.1, 0.3, 0.0]);
}

#[test]
fn test_trimmed() {
    let buffer = MixBuffer::new(10, 44100).trimmed(4);
    assert_eq!(buffer.frames(), 4);
    let buffer = buffer.trimmed(100);
    assert_eq!(buffer.frames(), 4);
}

#[test]
fn test_frame_offsets() {
    assert_eq!(frame_offset(0, 120, 44100), 0);
    assert_eq!(frame_offset(480, 120, 44100), 22050);
    assert_eq!(frame_offset(1920, 60, 48000), 192_000);
    // 1920 ticks at 124 bpm is 1.9354... s
    assert_eq!(frame_offset(1920, 124, 44100), 85_354);
}
