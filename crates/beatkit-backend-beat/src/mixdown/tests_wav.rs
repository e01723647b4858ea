//! Tests for WAV encoding.

use super::*;
use pretty_assertions::assert_eq;

fn le_u16(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}

fn le_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

#[test]
fn test_header_layout() {
    let bytes = encode_wav(&[0.0; 8], 44100);
    assert_eq!(bytes.len(), 44 + 16);
    assert_eq!(&bytes[0..4], b"RIFF");
    assert_eq!(le_u32(&bytes, 4), 36 + 16);
    assert_eq!(&bytes[8..12], b"WAVE");
    assert_eq!(&bytes[12..16], b"fmt ");
    assert_eq!(le_u32(&bytes, 16), 16);
    assert_eq!(le_u16(&bytes, 20), 1);
    assert_eq!(le_u16(&bytes, 22), 2);
    assert_eq!(le_u32(&bytes, 24), 44100);
    assert_eq!(le_u32(&bytes, 28), 176_400);
    assert_eq!(le_u16(&bytes, 32), 4);
    assert_eq!(le_u16(&bytes, 34), 16);
    assert_eq!(&bytes[36..40], b"data");
    assert_eq!(le_u32(&bytes, 40), 16);
}

#[test]
fn test_pcm_conversion_truncates_and_clamps() {
    let pcm = samples_to_pcm16(&[1.0, -1.0, 0.5, 2.0, -3.0, -0.99999, 0.0]);
    let values: Vec<i16> = pcm
        .chunks_exact(2)
        .map(|b| i16::from_le_bytes([b[0], b[1]]))
        .collect();
    assert_eq!(values, vec![32767, -32767, 16383, 32767, -32767, -32766, 0]);
}

#[test]
fn test_write_wav_matches_encode() {
    let samples = [0.25, -0.25, 0.5, -0.5];
    let mut written = Vec::new();
    write_wav(
        &mut written,
        &WavFormat::stereo(48000),
        &samples_to_pcm16(&samples),
    )
    .unwrap();
    assert_eq!(written, encode_wav(&samples, 48000));
}

#[test]
fn test_readable_by_hound() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mix.wav");
    let samples = [0.5, -0.5, 0.25, -0.25, 0.0, 0.0];
    std::fs::write(&path, encode_wav(&samples, 22050)).unwrap();

    let mut reader = hound::WavReader::open(&path).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 2);
    assert_eq!(spec.sample_rate, 22050);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(reader.duration(), 3);
    let decoded: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    assert_eq!(decoded, vec![16383, -16383, 8191, -8191, 0, 0]);
}

#[test]
fn test_format_helpers() {
    let format = WavFormat::stereo(44100);
    assert_eq!(format.block_align(), 4);
    assert_eq!(format.byte_rate(), 176_400);
}
