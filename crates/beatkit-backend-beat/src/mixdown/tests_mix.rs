//! Tests for mixing note sequences.

use super::*;
use crate::bank::DecodedSample;
use beatkit_spec::catalog::gm;

fn kick_bank() -> SampleBank {
    let mut bank = SampleBank::empty();
    bank.insert(gm::KICK, DecodedSample::mono(&[0.5; 100], 44100));
    bank
}

#[test]
fn test_notes_land_on_their_frames() {
    let notes = [
        NoteEvent::new(0, gm::KICK, 127, 120),
        NoteEvent::new(0, gm::SNARE, 127, 120),
        NoteEvent::new(480, gm::KICK, 127, 120),
    ];
    let buffer = mix_notes(&kick_bank(), &notes, 120, 44100, 1.0);

    assert_eq!(buffer.frames(), 88_200);
    assert_eq!(buffer.hits(), 2);
    let samples = buffer.samples();
    assert_eq!(samples[0], 0.5);
    assert_eq!(samples[99 * 2], 0.5);
    assert_eq!(samples[100 * 2], 0.0);
    assert_eq!(samples[22_050 * 2], 0.5);
    assert_eq!(samples[22_049 * 2], 0.0);
}

#[test]
fn test_velocity_sets_gain() {
    let notes = [NoteEvent::new(0, gm::KICK, 64, 120)];
    let buffer = mix_notes(&kick_bank(), &notes, 120, 44100, 1.0);
    let expected = 0.5 * (64.0 / 127.0);
    assert!((buffer.samples()[0] - expected).abs() < 1e-7);
}

#[test]
fn test_notes_past_padding_are_skipped() {
    // 1 s at 120 bpm pads to 2 s; tick 1920 starts exactly at 2 s
    let notes = [NoteEvent::new(1920, gm::KICK, 127, 120)];
    let buffer = mix_notes(&kick_bank(), &notes, 120, 44100, 1.0);
    assert_eq!(buffer.hits(), 0);
}

#[test]
fn test_hit_in_padding_rings_out() {
    // 1.5 s lands inside the padding second
    let notes = [NoteEvent::new(1440, gm::KICK, 127, 120)];
    let buffer = mix_notes(&kick_bank(), &notes, 120, 44100, 1.0);
    assert_eq!(buffer.hits(), 1);
    assert_eq!(buffer.samples()[66_150 * 2], 0.5);
}

#[test]
fn test_output_frames() {
    assert_eq!(output_frames(44100, 8.0, 396_900), 352_800);
    assert_eq!(output_frames(44100, 8.0, 1_000), 1_000);
    assert_eq!(output_frames(48000, 0.5, 72_000), 24_000);
}
