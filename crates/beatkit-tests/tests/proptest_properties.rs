//! Property-based tests for the sequencing, MIDI and mixdown layers.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p beatkit-tests --test proptest_properties
//! ```

use proptest::prelude::*;

use beatkit_backend_beat::bank::DecodedSample;
use beatkit_backend_beat::midi::{decode_vlq, encode_vlq, MidiMessage, MAX_VLQ};
use beatkit_backend_beat::mixdown::{peak, peak_normalize, MixBuffer};
use beatkit_backend_beat::{pattern_for, read_midi, MidiWriter};
use beatkit_spec::timing::{bar_start, WHOLE};
use beatkit_spec::{sort_by_tick, Genre, NoteEvent};

// ============================================================================
// Strategies
// ============================================================================

fn any_genre() -> impl Strategy<Value = Genre> {
    prop::sample::select(Genre::ALL.to_vec())
}

fn any_note() -> impl Strategy<Value = NoteEvent> {
    (0u32..200_000, 0u8..128, 1u8..128, 1u32..960).prop_map(|(tick, pitch, velocity, duration)| {
        NoteEvent::new(tick, pitch, velocity, duration)
    })
}

// ============================================================================
// 1. Pattern Library
// ============================================================================

proptest! {
    /// Every generator stays inside its bar with valid pitch and velocity.
    #[test]
    fn bar_notes_stay_in_bar(genre in any_genre(), bar in 0u32..10_000) {
        let start = bar_start(bar);
        let mut notes = Vec::new();
        pattern_for(genre)(&mut notes, start);

        prop_assert!(!notes.is_empty());
        for note in &notes {
            prop_assert!(note.tick >= start && note.tick < start + WHOLE, "{:?}", note);
            prop_assert!(note.pitch <= 127);
            prop_assert!(note.velocity <= 127);
        }
    }

    /// A generator's output only depends on the bar offset.
    #[test]
    fn bars_are_translations(genre in any_genre(), bar in 1u32..1_000) {
        let mut first = Vec::new();
        pattern_for(genre)(&mut first, 0);
        let mut later = Vec::new();
        pattern_for(genre)(&mut later, bar_start(bar));

        prop_assert_eq!(first.len(), later.len());
        for (a, b) in first.iter().zip(&later) {
            prop_assert_eq!(a.tick + bar_start(bar), b.tick);
            prop_assert_eq!(a.pitch, b.pitch);
            prop_assert_eq!(a.velocity, b.velocity);
        }
    }
}

// ============================================================================
// 2. MIDI
// ============================================================================

proptest! {
    /// VLQ encoding decodes back to the same value and length.
    #[test]
    fn vlq_round_trips(value in 0u32..=MAX_VLQ) {
        let mut bytes = Vec::new();
        encode_vlq(value, &mut bytes).unwrap();
        prop_assert!(bytes.len() <= 4);
        prop_assert_eq!(decode_vlq(&bytes), Some((value, bytes.len())));
    }

    /// Values past 28 bits are refused.
    #[test]
    fn vlq_rejects_large(value in (MAX_VLQ + 1)..=u32::MAX) {
        let mut bytes = Vec::new();
        prop_assert!(encode_vlq(value, &mut bytes).is_err());
    }

    /// Summing deltas reconstructs every absolute tick.
    #[test]
    fn midi_ticks_survive_round_trip(
        notes in prop::collection::vec(any_note(), 0..64),
        bpm in 1u32..400,
    ) {
        let bytes = MidiWriter::new(bpm, "prop").encode(&notes).unwrap();
        let summary = read_midi(&bytes).unwrap();

        let mut sorted = notes.clone();
        sort_by_tick(&mut sorted);
        let expected: Vec<(u32, u8, u8)> =
            sorted.iter().map(|n| (n.tick, n.pitch, n.velocity)).collect();
        let ons: Vec<(u32, u8, u8)> = summary.note_ons().collect();
        prop_assert_eq!(ons, expected);
        prop_assert_eq!(summary.note_off_count(), notes.len());

        let mut offs: Vec<u32> = summary
            .events
            .iter()
            .filter(|e| matches!(e.message, MidiMessage::NoteOff { .. }))
            .map(|e| e.tick)
            .collect();
        let mut expected_offs: Vec<u32> = notes.iter().map(|n| n.end_tick()).collect();
        offs.sort_unstable();
        expected_offs.sort_unstable();
        prop_assert_eq!(offs, expected_offs);
    }
}

// ============================================================================
// 3. Mixdown
// ============================================================================

proptest! {
    /// Normalizing never leaves a clipping buffer above the ceiling, and never
    /// touches one that does not clip.
    #[test]
    fn normalize_respects_ceiling(samples in prop::collection::vec(-8.0f32..8.0, 1..512)) {
        let before = peak(&samples);
        let mut scaled = samples.clone();
        let gain = peak_normalize(&mut scaled, 0.95);

        if before > 1.0 {
            prop_assert!(peak(&scaled) <= 0.95 + 1e-5);
            prop_assert!(gain < 1.0);
        } else {
            prop_assert_eq!(scaled, samples);
            prop_assert_eq!(gain, 1.0);
        }
    }

    /// Two identical hits at the same frame sum.
    #[test]
    fn overlapping_hits_sum(
        level in -0.5f32..0.5,
        len in 1usize..200,
        offset in 0usize..100,
    ) {
        let sample = DecodedSample::mono(&vec![level; len], 44_100);
        let mut once = MixBuffer::new(400, 44_100);
        once.mix_sample(offset, &sample, 1.0);
        let mut twice = MixBuffer::new(400, 44_100);
        twice.mix_sample(offset, &sample, 1.0);
        twice.mix_sample(offset, &sample, 1.0);

        for (a, b) in once.samples().iter().zip(twice.samples()) {
            prop_assert_eq!(a * 2.0, *b);
        }
    }

    /// A sample at half the output rate lasts exactly twice as many frames.
    #[test]
    fn half_rate_doubles_length(len in 1usize..500) {
        let sample = DecodedSample::mono(&vec![0.25; len], 22_050);
        let mut buffer = MixBuffer::new(2_000, 44_100);
        prop_assert_eq!(buffer.mix_sample(0, &sample, 1.0), len * 2);
    }
}
