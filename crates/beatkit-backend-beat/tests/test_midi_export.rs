//! Integration tests for drum MIDI export across the genre list.
//!
//! Every genre is sequenced, written to disk, and read back to check that the
//! file carries exactly the generated notes at the requested tempo.

use beatkit_backend_beat::midi::{read_midi, write_drum_midi, MidiWriter};
use beatkit_backend_beat::{build_sequence, BeatError};
use beatkit_spec::timing::TICKS_PER_QUARTER;
use beatkit_spec::{sort_by_tick, Genre};
use pretty_assertions::assert_eq;

// =============================================================================
// Helper Functions
// =============================================================================

/// Note-ons the file should contain, in file order.
fn expected_note_ons(genre: Genre, bpm: u32, duration: f64) -> Vec<(u32, u8, u8)> {
    let mut notes = build_sequence(genre, bpm, duration);
    sort_by_tick(&mut notes);
    notes
        .iter()
        .map(|n| (n.tick, n.pitch, n.velocity))
        .collect()
}

// =============================================================================
// Whole-file Tests
// =============================================================================

#[test]
fn test_every_genre_round_trips() {
    let dir = tempfile::tempdir().unwrap();

    for genre in Genre::ALL {
        let bpm = genre.default_bpm();
        let path = dir.path().join(format!("{}.mid", genre.as_str()));
        let written = write_drum_midi(&path, genre, bpm, 10.0, "Groove").unwrap();

        let summary = read_midi(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(summary.format, 0, "{genre}");
        assert_eq!(summary.division, TICKS_PER_QUARTER as u16, "{genre}");
        assert_eq!(summary.track_name, "Groove");
        assert_eq!(summary.bpm(), Some(bpm), "{genre}");
        assert_eq!(summary.note_on_count(), written, "{genre}");
        assert_eq!(summary.note_off_count(), written, "{genre}");

        let ons: Vec<_> = summary.note_ons().collect();
        assert_eq!(ons, expected_note_ons(genre, bpm, 10.0), "{genre}");
    }
}

#[test]
fn test_events_are_in_tick_order() {
    let bytes = MidiWriter::new(128, "Order")
        .encode(&build_sequence(Genre::Soukous, 128, 12.0))
        .unwrap();
    let summary = read_midi(&bytes).unwrap();

    let ticks: Vec<u32> = summary.events.iter().map(|e| e.tick).collect();
    assert!(ticks.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(summary.end_tick, *ticks.last().unwrap());
}

#[test]
fn test_fallback_genre_exports_default_groove() {
    let hip_hop = expected_note_ons(Genre::HipHop, 100, 6.0);
    let jazz = expected_note_ons(Genre::Jazz, 100, 6.0);
    assert_eq!(hip_hop, jazz);
    assert!(!hip_hop.is_empty());
}

#[test]
fn test_short_request_still_writes_one_bar() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.mid");
    let written = write_drum_midi(&path, Genre::AfroHouse, 124, 0.5, "Short").unwrap();
    assert_eq!(written, 48);
}

#[test]
fn test_invalid_tempo_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.mid");
    let err = write_drum_midi(&path, Genre::Afrobeats, 0, 4.0, "Bad").unwrap_err();
    assert!(matches!(err, BeatError::InvalidRequest(_)));
    assert!(!path.exists());
}

#[test]
fn test_missing_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no/such/dir/beat.mid");
    let err = write_drum_midi(&path, Genre::Afrobeats, 100, 4.0, "Lost").unwrap_err();
    assert!(matches!(err, BeatError::Io { .. }));
}
