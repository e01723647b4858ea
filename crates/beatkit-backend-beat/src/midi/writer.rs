//! MIDI writer - turns a note sequence into a format 0 Standard MIDI File.

use std::io::Write;
use std::path::Path;

use beatkit_spec::timing::micros_per_quarter;
use beatkit_spec::{Genre, NoteEvent, RenderRequest, TICKS_PER_QUARTER};
use byteorder::{BigEndian, WriteBytesExt};
use tracing::debug;

use super::vlq::encode_vlq;
use super::{
    MidiError, HEADER_MAGIC, META, META_END_OF_TRACK, META_TEMPO, META_TRACK_NAME, NOTE_OFF,
    NOTE_ON, TRACK_MAGIC,
};
use crate::error::{BeatError, BeatResult};
use crate::pattern::build_sequence;

/// Largest tempo value the 3-byte set-tempo event can carry.
const MAX_TEMPO_MICROS: u32 = 0xFF_FFFF;

/// A channel event on the absolute timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ChannelEvent {
    tick: u32,
    status: u8,
    pitch: u8,
    velocity: u8,
}

/// Encoder for single-track drum files.
#[derive(Debug, Clone)]
pub struct MidiWriter {
    bpm: u32,
    track_name: String,
}

impl MidiWriter {
    /// Create a writer for the given tempo and track name.
    pub fn new(bpm: u32, track_name: impl Into<String>) -> Self {
        Self {
            bpm,
            track_name: track_name.into(),
        }
    }

    /// Microseconds per quarter note written into the tempo event.
    pub fn tempo_micros(&self) -> u32 {
        micros_per_quarter(self.bpm.max(1)).min(MAX_TEMPO_MICROS)
    }

    /// Write the complete file to a writer.
    pub fn write<W: Write>(&self, notes: &[NoteEvent], writer: &mut W) -> Result<(), MidiError> {
        let track = self.encode_track(notes)?;

        writer.write_all(HEADER_MAGIC)?;
        writer.write_u32::<BigEndian>(6)?;
        writer.write_u16::<BigEndian>(0)?; // format 0
        writer.write_u16::<BigEndian>(1)?; // one track
        writer.write_u16::<BigEndian>(TICKS_PER_QUARTER as u16)?;

        writer.write_all(TRACK_MAGIC)?;
        writer.write_u32::<BigEndian>(track.len() as u32)?;
        writer.write_all(&track)?;
        Ok(())
    }

    /// Encode the file to a byte vector.
    pub fn encode(&self, notes: &[NoteEvent]) -> Result<Vec<u8>, MidiError> {
        let mut buffer = Vec::new();
        self.write(notes, &mut buffer)?;
        Ok(buffer)
    }

    fn encode_track(&self, notes: &[NoteEvent]) -> Result<Vec<u8>, MidiError> {
        let mut track = Vec::new();

        encode_vlq(0, &mut track)?;
        track.extend_from_slice(&[META, META_TRACK_NAME]);
        let name = self.track_name.as_bytes();
        encode_vlq(name.len() as u32, &mut track)?;
        track.extend_from_slice(name);

        encode_vlq(0, &mut track)?;
        track.extend_from_slice(&[META, META_TEMPO, 0x03]);
        track.write_u24::<BigEndian>(self.tempo_micros())?;

        let events = channel_events(notes);
        let mut previous = 0;
        for event in &events {
            encode_vlq(event.tick - previous, &mut track)?;
            previous = event.tick;
            track.extend_from_slice(&[event.status, event.pitch, event.velocity]);
        }

        encode_vlq(0, &mut track)?;
        track.extend_from_slice(&[META, META_END_OF_TRACK, 0x00]);

        debug!(
            notes = notes.len(),
            events = events.len(),
            track_bytes = track.len(),
            "encoded MIDI track"
        );
        Ok(track)
    }
}

/// Expands notes into note-on/note-off pairs ordered by tick.
///
/// Events on the same tick keep the order they were generated in.
fn channel_events(notes: &[NoteEvent]) -> Vec<ChannelEvent> {
    let mut events = Vec::with_capacity(notes.len() * 2);
    for note in notes {
        events.push(ChannelEvent {
            tick: note.tick,
            status: NOTE_ON,
            pitch: note.pitch,
            velocity: note.velocity,
        });
        events.push(ChannelEvent {
            tick: note.end_tick(),
            status: NOTE_OFF,
            pitch: note.pitch,
            velocity: 0,
        });
    }
    events.sort_by_key(|e| e.tick);
    events
}

/// Write encoded MIDI bytes to `path`.
pub fn write_midi_file(path: &Path, bytes: &[u8]) -> BeatResult<()> {
    std::fs::write(path, bytes).map_err(|e| BeatError::io(path, e))
}

/// Sequence a genre and write it straight to a MIDI file.
///
/// Needs no samples. Returns the number of notes written.
pub fn write_drum_midi(
    path: &Path,
    genre: Genre,
    bpm: u32,
    duration_seconds: f64,
    track_name: &str,
) -> BeatResult<usize> {
    RenderRequest::new(genre, bpm, duration_seconds).validate()?;

    let notes = build_sequence(genre, bpm, duration_seconds);
    let bytes = MidiWriter::new(bpm, track_name).encode(&notes)?;
    write_midi_file(path, &bytes)?;

    debug!(path = %path.display(), notes = notes.len(), "wrote drum MIDI");
    Ok(notes.len())
}
