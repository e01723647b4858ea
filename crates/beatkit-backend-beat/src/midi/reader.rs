//! MIDI reader for the single-track files produced by [`super::MidiWriter`].
//!
//! Supports exactly what the writer emits: one `MTrk` chunk with meta events
//! and note-on/note-off channel messages, no running status.

use std::io::Cursor;

use byteorder::{BigEndian, ReadBytesExt};

use super::vlq::decode_vlq;
use super::{
    MidiError, HEADER_MAGIC, META, META_END_OF_TRACK, META_TEMPO, META_TRACK_NAME, TRACK_MAGIC,
};

/// A channel message recovered from a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MidiMessage {
    /// Note-on.
    NoteOn {
        /// Zero-based channel.
        channel: u8,
        /// Note / percussion identifier.
        pitch: u8,
        /// Velocity.
        velocity: u8,
    },
    /// Note-off.
    NoteOff {
        /// Zero-based channel.
        channel: u8,
        /// Note / percussion identifier.
        pitch: u8,
        /// Release velocity.
        velocity: u8,
    },
}

/// A message with its absolute tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimedMessage {
    /// Absolute tick, reconstructed by summing deltas.
    pub tick: u32,
    /// The message.
    pub message: MidiMessage,
}

/// Parsed contents of a drum MIDI file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MidiSummary {
    /// File format (always 0 for files this crate writes).
    pub format: u16,
    /// Ticks per quarter note.
    pub division: u16,
    /// Track name meta event, empty if absent.
    pub track_name: String,
    /// Microseconds per quarter note from the set-tempo event.
    pub tempo_micros: Option<u32>,
    /// Channel messages in file order.
    pub events: Vec<TimedMessage>,
    /// Tick of the end-of-track event.
    pub end_tick: u32,
}

impl MidiSummary {
    /// Tempo in whole beats per minute, if a tempo event was present.
    pub fn bpm(&self) -> Option<u32> {
        self.tempo_micros
            .filter(|&t| t > 0)
            .map(|t| (60_000_000 + t / 2) / t)
    }

    /// Note-on messages as `(tick, pitch, velocity)`.
    pub fn note_ons(&self) -> impl Iterator<Item = (u32, u8, u8)> + '_ {
        self.events.iter().filter_map(|e| match e.message {
            MidiMessage::NoteOn {
                pitch, velocity, ..
            } => Some((e.tick, pitch, velocity)),
            MidiMessage::NoteOff { .. } => None,
        })
    }

    /// Number of note-on messages.
    pub fn note_on_count(&self) -> usize {
        self.note_ons().count()
    }

    /// Number of note-off messages.
    pub fn note_off_count(&self) -> usize {
        self.events.len() - self.note_on_count()
    }
}

/// Fixed fields of the `MThd` chunk and the `MTrk` chunk header.
struct FileHeader {
    header_len: u32,
    format: u16,
    tracks: u16,
    division: u16,
    track_len: u32,
}

fn read_file_header(data: &[u8]) -> Result<FileHeader, MidiError> {
    let mut cursor = Cursor::new(data);
    cursor.set_position(4);
    let header_len = cursor.read_u32::<BigEndian>()?;
    let format = cursor.read_u16::<BigEndian>()?;
    let tracks = cursor.read_u16::<BigEndian>()?;
    let division = cursor.read_u16::<BigEndian>()?;
    cursor.set_position(18);
    let track_len = cursor.read_u32::<BigEndian>()?;
    Ok(FileHeader {
        header_len,
        format,
        tracks,
        division,
        track_len,
    })
}

/// Parse a format 0, single-track MIDI file.
pub fn read_midi(data: &[u8]) -> Result<MidiSummary, MidiError> {
    if data.len() < 22 {
        return Err(MidiError::malformed(
            0,
            format!("file too small: {} bytes", data.len()),
        ));
    }
    if &data[0..4] != HEADER_MAGIC {
        return Err(MidiError::malformed(0, "missing MThd magic"));
    }
    let FileHeader {
        header_len,
        format,
        tracks,
        division,
        track_len,
    } = read_file_header(data)?;
    if header_len != 6 {
        return Err(MidiError::malformed(
            4,
            format!("header length {header_len}, expected 6"),
        ));
    }
    if tracks != 1 {
        return Err(MidiError::malformed(
            10,
            format!("{tracks} tracks, expected 1"),
        ));
    }

    if &data[14..18] != TRACK_MAGIC {
        return Err(MidiError::malformed(14, "missing MTrk magic"));
    }
    let track_len = track_len as usize;
    let track_start: usize = 22;
    let track_end = track_start.saturating_add(track_len);
    if track_end > data.len() {
        return Err(MidiError::malformed(
            18,
            format!(
                "track length {track_len} exceeds remaining {} bytes",
                data.len() - track_start
            ),
        ));
    }

    let mut summary = MidiSummary {
        format,
        division,
        track_name: String::new(),
        tempo_micros: None,
        events: Vec::new(),
        end_tick: 0,
    };

    let mut pos = track_start;
    let mut tick = 0u32;
    loop {
        if pos >= track_end {
            return Err(MidiError::malformed(pos, "track ended without end-of-track"));
        }
        let (delta, used) = decode_vlq(&data[pos..track_end])
            .ok_or_else(|| MidiError::malformed(pos, "truncated delta time"))?;
        pos += used;
        tick = tick
            .checked_add(delta)
            .ok_or_else(|| MidiError::malformed(pos, "tick overflow"))?;

        let status = *data
            .get(pos)
            .filter(|_| pos < track_end)
            .ok_or_else(|| MidiError::malformed(pos, "missing status byte"))?;
        pos += 1;

        if status == META {
            let kind = *data
                .get(pos)
                .filter(|_| pos < track_end)
                .ok_or_else(|| MidiError::malformed(pos, "missing meta type"))?;
            pos += 1;
            let (len, used) = decode_vlq(&data[pos..track_end])
                .ok_or_else(|| MidiError::malformed(pos, "truncated meta length"))?;
            pos += used;
            let body_end = pos.saturating_add(len as usize);
            if body_end > track_end {
                return Err(MidiError::malformed(pos, "meta event overruns track"));
            }
            let body = &data[pos..body_end];
            pos = body_end;

            match kind {
                META_TRACK_NAME => summary.track_name = String::from_utf8_lossy(body).into_owned(),
                META_TEMPO => {
                    if body.len() != 3 {
                        return Err(MidiError::malformed(
                            pos,
                            format!("tempo event has {} bytes, expected 3", body.len()),
                        ));
                    }
                    summary.tempo_micros = Some(Cursor::new(body).read_u24::<BigEndian>()?);
                }
                META_END_OF_TRACK => {
                    summary.end_tick = tick;
                    return Ok(summary);
                }
                _ => {}
            }
            continue;
        }

        if pos + 2 > track_end {
            return Err(MidiError::malformed(pos, "truncated channel message"));
        }
        let (pitch, velocity) = (data[pos], data[pos + 1]);
        pos += 2;
        let channel = status & 0x0F;
        let message = match status & 0xF0 {
            0x90 => MidiMessage::NoteOn {
                channel,
                pitch,
                velocity,
            },
            0x80 => MidiMessage::NoteOff {
                channel,
                pitch,
                velocity,
            },
            _ => {
                return Err(MidiError::malformed(
                    pos - 3,
                    format!("unsupported status byte {status:#04x}"),
                ))
            }
        };
        summary.events.push(TimedMessage { tick, message });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::midi::MidiWriter;
    use beatkit_spec::catalog::gm;
    use beatkit_spec::{sort_by_tick, NoteEvent};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reads_writer_output() {
        let notes = [
            NoteEvent::new(0, gm::KICK, 100, 120),
            NoteEvent::new(480, gm::CLAP, 90, 120),
        ];
        let bytes = MidiWriter::new(124, "Afro House").encode(&notes).unwrap();
        let summary = read_midi(&bytes).unwrap();

        assert_eq!(summary.format, 0);
        assert_eq!(summary.division, 480);
        assert_eq!(summary.track_name, "Afro House");
        assert_eq!(summary.tempo_micros, Some(60_000_000 / 124));
        assert_eq!(summary.bpm(), Some(124));
        assert_eq!(
            summary.note_ons().collect::<Vec<_>>(),
            vec![(0, gm::KICK, 100), (480, gm::CLAP, 90)]
        );
        assert_eq!(summary.note_off_count(), 2);
        assert_eq!(summary.end_tick, 600);
        assert!(summary.events.iter().all(|e| match e.message {
            MidiMessage::NoteOn { channel, .. } | MidiMessage::NoteOff { channel, .. } =>
                channel == 9,
        }));
    }

    #[test]
    fn test_absolute_ticks_survive_deltas() {
        let mut notes = crate::pattern::build_sequence(beatkit_spec::Genre::Highlife, 115, 12.0);
        let bytes = MidiWriter::new(115, "").encode(&notes).unwrap();
        let summary = read_midi(&bytes).unwrap();

        sort_by_tick(&mut notes);
        let expected: Vec<(u32, u8, u8)> =
            notes.iter().map(|n| (n.tick, n.pitch, n.velocity)).collect();
        assert_eq!(summary.note_ons().collect::<Vec<_>>(), expected);

        let mut offs: Vec<u32> = summary
            .events
            .iter()
            .filter(|e| matches!(e.message, MidiMessage::NoteOff { .. }))
            .map(|e| e.tick)
            .collect();
        let mut expected_offs: Vec<u32> = notes.iter().map(|n| n.end_tick()).collect();
        offs.sort_unstable();
        expected_offs.sort_unstable();
        assert_eq!(offs, expected_offs);
    }

    #[test]
    fn test_rejects_bad_magic() {
        let mut bytes = MidiWriter::new(120, "").encode(&[]).unwrap();
        bytes[0] = b'X';
        assert!(matches!(
            read_midi(&bytes),
            Err(MidiError::Malformed { offset: 0, .. })
        ));
    }

    #[test]
    fn test_rejects_truncated_track() {
        let bytes = MidiWriter::new(120, "Kit").encode(&[]).unwrap();
        let err = read_midi(&bytes[..bytes.len() - 2]).unwrap_err();
        assert!(matches!(err, MidiError::Malformed { offset: 18, .. }));
    }

    #[test]
    fn test_rejects_missing_end_of_track() {
        let mut bytes = MidiWriter::new(120, "").encode(&[]).unwrap();
        // drop the end-of-track event and shrink the chunk length to match
        bytes.truncate(bytes.len() - 4);
        let track_len = (bytes.len() - 22) as u32;
        bytes[18..22].copy_from_slice(&track_len.to_be_bytes());
        let err = read_midi(&bytes).unwrap_err();
        assert!(err.to_string().contains("end-of-track"));
    }

    #[test]
    fn test_reads_big_endian_fields() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"MThd");
        bytes.extend_from_slice(&[0, 0, 0, 6, 0, 0, 0, 1, 0x01, 0xE0]);
        bytes.extend_from_slice(b"MTrk");
        bytes.extend_from_slice(&[0, 0, 0, 0]);
        bytes.extend_from_slice(&[0x00, 0xFF, 0x51, 0x03, 0x07, 0xA1, 0x20]);
        bytes.extend_from_slice(&[0x00, 0x99, gm::KICK, 100]);
        bytes.extend_from_slice(&[0x81, 0x00, 0x89, gm::KICK, 0]);
        bytes.extend_from_slice(&[0x00, 0xFF, 0x2F, 0x00]);
        let track_len = (bytes.len() - 22) as u32;
        bytes[18..22].copy_from_slice(&track_len.to_be_bytes());

        let summary = read_midi(&bytes).unwrap();
        assert_eq!(summary.division, 480);
        assert_eq!(summary.tempo_micros, Some(500_000));
        assert_eq!(summary.bpm(), Some(120));
        assert_eq!(summary.note_ons().collect::<Vec<_>>(), vec![(0, gm::KICK, 100)]);
        assert_eq!(summary.end_tick, 128);
    }

    #[test]
    fn test_rejects_short_tempo() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"MThd");
        bytes.extend_from_slice(&[0, 0, 0, 6, 0, 0, 0, 1, 0x01, 0xE0]);
        bytes.extend_from_slice(b"MTrk");
        bytes.extend_from_slice(&[0, 0, 0, 10]);
        bytes.extend_from_slice(&[0x00, 0xFF, 0x51, 0x02, 0x07, 0xA1]);
        bytes.extend_from_slice(&[0x00, 0xFF, 0x2F, 0x00]);

        let err = read_midi(&bytes).unwrap_err();
        assert!(err.to_string().contains("tempo event has 2 bytes"));
    }

    #[test]
    fn test_rejects_tiny_input() {
        assert!(read_midi(b"MThd").is_err());
    }
}
