//! Standard MIDI File export for drum sequences.
//!
//! Files are format 0 with a single track on the percussion channel (channel 10),
//! at a division of 480 ticks per quarter note:
//!
//! ```text
//! MThd  len=6  format=0  tracks=1  division=480
//! MTrk  len=N
//!   0    FF 03 <len> <track name>
//!   0    FF 51 03 <tt tt tt>          microseconds per quarter
//!   dt   99 <pitch> <velocity>        note-on, one per note
//!   dt   89 <pitch> 00                note-off, one per note
//!   ...
//!   0    FF 2F 00                     end of track
//! ```
//!
//! Delta times are variable-length quantities (see [`vlq`]).

pub mod reader;
pub mod vlq;
pub mod writer;

use thiserror::Error;

pub use reader::{read_midi, MidiMessage, MidiSummary, TimedMessage};
pub use vlq::{decode_vlq, encode_vlq, MAX_VLQ};
pub use writer::{write_drum_midi, write_midi_file, MidiWriter};

/// Header chunk magic.
pub const HEADER_MAGIC: &[u8; 4] = b"MThd";
/// Track chunk magic.
pub const TRACK_MAGIC: &[u8; 4] = b"MTrk";
/// Note-on, percussion channel.
pub const NOTE_ON: u8 = 0x99;
/// Note-off, percussion channel.
pub const NOTE_OFF: u8 = 0x89;
/// Meta event prefix.
pub const META: u8 = 0xFF;
/// Track-name meta type.
pub const META_TRACK_NAME: u8 = 0x03;
/// Set-tempo meta type.
pub const META_TEMPO: u8 = 0x51;
/// End-of-track meta type.
pub const META_END_OF_TRACK: u8 = 0x2F;

/// Errors raised while encoding or parsing MIDI data.
#[derive(Debug, Error)]
pub enum MidiError {
    /// A delta time does not fit in a 4-byte variable-length quantity.
    #[error("delta time {0} exceeds the variable-length maximum of 0x0FFFFFFF")]
    DeltaOutOfRange(u32),

    /// The data is not a file this encoder would produce.
    #[error("malformed MIDI data at byte {offset}: {message}")]
    Malformed {
        /// Byte offset of the problem.
        offset: usize,
        /// What was wrong.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MidiError {
    pub(crate) fn malformed(offset: usize, message: impl Into<String>) -> Self {
        Self::Malformed {
            offset,
            message: message.into(),
        }
    }
}
