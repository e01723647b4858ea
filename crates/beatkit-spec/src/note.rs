//! Note events produced by the pattern generators.

use serde::{Deserialize, Serialize};

/// A single percussion hit on the sequence timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteEvent {
    /// Absolute tick from the start of the sequence.
    pub tick: u32,
    /// Percussion identifier (General MIDI percussion map).
    pub pitch: u8,
    /// Loudness, 0-127.
    pub velocity: u8,
    /// Length in ticks.
    pub duration: u32,
}

impl NoteEvent {
    /// Creates a note event.
    pub fn new(tick: u32, pitch: u8, velocity: u8, duration: u32) -> Self {
        Self {
            tick,
            pitch,
            velocity,
            duration,
        }
    }

    /// Tick at which the note is released.
    pub fn end_tick(&self) -> u32 {
        self.tick + self.duration
    }

    /// Linear playback gain derived from velocity.
    pub fn gain(&self) -> f32 {
        self.velocity as f32 / 127.0
    }
}

/// Sorts notes by tick, keeping generation order for notes on the same tick.
pub fn sort_by_tick(notes: &mut [NoteEvent]) {
    notes.sort_by_key(|n| n.tick);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sort_is_stable() {
        let mut notes = vec![
            NoteEvent::new(240, 42, 80, 120),
            NoteEvent::new(0, 36, 100, 120),
            NoteEvent::new(240, 38, 90, 120),
            NoteEvent::new(0, 42, 80, 120),
        ];
        sort_by_tick(&mut notes);
        let order: Vec<(u32, u8)> = notes.iter().map(|n| (n.tick, n.pitch)).collect();
        assert_eq!(order, vec![(0, 36), (0, 42), (240, 42), (240, 38)]);
    }

    #[test]
    fn test_gain() {
        assert_eq!(NoteEvent::new(0, 36, 127, 1).gain(), 1.0);
        assert_eq!(NoteEvent::new(0, 36, 0, 1).gain(), 0.0);
    }

    #[test]
    fn test_end_tick() {
        assert_eq!(NoteEvent::new(1800, 36, 100, 120).end_tick(), 1920);
    }
}
