//! Tick-based timing model shared by the pattern generators and the MIDI encoder.
//!
//! All sequencing happens at a fixed resolution of 480 ticks per quarter note.
//! A bar is always four beats for bar-count arithmetic; 6/8-feel grooves split
//! the same bar into 12 triplet-eighth pulses.

/// Ticks per quarter note.
pub const TICKS_PER_QUARTER: u32 = 480;
/// One 4/4 bar.
pub const WHOLE: u32 = TICKS_PER_QUARTER * 4;
/// Half note.
pub const HALF: u32 = TICKS_PER_QUARTER * 2;
/// Quarter note.
pub const QUARTER: u32 = TICKS_PER_QUARTER;
/// Eighth note.
pub const EIGHTH: u32 = TICKS_PER_QUARTER / 2;
/// Sixteenth note.
pub const SIXTEENTH: u32 = TICKS_PER_QUARTER / 4;
/// Triplet eighth (12 per bar).
pub const TRIPLET_EIGHTH: u32 = TICKS_PER_QUARTER / 3;

/// Beats per bar used for duration arithmetic.
pub const BEATS_PER_BAR: u32 = 4;
/// Sixteenth-note grid positions per bar.
pub const SIXTEENTHS_PER_BAR: u8 = 16;
/// Triplet-eighth grid positions per bar.
pub const TRIPLETS_PER_BAR: u8 = 12;
/// Most bars a sequence can hold with every tick, including the last
/// bar's note-offs, still addressable as `u32`.
pub const MAX_BARS: u32 = u32::MAX / WHOLE - 1;

/// Length of one bar in seconds.
pub fn seconds_per_bar(bpm: u32) -> f64 {
    (BEATS_PER_BAR as f64 / bpm as f64) * 60.0
}

/// Number of whole bars that fit in `duration_seconds`, never less than one.
///
/// A fractional remainder does not earn an extra partial bar. The count is
/// capped at [`MAX_BARS`].
pub fn total_bars(bpm: u32, duration_seconds: f64) -> u32 {
    let bars = (duration_seconds / seconds_per_bar(bpm)) as u32;
    bars.clamp(1, MAX_BARS)
}

/// First tick of the given bar.
pub fn bar_start(bar_index: u32) -> u32 {
    bar_index * WHOLE
}

/// Tick offset of a sixteenth-note grid position within a bar.
pub fn sixteenth_tick(position: u8) -> u32 {
    position as u32 * SIXTEENTH
}

/// Tick offset of a triplet-eighth grid position within a bar.
pub fn triplet_tick(position: u8) -> u32 {
    position as u32 * TRIPLET_EIGHTH
}

/// Converts an absolute tick to seconds at a constant tempo.
pub fn tick_to_seconds(tick: u32, bpm: u32) -> f64 {
    tick as f64 * 60.0 / (bpm as f64 * TICKS_PER_QUARTER as f64)
}

/// Microseconds per quarter note, as stored in a MIDI tempo event.
pub fn micros_per_quarter(bpm: u32) -> u32 {
    60_000_000 / bpm
}
