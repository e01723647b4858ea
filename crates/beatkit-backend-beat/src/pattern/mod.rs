//! Per-genre percussion pattern library.
//!
//! Each genre has a bar generator: a function that appends one bar of hits,
//! starting at a given tick, to a note list. Generators are fixed arrangements
//! of `(grid position, voice, velocity)` hits and never look at previous bars,
//! so a sequence is built by calling the generator once per bar.
//!
//! Most grooves sit on a sixteenth-note grid (16 positions per bar). Highlife
//! and mbalax use a 6/8 feel and place hits on 12 triplet-eighth positions
//! that span the same bar.

mod central;
mod southern;
mod west;


use beatkit_spec::catalog::gm::{CLOSED_HH, KICK, SNARE};
use beatkit_spec::timing::{
    bar_start, sixteenth_tick, total_bars, triplet_tick, SIXTEENTH, TRIPLET_EIGHTH,
};
use beatkit_spec::{Genre, NoteEvent};
use tracing::debug;

pub use central::{kuduro, makossa, ndombolo, soukous};
pub use southern::{afro_house, amapiano, gqom, kwaito};
pub use west::{afro_fusion, afrobeat_classic, afrobeats, fuji, highlife, juju, mbalax};

/// A bar generator: appends one bar of notes starting at the given tick.
pub type BarPattern = fn(&mut Vec<NoteEvent>, u32);

/// Appends hits to a single bar of a note list.
pub(crate) struct Bar<'a> {
    notes: &'a mut Vec<NoteEvent>,
    start: u32,
}

impl<'a> Bar<'a> {
    pub(crate) fn new(notes: &'a mut Vec<NoteEvent>, start: u32) -> Self {
        Self { notes, start }
    }

    /// Adds a sixteenth-long hit at a sixteenth-grid position.
    pub(crate) fn sixteenth(&mut self, position: u8, pitch: u8, velocity: u8) {
        self.notes.push(NoteEvent::new(
            self.start + sixteenth_tick(position),
            pitch,
            velocity,
            SIXTEENTH,
        ));
    }

    /// Adds a triplet-eighth-long hit at a triplet-grid position.
    pub(crate) fn triplet(&mut self, position: u8, pitch: u8, velocity: u8) {
        self.notes.push(NoteEvent::new(
            self.start + triplet_tick(position),
            pitch,
            velocity,
            TRIPLET_EIGHTH,
        ));
    }

    /// Adds several `(position, velocity)` hits of one voice on the sixteenth grid.
    pub(crate) fn sixteenths(&mut self, pitch: u8, hits: &[(u8, u8)]) {
        for &(position, velocity) in hits {
            self.sixteenth(position, pitch, velocity);
        }
    }

    /// Adds several `(position, velocity)` hits of one voice on the triplet grid.
    pub(crate) fn triplets(&mut self, pitch: u8, hits: &[(u8, u8)]) {
        for &(position, velocity) in hits {
            self.triplet(position, pitch, velocity);
        }
    }
}

/// Generic backbeat used for genres without a dedicated groove: sixteenth
/// closed hats, kick on every beat, snare on the offbeat eighths.
pub fn default_pattern(notes: &mut Vec<NoteEvent>, start: u32) {
    let mut bar = Bar::new(notes, start);
    for i in 0..16 {
        bar.sixteenth(i, CLOSED_HH, 80);
        if i % 4 == 0 {
            bar.sixteenth(i, KICK, 100);
        }
        if i % 4 == 2 {
            bar.sixteenth(i, SNARE, 100);
        }
    }
}

/// Returns the bar generator for a genre.
pub fn pattern_for(genre: Genre) -> BarPattern {
    match genre {
        Genre::Afrobeats => afrobeats,
        Genre::Amapiano => amapiano,
        Genre::AfroFusion => afro_fusion,
        Genre::Highlife => highlife,
        Genre::Juju => juju,
        Genre::Fuji => fuji,
        Genre::AfrobeatClassic => afrobeat_classic,
        Genre::Soukous => soukous,
        Genre::Makossa => makossa,
        Genre::AfroHouse => afro_house,
        Genre::Gqom => gqom,
        Genre::Kuduro => kuduro,
        Genre::Mbalax => mbalax,
        Genre::Kwaito => kwaito,
        Genre::Ndombolo => ndombolo,
        Genre::HipHop
        | Genre::Trap
        | Genre::Lofi
        | Genre::Edm
        | Genre::House
        | Genre::Drill
        | Genre::Rnb
        | Genre::Jazz
        | Genre::Ambient => default_pattern,
    }
}

/// Whether the genre has its own groove rather than the generic backbeat.
pub fn has_dedicated_pattern(genre: Genre) -> bool {
    !matches!(
        genre,
        Genre::HipHop
            | Genre::Trap
            | Genre::Lofi
            | Genre::Edm
            | Genre::House
            | Genre::Drill
            | Genre::Rnb
            | Genre::Jazz
            | Genre::Ambient
    )
}

/// Builds the full note sequence for a render.
///
/// The genre's generator runs once per whole bar that fits in the duration
/// (at least one). Notes are returned in generation order; callers that need
/// tick order sort them with [`beatkit_spec::sort_by_tick`].
pub fn build_sequence(genre: Genre, bpm: u32, duration_seconds: f64) -> Vec<NoteEvent> {
    let pattern = pattern_for(genre);
    let bars = total_bars(bpm, duration_seconds);

    let mut notes = Vec::new();
    for bar in 0..bars {
        pattern(&mut notes, bar_start(bar));
    }

    debug!(
        genre = %genre,
        bpm,
        bars,
        notes = notes.len(),
        "built note sequence"
    );
    notes
}
