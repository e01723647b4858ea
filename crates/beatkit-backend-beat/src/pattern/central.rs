//! Central African grooves: Congo, Cameroon, Angola.

use beatkit_spec::catalog::gm::*;
use beatkit_spec::NoteEvent;

use super::Bar;

/// Soukous: driving rumba with a cowbell on the beat and busy congas.
pub fn soukous(notes: &mut Vec<NoteEvent>, start: u32) {
    let mut bar = Bar::new(notes, start);
    bar.sixteenths(KICK, &[(0, 100), (3, 75), (6, 85), (10, 80)]);
    bar.sixteenths(SNARE, &[(4, 100), (12, 100)]);
    for i in 0..16 {
        bar.sixteenth(i, CLOSED_HH, if i % 2 == 0 { 80 } else { 60 });
    }
    bar.sixteenths(COWBELL, &[(0, 85), (4, 80), (8, 85), (12, 80)]);
    bar.sixteenth(2, OPEN_CONGA, 80);
    bar.sixteenth(5, MUTE_CONGA, 70);
    bar.sixteenth(8, LOW_CONGA, 75);
    bar.sixteenth(11, OPEN_CONGA, 80);
    bar.sixteenth(14, MUTE_CONGA, 70);
    for i in 0..16 {
        bar.sixteenth(i, MARACAS, 45);
    }
}

/// Makossa: interlocking kick figure with offbeat hats.
pub fn makossa(notes: &mut Vec<NoteEvent>, start: u32) {
    let mut bar = Bar::new(notes, start);
    bar.sixteenths(
        KICK,
        &[(0, 100), (3, 85), (6, 80), (8, 95), (11, 80), (14, 75)],
    );
    bar.sixteenths(SNARE, &[(4, 95), (12, 95)]);
    for i in (1..16).step_by(2) {
        bar.sixteenth(i, CLOSED_HH, 75);
    }
    bar.sixteenths(COWBELL, &[(0, 85), (6, 80), (10, 85)]);
    bar.sixteenth(2, OPEN_CONGA, 75);
    bar.sixteenth(5, MUTE_CONGA, 65);
    bar.sixteenth(10, OPEN_CONGA, 75);
    bar.sixteenth(13, MUTE_CONGA, 65);
}

/// Kuduro: hard kick on every beat, accented hats and cowbell stabs.
pub fn kuduro(notes: &mut Vec<NoteEvent>, start: u32) {
    let mut bar = Bar::new(notes, start);
    for i in (0..16).step_by(4) {
        bar.sixteenth(i, KICK, 105);
    }
    bar.sixteenths(KICK, &[(6, 80), (14, 80)]);
    bar.sixteenths(CLAP, &[(4, 100), (12, 100)]);
    for i in 0..16 {
        bar.sixteenth(i, CLOSED_HH, if i % 3 == 0 { 85 } else { 65 });
    }
    bar.sixteenths(OPEN_HH, &[(3, 75), (11, 75)]);
    bar.sixteenths(COWBELL, &[(2, 80), (5, 70), (10, 80), (13, 70)]);
    bar.sixteenth(0, HI_AGOGO, 75);
    bar.sixteenth(8, LO_AGOGO, 70);
}

/// Ndombolo: flammed snare, busy hats and cowbell on the beat.
pub fn ndombolo(notes: &mut Vec<NoteEvent>, start: u32) {
    let mut bar = Bar::new(notes, start);
    bar.sixteenths(KICK, &[(0, 100), (6, 85), (8, 95), (14, 80)]);
    // grace notes one sixteenth ahead of each backbeat
    bar.sixteenths(SNARE, &[(3, 60), (4, 105), (11, 60), (12, 105)]);
    for i in 0..16 {
        bar.sixteenth(i, CLOSED_HH, if i % 2 == 0 { 80 } else { 70 });
    }
    bar.sixteenths(OPEN_HH, &[(7, 70), (15, 65)]);
    bar.sixteenths(COWBELL, &[(0, 80), (4, 75), (8, 80), (12, 75)]);
    bar.sixteenths(OPEN_CONGA, &[(2, 75), (10, 75)]);
}
