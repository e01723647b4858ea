//! Southern African grooves.

use beatkit_spec::catalog::gm::*;
use beatkit_spec::NoteEvent;

use super::Bar;

/// Amapiano: log-drum bounce with rim clicks and ghosted kicks.
pub fn amapiano(notes: &mut Vec<NoteEvent>, start: u32) {
    let mut bar = Bar::new(notes, start);
    bar.sixteenths(LOW_TOM, &[(0, 100), (4, 85), (8, 95)]);
    bar.sixteenths(KICK, &[(3, 70), (10, 75)]);
    bar.sixteenths(SIDE_STICK, &[(4, 85), (12, 85)]);
    for i in (0..16).step_by(2) {
        bar.sixteenth(i, CLOSED_HH, 70);
    }
    for i in 0..16 {
        bar.sixteenth(i, MARACAS, if i % 4 == 0 { 60 } else { 45 });
    }
    bar.sixteenths(OPEN_HH, &[(7, 65), (15, 60)]);
}

/// Afro-house: four-on-the-floor kick with conga, djembe and cowbell accents.
pub fn afro_house(notes: &mut Vec<NoteEvent>, start: u32) {
    let mut bar = Bar::new(notes, start);
    for i in (0..16).step_by(4) {
        bar.sixteenth(i, KICK, 100);
    }
    bar.sixteenths(CLAP, &[(4, 90), (12, 90)]);
    for i in 0..16 {
        bar.sixteenth(i, CLOSED_HH, if i % 2 == 0 { 75 } else { 55 });
    }
    bar.sixteenths(OPEN_HH, &[(6, 70), (14, 65)]);
    for i in 0..16 {
        bar.sixteenth(i, MARACAS, 50);
    }
    bar.sixteenth(2, OPEN_CONGA, 75);
    bar.sixteenth(6, MUTE_CONGA, 65);
    bar.sixteenth(10, OPEN_CONGA, 75);
    bar.sixteenth(14, MUTE_CONGA, 65);
    bar.sixteenths(HI_TOM, &[(3, 70), (11, 70)]);
    bar.sixteenths(COWBELL, &[(0, 75), (8, 75)]);
}

/// Gqom: heavy kick on the one and a sparse broken beat.
pub fn gqom(notes: &mut Vec<NoteEvent>, start: u32) {
    let mut bar = Bar::new(notes, start);
    bar.sixteenths(KICK, &[(0, 127), (7, 90), (14, 85)]);
    bar.sixteenth(10, OPEN_HH, 85);
    bar.sixteenth(6, SNARE, 55);
    bar.sixteenth(12, CLAP, 80);
    bar.sixteenths(CLOSED_HH, &[(2, 65), (4, 70), (8, 65)]);
    bar.sixteenths(MARACAS, &[(0, 50), (4, 45), (8, 50), (12, 45)]);
}

/// Kwaito: slowed-down house with wide spacing between hits.
pub fn kwaito(notes: &mut Vec<NoteEvent>, start: u32) {
    let mut bar = Bar::new(notes, start);
    bar.sixteenth(0, KICK, 105);
    bar.sixteenth(8, SNARE, 90);
    bar.sixteenth(12, CLAP, 70);
    bar.sixteenths(CLOSED_HH, &[(2, 65), (6, 70), (10, 65), (14, 70)]);
    bar.sixteenth(4, OPEN_HH, 60);
    for i in (0..16).step_by(2) {
        bar.sixteenth(i, MARACAS, 45);
    }
    bar.sixteenths(COWBELL, &[(0, 65), (8, 60)]);
}
