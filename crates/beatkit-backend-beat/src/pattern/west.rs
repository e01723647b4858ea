//! West African grooves: Nigeria, Ghana, Senegal.

use beatkit_spec::catalog::gm::*;
use beatkit_spec::NoteEvent;

use super::Bar;

/// Afrobeats: syncopated kick, backbeat snare, eighth hats and swung shakers.
pub fn afrobeats(notes: &mut Vec<NoteEvent>, start: u32) {
    let mut bar = Bar::new(notes, start);
    bar.sixteenths(KICK, &[(0, 105), (7, 90), (10, 95)]);
    bar.sixteenths(SNARE, &[(4, 100), (12, 100)]);
    for i in (0..16).step_by(2) {
        bar.sixteenth(i, CLOSED_HH, 75);
    }
    bar.sixteenths(OPEN_HH, &[(3, 70), (11, 70)]);
    for i in 0..16 {
        bar.sixteenth(i, MARACAS, 50 + (i % 2) * 10);
    }
    bar.sixteenths(OPEN_CONGA, &[(3, 80), (7, 75), (11, 80)]);
    bar.sixteenth(15, MUTE_CONGA, 65);
}

/// Afro-fusion: ghosted kick and snare over accented sixteenth hats.
pub fn afro_fusion(notes: &mut Vec<NoteEvent>, start: u32) {
    let mut bar = Bar::new(notes, start);
    bar.sixteenths(KICK, &[(0, 100), (5, 70), (10, 90)]);
    bar.sixteenths(SNARE, &[(4, 95), (12, 95), (13, 50)]);
    for i in 0..16 {
        bar.sixteenth(i, CLOSED_HH, if i % 2 == 0 { 80 } else { 55 });
    }
    for i in 0..16 {
        bar.sixteenth(i, MARACAS, 45);
    }
    bar.sixteenth(3, OPEN_CONGA, 75);
    bar.sixteenth(6, MUTE_CONGA, 65);
    bar.sixteenth(11, OPEN_CONGA, 75);
    bar.sixteenth(14, MUTE_CONGA, 65);
}

/// Highlife: 12-pulse gankogui bell timeline with a cross-rhythm snare.
pub fn highlife(notes: &mut Vec<NoteEvent>, start: u32) {
    let mut bar = Bar::new(notes, start);
    bar.triplet(0, HI_WOODBLOCK, 95);
    bar.triplet(3, LO_WOODBLOCK, 85);
    bar.triplet(5, HI_WOODBLOCK, 80);
    bar.triplet(8, LO_WOODBLOCK, 90);
    bar.triplet(10, HI_WOODBLOCK, 80);
    bar.triplets(KICK, &[(0, 100), (6, 85)]);
    bar.triplets(SNARE, &[(4, 90), (10, 85)]);
    for i in 0..12 {
        bar.triplet(i, MARACAS, if i % 3 == 0 { 65 } else { 50 });
    }
    bar.triplet(2, OPEN_CONGA, 75);
    bar.triplet(5, MUTE_CONGA, 65);
    bar.triplet(8, OPEN_CONGA, 75);
    bar.triplet(11, MUTE_CONGA, 65);
}

/// Juju: agogo bell pattern and talking-drum lead over a soft kick.
pub fn juju(notes: &mut Vec<NoteEvent>, start: u32) {
    let mut bar = Bar::new(notes, start);
    bar.sixteenth(0, HI_AGOGO, 90);
    bar.sixteenth(3, LO_AGOGO, 75);
    bar.sixteenth(6, HI_AGOGO, 85);
    bar.sixteenth(8, LO_AGOGO, 80);
    bar.sixteenth(10, HI_AGOGO, 75);
    bar.sixteenth(13, LO_AGOGO, 70);
    bar.sixteenths(KICK, &[(0, 80), (8, 75)]);
    bar.sixteenth(2, HI_BONGO, 90);
    bar.sixteenth(4, LO_BONGO, 85);
    bar.sixteenth(7, HI_BONGO, 95);
    bar.sixteenth(9, LO_BONGO, 80);
    bar.sixteenth(11, HI_BONGO, 85);
    bar.sixteenth(14, LO_BONGO, 90);
    for i in 0..16 {
        bar.sixteenth(i, TAMBOURINE, if i % 4 == 0 { 65 } else { 50 });
    }
    bar.sixteenths(SIDE_STICK, &[(4, 70), (12, 70)]);
}

/// Fuji: hand percussion only, dundun and sakara under talking-drum fills.
pub fn fuji(notes: &mut Vec<NoteEvent>, start: u32) {
    let mut bar = Bar::new(notes, start);
    bar.sixteenths(LOW_TOM, &[(0, 100), (8, 95), (6, 65), (14, 60)]);
    bar.sixteenth(1, HI_BONGO, 85);
    bar.sixteenth(3, LO_BONGO, 90);
    bar.sixteenth(5, HI_BONGO, 80);
    bar.sixteenth(7, LO_BONGO, 85);
    bar.sixteenth(9, HI_BONGO, 90);
    bar.sixteenth(11, LO_BONGO, 80);
    bar.sixteenth(13, HI_BONGO, 85);
    bar.sixteenth(15, LO_BONGO, 75);
    bar.sixteenth(0, HI_TIMBALE, 85);
    bar.sixteenth(4, LO_TIMBALE, 80);
    bar.sixteenth(8, HI_TIMBALE, 85);
    bar.sixteenth(12, LO_TIMBALE, 80);
    for i in 0..16 {
        bar.sixteenth(i, TAMBOURINE, 55);
    }
    bar.sixteenth(2, OPEN_CONGA, 80);
    bar.sixteenth(6, MUTE_CONGA, 70);
    bar.sixteenth(10, OPEN_CONGA, 80);
    bar.sixteenth(14, MUTE_CONGA, 70);
}

/// Classic Afrobeat: broken kick, ghosted snare, ride on the beat and a 3-2 clave.
pub fn afrobeat_classic(notes: &mut Vec<NoteEvent>, start: u32) {
    let mut bar = Bar::new(notes, start);
    bar.sixteenths(KICK, &[(0, 100), (5, 80), (10, 90), (15, 75)]);
    bar.sixteenths(SNARE, &[(1, 45), (4, 100), (11, 50), (12, 100)]);
    bar.sixteenths(RIDE, &[(0, 90), (4, 85), (8, 90), (12, 85)]);
    for i in 0..16 {
        bar.sixteenth(i, TAMBOURINE, if i % 4 == 0 { 60 } else { 45 });
    }
    bar.sixteenths(CLAVES, &[(0, 85), (3, 80), (6, 80), (10, 85), (12, 80)]);
    bar.sixteenth(0, HI_WOODBLOCK, 80);
    bar.sixteenth(4, LO_WOODBLOCK, 70);
    bar.sixteenth(8, HI_WOODBLOCK, 80);
    bar.sixteenth(12, LO_WOODBLOCK, 70);
}

/// Mbalax: sabar lead on the triplet grid with tama accents and a bell timeline.
pub fn mbalax(notes: &mut Vec<NoteEvent>, start: u32) {
    let mut bar = Bar::new(notes, start);
    bar.triplet(0, HI_TOM, 100);
    bar.triplet(2, MID_TOM, 85);
    bar.triplet(3, HI_TOM, 95);
    bar.triplet(5, MID_TOM, 80);
    bar.triplet(7, HI_TOM, 90);
    bar.triplet(8, MID_TOM, 85);
    bar.triplet(10, HI_TOM, 95);
    bar.triplet(11, MID_TOM, 80);
    bar.triplet(1, HI_BONGO, 80);
    bar.triplet(4, LO_BONGO, 85);
    bar.triplet(6, HI_BONGO, 75);
    bar.triplet(9, LO_BONGO, 80);
    bar.triplet(0, HI_WOODBLOCK, 85);
    bar.triplet(3, LO_WOODBLOCK, 75);
    bar.triplet(6, HI_WOODBLOCK, 85);
    bar.triplet(8, LO_WOODBLOCK, 75);
    bar.triplet(10, HI_WOODBLOCK, 80);
    bar.triplets(KICK, &[(0, 90), (6, 80)]);
    for i in 0..12 {
        bar.triplet(i, MARACAS, 50);
    }
}
