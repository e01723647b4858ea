//! Percussion voice catalog.
//!
//! The catalog is the canonical set of voices the engine knows how to render.
//! Each voice is keyed by a General MIDI percussion identifier and a unique
//! name used in the sample-library manifest.

use serde::Serialize;

/// General MIDI percussion identifiers (channel 10).
///
/// Several toms, bongos and timbales are repurposed for African hand drums;
/// the mapping is noted next to each constant.
pub mod gm {
    pub const KICK: u8 = 36;
    pub const SIDE_STICK: u8 = 37;
    pub const SNARE: u8 = 38;
    pub const CLAP: u8 = 39;
    pub const SNARE_ELEC: u8 = 40;
    pub const CLOSED_HH: u8 = 42;
    pub const PEDAL_HH: u8 = 44;
    pub const OPEN_HH: u8 = 46;
    pub const CRASH: u8 = 49;
    pub const RIDE: u8 = 51;
    pub const RIDE_BELL: u8 = 53;

    /// Dundun / log drum.
    pub const LOW_TOM: u8 = 41;
    /// Djembe bass.
    pub const MID_TOM: u8 = 47;
    /// Djembe slap.
    pub const HI_TOM: u8 = 48;

    pub const MUTE_CONGA: u8 = 62;
    pub const OPEN_CONGA: u8 = 63;
    pub const LOW_CONGA: u8 = 64;

    /// Talking drum, high.
    pub const HI_BONGO: u8 = 60;
    /// Talking drum, low.
    pub const LO_BONGO: u8 = 61;

    pub const COWBELL: u8 = 56;
    pub const HI_AGOGO: u8 = 67;
    pub const LO_AGOGO: u8 = 68;
    /// Gankogui bell, high.
    pub const HI_WOODBLOCK: u8 = 76;
    /// Gankogui bell, low.
    pub const LO_WOODBLOCK: u8 = 77;

    /// Shekere.
    pub const TAMBOURINE: u8 = 54;
    /// Axatse.
    pub const CABASA: u8 = 69;
    /// Egg shakers.
    pub const MARACAS: u8 = 70;
    pub const CLAVES: u8 = 75;

    /// Sakara, high.
    pub const HI_TIMBALE: u8 = 65;
    /// Sakara, low.
    pub const LO_TIMBALE: u8 = 66;
}

/// One renderable percussion voice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PercussionVoice {
    /// Percussion identifier the voice is triggered by.
    pub pitch: u8,
    /// Unique key, also used as the manifest key.
    pub name: &'static str,
    /// Description of the sound, used when the sample has to be re-created.
    pub prompt: &'static str,
    /// Target length of the sample in seconds.
    pub duration_seconds: f64,
}

const fn voice(
    pitch: u8,
    name: &'static str,
    prompt: &'static str,
    duration_seconds: f64,
) -> PercussionVoice {
    PercussionVoice {
        pitch,
        name,
        prompt,
        duration_seconds,
    }
}

/// The full percussion kit, ordered by pitch.
pub const CATALOG: [PercussionVoice; 25] = [
    voice(gm::KICK, "kick", "Deep punchy kick drum hit, dry, single hit", 0.8),
    voice(gm::SIDE_STICK, "side_stick", "Snare drum rim click, dry, single hit", 0.5),
    voice(gm::SNARE, "snare", "Crisp snare drum hit, dry, single hit", 0.7),
    voice(gm::CLAP, "clap", "Hand clap percussion hit, dry, single hit", 0.6),
    voice(gm::LOW_TOM, "dundun", "Deep African dundun bass drum hit, warm, single hit", 1.0),
    voice(gm::CLOSED_HH, "closed_hh", "Closed hi-hat cymbal hit, tight, single hit", 0.5),
    voice(gm::OPEN_HH, "open_hh", "Open hi-hat cymbal hit, sustain, single hit", 1.0),
    voice(gm::MID_TOM, "djembe_bass", "Djembe bass tone, deep resonant, single hit", 0.8),
    voice(gm::HI_TOM, "djembe_slap", "Djembe slap tone, sharp bright, single hit", 0.6),
    voice(gm::RIDE, "ride", "Ride cymbal hit, clean, single hit", 1.2),
    voice(gm::TAMBOURINE, "shekere", "Shekere gourd shaker shake, single hit", 0.6),
    voice(gm::COWBELL, "cowbell", "Cowbell hit, metallic, single hit", 0.5),
    voice(gm::HI_BONGO, "talking_drum_high", "Talking drum high pitch hit, Nigerian, single hit", 0.7),
    voice(gm::LO_BONGO, "talking_drum_low", "Talking drum low pitch hit, Nigerian, single hit", 0.8),
    voice(gm::MUTE_CONGA, "mute_conga", "Muted conga drum hit, dry, single hit", 0.5),
    voice(gm::OPEN_CONGA, "open_conga", "Open conga drum hit, resonant, single hit", 0.8),
    voice(gm::LOW_CONGA, "low_conga", "Low conga drum hit, deep, single hit", 0.8),
    voice(gm::HI_TIMBALE, "sakara_high", "Sakara drum high tone, Yoruba clay frame drum, single hit", 0.6),
    voice(gm::LO_TIMBALE, "sakara_low", "Sakara drum low tone, Yoruba clay frame drum, single hit", 0.7),
    voice(gm::HI_AGOGO, "agogo_high", "Agogo bell high pitch, metallic, single hit", 0.5),
    voice(gm::LO_AGOGO, "agogo_low", "Agogo bell low pitch, metallic, single hit", 0.5),
    voice(gm::MARACAS, "shakers", "Egg shaker single shake, dry", 0.5),
    voice(gm::CLAVES, "claves", "Clave stick hit, wooden, dry, single hit", 0.5),
    voice(gm::HI_WOODBLOCK, "gankogui_high", "Gankogui double bell high pitch, metallic, single hit", 0.5),
    voice(gm::LO_WOODBLOCK, "gankogui_low", "Gankogui double bell low pitch, metallic, single hit", 0.5),
];

/// Finds a catalog voice by its manifest name.
pub fn voice_by_name(name: &str) -> Option<&'static PercussionVoice> {
    CATALOG.iter().find(|v| v.name == name)
}

/// Finds a catalog voice by percussion identifier.
pub fn voice_by_pitch(pitch: u8) -> Option<&'static PercussionVoice> {
    CATALOG.iter().find(|v| v.pitch == pitch)
}
