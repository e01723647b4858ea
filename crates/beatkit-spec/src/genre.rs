//! Genre enumeration and per-genre presets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// Musical genres understood by the pattern library.
///
/// The wire name (used in JSON and on the command line) is the kebab-case
/// form returned by [`Genre::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Genre {
    HipHop,
    Trap,
    #[serde(rename = "lo-fi")]
    Lofi,
    Edm,
    House,
    Drill,
    #[serde(rename = "r&b")]
    Rnb,
    Jazz,
    Ambient,
    Afrobeats,
    Amapiano,
    AfroFusion,
    Highlife,
    Juju,
    Fuji,
    AfrobeatClassic,
    Soukous,
    Makossa,
    AfroHouse,
    Gqom,
    Kuduro,
    Mbalax,
    Kwaito,
    Ndombolo,
}

impl Genre {
    /// Every genre, in presentation order.
    pub const ALL: [Genre; 24] = [
        Genre::HipHop,
        Genre::Trap,
        Genre::Lofi,
        Genre::Edm,
        Genre::House,
        Genre::Drill,
        Genre::Rnb,
        Genre::Jazz,
        Genre::Ambient,
        Genre::Afrobeats,
        Genre::Amapiano,
        Genre::AfroFusion,
        Genre::Highlife,
        Genre::Juju,
        Genre::Fuji,
        Genre::AfrobeatClassic,
        Genre::Soukous,
        Genre::Makossa,
        Genre::AfroHouse,
        Genre::Gqom,
        Genre::Kuduro,
        Genre::Mbalax,
        Genre::Kwaito,
        Genre::Ndombolo,
    ];

    /// Returns the wire name of the genre.
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::HipHop => "hip-hop",
            Genre::Trap => "trap",
            Genre::Lofi => "lo-fi",
            Genre::Edm => "edm",
            Genre::House => "house",
            Genre::Drill => "drill",
            Genre::Rnb => "r&b",
            Genre::Jazz => "jazz",
            Genre::Ambient => "ambient",
            Genre::Afrobeats => "afrobeats",
            Genre::Amapiano => "amapiano",
            Genre::AfroFusion => "afro-fusion",
            Genre::Highlife => "highlife",
            Genre::Juju => "juju",
            Genre::Fuji => "fuji",
            Genre::AfrobeatClassic => "afrobeat-classic",
            Genre::Soukous => "soukous",
            Genre::Makossa => "makossa",
            Genre::AfroHouse => "afro-house",
            Genre::Gqom => "gqom",
            Genre::Kuduro => "kuduro",
            Genre::Mbalax => "mbalax",
            Genre::Kwaito => "kwaito",
            Genre::Ndombolo => "ndombolo",
        }
    }

    /// Display label: hyphens become spaces and each word is capitalized.
    /// Acronyms keep their usual spelling.
    pub fn label(&self) -> String {
        match self {
            Genre::Rnb => "R&B".to_string(),
            Genre::Edm => "EDM".to_string(),
            _ => self
                .as_str()
                .split('-')
                .map(|word| {
                    let mut chars = word.chars();
                    match chars.next() {
                        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                        None => String::new(),
                    }
                })
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    /// Typical tempo for the genre.
    pub fn default_bpm(&self) -> u32 {
        match self {
            Genre::HipHop => 90,
            Genre::Trap => 140,
            Genre::Lofi => 80,
            Genre::Edm => 128,
            Genre::House => 124,
            Genre::Drill => 145,
            Genre::Rnb => 95,
            Genre::Jazz => 110,
            Genre::Ambient => 70,
            Genre::Afrobeats => 106,
            Genre::Amapiano => 112,
            Genre::AfroFusion => 102,
            Genre::Highlife => 115,
            Genre::Juju => 108,
            Genre::Fuji => 118,
            Genre::AfrobeatClassic => 120,
            Genre::Soukous => 135,
            Genre::Makossa => 122,
            Genre::AfroHouse => 122,
            Genre::Gqom => 152,
            Genre::Kuduro => 136,
            Genre::Mbalax => 116,
            Genre::Kwaito => 108,
            Genre::Ndombolo => 130,
        }
    }

    /// Whether the groove is written on a 12-pulse (6/8 feel) grid.
    pub fn is_triplet_feel(&self) -> bool {
        matches!(self, Genre::Highlife | Genre::Mbalax)
    }

    /// Short textual description of the style.
    pub fn description(&self) -> &'static str {
        match self {
            Genre::HipHop => "hip hop boom bap style beat with punchy drums",
            Genre::Trap => "trap beat with 808 bass, hi-hat rolls, and hard-hitting snares",
            Genre::Lofi => "lo-fi chill hip hop beat with vinyl crackle and jazzy samples",
            Genre::Edm => "electronic dance music beat with synthesizers and build-ups",
            Genre::House => "house music beat with four-on-the-floor kick and groovy bassline",
            Genre::Drill => "UK drill beat with sliding 808 bass and rapid hi-hats",
            Genre::Rnb => "smooth R&B beat with lush pads and soulful melodies",
            Genre::Jazz => "jazz-influenced beat with complex rhythms and melodic improvisation",
            Genre::Ambient => "ambient atmospheric beat with evolving textures and soft pads",
            Genre::Afrobeats => {
                "Nigerian Afrobeats groove with syncopated Afro swing drums, shakers, congas and talking drum accents"
            }
            Genre::Amapiano => {
                "Amapiano groove with deep log drum bounce, syncopated percussion and hypnotic shakers"
            }
            Genre::AfroFusion => {
                "Afro-fusion groove blending Afrobeat drums with modern production and wide stereo percussion"
            }
            Genre::Highlife => {
                "Ghanaian Highlife groove with a steady 6/8 bell pattern and danceable West African swing"
            }
            Genre::Juju => {
                "Nigerian Juju groove with layered talking drum patterns, agogo bells and shekere"
            }
            Genre::Fuji => {
                "Nigerian Fuji percussion ensemble with sakara drums, dundun bass rhythm and shekere polyrhythm"
            }
            Genre::AfrobeatClassic => {
                "Classic Afrobeat in the style of Tony Allen with a broken kick pattern, relentless ride and clave"
            }
            Genre::Soukous => {
                "Congolese Soukous groove with a driving snare, rumba congas and cowbell"
            }
            Genre::Makossa => {
                "Cameroonian Makossa groove with a punchy kick interlock, offbeat hats and cowbell accents"
            }
            Genre::AfroHouse => {
                "Afro-House groove with four-on-the-floor kick, djembe accents, conga upbeats and sixteenth shakers"
            }
            Genre::Gqom => {
                "South African Gqom with a heavy kick on the one and a raw, sparse broken beat"
            }
            Genre::Kuduro => {
                "Angolan Kuduro with a hard kick on every beat, rapid hats and tribal cowbell accents"
            }
            Genre::Mbalax => {
                "Senegalese Mbalax with driving sabar lead patterns, tama accents and a bell timeline"
            }
            Genre::Kwaito => {
                "South African Kwaito with a slow house tempo, sparse hits and wide rhythmic spacing"
            }
            Genre::Ndombolo => {
                "Congolese Ndombolo with snare flams, busy hi-hats and cowbell accents"
            }
        }
    }

    /// Instrument labels that usually make up the genre's arrangement.
    pub fn default_instruments(&self) -> &'static [&'static str] {
        match self {
            Genre::HipHop | Genre::Trap | Genre::Edm | Genre::Drill => {
                &["drums", "bass", "melody", "pad"]
            }
            Genre::Lofi => &["drums", "bass", "piano", "melody"],
            Genre::House => &["drums", "bass", "pad", "melody"],
            Genre::Rnb => &["drums", "bass", "pad", "melody", "rhodes"],
            Genre::Jazz => &["drums", "bass", "piano", "horns"],
            Genre::Ambient => &["pad", "melody", "drums", "flute"],
            Genre::Afrobeats => &["drums", "bass", "shakers", "congas", "talking drum", "guitar"],
            Genre::Amapiano => &["drums", "bass", "log drum", "piano", "pad", "shakers"],
            Genre::AfroFusion => &["drums", "bass", "guitar", "congas", "shakers", "pad", "melody"],
            Genre::Highlife => &[
                "drums",
                "bass",
                "guitar",
                "horns",
                "agogo bells",
                "congas",
                "shakers",
            ],
            Genre::Juju => &[
                "drums",
                "bass",
                "guitar",
                "talking drum",
                "agogo bells",
                "shakers",
                "pad",
            ],
            Genre::Fuji => &[
                "drums",
                "dundun",
                "talking drum",
                "sakara drum",
                "shekere",
                "congas",
            ],
            Genre::AfrobeatClassic => &[
                "drums", "bass", "guitar", "horns", "organ", "congas", "shekere", "gankogui",
            ],
            Genre::Soukous | Genre::Ndombolo => &[
                "drums", "bass", "guitar", "horns", "congas", "cowbell", "shakers",
            ],
            Genre::Makossa => &["drums", "bass", "guitar", "horns", "cowbell", "congas"],
            Genre::AfroHouse => &[
                "drums", "bass", "pad", "shakers", "congas", "djembe", "cowbell",
            ],
            Genre::Gqom => &["drums", "bass", "pad", "shakers"],
            Genre::Kuduro => &["drums", "bass", "pad", "cowbell", "shakers", "agogo bells"],
            Genre::Mbalax => &[
                "drums",
                "bass",
                "guitar",
                "talking drum",
                "djembe",
                "bougarabou",
                "balafon",
            ],
            Genre::Kwaito => &["drums", "bass", "pad", "shakers", "cowbell"],
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a wire name, ignoring case and surrounding whitespace.
///
/// There is no fallback genre: anything that is not one of the 24 wire names is
/// rejected with [`SpecError::UnknownGenre`] rather than silently rendered as
/// hip-hop.
impl FromStr for Genre {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Genre::ALL
            .iter()
            .copied()
            .find(|g| g.as_str() == needle)
            .ok_or_else(|| SpecError::UnknownGenre(s.to_string()))
    }
}
