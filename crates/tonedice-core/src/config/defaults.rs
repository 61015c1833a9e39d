//! Default pools.

use std::collections::BTreeMap;

use crate::theory::MODES;

pub const TONIC: &str = "C";
pub const SCALE_NAME: &str = "chromatic";
pub const BEATS_PER_PHRASE: u32 = 4;
pub const MAX_RETRIES: usize = 100_000;

pub const OCTAVES: [i64; 5] = [2, 3, 4, 5, 6];
pub const CHORD_VOICE_COUNTS: [i64; 2] = [3, 4];
pub const PHRASE_LENGTHS: [usize; 3] = [3, 4, 5];

pub const TRIAD_NAMES: [&str; 5] = ["major", "minor", "diminished", "augmented", "custom"];
pub const TRIAD_WEIGHTS: [f64; 5] = [2.0, 2.0, 1.0, 1.0, 1.0];

const CHORD_QUALITIES: &[(&str, &[&str])] = &[
    ("major", &["M", "6", "add9", "sus2", "sus4", "6/9"]),
    ("minor", &["m", "m6", "madd9", "m6/9"]),
    ("diminished", &["dim", "dim(add9)"]),
    ("augmented", &["aug", "aug(add9)"]),
    ("major7", &["M7", "7", "M9", "9", "M13", "13", "7sus4"]),
    ("minor7", &["m7", "m9", "m11", "m13", "mM7"]),
    ("diminished7", &["dim7", "m7b5", "m9b5"]),
    ("augmented7", &["aug7", "augM7", "7#9"]),
];

/// Triad quality per scale degree for each mode, as roman numerals.
const MODE_DEGREES: [[&str; 7]; 7] = [
    ["I", "ii", "iii", "IV", "V", "vi", "viio"],
    ["i", "ii", "III", "IV", "v", "vio", "VII"],
    ["i", "II", "III", "iv", "vo", "VI", "vii"],
    ["I", "II", "iii", "ivo", "V", "vi", "vii"],
    ["I", "ii", "iiio", "IV", "v", "vi", "VII"],
    ["i", "iio", "III", "iv", "v", "VI", "VII"],
    ["io", "II", "iii", "iv", "V", "VI", "vii"],
];

/// Neo-Riemannian moves between triads.
pub const TONNETZ_TRIAD: [&str; 6] = ["P", "R", "L", "N", "S", "H"];

/// Seventh-chord moves (Childs' S and C families).
pub const TONNETZ_SEVENTH: [&str; 10] = [
    "S23", "S32", "S34", "S43", "S56", "S65", "C32", "C34", "C43", "C65",
];

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn chord_qualities() -> BTreeMap<String, Vec<String>> {
    CHORD_QUALITIES
        .iter()
        .map(|(triad, qualities)| (triad.to_string(), strings(qualities)))
        .collect()
}

pub fn mode_degree_masks() -> BTreeMap<String, Vec<String>> {
    MODES
        .iter()
        .zip(MODE_DEGREES.iter())
        .map(|(mode, degrees)| (mode.to_string(), strings(degrees)))
        .collect()
}
