//! Scale name to semitone offset table.

use crate::error::DiceError;

/// Known scales and their ascending semitone offsets from the tonic.
const SCALES: &[(&str, &[u8])] = &[
    ("chromatic", &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]),
    ("major", &[0, 2, 4, 5, 7, 9, 11]),
    ("minor", &[0, 2, 3, 5, 7, 8, 10]),
    ("ionian", &[0, 2, 4, 5, 7, 9, 11]),
    ("dorian", &[0, 2, 3, 5, 7, 9, 10]),
    ("phrygian", &[0, 1, 3, 5, 7, 8, 10]),
    ("lydian", &[0, 2, 4, 6, 7, 9, 11]),
    ("mixolydian", &[0, 2, 4, 5, 7, 9, 10]),
    ("aeolian", &[0, 2, 3, 5, 7, 8, 10]),
    ("locrian", &[0, 1, 3, 5, 6, 8, 10]),
    ("harmonicminor", &[0, 2, 3, 5, 7, 8, 11]),
    ("melodicminor", &[0, 2, 3, 5, 7, 9, 11]),
    ("pentatonic", &[0, 2, 4, 7, 9]),
    ("minorpentatonic", &[0, 3, 5, 7, 10]),
    ("blues", &[0, 3, 5, 6, 7, 10]),
    ("wholetone", &[0, 2, 4, 6, 8, 10]),
];

/// Returns the semitone offsets (0-11, ascending, starting at 0) of a scale.
///
/// # Errors
/// [`DiceError::UnknownScale`] if the name is not in the table.
pub fn scale_semitone_offsets(name: &str) -> Result<&'static [u8], DiceError> {
    SCALES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, offsets)| *offsets)
        .ok_or_else(|| DiceError::UnknownScale {
            name: name.to_string(),
        })
}

/// Names of every scale in the table.
pub fn known_scales() -> impl Iterator<Item = &'static str> {
    SCALES.iter().map(|(name, _)| *name)
}
