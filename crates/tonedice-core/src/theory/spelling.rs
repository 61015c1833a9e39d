//! Pitch name parsing and scale spelling.

use crate::error::DiceError;

use super::scales::scale_semitone_offsets;

const LETTERS: [char; 7] = ['C', 'D', 'E', 'F', 'G', 'A', 'B'];
const LETTER_PCS: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];

const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];
const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// A parsed tonic: letter index into C..B plus a semitone accidental.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tonic {
    letter: usize,
    accidental: i32,
}

impl Tonic {
    /// Parse a pitch name such as "C", "F#", "Bb" or "Ef" (`f` is a flat).
    ///
    /// # Errors
    /// [`DiceError::InvalidTonic`] if the name is not a letter A-G with at most
    /// one accidental.
    pub fn parse(name: &str) -> Result<Self, DiceError> {
        let invalid = || DiceError::InvalidTonic {
            tonic: name.to_string(),
        };
        let mut chars = name.trim().chars();
        let letter_char = chars.next().ok_or_else(invalid)?;
        let letter = LETTERS
            .iter()
            .position(|&l| l == letter_char)
            .ok_or_else(invalid)?;
        let accidental = match chars.next() {
            None => 0,
            Some('#') => 1,
            Some('b') | Some('f') => -1,
            Some(_) => return Err(invalid()),
        };
        if chars.next().is_some() {
            return Err(invalid());
        }
        Ok(Self { letter, accidental })
    }

    /// Pitch class 0-11.
    pub fn pitch_class(&self) -> u8 {
        (LETTER_PCS[self.letter] + self.accidental).rem_euclid(12) as u8
    }

    /// Canonical spelling, with flats written as `b`.
    pub fn name(&self) -> String {
        format!("{}{}", LETTERS[self.letter], accidental_suffix(self.accidental))
    }
}

fn accidental_suffix(accidental: i32) -> &'static str {
    match accidental {
        -2 => "bb",
        -1 => "b",
        1 => "#",
        2 => "##",
        _ => "",
    }
}

/// Spell pitch class `target` on the given letter, if it is within a double
/// accidental of the natural.
fn spell_on_letter(letter: usize, target: i32) -> Option<String> {
    let mut diff = (target - LETTER_PCS[letter]).rem_euclid(12);
    if diff > 6 {
        diff -= 12;
    }
    if diff.abs() > 2 {
        return None;
    }
    Some(format!("{}{}", LETTERS[letter], accidental_suffix(diff)))
}

/// Name of a pitch class in flat or sharp style.
pub fn pitch_class_name(pc: u8, use_flats: bool) -> &'static str {
    let idx = (pc % 12) as usize;
    if use_flats {
        FLAT_NAMES[idx]
    } else {
        SHARP_NAMES[idx]
    }
}

/// Spell the notes of a scale starting on `tonic`.
///
/// Seven-note scales get one letter per degree, so `C#` major spells
/// `E#` and `B#`. Other scales use the twelve-tone names in the style chosen
/// by `use_flats`, keeping the tonic as written.
///
/// # Errors
/// [`DiceError::InvalidTonic`] or [`DiceError::UnknownScale`].
pub fn scale_spelled_notes(
    tonic: &str,
    scale_name: &str,
    use_flats: bool,
) -> Result<Vec<String>, DiceError> {
    let tonic = Tonic::parse(tonic)?;
    let offsets = scale_semitone_offsets(scale_name)?;
    let root = tonic.pitch_class() as i32;

    if offsets.len() == LETTERS.len() {
        let lettered: Option<Vec<String>> = offsets
            .iter()
            .enumerate()
            .map(|(degree, &offset)| {
                spell_on_letter((tonic.letter + degree) % 7, root + offset as i32)
            })
            .collect();
        if let Some(notes) = lettered {
            return Ok(notes);
        }
    }

    let mut notes: Vec<String> = offsets
        .iter()
        .map(|&offset| pitch_class_name((root as u8 + offset) % 12, use_flats).to_string())
        .collect();
    notes[0] = tonic.name();
    Ok(notes)
}
