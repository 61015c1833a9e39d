//! Roll categories: the names under which dice are requested.

use std::fmt;
use std::str::FromStr;

use crate::error::DiceError;

const CHORD_QUALITY_PREFIX: &str = "chord_quality_";
const DEGREE_SUFFIX: &str = "_degree";

/// One kind of roll a [`DiceFactory`](crate::DiceFactory) can produce.
///
/// Parameterised categories carry the key of the pool they roll from: the
/// triad category for chord qualities and the mode name for degree rolls.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RollCategory {
    Note,
    Interval,
    Octave,
    NoteChromatic,
    IntervalChromatic,
    NoteMajor,
    IntervalMajor,
    NoteMinor,
    IntervalMinor,
    ChordTriad,
    ChordQuality(String),
    Mode,
    ModeDegree(String),
    Tonnetz3,
    Tonnetz4,
    RhythmicValue,
    RhythmicPhrase,
    RhythmicPhraseConstrained,
    ChordVoicesNum,
    RemoveChordNum,
}

const STANDARD: [(RollCategory, &str); 18] = [
    (RollCategory::Note, "note"),
    (RollCategory::Interval, "interval"),
    (RollCategory::Octave, "octave"),
    (RollCategory::NoteChromatic, "note_chromatic"),
    (RollCategory::IntervalChromatic, "interval_chromatic"),
    (RollCategory::NoteMajor, "note_major"),
    (RollCategory::IntervalMajor, "interval_major"),
    (RollCategory::NoteMinor, "note_minor"),
    (RollCategory::IntervalMinor, "interval_minor"),
    (RollCategory::ChordTriad, "chord_triad"),
    (RollCategory::Mode, "mode"),
    (RollCategory::Tonnetz3, "tonnetz3"),
    (RollCategory::Tonnetz4, "tonnetz4"),
    (RollCategory::RhythmicValue, "rhythmic_value"),
    (RollCategory::RhythmicPhrase, "rhythmic_phrase"),
    (RollCategory::RhythmicPhraseConstrained, "rhythmic_phrase_constrained"),
    (RollCategory::ChordVoicesNum, "chord_voices_num"),
    (RollCategory::RemoveChordNum, "remove_chord_num"),
];

impl RollCategory {
    /// Every category that takes no parameter.
    pub fn standard() -> Vec<RollCategory> {
        STANDARD.iter().map(|(c, _)| c.clone()).collect()
    }

    /// Scale the category forces, for the fixed-scale note and interval rolls.
    pub fn forced_scale(&self) -> Option<&'static str> {
        match self {
            RollCategory::NoteChromatic | RollCategory::IntervalChromatic => Some("chromatic"),
            RollCategory::NoteMajor | RollCategory::IntervalMajor => Some("major"),
            RollCategory::NoteMinor | RollCategory::IntervalMinor => Some("minor"),
            _ => None,
        }
    }

    /// Category name, e.g. `note_chromatic`, `chord_quality_minor`, `dorian_degree`.
    pub fn name(&self) -> String {
        match self {
            RollCategory::ChordQuality(triad) => format!("{}{}", CHORD_QUALITY_PREFIX, triad),
            RollCategory::ModeDegree(mode) => format!("{}{}", mode, DEGREE_SUFFIX),
            other => STANDARD
                .iter()
                .find(|(c, _)| c == other)
                .map(|(_, name)| name.to_string())
                .unwrap_or_default(),
        }
    }
}

impl fmt::Display for RollCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for RollCategory {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((category, _)) = STANDARD.iter().find(|(_, name)| *name == s) {
            return Ok(category.clone());
        }
        if let Some(triad) = s.strip_prefix(CHORD_QUALITY_PREFIX) {
            if !triad.is_empty() {
                return Ok(RollCategory::ChordQuality(triad.to_string()));
            }
        }
        if let Some(mode) = s.strip_suffix(DEGREE_SUFFIX) {
            if !mode.is_empty() {
                return Ok(RollCategory::ModeDegree(mode.to_string()));
            }
        }
        Err(DiceError::UnknownCategory {
            name: s.to_string(),
        })
    }
}
