//! Values produced by rolling dice.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::theory::TriadQuality;

/// One rolled value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Roll {
    /// Pitch names, chord qualities, mode names, roman numerals, symbols.
    Text(String),
    /// Intervals, octaves, voice counts.
    Number(i64),
    /// A rhythmic phrase of duration symbols.
    Phrase(Vec<String>),
}

impl Roll {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Roll::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            Roll::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_phrase(&self) -> Option<&[String]> {
        match self {
            Roll::Phrase(p) => Some(p),
            _ => None,
        }
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Roll::Text(s) => f.write_str(s),
            Roll::Number(n) => write!(f, "{}", n),
            Roll::Phrase(p) => f.write_str(&p.join(" ")),
        }
    }
}

/// Result of rolling a chord quality for a triad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordQualityRoll {
    /// A quality modifier from the triad's pool.
    Quality(String),
    /// Two further notes, distinct from the root and from each other, standing
    /// in for the upper voices of a custom triad.
    Custom { first: String, second: String },
}

/// A scale degree with the quality of the triad built on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleDegree {
    /// The roman numeral that was rolled.
    pub symbol: String,
    /// Degree number, 1-7.
    pub degree: u8,
    pub quality: TriadQuality,
}
