//! Roman numeral to scale degree resolution.

use serde::{Deserialize, Serialize};

use crate::error::DiceError;

use super::MODES;

/// Quality of a triad built on a scale degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriadQuality {
    Major,
    Minor,
    Diminished,
    Augmented,
}

impl TriadQuality {
    /// Lowercase name, matching the triad names used in chord pools.
    pub fn name(&self) -> &'static str {
        match self {
            TriadQuality::Major => "major",
            TriadQuality::Minor => "minor",
            TriadQuality::Diminished => "diminished",
            TriadQuality::Augmented => "augmented",
        }
    }
}

impl std::fmt::Display for TriadQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

const NUMERALS: [&str; 7] = ["I", "II", "III", "IV", "V", "VI", "VII"];

/// Resolve a roman numeral token to `(degree, quality)` within a mode.
///
/// Uppercase numerals are major and lowercase minor; a trailing `o` (or `°`)
/// marks a diminished triad and a trailing `+` an augmented one. A leading
/// `b` or `#` is accepted and does not change the degree number.
///
/// # Errors
/// [`DiceError::UnknownMode`] if `mode_name` is not one of the seven modes,
/// [`DiceError::InvalidRomanNumeral`] if the token does not parse.
pub fn resolve_scale_degree(
    token: &str,
    mode_name: &str,
) -> Result<(u8, TriadQuality), DiceError> {
    if !MODES.contains(&mode_name) {
        return Err(DiceError::UnknownMode {
            name: mode_name.to_string(),
        });
    }
    let invalid = || DiceError::InvalidRomanNumeral {
        token: token.to_string(),
    };

    let mut rest = token.trim();
    rest = rest
        .strip_prefix('b')
        .or_else(|| rest.strip_prefix('#'))
        .unwrap_or(rest);

    let mut altered = None;
    if let Some(stripped) = rest.strip_suffix('o').or_else(|| rest.strip_suffix('°')) {
        altered = Some(TriadQuality::Diminished);
        rest = stripped;
    } else if let Some(stripped) = rest.strip_suffix('+') {
        altered = Some(TriadQuality::Augmented);
        rest = stripped;
    }

    let upper = rest.to_ascii_uppercase();
    let degree = NUMERALS
        .iter()
        .position(|n| *n == upper)
        .ok_or_else(invalid)?;

    let quality = if rest == upper {
        TriadQuality::Major
    } else if rest == rest.to_ascii_lowercase() {
        TriadQuality::Minor
    } else {
        return Err(invalid());
    };

    Ok((degree as u8 + 1, altered.unwrap_or(quality)))
}
