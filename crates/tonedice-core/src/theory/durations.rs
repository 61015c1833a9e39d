//! Duration symbol table.
//!
//! Lengths are kept as integer ticks so that partitions of a beat budget sum
//! exactly. One quarter-note beat is [`TICKS_PER_BEAT`] ticks, which divides
//! evenly for dotted values down to the dotted sixteenth and for triplets down
//! to the triplet eighth.

use crate::error::DiceError;

/// Ticks in one quarter-note beat.
pub const TICKS_PER_BEAT: u32 = 96;

const DURATIONS: &[(&str, u32)] = &[
    ("wn", 384),
    ("hn", 192),
    ("qn", 96),
    ("en", 48),
    ("sn", 24),
    ("tn", 12),
    ("dwn", 576),
    ("dhn", 288),
    ("dqn", 144),
    ("den", 72),
    ("dsn", 36),
    ("thn", 128),
    ("tqn", 64),
    ("ten", 32),
];

/// Durations used when no pool is configured.
pub const DEFAULT_DURATIONS: &[&str] = &["wn", "hn", "qn", "en", "dhn", "dqn"];

/// Length of a duration symbol in ticks.
///
/// # Errors
/// [`DiceError::UnknownDuration`] if the symbol is not in the table.
pub fn duration_ticks(symbol: &str) -> Result<u32, DiceError> {
    DURATIONS
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, ticks)| *ticks)
        .ok_or_else(|| DiceError::UnknownDuration {
            symbol: symbol.to_string(),
        })
}

/// Length of a duration symbol in quarter-note beats.
pub fn duration_beats(symbol: &str) -> Result<f64, DiceError> {
    Ok(duration_ticks(symbol)? as f64 / TICKS_PER_BEAT as f64)
}

/// Every known duration symbol: plain, then dotted, then triplet values.
pub fn all_durations() -> Vec<&'static str> {
    DURATIONS.iter().map(|(s, _)| *s).collect()
}
