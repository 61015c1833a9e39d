//! Scale derivation: the note and interval pools implied by a tonic and scale.

use crate::error::DiceError;
use crate::theory::{scale_semitone_offsets, scale_spelled_notes};

/// Ordered pitch names of `scale_name` starting on `tonic`.
///
/// # Errors
/// [`DiceError::InvalidTonic`] or [`DiceError::UnknownScale`] from the theory
/// tables.
pub fn derive_notes(
    tonic: &str,
    scale_name: &str,
    use_flats: bool,
) -> Result<Vec<String>, DiceError> {
    scale_spelled_notes(tonic, scale_name, use_flats)
}

/// Semitone steps between consecutive degrees of `scale_name`.
///
/// The last step wraps back to the octave, so the steps always sum to 12 and
/// there are exactly as many steps as degrees.
///
/// # Errors
/// [`DiceError::UnknownScale`] if the scale is not in the table.
pub fn derive_intervals(scale_name: &str) -> Result<Vec<i64>, DiceError> {
    let offsets = scale_semitone_offsets(scale_name)?;
    let mut intervals: Vec<i64> = offsets
        .windows(2)
        .map(|w| w[1] as i64 - w[0] as i64)
        .collect();
    let last = offsets.last().copied().unwrap_or(0);
    intervals.push(12 - last as i64);
    Ok(intervals)
}
