//! Music theory tables consumed by the dice: scales, pitch spelling,
//! durations, and roman numeral degrees.

mod durations;
mod roman;
mod scales;
mod spelling;

pub use durations::{
    all_durations, duration_beats, duration_ticks, DEFAULT_DURATIONS, TICKS_PER_BEAT,
};
pub use roman::{resolve_scale_degree, TriadQuality};
pub use scales::{known_scales, scale_semitone_offsets};
pub use spelling::{pitch_class_name, scale_spelled_notes, Tonic};

/// The seven diatonic modes, in order of their starting degree.
pub const MODES: [&str; 7] = [
    "ionian",
    "dorian",
    "phrygian",
    "lydian",
    "mixolydian",
    "aeolian",
    "locrian",
];
