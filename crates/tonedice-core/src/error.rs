//! Error types for dice configuration and rolling.

use thiserror::Error;

/// Errors that can occur while configuring dice or rolling them.
///
/// Format problems in seed parameters are reported when a configuration is
/// built. Everything else is discovered lazily, the first time the affected
/// pool is derived or rolled.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DiceError {
    #[error("invalid {field} '{value}' (expected {expected})")]
    ConfigurationFormat {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error("unknown scale '{name}'")]
    UnknownScale { name: String },
    #[error("invalid tonic '{tonic}'")]
    InvalidTonic { tonic: String },
    #[error("invalid pool: {reason}")]
    InvalidPool { reason: String },
    #[error("{operation} gave up after {attempts} attempts")]
    RetryExhausted {
        operation: &'static str,
        attempts: usize,
    },
    #[error("unknown duration symbol '{symbol}'")]
    UnknownDuration { symbol: String },
    #[error("unknown mode '{name}'")]
    UnknownMode { name: String },
    #[error("unknown triad '{name}'")]
    UnknownTriad { name: String },
    #[error("invalid roman numeral '{token}'")]
    InvalidRomanNumeral { token: String },
    #[error("unknown roll category '{name}'")]
    UnknownCategory { name: String },
}

impl DiceError {
    /// Shorthand for an [`DiceError::InvalidPool`] with a formatted reason.
    pub(crate) fn invalid_pool(reason: impl Into<String>) -> Self {
        DiceError::InvalidPool {
            reason: reason.into(),
        }
    }

    /// Stable error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            DiceError::ConfigurationFormat { .. } => "DICE_001",
            DiceError::UnknownScale { .. } => "DICE_002",
            DiceError::InvalidTonic { .. } => "DICE_003",
            DiceError::InvalidPool { .. } => "DICE_004",
            DiceError::RetryExhausted { .. } => "DICE_005",
            DiceError::UnknownDuration { .. } => "DICE_006",
            DiceError::UnknownMode { .. } => "DICE_007",
            DiceError::UnknownTriad { .. } => "DICE_008",
            DiceError::InvalidRomanNumeral { .. } => "DICE_009",
            DiceError::UnknownCategory { .. } => "DICE_010",
        }
    }

    /// Error category for grouping related errors.
    pub fn category(&self) -> &'static str {
        match self {
            DiceError::ConfigurationFormat { .. } => "config",
            DiceError::UnknownScale { .. }
            | DiceError::InvalidTonic { .. }
            | DiceError::UnknownDuration { .. }
            | DiceError::UnknownMode { .. }
            | DiceError::InvalidRomanNumeral { .. } => "theory",
            DiceError::InvalidPool { .. }
            | DiceError::RetryExhausted { .. }
            | DiceError::UnknownTriad { .. }
            | DiceError::UnknownCategory { .. } => "roll",
        }
    }
}
