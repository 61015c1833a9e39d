//! Dice configuration: seed parameters, pools, and lazily derived state.
//!
//! [`DiceConfig`] is the plain, serializable parameter set. Building it into a
//! [`DiceConfiguration`] checks the format of the seed fields; the note and
//! interval pools and the rhythm partitioner are derived on first use and
//! cached for the configuration's lifetime.

mod defaults;


use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::DiceError;
use crate::partition::DurationPartitioner;
use crate::scale::{derive_intervals, derive_notes};
use crate::theory::{all_durations, DEFAULT_DURATIONS, MODES};

/// Regex pattern for a tonic: a letter with an optional `#`, `b` or `f` (flat).
const TONIC_PATTERN: &str = r"^[A-G][#bf]?$";

/// Regex pattern for a scale name: lowercase letters only.
const SCALE_NAME_PATTERN: &str = r"^[a-z]+$";

static TONIC_REGEX: OnceLock<Regex> = OnceLock::new();
static SCALE_NAME_REGEX: OnceLock<Regex> = OnceLock::new();

fn tonic_regex() -> &'static Regex {
    TONIC_REGEX.get_or_init(|| Regex::new(TONIC_PATTERN).expect("invalid regex pattern"))
}

fn scale_name_regex() -> &'static Regex {
    SCALE_NAME_REGEX.get_or_init(|| Regex::new(SCALE_NAME_PATTERN).expect("invalid regex pattern"))
}

/// Named sets of duration symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DurationPreset {
    /// Whole, half, quarter, eighth and the dotted half and quarter.
    #[default]
    Default,
    /// Every symbol in the duration table.
    All,
}

/// Duration symbols available to rhythm rolls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DurationPool {
    Preset(DurationPreset),
    Symbols(Vec<String>),
}

impl Default for DurationPool {
    fn default() -> Self {
        DurationPool::Preset(DurationPreset::Default)
    }
}

impl DurationPool {
    /// The symbols this pool stands for, in order.
    pub fn symbols(&self) -> Vec<String> {
        match self {
            DurationPool::Preset(DurationPreset::Default) => defaults::strings(DEFAULT_DURATIONS),
            DurationPool::Preset(DurationPreset::All) => defaults::strings(&all_durations()),
            DurationPool::Symbols(symbols) => symbols.clone(),
        }
    }
}

/// Range used by the `remove_chord_num` roll.
///
/// Both ranges have been used for this roll; neither is privileged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RemoveChordPolicy {
    /// `0 ..= chord_voice_counts[0] - 1`
    #[default]
    BelowSmallest,
    /// `1 ..= chord_voice_counts[last]`
    UpToLargest,
}

impl RemoveChordPolicy {
    /// Inclusive range of voice counts to remove, given the configured counts.
    ///
    /// # Errors
    /// [`DiceError::InvalidPool`] if `counts` is empty or the range is empty.
    pub fn range(&self, counts: &[i64]) -> Result<RangeInclusive<i64>, DiceError> {
        let range = match self {
            RemoveChordPolicy::BelowSmallest => {
                let first = counts
                    .first()
                    .ok_or_else(|| DiceError::invalid_pool("no chord voice counts"))?;
                let end = first.checked_sub(1).ok_or_else(|| {
                    DiceError::invalid_pool(format!("voice count {} out of range", first))
                })?;
                0..=end
            }
            RemoveChordPolicy::UpToLargest => {
                let last = counts
                    .last()
                    .ok_or_else(|| DiceError::invalid_pool("no chord voice counts"))?;
                1..=*last
            }
        };
        if range.is_empty() {
            return Err(DiceError::invalid_pool(format!(
                "empty voice removal range {}..={}",
                range.start(),
                range.end()
            )));
        }
        Ok(range)
    }
}

/// Seed parameters and pools for a dice session.
///
/// Every field has a default, so a JSON document only needs the fields it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiceConfig {
    /// Tonic pitch name, e.g. "C", "F#", "Bb".
    pub tonic: String,
    /// Scale or mode name, e.g. "major", "dorian".
    pub scale_name: String,
    /// Spell derived accidentals as flats rather than sharps.
    pub use_flats: bool,
    /// Length of one rhythmic phrase in quarter-note beats.
    pub beats_per_phrase: u32,
    pub duration_pool: DurationPool,
    pub octave_range: Vec<i64>,
    /// Explicit note pool; derived from tonic and scale when absent.
    ///
    /// Entries are opaque labels, so MIDI numbers such as "60" are fine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,
    /// Explicit interval pool; derived from the scale when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intervals: Option<Vec<i64>>,
    pub chord_triad_names: Vec<String>,
    pub chord_triad_weights: Vec<f64>,
    /// Quality modifiers per triad category.
    pub chord_qualities: BTreeMap<String, Vec<String>>,
    pub mode_names: Vec<String>,
    /// Roman numeral per scale degree for each mode.
    pub mode_degree_masks: BTreeMap<String, Vec<String>>,
    pub tonnetz3: Vec<String>,
    pub tonnetz4: Vec<String>,
    pub chord_voice_counts: Vec<i64>,
    pub phrase_length_constraints: Vec<usize>,
    pub remove_chord_policy: RemoveChordPolicy,
    /// Bound on every reject-and-retry loop.
    pub max_retries: usize,
}

impl Default for DiceConfig {
    fn default() -> Self {
        Self {
            tonic: defaults::TONIC.to_string(),
            scale_name: defaults::SCALE_NAME.to_string(),
            use_flats: true,
            beats_per_phrase: defaults::BEATS_PER_PHRASE,
            duration_pool: DurationPool::default(),
            octave_range: defaults::OCTAVES.to_vec(),
            notes: None,
            intervals: None,
            chord_triad_names: defaults::strings(&defaults::TRIAD_NAMES),
            chord_triad_weights: defaults::TRIAD_WEIGHTS.to_vec(),
            chord_qualities: defaults::chord_qualities(),
            mode_names: defaults::strings(&MODES),
            mode_degree_masks: defaults::mode_degree_masks(),
            tonnetz3: defaults::strings(&defaults::TONNETZ_TRIAD),
            tonnetz4: defaults::strings(&defaults::TONNETZ_SEVENTH),
            chord_voice_counts: defaults::CHORD_VOICE_COUNTS.to_vec(),
            phrase_length_constraints: defaults::PHRASE_LENGTHS.to_vec(),
            remove_chord_policy: RemoveChordPolicy::default(),
            max_retries: defaults::MAX_RETRIES,
        }
    }
}

impl DiceConfig {
    /// Creates a builder starting from the defaults.
    pub fn builder() -> DiceConfigBuilder {
        DiceConfigBuilder::new()
    }

    /// Parses a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the config to a pretty JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Checks field formats and builds the configuration.
    pub fn build(self) -> Result<DiceConfiguration, DiceError> {
        DiceConfiguration::new(self)
    }
}

/// Builder for [`DiceConfig`].
#[derive(Debug, Clone, Default)]
pub struct DiceConfigBuilder {
    config: DiceConfig,
}

impl DiceConfigBuilder {
    /// Creates a builder with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tonic(mut self, tonic: impl Into<String>) -> Self {
        self.config.tonic = tonic.into();
        self
    }

    pub fn scale_name(mut self, scale_name: impl Into<String>) -> Self {
        self.config.scale_name = scale_name.into();
        self
    }

    pub fn use_flats(mut self, use_flats: bool) -> Self {
        self.config.use_flats = use_flats;
        self
    }

    pub fn beats_per_phrase(mut self, beats: u32) -> Self {
        self.config.beats_per_phrase = beats;
        self
    }

    pub fn duration_pool(mut self, pool: DurationPool) -> Self {
        self.config.duration_pool = pool;
        self
    }

    /// Sets an explicit list of duration symbols.
    pub fn durations<S: Into<String>>(mut self, symbols: impl IntoIterator<Item = S>) -> Self {
        self.config.duration_pool =
            DurationPool::Symbols(symbols.into_iter().map(Into::into).collect());
        self
    }

    pub fn octave_range(mut self, octaves: Vec<i64>) -> Self {
        self.config.octave_range = octaves;
        self
    }

    /// Overrides the derived note pool.
    pub fn notes<S: Into<String>>(mut self, notes: impl IntoIterator<Item = S>) -> Self {
        self.config.notes = Some(notes.into_iter().map(Into::into).collect());
        self
    }

    /// Overrides the derived interval pool.
    pub fn intervals(mut self, intervals: Vec<i64>) -> Self {
        self.config.intervals = Some(intervals);
        self
    }

    /// Sets the triad names and their draw weights.
    pub fn chord_triads<S: Into<String>>(
        mut self,
        names: impl IntoIterator<Item = S>,
        weights: Vec<f64>,
    ) -> Self {
        self.config.chord_triad_names = names.into_iter().map(Into::into).collect();
        self.config.chord_triad_weights = weights;
        self
    }

    /// Replaces the quality pool of one triad category.
    pub fn chord_qualities<S: Into<String>>(
        mut self,
        triad: impl Into<String>,
        qualities: impl IntoIterator<Item = S>,
    ) -> Self {
        self.config.chord_qualities.insert(
            triad.into(),
            qualities.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Replaces the degree mask of one mode.
    pub fn mode_degree_mask<S: Into<String>>(
        mut self,
        mode: impl Into<String>,
        degrees: impl IntoIterator<Item = S>,
    ) -> Self {
        self.config
            .mode_degree_masks
            .insert(mode.into(), degrees.into_iter().map(Into::into).collect());
        self
    }

    pub fn chord_voice_counts(mut self, counts: Vec<i64>) -> Self {
        self.config.chord_voice_counts = counts;
        self
    }

    pub fn phrase_length_constraints(mut self, lengths: Vec<usize>) -> Self {
        self.config.phrase_length_constraints = lengths;
        self
    }

    pub fn remove_chord_policy(mut self, policy: RemoveChordPolicy) -> Self {
        self.config.remove_chord_policy = policy;
        self
    }

    pub fn max_retries(mut self, max_retries: usize) -> Self {
        self.config.max_retries = max_retries;
        self
    }

    /// Returns the config without validating it.
    pub fn config(self) -> DiceConfig {
        self.config
    }

    /// Validates and builds the configuration.
    pub fn build(self) -> Result<DiceConfiguration, DiceError> {
        DiceConfiguration::new(self.config)
    }
}

/// A validated, immutable dice configuration.
///
/// Derived pools are computed at most once. A failed derivation is cached as
/// its error and reported again on every later access.
#[derive(Debug)]
pub struct DiceConfiguration {
    config: DiceConfig,
    durations: Vec<String>,
    notes: OnceLock<Result<Vec<String>, DiceError>>,
    intervals: OnceLock<Result<Vec<i64>, DiceError>>,
    partitioner: OnceLock<Result<DurationPartitioner, DiceError>>,
}

impl Default for DiceConfiguration {
    fn default() -> Self {
        Self::assemble(DiceConfig::default())
    }
}

impl DiceConfiguration {
    /// Checks the format of the seed fields and builds the configuration.
    ///
    /// Only the shape of the tonic and scale name is checked here. Whether the
    /// scale exists is discovered when notes or intervals are first derived.
    ///
    /// # Errors
    /// [`DiceError::ConfigurationFormat`] for a malformed tonic or scale name,
    /// a zero beat budget, or a zero retry bound. [`DiceError::UnknownMode`]
    /// for a degree mask keyed by anything but one of the seven modes.
    pub fn new(mut config: DiceConfig) -> Result<Self, DiceError> {
        if !tonic_regex().is_match(&config.tonic) {
            return Err(DiceError::ConfigurationFormat {
                field: "tonic",
                value: config.tonic,
                expected: TONIC_PATTERN,
            });
        }
        if !scale_name_regex().is_match(&config.scale_name) {
            return Err(DiceError::ConfigurationFormat {
                field: "scale_name",
                value: config.scale_name,
                expected: SCALE_NAME_PATTERN,
            });
        }
        if config.beats_per_phrase == 0 {
            return Err(DiceError::ConfigurationFormat {
                field: "beats_per_phrase",
                value: "0".to_string(),
                expected: "a positive number of beats",
            });
        }
        if config.max_retries == 0 {
            return Err(DiceError::ConfigurationFormat {
                field: "max_retries",
                value: "0".to_string(),
                expected: "a positive retry bound",
            });
        }
        if let Some(mode) = config
            .mode_degree_masks
            .keys()
            .find(|mode| !MODES.contains(&mode.as_str()))
        {
            return Err(DiceError::UnknownMode { name: mode.clone() });
        }
        if let Some(stem) = config.tonic.strip_suffix('f') {
            config.tonic = format!("{}b", stem);
        }
        Ok(Self::assemble(config))
    }

    fn assemble(config: DiceConfig) -> Self {
        let durations = config.duration_pool.symbols();
        Self {
            config,
            durations,
            notes: OnceLock::new(),
            intervals: OnceLock::new(),
            partitioner: OnceLock::new(),
        }
    }

    /// The parameters this configuration was built from.
    pub fn params(&self) -> &DiceConfig {
        &self.config
    }

    pub fn tonic(&self) -> &str {
        &self.config.tonic
    }

    pub fn scale_name(&self) -> &str {
        &self.config.scale_name
    }

    pub fn use_flats(&self) -> bool {
        self.config.use_flats
    }

    pub fn beats_per_phrase(&self) -> u32 {
        self.config.beats_per_phrase
    }

    /// Resolved duration symbols.
    pub fn durations(&self) -> &[String] {
        &self.durations
    }

    pub fn octave_range(&self) -> &[i64] {
        &self.config.octave_range
    }

    /// The note pool: the explicit override, or the notes of the scale.
    pub fn notes(&self) -> Result<&[String], DiceError> {
        self.notes
            .get_or_init(|| match &self.config.notes {
                Some(notes) => Ok(notes.clone()),
                None => derive_notes(
                    &self.config.tonic,
                    &self.config.scale_name,
                    self.config.use_flats,
                ),
            })
            .as_deref()
            .map_err(Clone::clone)
    }

    /// The interval pool: the explicit override, or the steps of the scale.
    pub fn intervals(&self) -> Result<&[i64], DiceError> {
        self.intervals
            .get_or_init(|| match &self.config.intervals {
                Some(intervals) => Ok(intervals.clone()),
                None => derive_intervals(&self.config.scale_name),
            })
            .as_deref()
            .map_err(Clone::clone)
    }

    /// The rhythm partitioner over `beats_per_phrase` and the duration pool.
    pub fn partitioner(&self) -> Result<&DurationPartitioner, DiceError> {
        self.partitioner
            .get_or_init(|| {
                DurationPartitioner::new(
                    self.config.beats_per_phrase,
                    &self.durations,
                    self.config.max_retries,
                )
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    pub fn chord_triad_names(&self) -> &[String] {
        &self.config.chord_triad_names
    }

    pub fn chord_triad_weights(&self) -> &[f64] {
        &self.config.chord_triad_weights
    }

    /// Quality modifiers for a triad category, if configured.
    pub fn chord_qualities(&self, triad: &str) -> Option<&[String]> {
        self.config.chord_qualities.get(triad).map(Vec::as_slice)
    }

    /// Triad categories that have a quality pool.
    pub fn chord_quality_triads(&self) -> impl Iterator<Item = &str> {
        self.config.chord_qualities.keys().map(String::as_str)
    }

    pub fn mode_names(&self) -> &[String] {
        &self.config.mode_names
    }

    /// Roman numeral mask for a mode, if configured.
    pub fn mode_degree_mask(&self, mode: &str) -> Option<&[String]> {
        self.config.mode_degree_masks.get(mode).map(Vec::as_slice)
    }

    /// Modes that have a degree mask.
    pub fn masked_modes(&self) -> impl Iterator<Item = &str> {
        self.config.mode_degree_masks.keys().map(String::as_str)
    }

    pub fn tonnetz3(&self) -> &[String] {
        &self.config.tonnetz3
    }

    pub fn tonnetz4(&self) -> &[String] {
        &self.config.tonnetz4
    }

    pub fn chord_voice_counts(&self) -> &[i64] {
        &self.config.chord_voice_counts
    }

    pub fn phrase_length_constraints(&self) -> &[usize] {
        &self.config.phrase_length_constraints
    }

    pub fn remove_chord_policy(&self) -> RemoveChordPolicy {
        self.config.remove_chord_policy
    }

    pub fn max_retries(&self) -> usize {
        self.config.max_retries
    }
}
