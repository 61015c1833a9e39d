//! Dice factory: builds drawable dice for every roll category.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::category::RollCategory;
use crate::config::DiceConfiguration;
use crate::error::DiceError;
use crate::partition::DurationPartitioner;
use crate::pool::WeightedPool;
use crate::roll::{ChordQualityRoll, Roll, ScaleDegree};
use crate::scale::{derive_intervals, derive_notes};
use crate::theory::resolve_scale_degree;

/// Triad name whose "quality" is a pair of extra notes rather than a modifier.
pub const CUSTOM_TRIAD: &str = "custom";

/// Where a die draws its values from.
#[derive(Debug)]
enum Source<'a> {
    Pool(Result<WeightedPool<Roll>, DiceError>),
    Range(Result<RangeInclusive<i64>, DiceError>),
    Phrase(Result<&'a DurationPartitioner, DiceError>),
    ConstrainedPhrase(Result<&'a DurationPartitioner, DiceError>, &'a [usize]),
}

/// A drawable handle for one roll category.
///
/// Problems with the underlying pool are reported by [`Dice::roll`], not when
/// the die is created.
#[derive(Debug)]
pub struct Dice<'a> {
    category: RollCategory,
    source: Source<'a>,
}

impl<'a> Dice<'a> {
    pub fn category(&self) -> &RollCategory {
        &self.category
    }

    /// Draws one value.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Roll, DiceError> {
        match &self.source {
            Source::Pool(pool) => {
                let pool = pool.as_ref().map_err(Clone::clone)?;
                Ok(pool.draw_one(rng).clone())
            }
            Source::Range(range) => {
                let range = range.as_ref().map_err(Clone::clone)?;
                Ok(Roll::Number(rng.gen_range(range.clone())))
            }
            Source::Phrase(partitioner) => {
                let partitioner = *partitioner.as_ref().map_err(Clone::clone)?;
                partitioner.motif(rng).map(Roll::Phrase)
            }
            Source::ConstrainedPhrase(partitioner, lengths) => {
                let partitioner = *partitioner.as_ref().map_err(Clone::clone)?;
                partitioner
                    .constrained_motif(lengths, rng)
                    .map(Roll::Phrase)
            }
        }
    }

    /// Draws `count` values.
    pub fn roll_many<R: Rng + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Roll>, DiceError> {
        (0..count).map(|_| self.roll(rng)).collect()
    }
}

fn texts(items: &[String]) -> Result<WeightedPool<Roll>, DiceError> {
    WeightedPool::uniform(items.iter().cloned().map(Roll::Text).collect())
}

fn numbers(items: &[i64]) -> Result<WeightedPool<Roll>, DiceError> {
    WeightedPool::uniform(items.iter().copied().map(Roll::Number).collect())
}

/// Builds dice bound to a configuration.
///
/// Pools are rebuilt on every call so each die reflects the configuration as
/// it is; only the configuration's own derived pools are cached.
#[derive(Debug, Clone, Copy)]
pub struct DiceFactory<'a> {
    config: &'a DiceConfiguration,
}

impl<'a> DiceFactory<'a> {
    pub fn new(config: &'a DiceConfiguration) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &'a DiceConfiguration {
        self.config
    }

    /// Every category this configuration can roll, including one chord
    /// quality category per configured triad and one degree category per
    /// masked mode.
    pub fn categories(&self) -> Vec<RollCategory> {
        let mut categories = RollCategory::standard();
        categories.extend(
            self.config
                .chord_quality_triads()
                .map(|t| RollCategory::ChordQuality(t.to_string())),
        );
        categories.extend(
            self.config
                .masked_modes()
                .map(|m| RollCategory::ModeDegree(m.to_string())),
        );
        categories
    }

    /// Returns a die for `category`.
    pub fn dice(&self, category: &RollCategory) -> Dice<'a> {
        let config = self.config;
        let source = match category {
            RollCategory::Note => Source::Pool(config.notes().and_then(texts)),
            RollCategory::Interval => Source::Pool(config.intervals().and_then(numbers)),
            RollCategory::Octave => Source::Pool(numbers(config.octave_range())),
            RollCategory::NoteChromatic | RollCategory::NoteMajor | RollCategory::NoteMinor => {
                let scale = category.forced_scale().unwrap_or("chromatic");
                Source::Pool(
                    derive_notes(config.tonic(), scale, config.use_flats())
                        .and_then(|notes| texts(&notes)),
                )
            }
            RollCategory::IntervalChromatic
            | RollCategory::IntervalMajor
            | RollCategory::IntervalMinor => {
                let scale = category.forced_scale().unwrap_or("chromatic");
                Source::Pool(derive_intervals(scale).and_then(|steps| numbers(&steps)))
            }
            RollCategory::ChordTriad => Source::Pool(WeightedPool::new(
                config
                    .chord_triad_names()
                    .iter()
                    .cloned()
                    .map(Roll::Text)
                    .collect(),
                config.chord_triad_weights().to_vec(),
            )),
            RollCategory::ChordQuality(triad) => Source::Pool(
                config
                    .chord_qualities(triad)
                    .ok_or_else(|| DiceError::UnknownTriad {
                        name: triad.clone(),
                    })
                    .and_then(texts),
            ),
            RollCategory::Mode => Source::Pool(texts(config.mode_names())),
            RollCategory::ModeDegree(mode) => Source::Pool(
                config
                    .mode_degree_mask(mode)
                    .ok_or_else(|| DiceError::UnknownMode { name: mode.clone() })
                    .and_then(texts),
            ),
            RollCategory::Tonnetz3 => Source::Pool(texts(config.tonnetz3())),
            RollCategory::Tonnetz4 => Source::Pool(texts(config.tonnetz4())),
            RollCategory::RhythmicValue => Source::Pool(texts(config.durations())),
            RollCategory::RhythmicPhrase => Source::Phrase(config.partitioner()),
            RollCategory::RhythmicPhraseConstrained => Source::ConstrainedPhrase(
                config.partitioner(),
                config.phrase_length_constraints(),
            ),
            RollCategory::ChordVoicesNum => Source::Pool(numbers(config.chord_voice_counts())),
            RollCategory::RemoveChordNum => Source::Range(
                config
                    .remove_chord_policy()
                    .range(config.chord_voice_counts()),
            ),
        };
        Dice {
            category: category.clone(),
            source,
        }
    }

    /// Draws from `pool` until the value is not in `excludes`.
    ///
    /// # Errors
    /// [`DiceError::InvalidPool`] straight away if every pool item is
    /// excluded; [`DiceError::RetryExhausted`] if the retry bound is hit.
    pub fn unique_item<T, R>(
        &self,
        excludes: &[T],
        pool: &[T],
        rng: &mut R,
    ) -> Result<T, DiceError>
    where
        T: Clone + PartialEq,
        R: Rng + ?Sized,
    {
        if pool.iter().all(|item| excludes.contains(item)) {
            return Err(DiceError::invalid_pool(
                "every item in the pool is excluded",
            ));
        }
        let pool = WeightedPool::uniform(pool.to_vec())?;
        for _ in 0..self.config.max_retries() {
            let item = pool.draw_one(rng);
            if !excludes.contains(item) {
                return Ok(item.clone());
            }
        }
        Err(DiceError::RetryExhausted {
            operation: "unique_item",
            attempts: self.config.max_retries(),
        })
    }

    /// [`DiceFactory::unique_item`] over the configured notes.
    pub fn unique_note<R: Rng + ?Sized>(
        &self,
        excludes: &[String],
        rng: &mut R,
    ) -> Result<String, DiceError> {
        self.unique_item(excludes, self.config.notes()?, rng)
    }

    /// Rolls a quality for `triad` built on `note`.
    ///
    /// For the custom triad two further notes are drawn instead: the first
    /// differs from `note`, the second from both.
    pub fn chord_quality_for_triad<R: Rng + ?Sized>(
        &self,
        note: &str,
        triad: &str,
        rng: &mut R,
    ) -> Result<ChordQualityRoll, DiceError> {
        if triad == CUSTOM_TRIAD {
            let mut excludes = vec![note.to_string()];
            let first = self.unique_note(&excludes, rng)?;
            excludes.push(first.clone());
            let second = self.unique_note(&excludes, rng)?;
            return Ok(ChordQualityRoll::Custom { first, second });
        }
        let qualities = self
            .config
            .chord_qualities(triad)
            .ok_or_else(|| DiceError::UnknownTriad {
                name: triad.to_string(),
            })?;
        let pool = WeightedPool::uniform(qualities.to_vec())?;
        Ok(ChordQualityRoll::Quality(pool.draw_one(rng).clone()))
    }

    /// Rolls a roman numeral from the mode's mask and resolves it to a scale
    /// degree and triad quality.
    pub fn mode_degree_triad<R: Rng + ?Sized>(
        &self,
        mode: &str,
        rng: &mut R,
    ) -> Result<ScaleDegree, DiceError> {
        let mask = self
            .config
            .mode_degree_mask(mode)
            .ok_or_else(|| DiceError::UnknownMode {
                name: mode.to_string(),
            })?;
        let pool = WeightedPool::uniform(mask.to_vec())?;
        let symbol = pool.draw_one(rng).clone();
        let (degree, quality) = resolve_scale_degree(&symbol, mode)?;
        Ok(ScaleDegree {
            symbol,
            degree,
            quality,
        })
    }
}
