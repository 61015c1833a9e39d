//! Rhythmic phrase generation by partitioning a beat budget.

use rand::Rng;

use crate::error::DiceError;
use crate::pool::WeightedPool;
use crate::theory::{duration_ticks, TICKS_PER_BEAT};

/// Builds random rhythmic phrases whose durations sum exactly to a budget.
///
/// Symbols are drawn uniformly and appended while they fit in the remaining
/// budget; a symbol that would overshoot is rejected and redrawn. When the
/// remainder is shorter than every symbol the phrase is started over.
/// Rejections and restarts are counted against `max_retries` so infeasible
/// pools end in [`DiceError::RetryExhausted`] instead of spinning forever.
#[derive(Debug, Clone)]
pub struct DurationPartitioner {
    budget_ticks: u32,
    shortest_ticks: u32,
    pool: WeightedPool<(String, u32)>,
    max_retries: usize,
}

impl DurationPartitioner {
    /// Creates a partitioner for `beats` quarter-note beats over `symbols`.
    ///
    /// # Errors
    /// [`DiceError::UnknownDuration`] for a symbol missing from the duration
    /// table, [`DiceError::InvalidPool`] for an empty pool or a budget that is
    /// zero or does not fit in ticks.
    pub fn new(beats: u32, symbols: &[String], max_retries: usize) -> Result<Self, DiceError> {
        if beats == 0 {
            return Err(DiceError::invalid_pool("beat budget must be positive"));
        }
        let budget_ticks = beats.checked_mul(TICKS_PER_BEAT).ok_or_else(|| {
            DiceError::invalid_pool(format!("beat budget {} is too large", beats))
        })?;
        let entries = symbols
            .iter()
            .map(|s| duration_ticks(s).map(|ticks| (s.clone(), ticks)))
            .collect::<Result<Vec<_>, _>>()?;
        let shortest_ticks = entries.iter().map(|(_, t)| *t).min().unwrap_or(0);
        Ok(Self {
            budget_ticks,
            shortest_ticks,
            pool: WeightedPool::uniform(entries)?,
            max_retries,
        })
    }

    /// The beat budget every phrase fills.
    pub fn beats(&self) -> u32 {
        self.budget_ticks / TICKS_PER_BEAT
    }

    /// Duration symbols this partitioner draws from.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.pool.values().iter().map(|(s, _)| s.as_str())
    }

    /// One phrase whose durations sum exactly to the budget.
    pub fn motif<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<String>, DiceError> {
        let mut remaining = self.budget_ticks;
        let mut phrase = Vec::new();
        let mut attempts = 0usize;

        while remaining > 0 {
            if remaining >= self.shortest_ticks {
                let (symbol, ticks) = self.pool.draw_one(rng);
                if *ticks <= remaining {
                    phrase.push(symbol.clone());
                    remaining -= ticks;
                    continue;
                }
            } else {
                // Nothing fits what is left.
                phrase.clear();
                remaining = self.budget_ticks;
            }
            attempts += 1;
            if attempts >= self.max_retries {
                return Err(DiceError::RetryExhausted {
                    operation: "motif",
                    attempts,
                });
            }
        }

        Ok(phrase)
    }

    /// One phrase whose element count is in `allowed_lengths`.
    ///
    /// Whole phrases are redrawn until one has an allowed length.
    pub fn constrained_motif<R: Rng + ?Sized>(
        &self,
        allowed_lengths: &[usize],
        rng: &mut R,
    ) -> Result<Vec<String>, DiceError> {
        if allowed_lengths.is_empty() {
            return Err(DiceError::invalid_pool("no allowed phrase lengths"));
        }
        for _ in 0..self.max_retries {
            let phrase = self.motif(rng)?;
            if allowed_lengths.contains(&phrase.len()) {
                return Ok(phrase);
            }
        }
        Err(DiceError::RetryExhausted {
            operation: "constrained_motif",
            attempts: self.max_retries,
        })
    }
}
