//! Tonedice Core - Weighted Musical Dice
//!
//! This crate draws random musical material from pools that stay consistent
//! with one tonal and rhythmic context: notes and intervals of a scale, chord
//! triads and their qualities, modes and their scale degrees, neo-Riemannian
//! moves, and rhythmic phrases that fill a fixed beat budget exactly.
//!
//! # Determinism
//!
//! No roll touches a global random source. Every roll takes a caller-supplied
//! `rand::Rng`; [`rng::create_rng`] and [`rng::rng_for`] build seeded PCG32
//! generators so that the same seed and configuration give the same rolls.
//!
//! # Example
//!
//! ```
//! use tonedice_core::{rng::create_rng, DiceConfig, DiceFactory, Roll, RollCategory};
//!
//! let config = DiceConfig::builder()
//!     .tonic("A")
//!     .scale_name("minor")
//!     .build()
//!     .unwrap();
//! let factory = DiceFactory::new(&config);
//! let mut rng = create_rng(42);
//!
//! let note = factory.dice(&RollCategory::Note).roll(&mut rng).unwrap();
//! assert!(config.notes().unwrap().iter().any(|n| Roll::Text(n.clone()) == note));
//!
//! let phrase = factory
//!     .dice(&RollCategory::RhythmicPhraseConstrained)
//!     .roll(&mut rng)
//!     .unwrap();
//! assert!((3..=5).contains(&phrase.as_phrase().unwrap().len()));
//! ```
//!
//! # Module Structure
//!
//! - [`config`]: Seed parameters, pools, and lazily derived state
//! - [`factory`]: Dice for every roll category and composite rolls
//! - [`category`]: Roll category names
//! - [`pool`]: Weighted sampling
//! - [`partition`]: Rhythmic phrases as partitions of a beat budget
//! - [`scale`]: Note and interval pools of a scale
//! - [`theory`]: Scale, spelling, duration, and roman numeral tables
//! - [`rng`]: Seeded randomness

pub mod category;
pub mod config;
pub mod error;
pub mod factory;
pub mod partition;
pub mod pool;
pub mod rng;
pub mod roll;
pub mod scale;
pub mod theory;

// Re-export main types
pub use category::RollCategory;
pub use config::{
    DiceConfig, DiceConfigBuilder, DiceConfiguration, DurationPool, DurationPreset,
    RemoveChordPolicy,
};
pub use error::DiceError;
pub use factory::{Dice, DiceFactory, CUSTOM_TRIAD};
pub use partition::DurationPartitioner;
pub use pool::WeightedPool;
pub use roll::{ChordQualityRoll, Roll, ScaleDegree};
pub use scale::{derive_intervals, derive_notes};
pub use theory::TriadQuality;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
