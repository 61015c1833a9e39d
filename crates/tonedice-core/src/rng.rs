//! Deterministic RNG using PCG32 with BLAKE3 seed derivation.
//!
//! Every roll takes its randomness as an injected `&mut impl Rng`. This module
//! provides the seeded generators callers use when rolls must be reproducible,
//! and per-category stream derivation so that rolling one category never
//! shifts the sequence of another.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Generator type used for seeded rolls.
pub type DiceRng = Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> DiceRng {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives a seed for a roll category from the base seed using a string key.
///
/// Uses BLAKE3 to hash the base seed concatenated with the key, producing an
/// independent seed for each category.
///
/// # Arguments
/// * `base_seed` - The session seed
/// * `key` - Category name (e.g., "note", "rhythmic_phrase")
pub fn derive_category_seed(base_seed: u32, key: &str) -> u32 {
    let mut input = Vec::with_capacity(4 + 1 + key.len());
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.push(0);
    input.extend_from_slice(key.as_bytes());

    let hash = blake3::hash(&input);
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&hash.as_bytes()[0..4]);
    u32::from_le_bytes(bytes)
}

/// Creates an RNG for a specific roll category.
///
/// Convenience function that derives the category seed and creates the RNG.
pub fn rng_for(base_seed: u32, key: &str) -> DiceRng {
    create_rng(derive_category_seed(base_seed, key))
}
