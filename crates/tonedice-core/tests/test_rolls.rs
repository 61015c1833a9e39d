//! Tests for rolling dice through the public factory API.
//!
//! These tests cover pool coverage and bias, the forced-scale rolls, rhythmic
//! phrases, voice counts, and seeded reproducibility.

use std::collections::{HashMap, HashSet};

use pretty_assertions::assert_eq;
use tonedice_core::rng::{create_rng, rng_for};
use tonedice_core::theory::{duration_ticks, TICKS_PER_BEAT};
use tonedice_core::{
    DiceConfig, DiceConfiguration, DiceError, DiceFactory, RemoveChordPolicy, Roll, RollCategory,
};

// =============================================================================
// Helper Functions
// =============================================================================

/// Roll a category `n` times and tally the results.
fn tally(factory: &DiceFactory, category: RollCategory, n: usize, seed: u32) -> HashMap<Roll, usize> {
    let die = factory.dice(&category);
    let mut rng = create_rng(seed);
    let mut counts = HashMap::new();
    for _ in 0..n {
        *counts.entry(die.roll(&mut rng).unwrap()).or_insert(0) += 1;
    }
    counts
}

fn text(s: &str) -> Roll {
    Roll::Text(s.to_string())
}

fn phrase_ticks(roll: &Roll) -> u32 {
    roll.as_phrase()
        .unwrap()
        .iter()
        .map(|s| duration_ticks(s).unwrap())
        .sum()
}

// =============================================================================
// 1. Pool Coverage
// =============================================================================

#[test]
fn test_note_roll_covers_scale() {
    let config = DiceConfig::builder().scale_name("major").build().unwrap();
    let factory = DiceFactory::new(&config);
    let counts = tally(&factory, RollCategory::Note, 1000, 1);

    let expected: HashSet<Roll> = ["C", "D", "E", "F", "G", "A", "B"]
        .iter()
        .map(|s| text(s))
        .collect();
    let seen: HashSet<Roll> = counts.keys().cloned().collect();
    assert_eq!(seen, expected);
}

#[test]
fn test_interval_roll_uses_scale_steps() {
    let config = DiceConfig::builder().scale_name("minor").build().unwrap();
    let factory = DiceFactory::new(&config);
    let counts = tally(&factory, RollCategory::Interval, 500, 2);
    let seen: HashSet<Roll> = counts.keys().cloned().collect();
    assert_eq!(seen, HashSet::from([Roll::Number(1), Roll::Number(2)]));
}

#[test]
fn test_octave_roll_stays_in_range() {
    let config = DiceConfiguration::default();
    let factory = DiceFactory::new(&config);
    let counts = tally(&factory, RollCategory::Octave, 500, 3);
    let mut octaves: Vec<i64> = counts.keys().filter_map(Roll::as_number).collect();
    octaves.sort_unstable();
    assert_eq!(octaves, vec![2, 3, 4, 5, 6]);
}

#[test]
fn test_mode_degree_roll_uses_mask() {
    let config = DiceConfiguration::default();
    let factory = DiceFactory::new(&config);
    let counts = tally(
        &factory,
        RollCategory::ModeDegree("dorian".to_string()),
        500,
        4,
    );
    let mask: HashSet<Roll> = config
        .mode_degree_mask("dorian")
        .unwrap()
        .iter()
        .map(|s| text(s))
        .collect();
    let seen: HashSet<Roll> = counts.keys().cloned().collect();
    assert_eq!(seen, mask);
}

#[test]
fn test_tonnetz_rolls() {
    let config = DiceConfiguration::default();
    let factory = DiceFactory::new(&config);
    let mut rng = create_rng(5);
    for _ in 0..50 {
        let roll = factory.dice(&RollCategory::Tonnetz3).roll(&mut rng).unwrap();
        assert!(config.tonnetz3().iter().any(|s| text(s) == roll));
        let roll = factory.dice(&RollCategory::Tonnetz4).roll(&mut rng).unwrap();
        assert!(config.tonnetz4().iter().any(|s| text(s) == roll));
    }
}

// =============================================================================
// 2. Weighted Triads
// =============================================================================

#[test]
fn test_chord_triad_bias() {
    let config = DiceConfiguration::default();
    let factory = DiceFactory::new(&config);
    let counts = tally(&factory, RollCategory::ChordTriad, 10_000, 77);

    let major = counts[&text("major")] as f64;
    let minor = counts[&text("minor")] as f64;
    for light in ["diminished", "augmented", "custom"] {
        let n = counts[&text(light)] as f64;
        assert!((1.6..2.5).contains(&(major / n)), "major/{} = {}", light, major / n);
        assert!((1.6..2.5).contains(&(minor / n)), "minor/{} = {}", light, minor / n);
    }
}

#[test]
fn test_custom_triad_weights() {
    let config = DiceConfig::builder()
        .chord_triads(["major", "minor"], vec![1.0, 1e-9])
        .build()
        .unwrap();
    let factory = DiceFactory::new(&config);
    let counts = tally(&factory, RollCategory::ChordTriad, 200, 6);
    assert_eq!(counts.get(&text("major")), Some(&200));
}

// =============================================================================
// 3. Forced-Scale Rolls
// =============================================================================

#[test]
fn test_chromatic_rolls_ignore_configured_pools() {
    let config = DiceConfig::builder()
        .scale_name("major")
        .notes(["X", "Y"])
        .intervals(vec![7])
        .build()
        .unwrap();
    let factory = DiceFactory::new(&config);

    let notes = tally(&factory, RollCategory::NoteChromatic, 2000, 7);
    assert_eq!(notes.len(), 12);
    assert!(notes.contains_key(&text("Db")));

    let intervals = tally(&factory, RollCategory::IntervalChromatic, 100, 8);
    assert_eq!(intervals.keys().collect::<Vec<_>>(), vec![&Roll::Number(1)]);
}

#[test]
fn test_major_and_minor_rolls_follow_tonic() {
    let config = DiceConfig::builder().tonic("A").build().unwrap();
    let factory = DiceFactory::new(&config);

    let major = tally(&factory, RollCategory::NoteMajor, 1000, 9);
    assert!(major.contains_key(&text("C#")));
    assert_eq!(major.len(), 7);

    let minor = tally(&factory, RollCategory::NoteMinor, 1000, 10);
    assert!(minor.contains_key(&text("C")));
    assert!(!minor.contains_key(&text("C#")));

    let steps = tally(&factory, RollCategory::IntervalMajor, 300, 11);
    assert_eq!(steps.len(), 2);
}

// =============================================================================
// 4. Rhythm
// =============================================================================

#[test]
fn test_rhythmic_value_from_pool() {
    let config = DiceConfig::builder().durations(["en", "sn"]).build().unwrap();
    let factory = DiceFactory::new(&config);
    let counts = tally(&factory, RollCategory::RhythmicValue, 200, 12);
    let seen: HashSet<Roll> = counts.keys().cloned().collect();
    assert_eq!(seen, HashSet::from([text("en"), text("sn")]));
}

#[test]
fn test_quarter_note_phrase_has_one_partition() {
    let config = DiceConfig::builder().durations(["qn"]).build().unwrap();
    let factory = DiceFactory::new(&config);
    let die = factory.dice(&RollCategory::RhythmicPhrase);
    let mut rng = create_rng(13);
    for _ in 0..20 {
        assert_eq!(
            die.roll(&mut rng).unwrap(),
            Roll::Phrase(vec!["qn".to_string(); 4])
        );
    }
}

#[test]
fn test_phrase_fills_budget_with_all_durations() {
    for beats in [2, 4, 6] {
        let config = DiceConfig::builder()
            .beats_per_phrase(beats)
            .duration_pool(tonedice_core::DurationPool::Preset(
                tonedice_core::DurationPreset::All,
            ))
            .build()
            .unwrap();
        let factory = DiceFactory::new(&config);
        let die = factory.dice(&RollCategory::RhythmicPhrase);
        let mut rng = create_rng(beats);
        for _ in 0..25 {
            let phrase = die.roll(&mut rng).unwrap();
            assert_eq!(phrase_ticks(&phrase), beats * TICKS_PER_BEAT);
        }
    }
}

#[test]
fn test_constrained_phrase_lengths() {
    let config = DiceConfiguration::default();
    let factory = DiceFactory::new(&config);
    let die = factory.dice(&RollCategory::RhythmicPhraseConstrained);
    let mut rng = create_rng(14);
    for roll in die.roll_many(200, &mut rng).unwrap() {
        let len = roll.as_phrase().unwrap().len();
        assert!([3, 4, 5].contains(&len), "length {}", len);
        assert_eq!(phrase_ticks(&roll), 4 * TICKS_PER_BEAT);
    }
}

#[test]
fn test_infeasible_phrase_reports_exhaustion() {
    let config = DiceConfig::builder()
        .beats_per_phrase(1)
        .durations(["hn"])
        .max_retries(100)
        .build()
        .unwrap();
    let factory = DiceFactory::new(&config);
    let mut rng = create_rng(15);
    let err = factory
        .dice(&RollCategory::RhythmicPhrase)
        .roll(&mut rng)
        .unwrap_err();
    assert!(matches!(err, DiceError::RetryExhausted { .. }));
}

// =============================================================================
// 5. Chord Voices
// =============================================================================

#[test]
fn test_chord_voices_num() {
    let config = DiceConfiguration::default();
    let factory = DiceFactory::new(&config);
    let counts = tally(&factory, RollCategory::ChordVoicesNum, 500, 16);
    let seen: HashSet<Roll> = counts.keys().cloned().collect();
    assert_eq!(seen, HashSet::from([Roll::Number(3), Roll::Number(4)]));
}

#[test]
fn test_remove_chord_num_policies() {
    let below = DiceConfiguration::default();
    let counts = tally(&DiceFactory::new(&below), RollCategory::RemoveChordNum, 500, 17);
    let mut seen: Vec<i64> = counts.keys().filter_map(Roll::as_number).collect();
    seen.sort_unstable();
    assert_eq!(seen, vec![0, 1, 2]);

    let up_to = DiceConfig::builder()
        .remove_chord_policy(RemoveChordPolicy::UpToLargest)
        .build()
        .unwrap();
    let counts = tally(&DiceFactory::new(&up_to), RollCategory::RemoveChordNum, 500, 18);
    let mut seen: Vec<i64> = counts.keys().filter_map(Roll::as_number).collect();
    seen.sort_unstable();
    assert_eq!(seen, vec![1, 2, 3, 4]);
}

#[test]
fn test_empty_voice_counts_fail_at_roll() {
    let config = DiceConfig::builder()
        .chord_voice_counts(vec![])
        .build()
        .unwrap();
    let factory = DiceFactory::new(&config);
    let mut rng = create_rng(19);
    for category in [RollCategory::ChordVoicesNum, RollCategory::RemoveChordNum] {
        assert!(matches!(
            factory.dice(&category).roll(&mut rng),
            Err(DiceError::InvalidPool { .. })
        ));
    }
}

#[test]
fn test_remove_chord_num_with_extreme_counts() {
    let config = DiceConfig::builder()
        .chord_voice_counts(vec![i64::MIN])
        .build()
        .unwrap();
    let factory = DiceFactory::new(&config);
    let mut rng = create_rng(21);
    assert!(matches!(
        factory.dice(&RollCategory::RemoveChordNum).roll(&mut rng),
        Err(DiceError::InvalidPool { .. })
    ));

    let config = DiceConfig::builder()
        .chord_voice_counts(vec![3, 1_000_000_000])
        .remove_chord_policy(RemoveChordPolicy::UpToLargest)
        .build()
        .unwrap();
    let factory = DiceFactory::new(&config);
    let die = factory.dice(&RollCategory::RemoveChordNum);
    for roll in die.roll_many(100, &mut rng).unwrap() {
        let n = roll.as_number().unwrap();
        assert!((1..=1_000_000_000).contains(&n), "{}", n);
    }
}

#[test]
fn test_oversized_phrase_budget_reports_invalid_pool() {
    let config = DiceConfig::builder()
        .beats_per_phrase(u32::MAX)
        .durations(["wn"])
        .build()
        .unwrap();
    let factory = DiceFactory::new(&config);
    let mut rng = create_rng(22);
    for category in [
        RollCategory::RhythmicPhrase,
        RollCategory::RhythmicPhraseConstrained,
    ] {
        assert!(matches!(
            factory.dice(&category).roll(&mut rng),
            Err(DiceError::InvalidPool { .. })
        ));
    }
}

// =============================================================================
// 6. Determinism
// =============================================================================

#[test]
fn test_same_seed_same_rolls() {
    let config = DiceConfig::builder().scale_name("lydian").build().unwrap();
    let factory = DiceFactory::new(&config);
    for category in factory.categories() {
        let die = factory.dice(&category);
        let a = die.roll_many(10, &mut rng_for(5, &category.name())).unwrap();
        let b = die.roll_many(10, &mut rng_for(5, &category.name())).unwrap();
        assert_eq!(a, b, "{}", category);
    }
}

#[test]
fn test_unknown_scale_surfaces_on_note_roll() {
    let config = DiceConfig::builder().scale_name("nonsense").build().unwrap();
    let factory = DiceFactory::new(&config);
    let mut rng = create_rng(20);
    assert_eq!(
        factory.dice(&RollCategory::Note).roll(&mut rng),
        Err(DiceError::UnknownScale {
            name: "nonsense".to_string()
        })
    );
    // Categories that do not depend on the scale still roll.
    assert!(factory.dice(&RollCategory::Mode).roll(&mut rng).is_ok());
}
