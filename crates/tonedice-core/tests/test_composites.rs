//! Tests for composite rolls: unique items, chord qualities per triad, and
//! mode degree triads.

use pretty_assertions::assert_eq;
use tonedice_core::rng::create_rng;
use tonedice_core::{
    ChordQualityRoll, DiceConfig, DiceConfiguration, DiceError, DiceFactory, TriadQuality,
    CUSTOM_TRIAD,
};

// =============================================================================
// Unique Items
// =============================================================================

#[test]
fn test_unique_item_never_returns_excluded() {
    let config = DiceConfiguration::default();
    let factory = DiceFactory::new(&config);
    let mut rng = create_rng(1);
    let pool = ["C", "D", "E", "F", "G"];
    let excludes = ["C", "E", "G"];
    for _ in 0..500 {
        let item = factory.unique_item(&excludes, &pool, &mut rng).unwrap();
        assert!(item == "D" || item == "F", "{}", item);
    }
}

#[test]
fn test_unique_note_uses_configured_notes() {
    let config = DiceConfig::builder().notes(["60", "64"]).build().unwrap();
    let factory = DiceFactory::new(&config);
    let mut rng = create_rng(2);
    for _ in 0..50 {
        assert_eq!(
            factory.unique_note(&["60".to_string()], &mut rng).unwrap(),
            "64"
        );
    }
}

#[test]
fn test_unique_note_all_excluded() {
    let config = DiceConfig::builder().notes(["C"]).build().unwrap();
    let factory = DiceFactory::new(&config);
    let mut rng = create_rng(3);
    assert!(matches!(
        factory.unique_note(&["C".to_string()], &mut rng),
        Err(DiceError::InvalidPool { .. })
    ));
}

#[test]
fn test_unique_item_retry_bound() {
    // One allowed item among many excluded ones, with a tiny bound.
    let config = DiceConfig::builder().max_retries(1).build().unwrap();
    let factory = DiceFactory::new(&config);
    let pool: Vec<u32> = (0..1000).collect();
    let excludes: Vec<u32> = (1..1000).collect();
    let mut rng = create_rng(4);
    let mut exhausted = 0;
    for _ in 0..20 {
        match factory.unique_item(&excludes, &pool, &mut rng) {
            Ok(item) => assert_eq!(item, 0),
            Err(DiceError::RetryExhausted { attempts, .. }) => {
                assert_eq!(attempts, 1);
                exhausted += 1;
            }
            Err(other) => panic!("unexpected error: {}", other),
        }
    }
    assert!(exhausted > 0);
}

// =============================================================================
// Chord Quality Dispatch
// =============================================================================

#[test]
fn test_quality_for_standard_triads() {
    let config = DiceConfiguration::default();
    let factory = DiceFactory::new(&config);
    let mut rng = create_rng(5);
    for triad in ["major", "minor", "diminished", "augmented"] {
        let pool = config.chord_qualities(triad).unwrap();
        for _ in 0..20 {
            match factory.chord_quality_for_triad("C", triad, &mut rng).unwrap() {
                ChordQualityRoll::Quality(q) => assert!(pool.contains(&q), "{} {}", triad, q),
                other => panic!("unexpected {:?}", other),
            }
        }
    }
}

#[test]
fn test_custom_triad_draws_two_distinct_notes() {
    let config = DiceConfig::builder().scale_name("major").build().unwrap();
    let factory = DiceFactory::new(&config);
    let mut rng = create_rng(6);
    for _ in 0..200 {
        match factory
            .chord_quality_for_triad("C", CUSTOM_TRIAD, &mut rng)
            .unwrap()
        {
            ChordQualityRoll::Custom { first, second } => {
                assert_ne!(first, "C");
                assert_ne!(second, "C");
                assert_ne!(first, second);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}

#[test]
fn test_custom_triad_needs_three_notes() {
    let config = DiceConfig::builder().notes(["C", "E"]).build().unwrap();
    let factory = DiceFactory::new(&config);
    let mut rng = create_rng(7);
    assert!(matches!(
        factory.chord_quality_for_triad("C", CUSTOM_TRIAD, &mut rng),
        Err(DiceError::InvalidPool { .. })
    ));
}

#[test]
fn test_unknown_triad() {
    let config = DiceConfiguration::default();
    let factory = DiceFactory::new(&config);
    let mut rng = create_rng(8);
    assert_eq!(
        factory.chord_quality_for_triad("C", "suspended", &mut rng),
        Err(DiceError::UnknownTriad {
            name: "suspended".to_string()
        })
    );
}

// =============================================================================
// Mode Degree Triads
// =============================================================================

#[test]
fn test_ionian_degrees() {
    let config = DiceConfiguration::default();
    let factory = DiceFactory::new(&config);
    let mut rng = create_rng(9);
    for _ in 0..200 {
        let degree = factory.mode_degree_triad("ionian", &mut rng).unwrap();
        let expected = match degree.degree {
            1 | 4 | 5 => TriadQuality::Major,
            2 | 3 | 6 => TriadQuality::Minor,
            7 => TriadQuality::Diminished,
            other => panic!("degree {} out of range", other),
        };
        assert_eq!(degree.quality, expected, "{}", degree.symbol);
    }
}

#[test]
fn test_every_mode_has_one_diminished_degree() {
    let config = DiceConfiguration::default();
    let factory = DiceFactory::new(&config);
    let mut rng = create_rng(10);
    for mode in config.mode_names() {
        let mut diminished = std::collections::HashSet::new();
        for _ in 0..300 {
            let degree = factory.mode_degree_triad(mode, &mut rng).unwrap();
            if degree.quality == TriadQuality::Diminished {
                diminished.insert(degree.degree);
            }
        }
        assert_eq!(diminished.len(), 1, "{}", mode);
    }
}

#[test]
fn test_custom_mask_with_bad_numeral() {
    let config = DiceConfig::builder()
        .mode_degree_mask("dorian", ["IX"])
        .build()
        .unwrap();
    let factory = DiceFactory::new(&config);
    let mut rng = create_rng(11);
    assert_eq!(
        factory.mode_degree_triad("dorian", &mut rng),
        Err(DiceError::InvalidRomanNumeral {
            token: "IX".to_string()
        })
    );
}
