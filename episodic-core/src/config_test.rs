// episodic-core/src/config_test.rs

use super::*;

#[test]
fn test_batch_arithmetic() {
    let config = EpisodeConfig::new(5, 3, 10);
    assert_eq!(config.samples_drawn_per_class(), 4);
    assert_eq!(config.raw_batch_size(), 20);
    assert_eq!(config.batch_size(), 16);
    assert_eq!(config.window_slack(), 4);
}

#[test]
fn test_window_slack_is_classes_minus_one() {
    for cpi in 1..12 {
        let config = EpisodeConfig::new(cpi, 2, 1);
        assert_eq!(config.window_slack(), cpi - 1);
    }
}

#[test]
fn test_from_support_query() {
    let config = EpisodeConfig::from_support_query(4, 1, 5, 100);
    assert_eq!(config.samples_per_class, 6);
    assert_eq!(config.classes_per_episode, 4);
    assert_eq!(config.iterations, 100);
}

#[test]
fn test_default_policy_is_clamped() {
    let config = EpisodeConfig::new(3, 2, 1);
    assert_eq!(config.offset_policy, OffsetPolicy::Clamped);
}

#[test]
fn test_max_offset_clamped() {
    assert_eq!(EpisodeConfig::new(1, 2, 1).max_offset(), 0);
    assert_eq!(EpisodeConfig::new(3, 2, 1).max_offset(), 2);
    assert_eq!(EpisodeConfig::new(5, 2, 1).max_offset(), 4);
    assert_eq!(EpisodeConfig::new(20, 2, 1).max_offset(), 4);
}

#[test]
fn test_max_offset_reference() {
    let config = EpisodeConfig::new(3, 2, 1).with_offset_policy(OffsetPolicy::Reference);
    assert_eq!(config.max_offset(), REFERENCE_MAX_OFFSET);
}

#[test]
fn test_validate_ok() {
    let config = EpisodeConfig::new(3, 2, 10);
    assert!(config.validate(3).is_ok());
    assert!(config.validate(10).is_ok());
}

#[test]
fn test_validate_insufficient_classes() {
    let config = EpisodeConfig::new(4, 2, 10);
    match config.validate(3) {
        Err(EpisodicError::InsufficientClasses { requested, available }) => {
            assert_eq!(requested, 4);
            assert_eq!(available, 3);
        }
        other => panic!("Expected InsufficientClasses, got {:?}", other),
    }
}

#[test]
fn test_validate_zero_values() {
    assert!(matches!(
        EpisodeConfig::new(0, 2, 10).validate(3),
        Err(EpisodicError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        EpisodeConfig::new(2, 0, 10).validate(3),
        Err(EpisodicError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_validate_reference_with_small_slack_still_ok() {
    // Only flagged through the log; the failure surfaces per episode.
    let config = EpisodeConfig::new(2, 2, 10).with_offset_policy(OffsetPolicy::Reference);
    assert!(config.validate(2).is_ok());
}

#[test]
fn test_zero_iterations_is_valid() {
    assert!(EpisodeConfig::new(2, 2, 0).validate(2).is_ok());
}
