//! Loading override files from disk.

use std::fs;

use hitmark::{default_config, ConfigError, HighlightConfig, SimilarityAlgorithm};
use tempfile::TempDir;

fn write_config(dir: &TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("highlight.json");
    fs::write(&path, json).unwrap();
    path
}

#[test]
fn partial_file_merges_over_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"{
            "fuzzyMatch": { "threshold": 0.9, "algorithm": "jaro" },
            "priority": { "combinationOnlyWords": ["지원"] }
        }"#,
    );

    let config = HighlightConfig::from_json_file(&path).unwrap();
    assert_eq!(config.fuzzy_match.threshold, 0.9);
    assert_eq!(config.fuzzy_match.algorithm, SimilarityAlgorithm::Jaro);
    assert_eq!(config.priority.combination_only_words, vec!["지원".to_string()]);

    // untouched leaves keep their defaults
    assert_eq!(config.visual, default_config().visual);
    assert_eq!(config.priority.scoring, default_config().priority.scoring);
    assert!(!config.fuzzy_match.case_sensitive);
}

#[test]
fn empty_object_is_the_default_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "{}");
    assert_eq!(&HighlightConfig::from_json_file(&path).unwrap(), default_config());
}

#[test]
fn out_of_range_threshold_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{ "fuzzyMatch": { "threshold": 1.3 } }"#);
    let err = HighlightConfig::from_json_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ThresholdOutOfRange { .. }), "{:?}", err);
}

#[test]
fn unordered_thresholds_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{ "thresholds": { "related": 0.9 } }"#);
    let err = HighlightConfig::from_json_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ThresholdsNotDescending { .. }), "{:?}", err);
}

#[test]
fn malformed_and_missing_files() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{ "fuzzyMatch": "#);
    assert!(matches!(
        HighlightConfig::from_json_file(&path),
        Err(ConfigError::Json(_))
    ));

    let missing = dir.path().join("absent.json");
    assert!(matches!(
        HighlightConfig::from_json_file(&missing),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn unknown_keys_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{ "fuzzyMatch": { "treshold": 0.9 } }"#);
    assert!(matches!(
        HighlightConfig::from_json_file(&path),
        Err(ConfigError::Json(_))
    ));
}
