//! Resolver configuration loading and serialization.

use std::io::Write;
use strictly_board::{Direction, Pattern, ResolutionStrategy, ResolverConfig};
use strum::IntoEnumIterator;

#[test]
fn test_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "strategy = \"verified\"").expect("write");
    writeln!(file, "any_pattern_tile_limit = 512").expect("write");

    let config = ResolverConfig::from_file(file.path()).expect("config");
    assert_eq!(*config.strategy(), ResolutionStrategy::Verified);
    assert_eq!(*config.any_pattern_tile_limit(), Some(512));
}

#[test]
fn test_missing_file_reports_read_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = ResolverConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_reports_parse_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "strategy = [1, 2]").expect("write");
    let err = ResolverConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_every_strategy_parses_from_its_name() {
    for strategy in ResolutionStrategy::iter() {
        let text = format!("strategy = \"{}\"", strategy);
        let config = ResolverConfig::from_toml_str(&text).expect("config");
        assert_eq!(*config.strategy(), strategy);
    }
}

#[test]
fn test_config_json_round_trip() {
    let config = ResolverConfig::new(ResolutionStrategy::FastPath).with_any_pattern_tile_limit(64);
    let json = serde_json::to_string(&config).expect("serialize");
    assert!(json.contains("\"fast_path\""));
    let back: ResolverConfig = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, config);
}

#[test]
fn test_patterns_deserialize_from_json() {
    let json = r#"[
        "Any",
        {"Direction": {"direction": {"Named": "north"}, "repeatable": true}},
        {"Fixed": [{"Named": "north"}, "Any"]}
    ]"#;
    let patterns: Vec<Pattern> = serde_json::from_str(json).expect("patterns");
    assert_eq!(patterns[0], Pattern::Any);
    assert_eq!(patterns[1], Pattern::slide(Direction::new("north")));
    assert_eq!(
        patterns[2],
        Pattern::Fixed(vec![Direction::new("north"), Direction::Any])
    );
}
