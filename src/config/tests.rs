//! Configuration tests
//!
//! The round-trip test is a compile-time guard: when a new field is added to
//! `Config`, it fails until the TOML template and `FileConfig` agree.

use super::*;

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

/// Verify that the serialized default config can be parsed back.
#[test]
fn config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );
}

/// Every field in the template must survive the round trip with its value.
#[test]
fn config_roundtrip_preserves_values() {
    let mut config = Config::default();
    config.theme = "nord".to_string();
    config.left_title = "Home".to_string();
    config.right_title = "Logs".to_string();
    config.pager.animation_step = 4.5;
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Hourly;

    let file: FileConfig = toml::from_str(&config.to_toml()).expect("template parses");
    let reloaded = Config::from_sources(file, None);

    assert_eq!(reloaded.theme, "nord");
    assert_eq!(reloaded.left_title, "Home");
    assert_eq!(reloaded.right_title, "Logs");
    assert_eq!(reloaded.pager.animation_step, 4.5);
    assert!(reloaded.logging.file_enabled);
    assert_eq!(reloaded.logging.file_rotation, LogRotation::Hourly);
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn env_theme_overrides_file_theme() {
    let file: FileConfig = toml::from_str(r#"theme = "light""#).expect("parses");
    let config = Config::from_sources(file, Some("monokai".to_string()));
    assert_eq!(config.theme, "monokai");
}

#[test]
fn file_values_override_defaults() {
    let file: FileConfig = toml::from_str(
        r#"
        left_title = "Overview"

        [pager]
        tick_rate_ms = 16

        [logging]
        level = "debug"
        "#,
    )
    .expect("parses");

    let config = Config::from_sources(file, None);
    assert_eq!(config.left_title, "Overview");
    assert_eq!(config.right_title, "Right"); // untouched default
    assert_eq!(config.pager.tick_rate_ms, 16);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let config = Config::from_sources(FileConfig::default(), None);
    let defaults = Config::default();
    assert_eq!(config.theme, defaults.theme);
    assert_eq!(config.pager.animation_step, defaults.pager.animation_step);
    assert_eq!(config.logging.level, defaults.logging.level);
}

// ─────────────────────────────────────────────────────────────────────────────
// Validation tests
// ─────────────────────────────────────────────────────────────────────────────

/// Degenerate pager values would stall the animation; they are replaced
/// with defaults rather than rejected.
#[test]
fn nonpositive_pager_steps_are_replaced() {
    let pager = PagerConfig::from_file(Some(FilePager {
        animation_step: Some(0.0),
        tick_rate_ms: Some(0),
        manual_step: Some(-1.0),
    }));

    let defaults = PagerConfig::default();
    assert_eq!(pager.animation_step, defaults.animation_step);
    assert_eq!(pager.tick_rate_ms, defaults.tick_rate_ms);
    assert_eq!(pager.manual_step, defaults.manual_step);
}

#[test]
fn unknown_rotation_defaults_to_daily() {
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
    assert_eq!(LogRotation::parse("HOURLY"), LogRotation::Hourly);
    assert_eq!(LogRotation::parse("never"), LogRotation::Never);
}
