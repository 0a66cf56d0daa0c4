use super::*;

#[test]
fn test_empty_file_gives_defaults() {
    let config = PlayConfig::from_toml("").unwrap();
    assert_eq!(config, PlayConfig::default());
    assert!(config.display.unicode);
    assert_eq!(config.log.level, "warn");
    assert_eq!(config.selfplay.max_moves, 300);
    assert_eq!(config.selfplay.seed, None);
}

#[test]
fn test_partial_sections() {
    let config = PlayConfig::from_toml(
        r#"
        [display]
        unicode = false

        [selfplay]
        seed = 42
        "#,
    )
    .unwrap();
    assert!(!config.display.unicode);
    assert!(config.display.highlight);
    assert_eq!(config.selfplay.seed, Some(42));
    assert_eq!(config.selfplay.games, 1);
}

#[test]
fn test_unknown_fields_are_rejected() {
    assert!(PlayConfig::from_toml("[display]\nunicod = false\n").is_err());
    assert!(PlayConfig::from_toml("[engine]\ndepth = 3\n").is_err());
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let err = PlayConfig::resolve(Some(Path::new("/nonexistent/chess_play.toml"))).unwrap_err();
    assert!(format!("{err:#}").contains("failed to read config"));
}

#[test]
fn test_round_trip_through_toml() {
    let mut config = PlayConfig::default();
    config.log.level = "chess_rules=debug".to_string();
    config.selfplay.seed = Some(7);
    let text = toml::to_string(&config).unwrap();
    assert_eq!(PlayConfig::from_toml(&text).unwrap(), config);
}
