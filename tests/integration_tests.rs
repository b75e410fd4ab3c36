use hoopstats::{
    AppError, Cell, Config, PlayerRef, SeasonType, StatCategory, StatsPage, StatsTable,
};
use tempfile::tempdir;

/// Test configuration validation and TOML serialization
#[tokio::test]
async fn test_config_validation_and_serialization() {
    let configs = vec![
        Config {
            base_url: "https://www.basketball-reference.com".to_string(),
            log_file_path: None,
            http_timeout_seconds: hoopstats::constants::DEFAULT_HTTP_TIMEOUT_SECONDS,
        },
        Config {
            base_url: "http://localhost:8080".to_string(),
            log_file_path: Some("/custom/log/path".to_string()),
            http_timeout_seconds: 5,
        },
    ];

    for config in configs {
        assert!(config.validate().is_ok());

        let config_str = toml::to_string_pretty(&config).unwrap();
        let loaded_config: Config = toml::from_str(&config_str).unwrap();

        assert_eq!(loaded_config, config);
    }
}

/// Test that a saved config file loads back
#[tokio::test]
async fn test_config_file_roundtrip() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("hoopstats").join("config.toml");
    let config_path_str = config_path.to_string_lossy();

    let config = Config {
        http_timeout_seconds: 12,
        ..Config::default()
    };
    config.save_to_path(&config_path_str).await.unwrap();

    let loaded = Config::load_from_path(&config_path_str).await.unwrap();
    assert_eq!(loaded, config);
}

/// Test invalid configuration is rejected
#[test]
fn test_invalid_config() {
    let config = Config {
        base_url: "basketball-reference.com".to_string(),
        ..Config::default()
    };

    assert!(matches!(config.validate(), Err(AppError::Config(_))));
}

/// Test rendering a page built from library types
#[test]
fn test_page_rendering() {
    let table = StatsTable::new(
        vec!["Season".to_string(), "Tm".to_string(), "WS".to_string()],
        vec![
            vec![Cell::parse("1997-98"), Cell::parse("SAS"), Cell::parse("10.2")],
            vec![Cell::parse("1998-99"), Cell::parse("SAS"), Cell::parse("8.7")],
            vec![Cell::parse("Career"), Cell::Empty, Cell::parse("206.4")],
        ],
    );

    let page = StatsPage::new(
        table,
        &PlayerRef::new("tim", "duncan", 1),
        StatCategory::Advanced,
        SeasonType::Playoffs,
    )
    .with_colors(false);

    let mut buffer = Vec::new();
    page.render_buffered(&mut buffer).unwrap();
    let output = String::from_utf8(buffer).unwrap();

    assert!(output.contains("Tim Duncan Playoffs advanced"));
    assert!(output.contains("║ Career  ║     ║ 206.4 ║"));
}
