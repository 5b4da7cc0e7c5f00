use std::fs;

use crate::{DeskConfig, DeskError, OutputFormat};

#[test]
fn test_default_config() {
    let config = DeskConfig::default();

    assert_eq!(config.output_format, OutputFormat::Table);
    assert_eq!(config.log_level, "warn");
    assert!(!config.log_json);
    assert!(config.seed_demo_data);
    assert_eq!(config.recent_limit, 4);
}

#[test]
fn test_parse_overrides_defaults() {
    let content = "\
        # desk settings\n\
        format = json\n\
        \n\
        log=traffic_desk=debug\n\
        log_json = yes\n\
        Seed = off\n\
        recent = 2\n";

    let config = DeskConfig::parse(content).unwrap();

    assert_eq!(config.output_format, OutputFormat::JSON);
    assert_eq!(config.log_level, "traffic_desk=debug");
    assert!(config.log_json);
    assert!(!config.seed_demo_data);
    assert_eq!(config.recent_limit, 2);
}

#[test]
fn test_parse_rejects_bad_values() {
    let cases = [
        "format = xml",
        "seed = maybe",
        "recent = -1",
        "colour = red",
        "just some text",
    ];

    for content in cases {
        match DeskConfig::parse(content) {
            Err(DeskError::Config(_)) => {}
            other => panic!("Expected config error for '{}', got {:?}", content, other),
        }
    }
}

#[test]
fn test_output_format_names() {
    assert_eq!("TABLE".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Standard);
    assert_eq!("Json".parse::<OutputFormat>().unwrap(), OutputFormat::JSON);
    assert!("yaml".parse::<OutputFormat>().is_err());
}

#[test]
fn test_from_file() {
    let path = std::env::temp_dir().join(format!("traffic_desk_config_{}.conf", std::process::id()));
    fs::write(&path, "format=standard\nrecent=7\n").unwrap();

    let config = DeskConfig::from_file(&path).unwrap();
    let _ = fs::remove_file(&path);

    assert_eq!(config.output_format, OutputFormat::Standard);
    assert_eq!(config.recent_limit, 7);

    let missing = std::env::temp_dir().join("traffic_desk_missing.conf");
    assert!(matches!(
        DeskConfig::from_file(&missing),
        Err(DeskError::Config(_))
    ));
}
