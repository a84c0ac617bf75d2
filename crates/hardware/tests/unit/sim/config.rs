//! Configuration Parsing Tests.

use std::io::Write;

use pretty_assertions::assert_eq;
use siasim_core::common::SimError;
use siasim_core::config::Config;

#[test]
fn empty_document_gives_defaults() {
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
}

#[test]
fn defaults_match_the_machine() {
    let config = Config::default();
    assert_eq!(config.general.initial_sp, 1000);
    assert_eq!(config.general.max_cycles, None);
    assert!(!config.general.trace_instructions);
}

#[test]
fn partial_sections_keep_other_defaults() {
    let config = Config::from_json(r#"{ "general": { "max_cycles": 10 } }"#).unwrap();
    assert_eq!(config.general.max_cycles, Some(10));
    assert_eq!(config.general.initial_sp, 1000);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = Config::from_json(r#"{ "general": { "stages": 5 } }"#).unwrap_err();
    assert!(matches!(err, SimError::Config(ref msg) if msg.contains("stages")));
}

#[test]
fn pipeline_section_is_not_a_setting() {
    let err = Config::from_json(r#"{ "pipeline": { "decode_forwarding": false } }"#).unwrap_err();
    assert!(matches!(err, SimError::Config(ref msg) if msg.contains("pipeline")));
}

#[test]
fn malformed_json_is_rejected() {
    assert!(matches!(
        Config::from_json("{ general: "),
        Err(SimError::Config(_))
    ));
}

#[test]
fn reads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{ "general": { "initial_sp": 600, "trace_instructions": true } }"#)
        .unwrap();
    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.general.initial_sp, 600);
    assert!(config.general.trace_instructions);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        Config::from_file(dir.path().join("sim.json")),
        Err(SimError::Io { .. })
    ));
}
