//! Tests for the config module

use std::collections::HashMap;
use std::fs;

use tempfile::tempdir;

use super::loader::with_env_overrides_from;
use super::types::*;
use crate::domain::value_objects::{
    CampusType, CodeEdition, ComplianceMethod, FlexibilityLevel, ScienceConfig,
};

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |k| map.get(k).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::default();
    let request = config.to_request();

    assert_eq!(request.campus, CampusType::Elementary);
    assert_eq!(request.enrollment, DEFAULT_ENROLLMENT);
    assert_eq!(request.flexibility, FlexibilityLevel::L2);
    assert_eq!(request.code_edition, CodeEdition::Ibc2021);
    assert_eq!(request.method, ComplianceMethod::Quantitative);
    assert!(config.output.unicode);
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[program]
campus = "high"
enrollment = 1800
flexibility = "L3"
code_edition = "2018"
method = "qualitative"
cafeteria_credit = true

[advanced]
science_config = "separate"
periods_per_day = 8

[output]
color = "never"
"#;

    let config: Config = toml::from_str(toml).unwrap();
    let request = config.to_request();

    assert_eq!(request.campus, CampusType::High);
    assert_eq!(request.enrollment, 1800);
    assert_eq!(request.flexibility, FlexibilityLevel::L3);
    assert_eq!(request.code_edition, CodeEdition::Ibc2018);
    assert!(request.cafeteria_credit);
    assert_eq!(request.advanced.science_config, ScienceConfig::Separate);
    assert_eq!(request.advanced.periods_per_day, 8);
    // unset advanced keys keep the high school defaults
    assert_eq!(request.advanced.utilization, 0.80);
    assert_eq!(request.advanced.elective_rooms, 6);
    assert_eq!(config.output.color, ColorMode::Never);
}

#[test]
fn test_unknown_keys_become_warnings() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("schoolspace.toml");
    fs::write(
        &path,
        r#"[program]
campus = "middle"
enrolment = 600
"#,
    )
    .unwrap();

    let (config, warnings) = Config::load_with_warnings(&path).unwrap();
    assert_eq!(config.campus(), CampusType::Middle);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "enrolment");
    assert_eq!(warnings[0].line, Some(3));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("enrollment"));
}

#[test]
fn test_invalid_config_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("schoolspace.toml");
    fs::write(&path, "[program]\ncampus = \"college\"\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().starts_with("invalid config in"));
}

#[test]
fn test_load_or_default_prefers_project_config() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("schoolspace.toml"),
        "[program]\nenrollment = 420\n",
    )
    .unwrap();

    let config = Config::load_or_default(Some(dir.path()));
    assert_eq!(config.program.enrollment, Some(420));
}

#[test]
fn test_env_overrides() {
    let config = with_env_overrides_from(
        Config::default(),
        env(&[
            ("SCHOOLSPACE_CAMPUS", "High"),
            ("SCHOOLSPACE_ENROLLMENT", " 1200 "),
            ("SCHOOLSPACE_CODE_EDITION", "2015"),
            ("SCHOOLSPACE_FLEXIBILITY", "l4"),
            ("SCHOOLSPACE_COLOR", "always"),
        ]),
    );

    assert_eq!(config.program.campus, Some(CampusType::High));
    assert_eq!(config.program.enrollment, Some(1200));
    assert_eq!(config.program.code_edition, Some(CodeEdition::Ibc2015));
    assert_eq!(config.program.flexibility, Some(FlexibilityLevel::L4));
    assert_eq!(config.output.color, ColorMode::Always);
}

#[test]
fn test_unparseable_env_values_are_ignored() {
    let mut base = Config::default();
    base.program.enrollment = Some(300);

    let config = with_env_overrides_from(
        base,
        env(&[
            ("SCHOOLSPACE_ENROLLMENT", "lots"),
            ("SCHOOLSPACE_CODE_EDITION", "2009"),
            ("SCHOOLSPACE_COLOR", "rainbow"),
        ]),
    );

    assert_eq!(config.program.enrollment, Some(300));
    assert_eq!(config.program.code_edition, None);
    assert_eq!(config.output.color, ColorMode::Auto);
}
