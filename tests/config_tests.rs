// Config loading and validation tests

use sci_m::config::AppConfig;
use serde_json::json;

const VALID_CONFIG: &str = r#"
[model]
name = "embodied-carbon"

[model.static]
region = "uk-west"
vcpus = 8

[model.auth]
token = "secret"

[run]
input_path = "data/inputs.json"
output_path = "data/outputs.json"
pretty = false
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.model.name, "embodied-carbon");
    assert_eq!(config.run.input_path, "data/inputs.json");
    assert_eq!(config.run.output_path.as_deref(), Some("data/outputs.json"));
    assert!(!config.run.pretty);
}

#[test]
fn test_config_defaults() {
    let config = AppConfig::load_from_str("[run]\ninput_path = \"in.json\"\n").unwrap();
    assert_eq!(config.model.name, "sci-m");
    assert!(config.model.static_params.is_none());
    assert!(config.model.auth.is_none());
    assert!(config.run.output_path.is_none());
    assert!(config.run.pretty);
    assert_eq!(config.model.static_params_json().unwrap(), None);
}

#[test]
fn test_static_and_auth_tables_convert_to_json() {
    let config = AppConfig::load_from_str(VALID_CONFIG).unwrap();
    assert_eq!(
        config.model.static_params_json().unwrap(),
        Some(json!({"region": "uk-west", "vcpus": 8}))
    );
    assert_eq!(
        config.model.auth_json().unwrap(),
        Some(json!({"token": "secret"}))
    );
}

#[test]
fn test_config_validation_rejects_empty_model_name() {
    let bad = VALID_CONFIG.replace("name = \"embodied-carbon\"", "name = \"  \"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("model.name"));
}

#[test]
fn test_config_validation_rejects_empty_input_path() {
    let bad = VALID_CONFIG.replace("input_path = \"data/inputs.json\"", "input_path = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("run.input_path"));
}

#[test]
fn test_config_validation_rejects_empty_output_path() {
    let bad = VALID_CONFIG.replace("output_path = \"data/outputs.json\"", "output_path = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("run.output_path"));
}

#[test]
fn test_config_requires_run_section() {
    let err = AppConfig::load_from_str("[model]\nname = \"x\"\n").unwrap_err();
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_config_validation_rejects_invalid_toml() {
    let err = AppConfig::load_from_str("not valid toml [[[").unwrap_err();
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_config_loads_from_path() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, VALID_CONFIG).unwrap();
    let config = AppConfig::load_from_path(path.to_str().unwrap()).unwrap();
    assert_eq!(config.model.name, "embodied-carbon");
}

#[test]
fn test_config_missing_file_names_path() {
    let err = AppConfig::load_from_path("/nonexistent/sci-m/config.toml").unwrap_err();
    assert!(err.to_string().contains("/nonexistent/sci-m/config.toml"));
}

#[test]
fn test_version_banner_names_package() {
    let banner = sci_m::version::banner();
    assert!(banner.starts_with("sci-m v"));
    assert!(banner.ends_with(sci_m::version::VERSION));
}
