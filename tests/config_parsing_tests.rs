//! Configuration file loading

use ivy_module_metadata::{
    ArtifactConfigurationCheck, IvyMutableModuleMetadataFactory, MetadataConfig,
    MutableModuleMetadataFactory,
};
use tempfile::TempDir;
mod common;
use common::coordinate;

#[test]
fn test_toml_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("metadata.toml");
    std::fs::write(
        &path,
        r#"
[factory]
artifact_configuration_check = "reject"
default_status = "release"
status_scheme = ["integration", "release"]

[logging]
filter = "ivy_module_metadata=debug"
"#,
    )
    .unwrap();

    let config = MetadataConfig::from_file(&path).unwrap();
    config.validate().unwrap();
    assert_eq!(
        config.factory.artifact_configuration_check,
        ArtifactConfigurationCheck::Reject
    );
    assert_eq!(config.factory.status_scheme, vec!["integration", "release"]);
    let logging = config.logging.as_ref().unwrap();
    assert_eq!(logging.filter.as_deref(), Some("ivy_module_metadata=debug"));
    assert!(!logging.json_format);

    let factory = IvyMutableModuleMetadataFactory::default().with_config(config.factory);
    let md = factory.create(&coordinate("g", "m", "1")).unwrap();
    assert_eq!(md.status(), "release");
    assert_eq!(md.status_scheme(), ["integration", "release"]);
}

#[test]
fn test_json_round_trip_through_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("metadata.json");

    let mut config = MetadataConfig::default();
    config.factory.artifact_configuration_check = ArtifactConfigurationCheck::Trust;
    config.to_json_file(&path).unwrap();

    let loaded = MetadataConfig::from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_unknown_check_mode_fails_to_parse() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("metadata.toml");
    std::fs::write(&path, "[factory]\nartifact_configuration_check = \"sometimes\"\n").unwrap();
    assert!(MetadataConfig::from_toml_file(&path).is_err());
}

#[test]
fn test_missing_file_is_error() {
    let temp_dir = TempDir::new().unwrap();
    assert!(MetadataConfig::from_file(&temp_dir.path().join("absent.json")).is_err());
}
