//! Ivy metadata factory behavior

use std::collections::BTreeSet;

use ivy_module_metadata::{
    Artifact, ArtifactConfigurationCheck, Configuration, FactoryConfig, IdentifierError,
    IvyArtifactName, IvyMutableModuleMetadataFactory, MetadataError, MetadataState,
    MutableModuleMetadataFactory,
};
mod common;
use common::*;

#[test]
fn test_create_synthesizes_default_shape() {
    let md = factory()
        .create(&coordinate("org.example", "lib", "1.0"))
        .unwrap();

    assert_eq!(md.id().to_string(), "org.example:lib:1.0");
    assert_eq!(md.component_id(), &coordinate("org.example", "lib", "1.0"));
    assert!(md.dependencies().is_empty());
    assert!(md.excludes().is_empty());
    assert!(!md.is_missing());

    assert_eq!(md.configurations(), &[Configuration::public("default")]);
    let default = &md.configurations()[0];
    assert!(default.visible);
    assert!(default.transitive);
    assert!(default.extends_from.is_empty());

    assert_eq!(
        md.artifacts(),
        &[Artifact::new(IvyArtifactName::new("lib", "jar", "jar"), ["default"])]
    );
}

#[test]
fn test_create_equals_create_with_no_dependencies() {
    let factory = factory();
    let id = coordinate("org.example", "lib", "1.0");
    let a = factory.create(&id).unwrap();
    let b = factory.create_with_dependencies(&id, &[]).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_create_with_dependencies_keeps_defaults() {
    let deps = vec![
        dependency("org.example", "a", "1.0").map("default", ["default"]),
        dependency("org.example", "b", "2.0").map("*", ["@"]),
    ];
    let md = factory()
        .create_with_dependencies(&coordinate("org.example", "lib", "1.0"), &deps)
        .unwrap();

    assert_eq!(md.dependencies(), deps.as_slice());
    assert_eq!(md.configurations().len(), 1);
    assert_eq!(md.artifacts().len(), 1);
    assert!(md.excludes().is_empty());
}

#[test]
fn test_missing_scenario() {
    let factory = factory();
    let id = coordinate("org.example", "ghost", "9.9");
    let missing = factory.missing(&id).unwrap();
    let normal = factory.create(&id).unwrap();

    assert!(missing.is_missing());
    assert_eq!(missing.state(), MetadataState::Missing);
    assert_eq!(missing.id().to_string(), "org.example:ghost:9.9");
    assert_eq!(missing.configurations(), normal.configurations());
    assert_eq!(missing.artifacts(), normal.artifacts());
    assert_eq!(missing.artifacts()[0].artifact_name.name, "ghost");
    assert_eq!(missing.excludes(), normal.excludes());
    assert_ne!(missing, normal);
}

#[test]
fn test_explicit_construction_is_verbatim() {
    let module = ThreeConfigurationModule::new();
    let md = factory()
        .create_with(
            &coordinate("org.example", "app", "3.1"),
            &module.dependencies,
            &module.configurations,
            &module.artifacts,
            &module.excludes,
        )
        .unwrap();

    assert_eq!(md.configurations(), module.configurations.as_slice());
    assert_eq!(md.artifacts(), module.artifacts.as_slice());
    assert_eq!(md.dependencies(), module.dependencies.as_slice());
    assert_eq!(md.excludes(), module.excludes.as_slice());
    assert!(md.configuration("default").is_none());
}

#[test]
fn test_explicit_construction_copies_inputs() {
    let mut module = ThreeConfigurationModule::new();
    let md = factory()
        .create_with(
            &coordinate("org.example", "app", "3.1"),
            &module.dependencies,
            &module.configurations,
            &module.artifacts,
            &module.excludes,
        )
        .unwrap();

    module.configurations.clear();
    module.artifacts[0].artifact_name.name = "changed".to_string();
    module.dependencies.push(dependency("g", "late", "1"));
    module.excludes.clear();

    let fresh = ThreeConfigurationModule::new();
    assert_eq!(md.configurations(), fresh.configurations.as_slice());
    assert_eq!(md.artifacts(), fresh.artifacts.as_slice());
    assert_eq!(md.dependencies(), fresh.dependencies.as_slice());
    assert_eq!(md.excludes(), fresh.excludes.as_slice());
}

#[test]
fn test_explicit_empty_collections_are_not_filled_in() {
    let md = factory()
        .create_with(&coordinate("org.example", "bare", "1"), &[], &[], &[], &[])
        .unwrap();
    assert!(md.configurations().is_empty());
    assert!(md.artifacts().is_empty());
}

#[test]
fn test_empty_coordinate_propagates_identifier_error() {
    let factory = factory();
    let err = factory.create(&coordinate("", "lib", "1.0")).unwrap_err();
    assert!(matches!(
        err,
        MetadataError::Identifier(IdentifierError::Empty { field: "group", .. })
    ));

    let err = factory.missing(&coordinate("org.example", "", "1.0")).unwrap_err();
    assert!(matches!(
        err,
        MetadataError::Identifier(IdentifierError::Empty { field: "module name", .. })
    ));
}

#[test]
fn test_whitespace_coordinates_are_not_rejected() {
    let factory = factory();

    let md = factory.create(&coordinate(" ", "lib", "1.0")).unwrap();
    assert_eq!(md.id().group(), " ");
    assert_eq!(md.artifacts()[0].artifact_name.name, "lib");

    let md = factory.missing(&coordinate("org.example", "\t", "1.0")).unwrap();
    assert!(md.is_missing());
    assert_eq!(md.id().name(), "\t");
    assert_eq!(md.artifacts()[0].artifact_name.name, "\t");
}

fn factory_with_check(check: ArtifactConfigurationCheck) -> IvyMutableModuleMetadataFactory {
    IvyMutableModuleMetadataFactory::default().with_config(FactoryConfig {
        artifact_configuration_check: check,
        ..FactoryConfig::default()
    })
}

fn orphan_artifact() -> Vec<Artifact> {
    vec![Artifact::new(
        IvyArtifactName::new("lib", "jar", "jar"),
        ["default", "sources"],
    )]
}

#[test]
fn test_undeclared_artifact_configuration_rejected_when_configured() {
    let err = factory_with_check(ArtifactConfigurationCheck::Reject)
        .create_with(
            &coordinate("org.example", "lib", "1.0"),
            &[],
            &[Configuration::public("default")],
            &orphan_artifact(),
            &[],
        )
        .unwrap_err();

    assert_eq!(
        err,
        MetadataError::UnknownArtifactConfiguration {
            module: "org.example:lib:1.0".to_string(),
            artifact: "lib.jar".to_string(),
            configuration: "sources".to_string(),
        }
    );
}

#[test]
fn test_undeclared_artifact_configuration_tolerated_by_default() {
    for check in [ArtifactConfigurationCheck::Warn, ArtifactConfigurationCheck::Trust] {
        let md = factory_with_check(check)
            .create_with(
                &coordinate("org.example", "lib", "1.0"),
                &[],
                &[Configuration::public("default")],
                &orphan_artifact(),
                &[],
            )
            .unwrap();
        assert_eq!(
            md.artifacts()[0].configurations,
            BTreeSet::from(["default".to_string(), "sources".to_string()])
        );
    }
}

#[test]
fn test_default_shape_passes_reject_mode() {
    let md = factory_with_check(ArtifactConfigurationCheck::Reject)
        .missing(&coordinate("org.example", "lib", "1.0"))
        .unwrap();
    assert!(md.is_missing());
}

#[test]
fn test_factory_shared_across_threads() {
    let factory = factory();
    let ids: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let factory = &factory;
                scope.spawn(move || {
                    factory
                        .create(&coordinate("org.example", &format!("lib{}", i % 2), "1.0"))
                        .unwrap()
                        .id()
                        .clone()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (i, id) in ids.iter().enumerate() {
        assert_eq!(id.name(), format!("lib{}", i % 2));
        assert_eq!(id, &ids[i % 2]);
    }
}
