//! Shared fixtures for metadata tests

#![allow(dead_code)]

use ivy_module_metadata::{
    Artifact, Configuration, Exclude, IvyArtifactName, IvyDependencyDescriptor,
    IvyMutableModuleMetadataFactory, ModuleComponentIdentifier, ModuleComponentSelector,
};

pub fn factory() -> IvyMutableModuleMetadataFactory {
    IvyMutableModuleMetadataFactory::default()
}

pub fn coordinate(group: &str, module: &str, version: &str) -> ModuleComponentIdentifier {
    ModuleComponentIdentifier::new(group, module, version)
}

pub fn dependency(group: &str, module: &str, version: &str) -> IvyDependencyDescriptor {
    IvyDependencyDescriptor::new(ModuleComponentSelector::new(group, module, version))
}

/// compile <- runtime <- test, with one artifact per configuration
pub struct ThreeConfigurationModule {
    pub configurations: Vec<Configuration>,
    pub artifacts: Vec<Artifact>,
    pub dependencies: Vec<IvyDependencyDescriptor>,
    pub excludes: Vec<Exclude>,
}

impl ThreeConfigurationModule {
    pub fn new() -> Self {
        Self {
            configurations: vec![
                Configuration::public("compile"),
                Configuration::new("runtime", true, true, ["compile"]),
                Configuration::new("test", false, false, ["runtime"]),
            ],
            artifacts: vec![
                Artifact::new(IvyArtifactName::new("app-api", "jar", "jar"), ["compile"]),
                Artifact::new(IvyArtifactName::new("app", "jar", "jar"), ["runtime"]),
                Artifact::new(
                    IvyArtifactName::new("app", "test-jar", "jar").with_classifier("tests"),
                    ["test"],
                ),
            ],
            dependencies: vec![
                dependency("org.slf4j", "slf4j-api", "1.7.36").map("compile", ["default"]),
                dependency("junit", "junit", "4.13.2").map("test", ["default"]),
            ],
            excludes: vec![
                Exclude::module("commons-logging", "commons-logging"),
                Exclude::module("org.hamcrest", "*").for_configurations(["test"]),
            ],
        }
    }
}
