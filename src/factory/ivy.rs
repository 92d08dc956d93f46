//! Ivy metadata factory
//!
//! Legacy Ivy repositories often publish modules without `<configurations>` or
//! `<publications>`. For those the factory synthesizes one visible, transitive `default`
//! configuration and one `<module>.jar` artifact owned by it, so consumers can always
//! assume at least one configuration and one artifact.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::{Arc, LazyLock};
use tracing::{debug, warn};

use super::MutableModuleMetadataFactory;
use crate::attributes::{AttributesFactory, DefaultAttributesFactory};
use crate::config::{ArtifactConfigurationCheck, FactoryConfig};
use crate::descriptor::{Artifact, Configuration, Exclude, IvyArtifactName, IvyDependencyDescriptor};
use crate::identifier::{
    InterningIdentifierFactory, ModuleComponentIdentifier, ModuleIdentifierFactory,
    ModuleVersionIdentifier,
};
use crate::metadata::{MetadataError, MutableIvyModuleResolveMetadata};

/// Name of the synthesized configuration
pub const DEFAULT_CONFIGURATION: &str = "default";
/// Type of the synthesized artifact
pub const DEFAULT_ARTIFACT_TYPE: &str = "jar";
/// Extension of the synthesized artifact
pub const DEFAULT_ARTIFACT_EXTENSION: &str = "jar";

static DEFAULT_CONFIGURATIONS: LazyLock<[Configuration; 1]> =
    LazyLock::new(|| [Configuration::public(DEFAULT_CONFIGURATION)]);

static SINGLE_DEFAULT_CONFIGURATION_NAME: LazyLock<BTreeSet<String>> =
    LazyLock::new(|| BTreeSet::from([DEFAULT_CONFIGURATION.to_string()]));

/// The shared `default` configuration: visible, transitive, extends nothing
pub fn default_configuration() -> &'static Configuration {
    &DEFAULT_CONFIGURATIONS[0]
}

/// Metadata factory for Ivy repositories
///
/// Holds only immutable collaborator references and configuration, so one instance can
/// serve any number of resolution workers concurrently.
#[derive(Clone)]
pub struct IvyMutableModuleMetadataFactory {
    identifiers: Arc<dyn ModuleIdentifierFactory>,
    attributes: Arc<dyn AttributesFactory>,
    config: FactoryConfig,
}

impl fmt::Debug for IvyMutableModuleMetadataFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IvyMutableModuleMetadataFactory")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for IvyMutableModuleMetadataFactory {
    fn default() -> Self {
        Self::new(
            Arc::new(InterningIdentifierFactory::new()),
            Arc::new(DefaultAttributesFactory),
        )
    }
}

impl IvyMutableModuleMetadataFactory {
    pub fn new(
        identifiers: Arc<dyn ModuleIdentifierFactory>,
        attributes: Arc<dyn AttributesFactory>,
    ) -> Self {
        Self {
            identifiers,
            attributes,
            config: FactoryConfig::default(),
        }
    }

    pub fn with_config(mut self, config: FactoryConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    /// Metadata with the given dependencies and the default configuration and artifact
    pub fn create_with_dependencies(
        &self,
        from: &ModuleComponentIdentifier,
        dependencies: &[IvyDependencyDescriptor],
    ) -> Result<MutableIvyModuleResolveMetadata, MetadataError> {
        self.create_with(
            from,
            dependencies,
            DEFAULT_CONFIGURATIONS.as_slice(),
            &Self::default_artifacts(from),
            &[],
        )
    }

    /// Fully explicit construction; nothing is synthesized
    ///
    /// Unlike [`create`](MutableModuleMetadataFactory::create), empty `configurations` or
    /// `artifacts` stay empty: the result may have no configuration and no artifact at all.
    /// Callers that need the one-configuration, one-artifact guarantee use `create` or
    /// [`create_with_dependencies`](Self::create_with_dependencies).
    ///
    /// Every collection is copied into the metadata. Artifact configuration names are
    /// checked against `configurations` according to
    /// [`FactoryConfig::artifact_configuration_check`].
    pub fn create_with(
        &self,
        from: &ModuleComponentIdentifier,
        dependencies: &[IvyDependencyDescriptor],
        configurations: &[Configuration],
        artifacts: &[Artifact],
        excludes: &[Exclude],
    ) -> Result<MutableIvyModuleResolveMetadata, MetadataError> {
        let id = self.as_version_identifier(from)?;
        let mut metadata = MutableIvyModuleResolveMetadata::new(
            self.attributes.empty_attributes(),
            id,
            from.clone(),
            dependencies.to_vec(),
            configurations.to_vec(),
            artifacts.to_vec(),
            excludes.to_vec(),
        );
        metadata.set_status(self.config.default_status.as_str());
        metadata.set_status_scheme(&self.config.status_scheme);

        self.check_artifact_configurations(&metadata)?;

        debug!(
            "Created Ivy metadata for {}: {} configurations, {} artifacts, {} dependencies, {} excludes",
            metadata.id(),
            metadata.configurations().len(),
            metadata.artifacts().len(),
            metadata.dependencies().len(),
            metadata.excludes().len()
        );
        Ok(metadata)
    }

    fn default_artifacts(from: &ModuleComponentIdentifier) -> [Artifact; 1] {
        [Artifact {
            artifact_name: IvyArtifactName::new(
                from.module(),
                DEFAULT_ARTIFACT_TYPE,
                DEFAULT_ARTIFACT_EXTENSION,
            ),
            configurations: SINGLE_DEFAULT_CONFIGURATION_NAME.clone(),
        }]
    }

    fn as_version_identifier(
        &self,
        from: &ModuleComponentIdentifier,
    ) -> Result<ModuleVersionIdentifier, MetadataError> {
        Ok(self
            .identifiers
            .module_with_version(from.group(), from.module(), from.version())?)
    }

    fn check_artifact_configurations(
        &self,
        metadata: &MutableIvyModuleResolveMetadata,
    ) -> Result<(), MetadataError> {
        let mode = self.config.artifact_configuration_check;
        if mode == ArtifactConfigurationCheck::Trust {
            return Ok(());
        }
        for (artifact, configuration) in metadata.undeclared_artifact_configurations() {
            if mode == ArtifactConfigurationCheck::Reject {
                return Err(MetadataError::UnknownArtifactConfiguration {
                    module: metadata.id().to_string(),
                    artifact: artifact.artifact_name.to_string(),
                    configuration: configuration.to_string(),
                });
            }
            warn!(
                "Artifact '{}' of {} is owned by undeclared configuration '{}'",
                artifact.artifact_name,
                metadata.id(),
                configuration
            );
        }
        Ok(())
    }
}

impl MutableModuleMetadataFactory for IvyMutableModuleMetadataFactory {
    type Metadata = MutableIvyModuleResolveMetadata;

    fn create(&self, from: &ModuleComponentIdentifier) -> Result<Self::Metadata, MetadataError> {
        self.create_with_dependencies(from, &[])
    }

    fn missing(&self, from: &ModuleComponentIdentifier) -> Result<Self::Metadata, MetadataError> {
        let mut metadata = self.create(from)?;
        metadata.mark_missing();
        debug!("Marked {} as missing", metadata.id());
        Ok(metadata)
    }
}
