//! Frozen metadata snapshots
//!
//! An [`IvyModuleResolveMetadata`] is a handle to an `Arc`-shared snapshot: clones are
//! cheap, nothing can be mutated through it, and it is `Send + Sync` so resolution workers
//! read it without locking.

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

use super::error::MetadataError;
use super::state::MetadataState;
use crate::attributes::AttributeSet;
use crate::descriptor::{Artifact, Configuration, Exclude, IvyDependencyDescriptor};
use crate::identifier::{ModuleComponentIdentifier, ModuleVersionIdentifier};

#[derive(Debug, PartialEq, Eq, Serialize)]
pub(crate) struct Snapshot {
    pub(crate) id: ModuleVersionIdentifier,
    pub(crate) component_id: ModuleComponentIdentifier,
    pub(crate) attributes: AttributeSet,
    pub(crate) dependencies: Vec<IvyDependencyDescriptor>,
    pub(crate) configurations: Vec<Configuration>,
    pub(crate) artifacts: Vec<Artifact>,
    pub(crate) excludes: Vec<Exclude>,
    pub(crate) state: MetadataState,
    pub(crate) changing: bool,
    pub(crate) status: String,
    pub(crate) status_scheme: Vec<String>,
    pub(crate) branch: Option<String>,
    pub(crate) extra_attributes: BTreeMap<String, String>,
}

/// Immutable Ivy module metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IvyModuleResolveMetadata {
    inner: Arc<Snapshot>,
}

/// Resolved view of one configuration: its hierarchy and everything in scope for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigurationMetadata {
    pub name: String,
    pub visible: bool,
    pub transitive: bool,
    /// The configuration itself followed by everything it extends, transitively
    pub hierarchy: Vec<String>,
    pub artifacts: Vec<Artifact>,
    pub dependencies: Vec<IvyDependencyDescriptor>,
    pub excludes: Vec<Exclude>,
}

impl ConfigurationMetadata {
    /// Target configurations a dependency of this configuration resolves to
    pub fn dependency_targets(&self, dependency: &IvyDependencyDescriptor) -> Vec<String> {
        dependency
            .target_configurations(&self.name, self.hierarchy.as_slice())
            .into_iter()
            .collect()
    }
}

impl IvyModuleResolveMetadata {
    pub(crate) fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            inner: Arc::new(snapshot),
        }
    }

    pub fn id(&self) -> &ModuleVersionIdentifier {
        &self.inner.id
    }

    pub fn component_id(&self) -> &ModuleComponentIdentifier {
        &self.inner.component_id
    }

    pub fn attributes(&self) -> &AttributeSet {
        &self.inner.attributes
    }

    pub fn dependencies(&self) -> &[IvyDependencyDescriptor] {
        &self.inner.dependencies
    }

    pub fn configurations(&self) -> &[Configuration] {
        &self.inner.configurations
    }

    pub fn configuration_names(&self) -> impl Iterator<Item = &str> {
        self.inner.configurations.iter().map(|conf| conf.name.as_str())
    }

    /// Names of configurations consumers may select
    pub fn visible_configuration_names(&self) -> impl Iterator<Item = &str> {
        self.inner
            .configurations
            .iter()
            .filter(|conf| conf.visible)
            .map(|conf| conf.name.as_str())
    }

    pub fn configuration_definition(&self, name: &str) -> Option<&Configuration> {
        self.inner.configurations.iter().find(|conf| conf.name == name)
    }

    pub fn artifacts(&self) -> &[Artifact] {
        &self.inner.artifacts
    }

    pub fn excludes(&self) -> &[Exclude] {
        &self.inner.excludes
    }

    pub fn state(&self) -> MetadataState {
        self.inner.state
    }

    pub fn is_missing(&self) -> bool {
        self.inner.state.is_missing()
    }

    pub fn is_changing(&self) -> bool {
        self.inner.changing
    }

    pub fn status(&self) -> &str {
        &self.inner.status
    }

    pub fn status_scheme(&self) -> &[String] {
        &self.inner.status_scheme
    }

    pub fn branch(&self) -> Option<&str> {
        self.inner.branch.as_deref()
    }

    pub fn extra_attributes(&self) -> &BTreeMap<String, String> {
        &self.inner.extra_attributes
    }

    /// Whether both handles point at the same snapshot
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    fn unknown_configuration(&self, name: &str) -> MetadataError {
        MetadataError::UnknownConfiguration {
            module: self.inner.id.to_string(),
            configuration: name.to_string(),
        }
    }

    /// `name` followed by every configuration it extends, breadth-first, each once
    ///
    /// Fails when `name` or any extended configuration is not declared.
    pub fn hierarchy(&self, name: &str) -> Result<Vec<String>, MetadataError> {
        let mut hierarchy = vec![name.to_string()];
        let mut next = 0;
        while next < hierarchy.len() {
            let conf = self
                .configuration_definition(&hierarchy[next])
                .ok_or_else(|| self.unknown_configuration(&hierarchy[next]))?;
            for parent in &conf.extends_from {
                if !hierarchy.contains(parent) {
                    hierarchy.push(parent.clone());
                }
            }
            next += 1;
        }
        Ok(hierarchy)
    }

    /// Resolved view of configuration `name`, `None` if the module does not declare it
    pub fn configuration(
        &self,
        name: &str,
    ) -> Result<Option<ConfigurationMetadata>, MetadataError> {
        let Some(definition) = self.configuration_definition(name) else {
            return Ok(None);
        };
        let hierarchy = self.hierarchy(name)?;

        let artifacts = self
            .inner
            .artifacts
            .iter()
            .filter(|artifact| artifact.belongs_to_any(hierarchy.iter().map(String::as_str)))
            .fold(Vec::new(), |mut acc: Vec<Artifact>, artifact| {
                if !acc.contains(artifact) {
                    acc.push(artifact.clone());
                }
                acc
            });

        let dependencies = self
            .inner
            .dependencies
            .iter()
            .filter(|dependency| dependency.applies_to(hierarchy.as_slice()))
            .cloned()
            .collect();

        let excludes = self
            .inner
            .excludes
            .iter()
            .filter(|exclude| exclude.applies_to(hierarchy.as_slice()))
            .cloned()
            .collect();

        Ok(Some(ConfigurationMetadata {
            name: definition.name.clone(),
            visible: definition.visible,
            transitive: definition.transitive,
            hierarchy,
            artifacts,
            dependencies,
            excludes,
        }))
    }
}
