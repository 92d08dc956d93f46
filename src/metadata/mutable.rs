//! Metadata under assembly
//!
//! Owned by the thread that built it until [`MutableIvyModuleResolveMetadata::into_immutable`]
//! (or `as_immutable`) produces the shareable snapshot. Every collection is owned by the
//! metadata itself; nothing aliases caller data.

use std::collections::{BTreeMap, HashSet};
use tracing::warn;

use super::immutable::{IvyModuleResolveMetadata, Snapshot};
use super::state::MetadataState;
use crate::attributes::{AttributeSet, STATUS_ATTRIBUTE};
use crate::descriptor::{Artifact, Configuration, Exclude, IvyDependencyDescriptor};
use crate::identifier::{ModuleComponentIdentifier, ModuleVersionIdentifier};

/// Status given to modules that do not declare one
pub const DEFAULT_STATUS: &str = "integration";

/// Status scheme used when none is configured, least to most mature
pub const DEFAULT_STATUS_SCHEME: [&str; 3] = ["integration", "milestone", "release"];

/// Ivy module metadata being assembled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutableIvyModuleResolveMetadata {
    id: ModuleVersionIdentifier,
    component_id: ModuleComponentIdentifier,
    base_attributes: AttributeSet,
    dependencies: Vec<IvyDependencyDescriptor>,
    configurations: Vec<Configuration>,
    artifacts: Vec<Artifact>,
    excludes: Vec<Exclude>,
    state: MetadataState,
    changing: bool,
    status: String,
    status_scheme: Vec<String>,
    branch: Option<String>,
    extra_attributes: BTreeMap<String, String>,
}

impl MutableIvyModuleResolveMetadata {
    /// Assemble metadata from owned collections
    ///
    /// Configuration names are kept unique: the first definition of a name wins.
    pub(crate) fn new(
        base_attributes: AttributeSet,
        id: ModuleVersionIdentifier,
        component_id: ModuleComponentIdentifier,
        dependencies: Vec<IvyDependencyDescriptor>,
        configurations: Vec<Configuration>,
        artifacts: Vec<Artifact>,
        excludes: Vec<Exclude>,
    ) -> Self {
        let mut seen = HashSet::with_capacity(configurations.len());
        let configurations = configurations
            .into_iter()
            .filter(|conf| {
                let first = seen.insert(conf.name.clone());
                if !first {
                    warn!(
                        "Dropping duplicate configuration '{}' declared by {}",
                        conf.name, component_id
                    );
                }
                first
            })
            .collect();

        Self {
            id,
            component_id,
            base_attributes,
            dependencies,
            configurations,
            artifacts,
            excludes,
            state: MetadataState::Normal,
            changing: false,
            status: DEFAULT_STATUS.to_string(),
            status_scheme: DEFAULT_STATUS_SCHEME.iter().map(|s| s.to_string()).collect(),
            branch: None,
            extra_attributes: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> &ModuleVersionIdentifier {
        &self.id
    }

    pub fn component_id(&self) -> &ModuleComponentIdentifier {
        &self.component_id
    }

    pub fn dependencies(&self) -> &[IvyDependencyDescriptor] {
        &self.dependencies
    }

    pub fn configurations(&self) -> &[Configuration] {
        &self.configurations
    }

    pub fn configuration(&self, name: &str) -> Option<&Configuration> {
        self.configurations.iter().find(|conf| conf.name == name)
    }

    pub fn configuration_names(&self) -> impl Iterator<Item = &str> {
        self.configurations.iter().map(|conf| conf.name.as_str())
    }

    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    pub fn excludes(&self) -> &[Exclude] {
        &self.excludes
    }

    pub fn state(&self) -> MetadataState {
        self.state
    }

    pub fn is_missing(&self) -> bool {
        self.state.is_missing()
    }

    pub fn is_changing(&self) -> bool {
        self.changing
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn status_scheme(&self) -> &[String] {
        &self.status_scheme
    }

    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }

    pub fn extra_attributes(&self) -> &BTreeMap<String, String> {
        &self.extra_attributes
    }

    /// Variant attributes: the factory's base set plus the module status
    pub fn attributes(&self) -> AttributeSet {
        self.base_attributes.with(STATUS_ATTRIBUTE, self.status.as_str())
    }

    /// Artifact/configuration pairs where the artifact names a configuration this
    /// module does not declare
    pub fn undeclared_artifact_configurations(&self) -> Vec<(&Artifact, &str)> {
        self.artifacts
            .iter()
            .flat_map(|artifact| {
                artifact
                    .configurations
                    .iter()
                    .filter(move |conf| self.configuration(conf).is_none())
                    .map(move |conf| (artifact, conf.as_str()))
            })
            .collect()
    }

    /// Flag this metadata as standing in for a module that could not be found.
    /// There is no way back to the normal state.
    pub fn mark_missing(&mut self) {
        self.state.mark_missing();
    }

    pub fn set_changing(&mut self, changing: bool) {
        self.changing = changing;
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    pub fn set_status_scheme(&mut self, scheme: &[String]) {
        self.status_scheme = scheme.to_vec();
    }

    pub fn set_branch(&mut self, branch: Option<String>) {
        self.branch = branch;
    }

    pub fn set_extra_attributes(&mut self, extra_attributes: &BTreeMap<String, String>) {
        self.extra_attributes = extra_attributes.clone();
    }

    pub fn set_dependencies(&mut self, dependencies: &[IvyDependencyDescriptor]) {
        self.dependencies = dependencies.to_vec();
    }

    /// Frozen copy; this builder stays usable
    pub fn as_immutable(&self) -> IvyModuleResolveMetadata {
        self.clone().into_immutable()
    }

    /// Freeze into a snapshot that can be shared across threads
    pub fn into_immutable(self) -> IvyModuleResolveMetadata {
        let attributes = self.attributes();
        IvyModuleResolveMetadata::from_snapshot(Snapshot {
            id: self.id,
            component_id: self.component_id,
            attributes,
            dependencies: self.dependencies,
            configurations: self.configurations,
            artifacts: self.artifacts,
            excludes: self.excludes,
            state: self.state,
            changing: self.changing,
            status: self.status,
            status_scheme: self.status_scheme,
            branch: self.branch,
            extra_attributes: self.extra_attributes,
        })
    }
}
