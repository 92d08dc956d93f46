//! Ivy dependency descriptors
//!
//! A dependency edge maps configurations of the declaring module (source) onto
//! configurations of the target module. Mapping keys:
//! - a configuration name
//! - `*`: every source configuration
//! - `%`: every source configuration without an explicit mapping
//!
//! The target `@` stands for "the configuration with the same name as the source".

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::artifact::Artifact;
use super::exclude::{Exclude, WILDCARD};

/// Mapping key matching source configurations that are not mapped explicitly
pub const OTHER_CONFIGURATIONS: &str = "%";
/// Mapping target standing for the source configuration's own name
pub const SAME_CONFIGURATION: &str = "@";

/// Requested target of a dependency edge
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModuleComponentSelector {
    pub group: String,
    pub module: String,
    /// Version constraint as declared (may be dynamic, e.g. `1.+` or `latest.integration`)
    pub version: String,
}

impl ModuleComponentSelector {
    pub fn new(
        group: impl Into<String>,
        module: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            module: module.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for ModuleComponentSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.module, self.version)
    }
}

/// Edge from a module to a target module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IvyDependencyDescriptor {
    pub selector: ModuleComponentSelector,
    /// Ivy `revConstraint`, the dynamic constraint a fixed version was published from
    #[serde(default)]
    pub dynamic_constraint_version: Option<String>,
    #[serde(default)]
    pub changing: bool,
    #[serde(default = "default_true")]
    pub transitive: bool,
    #[serde(default)]
    pub optional: bool,
    /// Source configuration (or `*`/`%`) to target configurations
    #[serde(default)]
    pub conf_mappings: BTreeMap<String, BTreeSet<String>>,
    /// Explicitly requested artifacts of the target
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
    #[serde(default)]
    pub excludes: Vec<Exclude>,
}

fn default_true() -> bool {
    true
}

impl IvyDependencyDescriptor {
    /// Transitive, non-changing, non-optional edge with no mappings yet
    pub fn new(selector: ModuleComponentSelector) -> Self {
        Self {
            selector,
            dynamic_constraint_version: None,
            changing: false,
            transitive: true,
            optional: false,
            conf_mappings: BTreeMap::new(),
            artifacts: Vec::new(),
            excludes: Vec::new(),
        }
    }

    /// Add `from -> to` to the configuration mapping
    pub fn map(
        mut self,
        from: impl Into<String>,
        to: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.conf_mappings
            .entry(from.into())
            .or_default()
            .extend(to.into_iter().map(Into::into));
        self
    }

    pub fn with_exclude(mut self, exclude: Exclude) -> Self {
        self.excludes.push(exclude);
        self
    }

    pub fn with_artifact(mut self, artifact: Artifact) -> Self {
        self.artifacts.push(artifact);
        self
    }

    pub fn transitive(mut self, transitive: bool) -> Self {
        self.transitive = transitive;
        self
    }

    pub fn changing(mut self, changing: bool) -> Self {
        self.changing = changing;
        self
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Whether this edge is followed from a configuration with the given hierarchy
    pub fn applies_to<S: AsRef<str>>(&self, hierarchy: &[S]) -> bool {
        self.conf_mappings.contains_key(WILDCARD)
            || self.conf_mappings.contains_key(OTHER_CONFIGURATIONS)
            || hierarchy
                .iter()
                .any(|conf| self.conf_mappings.contains_key(conf.as_ref()))
    }

    /// Target configurations selected when resolving source configuration `from`,
    /// whose hierarchy (itself first) is `hierarchy`
    pub fn target_configurations<S: AsRef<str>>(
        &self,
        from: &str,
        hierarchy: &[S],
    ) -> BTreeSet<String> {
        let mut targets = BTreeSet::new();
        let mut explicit = false;

        for conf in hierarchy {
            if let Some(mapped) = self.conf_mappings.get(conf.as_ref()) {
                explicit = true;
                extend_targets(&mut targets, mapped, from);
            }
        }
        if !explicit {
            if let Some(mapped) = self.conf_mappings.get(OTHER_CONFIGURATIONS) {
                extend_targets(&mut targets, mapped, from);
            }
        }
        if let Some(mapped) = self.conf_mappings.get(WILDCARD) {
            extend_targets(&mut targets, mapped, from);
        }
        targets
    }

    /// Excludes of this edge in scope for a configuration hierarchy
    pub fn excludes_for<'a, S: AsRef<str>>(
        &'a self,
        hierarchy: &'a [S],
    ) -> impl Iterator<Item = &'a Exclude> + 'a {
        self.excludes
            .iter()
            .filter(move |exclude| exclude.applies_to(hierarchy))
    }
}

fn extend_targets(targets: &mut BTreeSet<String>, mapped: &BTreeSet<String>, from: &str) {
    targets.extend(mapped.iter().map(|target| {
        if target == SAME_CONFIGURATION {
            from.to_string()
        } else {
            target.clone()
        }
    }));
}
