//! Exclude rules
//!
//! Passed through from the descriptor parser. Matching here is limited to exact names and
//! the whole-field `*` wildcard; richer Ivy matchers are evaluated by the resolution engine
//! using the recorded `matcher` name.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::artifact::IvyArtifactName;
use crate::identifier::ModuleIdentifier;

/// Wildcard matching any group, module or configuration
pub const WILDCARD: &str = "*";

/// Group/module pattern of an exclude rule
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModulePattern {
    pub group: String,
    pub module: String,
}

impl ModulePattern {
    pub fn new(group: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            module: module.into(),
        }
    }

    pub fn matches(&self, id: &ModuleIdentifier) -> bool {
        field_matches(&self.group, id.group()) && field_matches(&self.module, id.name())
    }
}

fn field_matches(pattern: &str, value: &str) -> bool {
    pattern == WILDCARD || pattern == value
}

/// Suppression rule for transitive edges
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Exclude {
    pub module: ModulePattern,
    /// Restricts the rule to one artifact of the matched module
    #[serde(default)]
    pub artifact: Option<IvyArtifactName>,
    /// Configurations the rule is scoped to; empty means all
    #[serde(default)]
    pub configurations: BTreeSet<String>,
    /// Ivy matcher name (`exact`, `glob`, `regexp`, ...)
    #[serde(default)]
    pub matcher: Option<String>,
}

impl Exclude {
    pub fn module(group: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            module: ModulePattern::new(group, module),
            artifact: None,
            configurations: BTreeSet::new(),
            matcher: None,
        }
    }

    pub fn for_configurations(
        mut self,
        configurations: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.configurations = configurations.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_artifact(mut self, artifact: IvyArtifactName) -> Self {
        self.artifact = Some(artifact);
        self
    }

    pub fn with_matcher(mut self, matcher: impl Into<String>) -> Self {
        self.matcher = Some(matcher.into());
        self
    }

    /// Whether the rule excludes the whole module (no artifact restriction) when it matches
    pub fn is_module_exclude(&self) -> bool {
        self.artifact.is_none()
    }

    pub fn matches_module(&self, id: &ModuleIdentifier) -> bool {
        self.module.matches(id)
    }

    /// Whether the rule is in scope for a configuration hierarchy
    pub fn applies_to<S: AsRef<str>>(&self, hierarchy: &[S]) -> bool {
        self.configurations.is_empty()
            || self.configurations.contains(WILDCARD)
            || hierarchy
                .iter()
                .any(|conf| self.configurations.contains(conf.as_ref()))
    }
}
