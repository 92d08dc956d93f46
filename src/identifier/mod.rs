//! Module coordinates and their canonical identities
//!
//! A `ModuleComponentIdentifier` is what a repository lookup hands us: three raw strings.
//! A `ModuleVersionIdentifier` is the canonical form derived from it through a
//! [`ModuleIdentifierFactory`], suitable as a map key.

pub mod factory;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

pub use factory::{InterningIdentifierFactory, ModuleIdentifierFactory};

/// Identifier canonicalization errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    /// Group or module name is the empty string
    #[error("{field} must not be empty (coordinate '{coordinate}')")]
    Empty {
        field: &'static str,
        coordinate: String,
    },
    /// Text could not be split into group:module:version
    #[error("Malformed module coordinate: {0} (expected group:module:version)")]
    MalformedCoordinate(String),
}

/// Canonical group + module name pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModuleIdentifier {
    group: Arc<str>,
    name: Arc<str>,
}

impl ModuleIdentifier {
    pub(crate) fn from_interned(group: Arc<str>, name: Arc<str>) -> Self {
        Self { group, name }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shared storage of the group string (interned)
    pub fn group_arc(&self) -> &Arc<str> {
        &self.group
    }

    /// Shared storage of the name string (interned)
    pub fn name_arc(&self) -> &Arc<str> {
        &self.name
    }
}

impl fmt::Display for ModuleIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.name)
    }
}

/// Canonical module + version coordinate
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModuleVersionIdentifier {
    module: ModuleIdentifier,
    version: Arc<str>,
}

impl ModuleVersionIdentifier {
    pub(crate) fn from_parts(module: ModuleIdentifier, version: Arc<str>) -> Self {
        Self { module, version }
    }

    pub fn module(&self) -> &ModuleIdentifier {
        &self.module
    }

    pub fn group(&self) -> &str {
        self.module.group()
    }

    pub fn name(&self) -> &str {
        self.module.name()
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn version_arc(&self) -> &Arc<str> {
        &self.version
    }
}

impl fmt::Display for ModuleVersionIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.module, self.version)
    }
}

/// Coordinate of a component as supplied by the repository layer
///
/// Not canonicalized; the factory derives a [`ModuleVersionIdentifier`] from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModuleComponentIdentifier {
    group: String,
    module: String,
    version: String,
}

impl ModuleComponentIdentifier {
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

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl fmt::Display for ModuleComponentIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.module, self.version)
    }
}

impl FromStr for ModuleComponentIdentifier {
    type Err = IdentifierError;

    /// Parse `group:module:version`. The version may itself contain ':'.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(group), Some(module), Some(version)) => {
                Ok(Self::new(group, module, version))
            }
            _ => Err(IdentifierError::MalformedCoordinate(s.to_string())),
        }
    }
}
