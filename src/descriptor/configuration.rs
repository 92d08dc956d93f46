//! Ivy configuration definitions

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A named grouping of artifacts and dependencies within a module
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Configuration {
    /// Configuration name, unique within its module
    pub name: String,
    /// Whether consumers may select this configuration
    #[serde(default = "default_true")]
    pub visible: bool,
    /// Whether dependencies of this configuration are followed transitively
    #[serde(default = "default_true")]
    pub transitive: bool,
    /// Names of configurations this one extends
    #[serde(default)]
    pub extends_from: BTreeSet<String>,
}

fn default_true() -> bool {
    true
}

impl Configuration {
    pub fn new(
        name: impl Into<String>,
        visible: bool,
        transitive: bool,
        extends_from: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            visible,
            transitive,
            extends_from: extends_from.into_iter().map(Into::into).collect(),
        }
    }

    /// Visible, transitive configuration extending nothing
    pub fn public(name: impl Into<String>) -> Self {
        Self::new(name, true, true, std::iter::empty::<String>())
    }

    pub fn extends(&self, other: &str) -> bool {
        self.extends_from.contains(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_configuration() {
        let conf = Configuration::public("compile");
        assert_eq!(conf.name, "compile");
        assert!(conf.visible);
        assert!(conf.transitive);
        assert!(conf.extends_from.is_empty());
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let conf: Configuration =
            serde_json::from_str(r#"{"name":"runtime","extends_from":["compile"]}"#).unwrap();
        assert!(conf.visible);
        assert!(conf.transitive);
        assert!(conf.extends("compile"));
    }
}
