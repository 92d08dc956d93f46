//! Immutable attribute sets used for variant disambiguation
//!
//! Variant matching itself lives outside this crate; metadata only carries the set.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

/// Attribute key under which a module's status is published
pub const STATUS_ATTRIBUTE: &str = "module.status";

/// Immutable key/value attribute set
///
/// Cloning shares the underlying map. Every "modifying" operation returns a new set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeSet {
    entries: Arc<BTreeMap<String, String>>,
}

impl AttributeSet {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Copy of this set with `key` set to `value`
    pub fn with(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = (*self.entries).clone();
        entries.insert(key.into(), value.into());
        Self {
            entries: Arc::new(entries),
        }
    }

    /// Whether both sets share the same storage
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

/// Attribute Container Factory
pub trait AttributesFactory: Send + Sync {
    /// The empty attribute set
    fn empty_attributes(&self) -> AttributeSet;

    /// Union of two sets; entries of `secondary` win on key collisions
    fn concat(&self, primary: &AttributeSet, secondary: &AttributeSet) -> AttributeSet {
        if secondary.is_empty() {
            return primary.clone();
        }
        if primary.is_empty() {
            return secondary.clone();
        }
        let mut entries = (*primary.entries).clone();
        entries.extend(
            secondary
                .entries
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        AttributeSet {
            entries: Arc::new(entries),
        }
    }
}

/// Attributes factory handing out a single shared empty set
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultAttributesFactory;

impl AttributesFactory for DefaultAttributesFactory {
    fn empty_attributes(&self) -> AttributeSet {
        static EMPTY: OnceLock<AttributeSet> = OnceLock::new();
        EMPTY.get_or_init(AttributeSet::default).clone()
    }
}
