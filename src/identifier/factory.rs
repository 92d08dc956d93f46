//! Identifier canonicalization
//!
//! Derives canonical identifiers from raw coordinate strings. The interning implementation
//! keeps one shared `Arc<str>` per distinct string so identifiers held by many metadata
//! snapshots do not duplicate their text.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};
use tracing::trace;

use super::{IdentifierError, ModuleIdentifier, ModuleVersionIdentifier};
use crate::utils::{with_read_lock, with_write_lock};

/// Identifier Canonicalizer
///
/// Implementations must be idempotent: equal inputs yield identifiers that compare equal.
pub trait ModuleIdentifierFactory: Send + Sync {
    /// Canonical group + module name
    fn module(&self, group: &str, name: &str) -> Result<ModuleIdentifier, IdentifierError>;

    /// Canonical group + module name + version
    fn module_with_version(
        &self,
        group: &str,
        name: &str,
        version: &str,
    ) -> Result<ModuleVersionIdentifier, IdentifierError>;
}

/// Identifier factory backed by a string interning pool
///
/// Strings are never evicted: the pool lives as long as the factory, so scope the factory
/// to the resolution session whose identifiers it should share.
///
/// Non-empty strings are kept verbatim, whitespace included.
#[derive(Debug, Default)]
pub struct InterningIdentifierFactory {
    strings: RwLock<HashSet<Arc<str>>>,
}

impl InterningIdentifierFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct strings held by the pool
    pub fn interned_count(&self) -> usize {
        with_read_lock(&self.strings, |strings| strings.len())
    }

    fn intern(&self, value: &str) -> Arc<str> {
        if let Some(existing) = with_read_lock(&self.strings, |strings| strings.get(value).cloned())
        {
            return existing;
        }
        with_write_lock(&self.strings, |strings| {
            // Another thread may have inserted between the two locks
            if let Some(existing) = strings.get(value) {
                return Arc::clone(existing);
            }
            let interned: Arc<str> = Arc::from(value);
            strings.insert(Arc::clone(&interned));
            trace!("Interned identifier string '{}'", value);
            interned
        })
    }

    fn check(
        field: &'static str,
        value: &str,
        coordinate: impl FnOnce() -> String,
    ) -> Result<(), IdentifierError> {
        if value.is_empty() {
            return Err(IdentifierError::Empty {
                field,
                coordinate: coordinate(),
            });
        }
        Ok(())
    }
}

impl ModuleIdentifierFactory for InterningIdentifierFactory {
    fn module(&self, group: &str, name: &str) -> Result<ModuleIdentifier, IdentifierError> {
        let coordinate = || format!("{}:{}", group, name);
        Self::check("group", group, coordinate)?;
        Self::check("module name", name, coordinate)?;
        Ok(ModuleIdentifier::from_interned(
            self.intern(group),
            self.intern(name),
        ))
    }

    fn module_with_version(
        &self,
        group: &str,
        name: &str,
        version: &str,
    ) -> Result<ModuleVersionIdentifier, IdentifierError> {
        let coordinate = || format!("{}:{}:{}", group, name, version);
        Self::check("group", group, coordinate)?;
        Self::check("module name", name, coordinate)?;
        let module = ModuleIdentifier::from_interned(self.intern(group), self.intern(name));
        Ok(ModuleVersionIdentifier::from_parts(
            module,
            self.intern(version),
        ))
    }
}
