//! Module metadata factories
//!
//! One factory per repository format. Each knows how to synthesize a complete metadata
//! shape for a coordinate whose descriptor declared little or nothing.

pub mod ivy;

pub use ivy::{
    default_configuration, IvyMutableModuleMetadataFactory, DEFAULT_ARTIFACT_EXTENSION,
    DEFAULT_ARTIFACT_TYPE, DEFAULT_CONFIGURATION,
};

use crate::identifier::ModuleComponentIdentifier;
use crate::metadata::MetadataError;

/// Creates mutable metadata for a repository format
pub trait MutableModuleMetadataFactory {
    type Metadata;

    /// Metadata with no dependencies and the format's default shape
    fn create(&self, from: &ModuleComponentIdentifier) -> Result<Self::Metadata, MetadataError>;

    /// Same shape as [`create`](Self::create), flagged as standing in for a module
    /// the repository does not have
    fn missing(&self, from: &ModuleComponentIdentifier) -> Result<Self::Metadata, MetadataError>;
}
