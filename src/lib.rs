//! Ivy Module Metadata - uniform module metadata for dependency resolution
//!
//! This crate turns whatever an Ivy-style repository declared about a module (possibly
//! nothing) into a complete, internally consistent metadata value that graph resolution and
//! variant matching can consume without special cases.
//!
//! ## Flow
//!
//! 1. Descriptor parsing (outside this crate) extracts dependencies, configurations,
//!    artifacts and excludes
//! 2. [`IvyMutableModuleMetadataFactory`] assembles them, synthesizing the `default`
//!    configuration and `<module>.jar` artifact when none were declared
//! 3. The caller freezes the result into an [`IvyModuleResolveMetadata`] snapshot and hands
//!    it to resolution workers
//!
//! A module the repository does not have is still a value: [`MutableModuleMetadataFactory::missing`]
//! returns the default shape flagged as missing.
//!
//! ## Example
//!
//! ```rust
//! use ivy_module_metadata::{
//!     IvyMutableModuleMetadataFactory, ModuleComponentIdentifier, MutableModuleMetadataFactory,
//! };
//!
//! let factory = IvyMutableModuleMetadataFactory::default();
//! let id = ModuleComponentIdentifier::new("org.example", "lib", "1.0");
//! let metadata = factory.create(&id).unwrap().into_immutable();
//!
//! assert_eq!(metadata.id().to_string(), "org.example:lib:1.0");
//! assert_eq!(metadata.configurations()[0].name, "default");
//! assert_eq!(metadata.artifacts()[0].artifact_name.name, "lib");
//! assert!(!metadata.is_missing());
//! ```

pub mod attributes;
pub mod config;
pub mod descriptor;
pub mod factory;
pub mod identifier;
pub mod metadata;
pub mod utils;

pub use attributes::{AttributeSet, AttributesFactory, DefaultAttributesFactory};
pub use config::{ArtifactConfigurationCheck, FactoryConfig, LoggingConfig, MetadataConfig};
pub use descriptor::{
    Artifact, Configuration, Exclude, IvyArtifactName, IvyDependencyDescriptor,
    ModuleComponentSelector, ModulePattern,
};
pub use factory::{
    IvyMutableModuleMetadataFactory, MutableModuleMetadataFactory, DEFAULT_CONFIGURATION,
};
pub use identifier::{
    IdentifierError, InterningIdentifierFactory, ModuleComponentIdentifier, ModuleIdentifier,
    ModuleIdentifierFactory, ModuleVersionIdentifier,
};
pub use metadata::{
    ConfigurationMetadata, IvyModuleResolveMetadata, MetadataError, MetadataState,
    MutableIvyModuleResolveMetadata,
};
