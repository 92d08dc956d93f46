//! Descriptor values extracted by repository descriptor parsing
//!
//! All types here are plain values: no back-references into a module graph, freely
//! clonable and serializable.

pub mod artifact;
pub mod configuration;
pub mod dependency;
pub mod exclude;

pub use artifact::{Artifact, IvyArtifactName};
pub use configuration::Configuration;
pub use dependency::{
    IvyDependencyDescriptor, ModuleComponentSelector, OTHER_CONFIGURATIONS, SAME_CONFIGURATION,
};
pub use exclude::{Exclude, ModulePattern, WILDCARD};
