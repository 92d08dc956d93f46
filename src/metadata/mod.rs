//! Module metadata: the mutable builder the factory returns and the frozen snapshot
//! handed to graph resolution

pub mod error;
pub mod immutable;
pub mod mutable;
pub mod state;

pub use error::MetadataError;
pub use immutable::{ConfigurationMetadata, IvyModuleResolveMetadata};
pub use mutable::{MutableIvyModuleResolveMetadata, DEFAULT_STATUS, DEFAULT_STATUS_SCHEME};
pub use state::MetadataState;
