//! Metadata construction and lookup errors

use thiserror::Error;

use crate::identifier::IdentifierError;

/// Metadata error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataError {
    #[error("Identifier canonicalization failed: {0}")]
    Identifier(#[from] IdentifierError),
    #[error("Artifact '{artifact}' of {module} is owned by unknown configuration '{configuration}'")]
    UnknownArtifactConfiguration {
        module: String,
        artifact: String,
        configuration: String,
    },
    #[error("Configuration '{configuration}' is not declared by {module}")]
    UnknownConfiguration {
        module: String,
        configuration: String,
    },
}
