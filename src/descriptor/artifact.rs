//! Published artifact descriptors

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// File classifier of a published artifact
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IvyArtifactName {
    pub name: String,
    #[serde(rename = "type")]
    pub artifact_type: String,
    pub extension: Option<String>,
    #[serde(default)]
    pub classifier: Option<String>,
}

impl IvyArtifactName {
    pub fn new(
        name: impl Into<String>,
        artifact_type: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            artifact_type: artifact_type.into(),
            extension: Some(extension.into()),
            classifier: None,
        }
    }

    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }
}

impl fmt::Display for IvyArtifactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(classifier) = &self.classifier {
            write!(f, "-{}", classifier)?;
        }
        if let Some(extension) = &self.extension {
            write!(f, ".{}", extension)?;
        }
        if self.extension.as_deref() != Some(self.artifact_type.as_str()) {
            write!(f, " ({})", self.artifact_type)?;
        }
        Ok(())
    }
}

/// An artifact together with the configurations that publish it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Artifact {
    pub artifact_name: IvyArtifactName,
    pub configurations: BTreeSet<String>,
}

impl Artifact {
    pub fn new(
        artifact_name: IvyArtifactName,
        configurations: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            artifact_name,
            configurations: configurations.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &IvyArtifactName {
        &self.artifact_name
    }

    /// Whether any of `configurations` publishes this artifact
    pub fn belongs_to_any<'a>(&self, configurations: impl IntoIterator<Item = &'a str>) -> bool {
        configurations
            .into_iter()
            .any(|conf| self.configurations.contains(conf))
    }
}
