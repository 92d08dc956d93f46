//! Missing-module marker

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether metadata describes a located module or stands in for one that was not found
///
/// `Normal -> Missing` is the only transition; `Missing` is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetadataState {
    #[default]
    Normal,
    Missing,
}

impl MetadataState {
    pub fn is_missing(self) -> bool {
        self == Self::Missing
    }

    pub(crate) fn mark_missing(&mut self) {
        *self = Self::Missing;
    }
}

impl fmt::Display for MetadataState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Missing => write!(f, "missing"),
        }
    }
}
