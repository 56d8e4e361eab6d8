//! Lookup errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A string that does not name anything in the icon font.
#[derive(Eq, PartialEq, Clone, Debug, Serialize, Deserialize, Error, Hash)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum IconError {
    #[error("Unknown icon name: {0:?}")]
    UnknownIcon(String),

    /// Carries the prefix but is not one of the font's class names.
    #[error("Unknown icon class name: {0:?}")]
    UnknownClassName(String),

    #[error("Class name {0:?} does not start with \"{prefix}\"", prefix = crate::SUI_ICONS_PREFIX)]
    MissingPrefix(String),
}

impl IconError {
    /// The rejected input.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            IconError::UnknownIcon(v)
            | IconError::UnknownClassName(v)
            | IconError::MissingPrefix(v) => v,
        }
    }
}
