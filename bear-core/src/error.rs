use thiserror::Error;

use crate::PropertyType;

/// Result type for model-level operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("invalid value for {ty} property '{name}': {reason}")]
    InvalidValue {
        name: String,
        ty: PropertyType,
        reason: String,
    },
}

impl Error {
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_value(
        name: impl Into<String>,
        ty: PropertyType,
        reason: impl Into<String>,
    ) -> Self {
        Error::InvalidValue {
            name: name.into(),
            ty,
            reason: reason.into(),
        }
    }
}
