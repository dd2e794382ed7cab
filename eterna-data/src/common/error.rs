use std::fmt::Display;

use thiserror::Error;

use crate::{
    Level,
    Type,
};

/// The category of an [`enum@Error`], which determines how the caller should recover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Caller input is out of contract. Fix the input.
    Configuration,
    /// A static lookup table is incomplete or corrupted. Fix the data file.
    DataIntegrity,
}

/// An error produced by the stat model or the damage engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A caller-supplied field is outside of its declared range.
    #[error("invalid {field}: {reason}")]
    InvalidConfiguration { field: &'static str, reason: String },
    /// The stat curve has no CP multiplier for a legal level.
    #[error("no CP multiplier defined for level {0}")]
    UnknownLevel(Level),
    /// The excellent threshold table has no entry for a move type.
    #[error("no excellent charge threshold defined for type {0}")]
    UnknownTypeThreshold(Type),
}

impl Error {
    /// The category of the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidConfiguration { .. } => ErrorKind::Configuration,
            Self::UnknownLevel(_) | Self::UnknownTypeThreshold(_) => ErrorKind::DataIntegrity,
        }
    }
}

/// Helper for an [`Error::InvalidConfiguration`].
pub fn invalid_configuration<R>(field: &'static str, reason: R) -> Error
where
    R: Display,
{
    Error::InvalidConfiguration {
        field,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod error_test {
    use crate::{
        Error,
        ErrorKind,
        Level,
        Type,
        invalid_configuration,
    };

    #[test]
    fn separates_configuration_from_data_integrity() {
        assert_eq!(
            invalid_configuration("attack_iv", "must be at most 15").kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            Error::UnknownLevel(Level::MAX).kind(),
            ErrorKind::DataIntegrity
        );
        assert_eq!(
            Error::UnknownTypeThreshold(Type::Fire).kind(),
            ErrorKind::DataIntegrity
        );
    }

    #[test]
    fn formats_messages() {
        assert_eq!(
            invalid_configuration("attack_iv", "must be at most 15, got 16").to_string(),
            "invalid attack_iv: must be at most 15, got 16"
        );
        assert_eq!(
            Error::UnknownLevel(Level::MAX).to_string(),
            "no CP multiplier defined for level 51.0"
        );
        assert_eq!(
            Error::UnknownTypeThreshold(Type::Dragon).to_string(),
            "no excellent charge threshold defined for type Dragon"
        );
    }
}
