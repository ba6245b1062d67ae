//! Error type for platform path validation.

/// Reason a path fails the rules of a [`Platform`](super::Platform) profile.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum PathValidationError {
    /// Path is empty.
    #[error("path is empty")]
    Empty,

    /// Path contains a null byte.
    #[error("path contains a null byte")]
    NullByte,

    /// Path contains a character the platform does not allow.
    #[error("invalid character {ch:?} at position {position}")]
    InvalidCharacter { ch: char, position: usize },

    /// A path component is a name reserved by the platform.
    #[error("reserved name: {name:?}")]
    ReservedName { name: String },

    /// A path component ends with a space or period (Windows).
    #[error("component ends with a space or period: {component:?}")]
    TrailingCharacter { component: String },

    /// A path component is longer than the platform allows.
    #[error("component is {len} bytes long (max {max})")]
    ComponentTooLong { len: usize, max: usize },

    /// The whole path is longer than the platform allows.
    #[error("path is {len} bytes long (max {max})")]
    PathTooLong { len: usize, max: usize },
}

impl PathValidationError {
    /// Short machine-readable reason, used as a log field.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::NullByte => "null_byte",
            Self::InvalidCharacter { .. } => "invalid_character",
            Self::ReservedName { .. } => "reserved_name",
            Self::TrailingCharacter { .. } => "trailing_character",
            Self::ComponentTooLong { .. } => "component_too_long",
            Self::PathTooLong { .. } => "path_too_long",
        }
    }
}
