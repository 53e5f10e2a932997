//! Error types for verso-core

use serde::Serialize;
use thiserror::Error;

/// Errors raised when text or fields do not form a valid semantic version.
///
/// There is one variant per grammar violation. Each carries the offending
/// text (the whole base for [`InvalidBaseFormat`](Self::InvalidBaseFormat),
/// otherwise the single group or identifier that failed).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// The base version did not split into exactly three dot-separated groups.
    #[error("invalid base version {0:?}: expected MAJOR.MINOR.PATCH")]
    InvalidBaseFormat(String),

    /// The major version is not a numeric identifier, or is negative.
    #[error("illegal major version {0:?}")]
    IllegalMajorVersion(String),

    /// The minor version is not a numeric identifier, or is negative.
    #[error("illegal minor version {0:?}")]
    IllegalMinorVersion(String),

    /// The patch version is not a numeric identifier, or is negative.
    #[error("illegal patch version {0:?}")]
    IllegalPatchVersion(String),

    /// A pre-release identifier is empty, contains a character outside
    /// `[0-9A-Za-z-]`, or is numeric with a leading zero.
    #[error("illegal pre-release identifier {0:?}")]
    IllegalPreReleaseIdentifier(String),

    /// A build metadata identifier is empty or contains a character outside
    /// `[0-9A-Za-z-]`.
    #[error("illegal build metadata identifier {0:?}")]
    IllegalBuildMetadataIdentifier(String),
}

impl VersionError {
    /// The fieldless kind of this error, for matching without the payload.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidBaseFormat(_) => ErrorKind::InvalidBaseFormat,
            Self::IllegalMajorVersion(_) => ErrorKind::IllegalMajorVersion,
            Self::IllegalMinorVersion(_) => ErrorKind::IllegalMinorVersion,
            Self::IllegalPatchVersion(_) => ErrorKind::IllegalPatchVersion,
            Self::IllegalPreReleaseIdentifier(_) => ErrorKind::IllegalPreReleaseIdentifier,
            Self::IllegalBuildMetadataIdentifier(_) => ErrorKind::IllegalBuildMetadataIdentifier,
        }
    }

    /// The text that was rejected.
    pub fn rejected(&self) -> &str {
        match self {
            Self::InvalidBaseFormat(s)
            | Self::IllegalMajorVersion(s)
            | Self::IllegalMinorVersion(s)
            | Self::IllegalPatchVersion(s)
            | Self::IllegalPreReleaseIdentifier(s)
            | Self::IllegalBuildMetadataIdentifier(s) => s,
        }
    }
}

/// Discriminant of [`VersionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// See [`VersionError::InvalidBaseFormat`].
    InvalidBaseFormat,
    /// See [`VersionError::IllegalMajorVersion`].
    IllegalMajorVersion,
    /// See [`VersionError::IllegalMinorVersion`].
    IllegalMinorVersion,
    /// See [`VersionError::IllegalPatchVersion`].
    IllegalPatchVersion,
    /// See [`VersionError::IllegalPreReleaseIdentifier`].
    IllegalPreReleaseIdentifier,
    /// See [`VersionError::IllegalBuildMetadataIdentifier`].
    IllegalBuildMetadataIdentifier,
}

impl ErrorKind {
    /// Returns the kind as a snake_case string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidBaseFormat => "invalid_base_format",
            Self::IllegalMajorVersion => "illegal_major_version",
            Self::IllegalMinorVersion => "illegal_minor_version",
            Self::IllegalPatchVersion => "illegal_patch_version",
            Self::IllegalPreReleaseIdentifier => "illegal_pre_release_identifier",
            Self::IllegalBuildMetadataIdentifier => "illegal_build_metadata_identifier",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result type alias using [`VersionError`].
pub type VersionResult<T> = Result<T, VersionError>;
