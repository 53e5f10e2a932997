//! Next-version computation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::version::Version;

/// Semver bump level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BumpLevel {
    /// Patch release (x.y.Z).
    Patch,
    /// Minor release (x.Y.0).
    Minor,
    /// Major release (X.0.0).
    Major,
}

impl std::fmt::Display for BumpLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Patch => write!(f, "patch"),
            Self::Minor => write!(f, "minor"),
            Self::Major => write!(f, "major"),
        }
    }
}

/// An unrecognised bump level name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown bump level {0:?}: expected major, minor or patch")]
pub struct ParseBumpLevelError(String);

impl std::str::FromStr for BumpLevel {
    type Err = ParseBumpLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "patch" => Ok(Self::Patch),
            "minor" => Ok(Self::Minor),
            "major" => Ok(Self::Major),
            other => Err(ParseBumpLevelError(other.to_string())),
        }
    }
}

impl Version {
    /// Compute the next version at the given level.
    ///
    /// A pre-release whose base already sits at the requested level is
    /// released as that base (`1.3.0-rc.1` minor → `1.3.0`). Otherwise the
    /// field is incremented and lower fields reset. The result never carries
    /// pre-release or build metadata.
    ///
    /// Returns `None` when the field to increment is already `u64::MAX`.
    pub fn bump(&self, level: BumpLevel) -> Option<Self> {
        let (major, minor, patch) = (self.major(), self.minor(), self.patch());
        let pre = self.is_prerelease();

        let next = match level {
            BumpLevel::Patch if pre => Self::new(major, minor, patch),
            BumpLevel::Patch => Self::new(major, minor, patch.checked_add(1)?),
            BumpLevel::Minor if pre && patch == 0 => Self::new(major, minor, 0),
            BumpLevel::Minor => Self::new(major, minor.checked_add(1)?, 0),
            BumpLevel::Major if pre && minor == 0 && patch == 0 => Self::new(major, 0, 0),
            BumpLevel::Major => Self::new(major.checked_add(1)?, 0, 0),
        };
        Some(next)
    }
}
