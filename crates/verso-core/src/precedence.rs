//! Version precedence.
//!
//! Precedence is a total order on versions that ignores build metadata, so
//! it is coarser than `==`: `1.0.0+a` and `1.0.0+b` have equal precedence
//! but are different versions. Keep the two apart: hashed containers key on
//! [`Version`] directly, ordered containers key on [`ByPrecedence`].

use std::cmp::Ordering;

use crate::identifier;
use crate::version::Version;

impl Version {
    /// Compare by precedence.
    ///
    /// Major, minor and patch compare numerically. With equal base
    /// versions, a release outranks any pre-release, and two pre-releases
    /// compare identifier by identifier. Build metadata is never looked at.
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use verso_core::Version;
    ///
    /// let rc: Version = "1.0.0-rc.1".parse()?;
    /// let release: Version = "1.0.0".parse()?;
    /// assert_eq!(rc.cmp_precedence(&release), Ordering::Less);
    /// # Ok::<(), verso_core::VersionError>(())
    /// ```
    pub fn cmp_precedence(&self, other: &Self) -> Ordering {
        self.major()
            .cmp(&other.major())
            .then(self.minor().cmp(&other.minor()))
            .then(self.patch().cmp(&other.patch()))
            .then_with(|| cmp_pre_release_lists(self.pre_release(), other.pre_release()))
    }

    /// `true` if both versions have the same precedence, whatever their
    /// build metadata.
    pub fn precedence_eq(&self, other: &Self) -> bool {
        self.cmp_precedence(other) == Ordering::Equal
    }
}

fn cmp_pre_release_lists(a: &[String], b: &[String]) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a
            .iter()
            .zip(b)
            .map(|(x, y)| identifier::cmp_pre_release(x, y))
            .find(|ord| ord.is_ne())
            // Equal prefix: the shorter list has lower precedence.
            .unwrap_or_else(|| a.len().cmp(&b.len())),
    }
}

/// Sort versions by ascending precedence.
///
/// The sort is stable, so versions that differ only in build metadata keep
/// their input order.
pub fn sort_by_precedence(versions: &mut [Version]) {
    versions.sort_by(Version::cmp_precedence);
}

/// A [`Version`] ordered (and compared) by precedence.
///
/// `ByPrecedence` implements `Ord` and an `Eq` that agrees with it, which
/// [`Version`] itself does not. Two wrapped versions that differ only in
/// build metadata are equal here, so a `BTreeSet<ByPrecedence>` keeps one
/// of them.
#[derive(Debug, Clone)]
pub struct ByPrecedence(pub Version);

impl ByPrecedence {
    /// Unwrap the version.
    pub fn into_inner(self) -> Version {
        self.0
    }
}

impl From<Version> for ByPrecedence {
    fn from(version: Version) -> Self {
        Self(version)
    }
}

impl PartialEq for ByPrecedence {
    fn eq(&self, other: &Self) -> bool {
        self.0.precedence_eq(&other.0)
    }
}

impl Eq for ByPrecedence {}

impl PartialOrd for ByPrecedence {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByPrecedence {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp_precedence(&other.0)
    }
}
