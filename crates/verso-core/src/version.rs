//! The [`Version`] value type: construction, canonical text and identity.
//!
//! Precedence lives in [`crate::precedence`]. Equality and hashing here are
//! defined on the canonical text, so build metadata takes part in identity
//! even though it never takes part in ordering.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::trace;

use crate::error::{VersionError, VersionResult};
use crate::identifier;

/// The version of the Semantic Versioning grammar this crate implements.
pub static SEMVER_SPEC_VERSION: LazyLock<Version> = LazyLock::new(|| Version::new(2, 0, 0));

/// A validated semantic version.
///
/// Immutable once built. Every constructor validates its input, so holding a
/// `Version` means holding a grammatical one.
///
/// `Version` deliberately has no `Ord`: use
/// [`cmp_precedence`](Version::cmp_precedence) or
/// [`ByPrecedence`](crate::ByPrecedence) for ordering.
#[derive(Debug, Clone)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Box<[String]>,
    build_metadata: Box<[String]>,
    canonical: String,
}

impl Version {
    /// A release version with no pre-release or build metadata.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self::from_validated(major, minor, patch, Box::default(), Box::default())
    }

    /// `major.0.0`
    pub fn major_only(major: u64) -> Self {
        Self::new(major, 0, 0)
    }

    /// `major.minor.0`
    pub fn major_minor(major: u64, minor: u64) -> Self {
        Self::new(major, minor, 0)
    }

    /// Build a version from numeric fields and identifier sequences.
    ///
    /// Identifiers go through the same checks as [`Version::parse`].
    ///
    /// # Errors
    ///
    /// [`VersionError::IllegalPreReleaseIdentifier`] or
    /// [`VersionError::IllegalBuildMetadataIdentifier`] for the first
    /// identifier that fails.
    pub fn with_identifiers<P, B>(
        major: u64,
        minor: u64,
        patch: u64,
        pre_release: P,
        build_metadata: B,
    ) -> VersionResult<Self>
    where
        P: IntoIterator,
        P::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        let pre_release = pre_release
            .into_iter()
            .map(|ident| identifier::check_pre_release(ident.into()))
            .collect::<VersionResult<Box<[String]>>>()?;
        let build_metadata = build_metadata
            .into_iter()
            .map(|ident| identifier::check_build_metadata(ident.into()))
            .collect::<VersionResult<Box<[String]>>>()?;

        Ok(Self::from_validated(
            major,
            minor,
            patch,
            pre_release,
            build_metadata,
        ))
    }

    /// Build a release version from signed fields.
    ///
    /// # Errors
    ///
    /// A negative field fails with the same error kind the parser uses for
    /// that field.
    pub fn from_signed(major: i64, minor: i64, patch: i64) -> VersionResult<Self> {
        let major =
            u64::try_from(major).map_err(|_| VersionError::IllegalMajorVersion(major.to_string()))?;
        let minor =
            u64::try_from(minor).map_err(|_| VersionError::IllegalMinorVersion(minor.to_string()))?;
        let patch =
            u64::try_from(patch).map_err(|_| VersionError::IllegalPatchVersion(patch.to_string()))?;
        Ok(Self::new(major, minor, patch))
    }

    /// Start a [`VersionBuilder`] for the given base version.
    pub const fn builder(major: u64, minor: u64, patch: u64) -> VersionBuilder {
        VersionBuilder {
            major,
            minor,
            patch,
            pre_release: Vec::new(),
            build_metadata: Vec::new(),
        }
    }

    /// Parse `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`.
    ///
    /// The first `+` starts the build metadata and the first `-` before it
    /// starts the pre-release. Nothing is trimmed and no `v` prefix is
    /// accepted.
    ///
    /// # Errors
    ///
    /// Returns the [`VersionError`] variant naming the first part that
    /// failed, checked in order: base group count, major, minor, patch,
    /// pre-release identifiers, build metadata identifiers.
    pub fn parse(text: &str) -> VersionResult<Self> {
        let result = Self::parse_inner(text);
        match &result {
            Ok(_) => trace!(input = text, "parsed version"),
            Err(err) => trace!(input = text, error = %err, "rejected version"),
        }
        result
    }

    fn parse_inner(text: &str) -> VersionResult<Self> {
        let (rest, build) = match text.split_once('+') {
            Some((rest, build)) => (rest, Some(build)),
            None => (text, None),
        };
        let (base, pre) = match rest.split_once('-') {
            Some((base, pre)) => (base, Some(pre)),
            None => (rest, None),
        };

        let groups: Vec<&str> = base.split('.').collect();
        let [major, minor, patch] = groups.as_slice() else {
            return Err(VersionError::InvalidBaseFormat(base.to_string()));
        };

        let major = identifier::parse_numeric(major)
            .ok_or_else(|| VersionError::IllegalMajorVersion((*major).to_string()))?;
        let minor = identifier::parse_numeric(minor)
            .ok_or_else(|| VersionError::IllegalMinorVersion((*minor).to_string()))?;
        let patch = identifier::parse_numeric(patch)
            .ok_or_else(|| VersionError::IllegalPatchVersion((*patch).to_string()))?;

        // An empty section still yields one (empty, invalid) identifier.
        let pre_release = pre.map(|section| section.split('.')).into_iter().flatten();
        let build_metadata = build.map(|section| section.split('.')).into_iter().flatten();

        Self::with_identifiers(major, minor, patch, pre_release, build_metadata)
    }

    fn from_validated(
        major: u64,
        minor: u64,
        patch: u64,
        pre_release: Box<[String]>,
        build_metadata: Box<[String]>,
    ) -> Self {
        let mut canonical = format!("{major}.{minor}.{patch}");
        if !pre_release.is_empty() {
            canonical.push('-');
            canonical.push_str(&pre_release.join("."));
        }
        if !build_metadata.is_empty() {
            canonical.push('+');
            canonical.push_str(&build_metadata.join("."));
        }

        Self {
            major,
            minor,
            patch,
            pre_release,
            build_metadata,
            canonical,
        }
    }

    /// Major version (X in X.Y.Z).
    pub const fn major(&self) -> u64 {
        self.major
    }

    /// Minor version (Y in X.Y.Z).
    pub const fn minor(&self) -> u64 {
        self.minor
    }

    /// Patch version (Z in X.Y.Z).
    pub const fn patch(&self) -> u64 {
        self.patch
    }

    /// Pre-release identifiers in order, e.g. `["alpha", "1"]`.
    pub fn pre_release(&self) -> &[String] {
        &self.pre_release
    }

    /// Build metadata identifiers in order, e.g. `["sha", "5114f85"]`.
    pub fn build_metadata(&self) -> &[String] {
        &self.build_metadata
    }

    /// `true` for `0.y.z`, where anything may change at any time.
    pub const fn is_unstable(&self) -> bool {
        self.major == 0
    }

    /// `true` if there is at least one pre-release identifier.
    pub fn is_prerelease(&self) -> bool {
        !self.pre_release.is_empty()
    }

    /// The canonical text, computed at construction.
    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    /// This version with the build metadata removed.
    pub fn without_build_metadata(&self) -> Self {
        Self::from_validated(
            self.major,
            self.minor,
            self.patch,
            self.pre_release.clone(),
            Box::default(),
        )
    }

    /// `major.minor.patch` only.
    pub fn base(&self) -> Self {
        Self::new(self.major, self.minor, self.patch)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical.hash(state);
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

impl AsRef<str> for Version {
    fn as_ref(&self) -> &str {
        &self.canonical
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = VersionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.canonical)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

/// Incremental construction of a [`Version`], validated on [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct VersionBuilder {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Vec<String>,
    build_metadata: Vec<String>,
}

impl VersionBuilder {
    /// Append a pre-release identifier.
    #[must_use]
    pub fn pre_release<S: Into<String>>(mut self, ident: S) -> Self {
        self.pre_release.push(ident.into());
        self
    }

    /// Append a build metadata identifier.
    #[must_use]
    pub fn build_metadata<S: Into<String>>(mut self, ident: S) -> Self {
        self.build_metadata.push(ident.into());
        self
    }

    /// Validate and build.
    ///
    /// # Errors
    ///
    /// Same as [`Version::with_identifiers`].
    pub fn build(self) -> VersionResult<Version> {
        Version::with_identifiers(
            self.major,
            self.minor,
            self.patch,
            self.pre_release,
            self.build_metadata,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::collections::HashSet;

    fn kind_of(text: &str) -> ErrorKind {
        Version::parse(text).unwrap_err().kind()
    }

    #[test]
    fn constructors_default_to_zero() {
        let v = Version::major_only(3);
        assert_eq!((v.major(), v.minor(), v.patch()), (3, 0, 0));

        let v = Version::major_minor(3, 4);
        assert_eq!((v.major(), v.minor(), v.patch()), (3, 4, 0));

        let v = Version::new(3, 4, 5);
        assert_eq!((v.major(), v.minor(), v.patch()), (3, 4, 5));
        assert!(v.pre_release().is_empty());
        assert!(v.build_metadata().is_empty());
    }

    #[test]
    fn with_identifiers_keeps_order() {
        let v = Version::with_identifiers(1, 2, 3, ["rc", "1"], ["sha", "abc"]).unwrap();
        assert_eq!(v.pre_release(), ["rc", "1"]);
        assert_eq!(v.build_metadata(), ["sha", "abc"]);
        assert_eq!(v.as_str(), "1.2.3-rc.1+sha.abc");
    }

    #[test]
    fn with_identifiers_validates() {
        let err = Version::with_identifiers(1, 0, 0, ["01"], Vec::<String>::new()).unwrap_err();
        assert_eq!(err, VersionError::IllegalPreReleaseIdentifier("01".into()));

        let err = Version::with_identifiers(1, 0, 0, Vec::<String>::new(), ["a.b"]).unwrap_err();
        assert_eq!(err, VersionError::IllegalBuildMetadataIdentifier("a.b".into()));

        assert!(Version::with_identifiers(1, 0, 0, [""], Vec::<String>::new()).is_err());
    }

    #[test]
    fn from_signed_rejects_negative_fields() {
        assert_eq!(
            Version::from_signed(-1, 0, 0).unwrap_err().kind(),
            ErrorKind::IllegalMajorVersion
        );
        assert_eq!(
            Version::from_signed(0, -1, 0).unwrap_err().kind(),
            ErrorKind::IllegalMinorVersion
        );
        assert_eq!(
            Version::from_signed(0, 0, -1).unwrap_err().kind(),
            ErrorKind::IllegalPatchVersion
        );
        assert_eq!(Version::from_signed(1, 2, 3).unwrap(), Version::new(1, 2, 3));
    }

    #[test]
    fn builder_validates_on_build() {
        let v = Version::builder(1, 0, 0)
            .pre_release("beta")
            .pre_release("2")
            .build_metadata("exp")
            .build()
            .unwrap();
        assert_eq!(v.as_str(), "1.0.0-beta.2+exp");

        assert!(Version::builder(1, 0, 0).pre_release("b_2").build().is_err());
    }

    #[test]
    fn spec_version_is_two_zero_zero() {
        assert_eq!(SEMVER_SPEC_VERSION.as_str(), "2.0.0");
        assert!(SEMVER_SPEC_VERSION.pre_release().is_empty());
        assert!(SEMVER_SPEC_VERSION.build_metadata().is_empty());
    }

    #[test]
    fn canonical_text() {
        assert_eq!(Version::new(1, 2, 3).to_string(), "1.2.3");
        assert_eq!(
            Version::with_identifiers(1, 2, 3, ["a", "b"], ["c", "d"])
                .unwrap()
                .to_string(),
            "1.2.3-a.b+c.d"
        );
        assert_eq!(
            Version::with_identifiers(1, 2, 3, Vec::<String>::new(), ["c"])
                .unwrap()
                .to_string(),
            "1.2.3+c"
        );
    }

    #[test]
    fn is_unstable() {
        assert!(Version::major_only(0).is_unstable());
        assert!(!Version::major_only(1).is_unstable());
    }

    #[test]
    fn parse_full() {
        let v = Version::parse("1.2.3-identifier1.identifier2+identifier3.identifier4").unwrap();
        assert_eq!((v.major(), v.minor(), v.patch()), (1, 2, 3));
        assert_eq!(v.pre_release(), ["identifier1", "identifier2"]);
        assert_eq!(v.build_metadata(), ["identifier3", "identifier4"]);
    }

    #[test]
    fn parse_build_without_pre_release() {
        let v = Version::parse("1.2.3+identifier3.identifier4").unwrap();
        assert!(v.pre_release().is_empty());
        assert_eq!(v.build_metadata(), ["identifier3", "identifier4"]);
    }

    #[test]
    fn parse_pre_release_without_build() {
        let v = Version::parse("1.2.3-identifier1.identifier2").unwrap();
        assert_eq!(v.pre_release(), ["identifier1", "identifier2"]);
        assert!(v.build_metadata().is_empty());
    }

    #[test]
    fn parse_hyphen_inside_build_is_not_a_delimiter() {
        let v = Version::parse("1.2.3+build-7").unwrap();
        assert!(v.pre_release().is_empty());
        assert_eq!(v.build_metadata(), ["build-7"]);
    }

    #[test]
    fn parse_later_hyphens_belong_to_pre_release() {
        let v = Version::parse("1.0.0-x-y-z.--").unwrap();
        assert_eq!(v.pre_release(), ["x-y-z", "--"]);
    }

    #[test]
    fn parse_rejects_leading_zeros() {
        assert_eq!(kind_of("01.2.3"), ErrorKind::IllegalMajorVersion);
        assert_eq!(kind_of("1.02.3"), ErrorKind::IllegalMinorVersion);
        assert_eq!(kind_of("1.2.03"), ErrorKind::IllegalPatchVersion);
        assert_eq!(kind_of("1.2.3-04"), ErrorKind::IllegalPreReleaseIdentifier);
        assert_eq!(kind_of("1.2.3-4.05"), ErrorKind::IllegalPreReleaseIdentifier);
    }

    #[test]
    fn parse_allows_leading_zero_in_build() {
        let v = Version::parse("1.2.3-4.5+06").unwrap();
        assert_eq!(v.build_metadata(), ["06"]);
    }

    #[test]
    fn parse_rejects_wrong_group_count() {
        assert_eq!(kind_of("1.2"), ErrorKind::InvalidBaseFormat);
        assert_eq!(kind_of("1.2.3.4"), ErrorKind::InvalidBaseFormat);
        assert_eq!(kind_of(""), ErrorKind::InvalidBaseFormat);
        assert_eq!(kind_of("1-alpha"), ErrorKind::InvalidBaseFormat);
    }

    #[test]
    fn parse_rejects_empty_sections() {
        assert_eq!(kind_of("1.2.3-"), ErrorKind::IllegalPreReleaseIdentifier);
        assert_eq!(kind_of("1.2.3-a..b"), ErrorKind::IllegalPreReleaseIdentifier);
        assert_eq!(kind_of("1.2.3-a."), ErrorKind::IllegalPreReleaseIdentifier);
        assert_eq!(kind_of("1.2.3+"), ErrorKind::IllegalBuildMetadataIdentifier);
        assert_eq!(kind_of("1.2.3+a."), ErrorKind::IllegalBuildMetadataIdentifier);
        assert_eq!(kind_of("1.2."), ErrorKind::IllegalPatchVersion);
    }

    #[test]
    fn parse_only_first_plus_delimits() {
        assert_eq!(
            Version::parse("1.2.3+a+b").unwrap_err(),
            VersionError::IllegalBuildMetadataIdentifier("a+b".into())
        );
    }

    #[test]
    fn parse_rejects_non_grammar_input() {
        assert_eq!(kind_of("v1.2.3"), ErrorKind::IllegalMajorVersion);
        assert_eq!(kind_of(" 1.2.3"), ErrorKind::IllegalMajorVersion);
        assert_eq!(kind_of("1.2.3 "), ErrorKind::IllegalPatchVersion);
        assert_eq!(kind_of("1.2.x"), ErrorKind::IllegalPatchVersion);
        assert_eq!(kind_of("1.2.3-alpha_1"), ErrorKind::IllegalPreReleaseIdentifier);
        assert_eq!(kind_of("18446744073709551616.0.0"), ErrorKind::IllegalMajorVersion);
    }

    #[test]
    fn parse_semver_org_examples() {
        for text in [
            "1.0.0",
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-0.3.7",
            "1.0.0-x.7.z.92",
            "1.0.0-alpha+001",
            "1.0.0+20130313144700",
            "1.0.0-beta+exp.sha.5114f85",
        ] {
            let v: Version = text.parse().unwrap();
            assert_eq!(v.as_str(), text);
        }
    }

    #[test]
    fn parse_is_a_fixed_point_of_canonical_text() {
        for text in ["0.0.0", "10.20.30-rc.1.x-y+build.007", "1.0.0-0a.1-2"] {
            let v = Version::parse(text).unwrap();
            assert_eq!(Version::parse(v.as_str()).unwrap(), v);
        }
        let built = Version::with_identifiers(4, 5, 6, ["z"], ["y"]).unwrap();
        assert_eq!(Version::parse(&built.to_string()).unwrap(), built);
    }

    #[test]
    fn equality_includes_build_metadata() {
        let a = Version::parse("1.0.0-alpha").unwrap();
        let b = Version::parse("1.0.0-alpha+beta").unwrap();
        assert_ne!(a, b);
        assert_eq!(a, Version::parse("1.0.0-alpha").unwrap());
    }

    #[test]
    fn hash_set_uses_canonical_identity() {
        let versions: HashSet<Version> = ["1.0.0", "1.0.0-alpha", "1.0.0-alpha+beta"]
            .into_iter()
            .map(|s| Version::parse(s).unwrap())
            .collect();
        assert_eq!(versions.len(), 3);
        assert!(versions.contains(&Version::parse("1.0.0-alpha+beta").unwrap()));
    }

    #[test]
    fn without_build_metadata_and_base() {
        let v = Version::parse("1.2.3-rc.1+sha.1").unwrap();
        assert_eq!(v.without_build_metadata().as_str(), "1.2.3-rc.1");
        assert_eq!(v.base().as_str(), "1.2.3");
    }

    #[test]
    fn serde_uses_canonical_string() {
        let v = Version::parse("1.2.3-rc.1+sha.1").unwrap();
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "\"1.2.3-rc.1+sha.1\"");
        let back: Version = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn serde_rejects_invalid_text() {
        let err = serde_json::from_str::<Version>("\"1.2\"").unwrap_err();
        assert!(err.to_string().contains("invalid base version"));
    }

    #[test]
    fn version_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Version>();
    }
}
