//! Core library for verso.
//!
//! A strict [Semantic Versioning 2.0.0](https://semver.org) value type and
//! nothing else: no ranges, no requirements, no I/O.
//!
//! # Modules
//!
//! - [`version`] - The [`Version`] type: parsing, construction, canonical text
//! - [`precedence`] - Precedence ordering, independent of equality
//! - [`bump`] - Next-version computation
//! - [`error`] - Error types and result aliases
//!
//! # Equality vs. precedence
//!
//! `==` and `Hash` compare the canonical text, build metadata included.
//! [`Version::cmp_precedence`] ignores build metadata. `Version` has no
//! `Ord`; wrap it in [`ByPrecedence`] to put it in ordered containers.
//!
//! # Quick Start
//!
//! ```
//! use std::cmp::Ordering;
//! use verso_core::{ErrorKind, Version};
//!
//! let a: Version = "1.0.0-alpha+001".parse()?;
//! let b: Version = "1.0.0-alpha+002".parse()?;
//!
//! assert_eq!(a.cmp_precedence(&b), Ordering::Equal);
//! assert_ne!(a, b);
//!
//! let err = Version::parse("1.02.3").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::IllegalMinorVersion);
//! # Ok::<(), verso_core::VersionError>(())
//! ```
#![deny(unsafe_code)]

pub mod bump;

pub mod error;

mod identifier;

pub mod precedence;

pub mod version;

pub use bump::{BumpLevel, ParseBumpLevelError};

pub use error::{ErrorKind, VersionError, VersionResult};

pub use precedence::{ByPrecedence, sort_by_precedence};

pub use version::{SEMVER_SPEC_VERSION, Version, VersionBuilder};
