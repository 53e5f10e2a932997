//! Identifier grammar shared by the parser and the direct constructors.
//!
//! - common identifier: `[0-9A-Za-z-]+`
//! - numeric identifier: `0` or `[1-9][0-9]*`
//!
//! An identifier counts as numeric only when it is made of ASCII digits
//! alone. Anything containing a letter or a hyphen (`a1`, `1-2`, `-`) is
//! textual, and the leading-zero rule never applies to it.

use std::cmp::Ordering;

use crate::error::{VersionError, VersionResult};

/// Matches `[0-9A-Za-z-]+`.
pub(crate) fn is_common(ident: &str) -> bool {
    !ident.is_empty()
        && ident
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

fn is_all_digits(ident: &str) -> bool {
    !ident.is_empty() && ident.bytes().all(|b| b.is_ascii_digit())
}

/// Matches `0` or `[1-9][0-9]*`.
pub(crate) fn is_numeric(ident: &str) -> bool {
    is_all_digits(ident) && (ident.len() == 1 || !ident.starts_with('0'))
}

/// Parse a major/minor/patch group. `None` on grammar mismatch or overflow.
pub(crate) fn parse_numeric(group: &str) -> Option<u64> {
    if is_numeric(group) {
        group.parse().ok()
    } else {
        None
    }
}

pub(crate) fn check_pre_release(ident: String) -> VersionResult<String> {
    if !is_common(&ident) || (is_all_digits(&ident) && !is_numeric(&ident)) {
        return Err(VersionError::IllegalPreReleaseIdentifier(ident));
    }
    Ok(ident)
}

pub(crate) fn check_build_metadata(ident: String) -> VersionResult<String> {
    if !is_common(&ident) {
        return Err(VersionError::IllegalBuildMetadataIdentifier(ident));
    }
    Ok(ident)
}

/// Precedence of two validated pre-release identifiers.
///
/// Numeric identifiers compare as integers of any length and always sort
/// below textual ones; textual identifiers compare byte-wise.
pub(crate) fn cmp_pre_release(a: &str, b: &str) -> Ordering {
    match (is_numeric(a), is_numeric(b)) {
        // No leading zeros, so the longer digit string is the larger number.
        (true, true) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.cmp(b),
    }
}
