//! Cross-checks against the `semver` crate.
//!
//! Both implement the same grammar, so they must agree on which strings are
//! valid. For inputs without build metadata, `semver`'s `Ord` is pure
//! precedence and must agree with `cmp_precedence`.

use std::collections::HashSet;

use verso_core::{ByPrecedence, ErrorKind, Version, sort_by_precedence};

const VALID: &[&str] = &[
    "0.0.0",
    "0.0.1",
    "0.1.0",
    "1.0.0-0",
    "1.0.0-0.3.7",
    "1.0.0-1",
    "1.0.0-2",
    "1.0.0-10",
    "1.0.0-alpha",
    "1.0.0-alpha.1",
    "1.0.0-alpha.beta",
    "1.0.0-beta",
    "1.0.0-beta.2",
    "1.0.0-beta.11",
    "1.0.0-rc.1",
    "1.0.0-x.7.z.92",
    "1.0.0-x-y-z.--",
    "1.0.0",
    "1.2.3",
    "1.10.0",
    "2.0.0",
    "10.20.30",
];

const INVALID: &[&str] = &[
    "",
    "1",
    "1.2",
    "1.2.3.4",
    "01.2.3",
    "1.02.3",
    "1.2.03",
    "1.2.3-04",
    "1.2.3-",
    "1.2.3+",
    "1.2.3-a..b",
    "1.2.3-alpha_1",
    "1.2.3+a+b",
    "v1.2.3",
    "1.2.x",
    "18446744073709551616.0.0",
];

#[test]
fn accepts_what_semver_accepts() {
    for text in VALID {
        assert!(semver::Version::parse(text).is_ok(), "oracle rejects {text}");
        let v = Version::parse(text).unwrap_or_else(|e| panic!("rejects {text}: {e}"));
        assert_eq!(v.to_string(), *text);
    }
}

#[test]
fn rejects_what_semver_rejects() {
    for text in INVALID {
        assert!(semver::Version::parse(text).is_err(), "oracle accepts {text}");
        assert!(Version::parse(text).is_err(), "accepts {text}");
    }
}

#[test]
fn build_metadata_leading_zero_accepted_by_both() {
    assert!(semver::Version::parse("1.2.3-4.5+06").is_ok());
    assert!(Version::parse("1.2.3-4.5+06").is_ok());
}

#[test]
fn precedence_agrees_with_semver() {
    for a in VALID {
        for b in VALID {
            let ours = Version::parse(a)
                .unwrap()
                .cmp_precedence(&Version::parse(b).unwrap());
            let theirs = semver::Version::parse(a)
                .unwrap()
                .cmp(&semver::Version::parse(b).unwrap());
            assert_eq!(ours, theirs, "{a} vs {b}");
        }
    }
}

#[test]
fn precedence_is_a_total_order() {
    let versions: Vec<Version> = VALID.iter().map(|s| Version::parse(s).unwrap()).collect();
    for a in &versions {
        assert!(a.precedence_eq(a));
        for b in &versions {
            assert_eq!(a.cmp_precedence(b), b.cmp_precedence(a).reverse());
            for c in &versions {
                if a.cmp_precedence(b).is_le() && b.cmp_precedence(c).is_le() {
                    assert!(a.cmp_precedence(c).is_le(), "{a} <= {b} <= {c}");
                }
            }
        }
    }
}

#[test]
fn sorting_reproduces_semver_org_order() {
    let expected = [
        "1.0.0-alpha",
        "1.0.0-alpha.1",
        "1.0.0-alpha.beta",
        "1.0.0-beta",
        "1.0.0-beta.2",
        "1.0.0-beta.11",
        "1.0.0-rc.1",
        "1.0.0",
    ];
    let mut versions: Vec<Version> = expected
        .iter()
        .rev()
        .map(|s| Version::parse(s).unwrap())
        .collect();
    sort_by_precedence(&mut versions);
    let sorted: Vec<String> = versions.iter().map(ToString::to_string).collect();
    assert_eq!(sorted, expected);
}

#[test]
fn equality_is_finer_than_precedence() {
    let a = Version::parse("1.0.0+20130313144700").unwrap();
    let b = Version::parse("1.0.0+exp.sha.5114f85").unwrap();
    assert!(a.precedence_eq(&b));
    assert_ne!(a, b);
    assert!(ByPrecedence(a) == ByPrecedence(b));
}

#[test]
fn hash_set_keeps_build_variants_distinct() {
    let set: HashSet<Version> = ["1.0.0", "1.0.0-alpha", "1.0.0-alpha+beta"]
        .iter()
        .map(|s| Version::parse(s).unwrap())
        .collect();
    assert_eq!(set.len(), 3);
}

#[test]
fn error_kinds_for_leading_zeros() {
    let kinds: Vec<ErrorKind> = ["01.2.3", "1.02.3", "1.2.03", "1.2.3-04"]
        .iter()
        .map(|s| Version::parse(s).unwrap_err().kind())
        .collect();
    assert_eq!(
        kinds,
        [
            ErrorKind::IllegalMajorVersion,
            ErrorKind::IllegalMinorVersion,
            ErrorKind::IllegalPatchVersion,
            ErrorKind::IllegalPreReleaseIdentifier,
        ]
    );
}
