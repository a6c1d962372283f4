// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt::Display;

use oxiri::{Iri, IriParseError};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// This tests rust code in the README with doc-tests.
// Though, It will not appear in the generated documentation.
#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

/// The absolute IRI identifying a single resource
/// within an Atomic Data graph.
///
/// # Examples
///
/// - `https://atomicdata.dev/properties/allowsOnly`
/// - `https://example.com/ontology/my-ontology`
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Subject {
    iri: Iri<String>,
}

impl Subject {
    /// Creates a new instance of `Subject`.
    ///
    /// # Errors
    ///
    /// Returns an `IriParseError` if the given `iri` is not a valid absolute IRI.
    pub fn parse(iri: impl Into<String>) -> Result<Self, IriParseError> {
        Ok(Self {
            iri: Iri::parse(iri.into())?,
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.iri.as_str()
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.iri.into_inner()
    }

    /// Returns the subject of a resource nested below this one.
    /// A trailing `/` of this subject is not doubled.
    ///
    /// # Examples
    ///
    /// - `https://example.com/ont` + `red` -> \
    ///   `https://example.com/ont/red`
    /// - `https://example.com/ont/` + `red` -> \
    ///   `https://example.com/ont/red`
    ///
    /// # Errors
    ///
    /// Returns an `IriParseError` if the combined IRI is invalid,
    /// e.g. because `path` contains spaces.
    pub fn child(&self, path: &str) -> Result<Self, IriParseError> {
        let base = self.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Self::parse(format!("{base}/{path}"))
    }
}

impl Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.iri.as_str())
    }
}

impl AsRef<str> for Subject {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for Subject {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Subject {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
