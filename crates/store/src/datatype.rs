// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt::Display;

use ontokit_vocab::datatypes;
use oxrdf::NamedNodeRef;

/// The datatype of the values of a property,
/// as referenced by the `datatype` property of that property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Datatype {
    AtomicUrl,
    ResourceArray,
    Boolean,
    Date,
    Timestamp,
    Integer,
    Float,
    String,
    Slug,
    Markdown,
    Json,
    Uri,
    /// Anything we do not recognize, including a missing datatype.
    Unknown,
}

const KNOWN: [(Datatype, NamedNodeRef<'_>); 12] = [
    (Datatype::AtomicUrl, datatypes::ATOMIC_URL),
    (Datatype::ResourceArray, datatypes::RESOURCE_ARRAY),
    (Datatype::Boolean, datatypes::BOOLEAN),
    (Datatype::Date, datatypes::DATE),
    (Datatype::Timestamp, datatypes::TIMESTAMP),
    (Datatype::Integer, datatypes::INTEGER),
    (Datatype::Float, datatypes::FLOAT),
    (Datatype::String, datatypes::STRING),
    (Datatype::Slug, datatypes::SLUG),
    (Datatype::Markdown, datatypes::MARKDOWN),
    (Datatype::Json, datatypes::JSON),
    (Datatype::Uri, datatypes::URI),
];

impl Datatype {
    /// Maps the subject of a datatype resource to a `Datatype`.
    #[must_use]
    pub fn from_subject(subject: &str) -> Self {
        KNOWN
            .iter()
            .find(|(_, node)| node.as_str() == subject)
            .map_or(Self::Unknown, |(datatype, _)| *datatype)
    }

    /// The subject of the datatype resource,
    /// or `None` for [`Datatype::Unknown`].
    #[must_use]
    pub fn subject(self) -> Option<&'static str> {
        KNOWN
            .iter()
            .find(|(datatype, _)| *datatype == self)
            .map(|(_, node)| node.as_str())
    }
}

impl Display for Datatype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.subject() {
            Some(subject) => write!(f, "{subject}"),
            None => write!(f, "unknown-datatype"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_subjects_both_ways() {
        for (datatype, node) in KNOWN {
            assert_eq!(Datatype::from_subject(node.as_str()), datatype);
            assert_eq!(datatype.subject(), Some(node.as_str()));
        }
    }

    #[test]
    fn unrecognized_subjects_are_unknown() {
        assert_eq!(
            Datatype::from_subject("https://example.com/datatypes/color"),
            Datatype::Unknown
        );
        assert_eq!(Datatype::Unknown.subject(), None);
        assert_eq!(Datatype::Unknown.to_string(), "unknown-datatype");
    }
}
