// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use ontokit_store::{is_slug, Resource, Value};
use ontokit_subject::Subject;
use ontokit_vocab::{classes, properties};

use crate::{Error, Result};

/// Creates a (not yet saved) tag resource owned by `ontology`,
/// with the subject `{ontology}/{shortname}`.
///
/// # Errors
///
/// - `shortname` is not a slug
/// - the resulting subject is not a valid IRI
pub fn new_tag(
    ontology: &Subject,
    shortname: &str,
    color: Option<&str>,
    emoji: Option<&str>,
) -> Result<Resource> {
    if !is_slug(shortname) {
        return Err(Error::InvalidShortname(shortname.to_owned()));
    }
    let subject = ontology
        .child(shortname)
        .map_err(|err| Error::InvalidSubject(err.to_string()))?;

    let mut tag = Resource::new(subject.into_string());
    tag.set_array(
        properties::IS_A.as_str(),
        vec![classes::TAG.as_str().to_owned()],
    )
    .set(
        properties::PARENT.as_str(),
        Value::AtomicUrl(ontology.as_str().to_owned()),
    )
    .set(
        properties::SHORTNAME.as_str(),
        Value::String(shortname.to_owned()),
    );
    if let Some(color) = color {
        tag.set(properties::COLOR.as_str(), Value::String(color.to_owned()));
    }
    if let Some(emoji) = emoji {
        tag.set(properties::EMOJI.as_str(), Value::String(emoji.to_owned()));
    }
    Ok(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_owned_tag() {
        let ont = Subject::parse("https://example.com/ont").unwrap();
        let tag = new_tag(&ont, "dark-red", Some("#8b0000"), None).unwrap();
        assert_eq!(tag.subject(), "https://example.com/ont/dark-red");
        assert_eq!(tag.parent(), Some("https://example.com/ont"));
        assert_eq!(tag.shortname(), Some("dark-red"));
        assert!(tag.is_instance_of(classes::TAG));
        assert_eq!(tag.get_string(properties::COLOR.as_str()), Some("#8b0000"));
        assert_eq!(tag.get(properties::EMOJI.as_str()), None);
    }

    #[test]
    fn rejects_non_slug_shortnames() {
        let ont = Subject::parse("https://example.com/ont").unwrap();
        assert!(matches!(
            new_tag(&ont, "Dark Red", None, None),
            Err(Error::InvalidShortname(_))
        ));
    }
}
