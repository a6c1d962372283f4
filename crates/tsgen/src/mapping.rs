// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::collections::{BTreeMap, HashSet};
use std::fmt::Write;

use convert_case::{Case, Casing};
use ontokit_store::{Error as StoreError, Resource, Storelike};
use ontokit_vocab::properties;

use crate::Result;

/// Maps the subject of a class or property
/// to the TypeScript expression referencing it in the generated base object,
/// e.g. `myOntology.properties.firstName`.
pub type ReverseMapping = BTreeMap<String, String>;

/// Turns a title into a camel-cased TypeScript identifier.
///
/// # Examples
///
/// - `"my-ontology"` -> `"myOntology"`
/// - `"First name"` -> `"firstName"`
/// - `"42"` -> `"_42"`
#[must_use]
pub fn ts_identifier(title: &str) -> String {
    let camel: String = title
        .to_case(Case::Camel)
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '$')
        .collect();
    match camel.chars().next() {
        None => "_".to_owned(),
        Some(first) if first.is_ascii_digit() => format!("_{camel}"),
        Some(_) => camel,
    }
}

/// Quotes `text` as a single-quoted TypeScript string literal.
#[must_use]
pub fn ts_string_literal(text: &str) -> String {
    let mut literal = String::with_capacity(text.len() + 2);
    literal.push('\'');
    for c in text.chars() {
        match c {
            '\\' => literal.push_str("\\\\"),
            '\'' => literal.push_str("\\'"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            _ => literal.push(c),
        }
    }
    literal.push('\'');
    literal
}

/// The last non-empty path segment of a subject,
/// used as a title for resources we cannot fetch.
pub(crate) fn subject_tail(subject: &str) -> &str {
    subject
        .trim_end_matches(['/', '#'])
        .rsplit(['/', '#'])
        .next()
        .unwrap_or(subject)
}

/// Removes repeated subjects, keeping the first occurrence.
#[must_use]
pub fn dedupe(subjects: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    subjects
        .into_iter()
        .filter(|subject| seen.insert(subject.clone()))
        .collect()
}

/// Picks `key`, or if already taken, `key__2`, `key__3`, ...
fn unique_key(key: String, seen: &mut HashSet<String>) -> String {
    let mut unique = key.clone();
    let mut distinguishing_idx = 1;
    while seen.contains(&unique) {
        distinguishing_idx += 1;
        unique = format!("{key}__{distinguishing_idx}");
    }
    seen.insert(unique.clone());
    unique
}

async fn keyed_subjects<S: Storelike + ?Sized>(
    store: &S,
    subjects: Vec<String>,
) -> Result<Vec<(String, String)>> {
    let mut seen = HashSet::new();
    let mut keyed = Vec::new();
    for subject in dedupe(subjects) {
        let title = match store.get_resource(&subject).await {
            Ok(resource) => resource.title().to_owned(),
            Err(StoreError::NotFound(_)) => {
                tracing::warn!(
                    "'{subject}' is not available; deriving its name from the subject"
                );
                subject_tail(&subject).to_owned()
            }
            Err(err) => return Err(err.into()),
        };
        keyed.push((unique_key(ts_identifier(&title), &mut seen), subject));
    }
    Ok(keyed)
}

fn object_str(entries: &[(String, String)]) -> String {
    let mut obj = String::from("{\n");
    for (key, subject) in entries {
        let _ = writeln!(obj, "    {key}: {},", ts_string_literal(subject));
    }
    obj.push_str("  }");
    obj
}

/// Generates the base object of an ontology,
/// listing the subjects of all its classes and properties by name,
/// and the reverse mapping from those subjects to the generated accessors.
///
/// # Errors
///
/// If one of the classes or properties cannot be fetched
/// for another reason than not being found.
pub async fn generate_base_object<S: Storelike + ?Sized>(
    store: &S,
    ontology: &Resource,
) -> Result<(String, ReverseMapping)> {
    let name = ts_identifier(ontology.title());
    let classes = keyed_subjects(store, ontology.get_array(properties::CLASSES.as_str())).await?;
    let props = keyed_subjects(store, ontology.get_array(properties::PROPERTIES.as_str())).await?;

    let obj_str = format!(
        "export const {name} = {{\n  classes: {},\n  properties: {},\n}} as const;\n",
        object_str(&classes),
        object_str(&props),
    );

    let mut reverse_mapping = ReverseMapping::new();
    for (key, subject) in classes {
        reverse_mapping.insert(subject, format!("{name}.classes.{key}"));
    }
    for (key, subject) in props {
        reverse_mapping.insert(subject, format!("{name}.properties.{key}"));
    }

    Ok((obj_str, reverse_mapping))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ontokit_store::{MemoryStore, Value};

    #[test]
    fn identifiers() {
        assert_eq!(ts_identifier("my-ontology"), "myOntology");
        assert_eq!(ts_identifier("First name"), "firstName");
        assert_eq!(ts_identifier("42"), "_42");
        assert_eq!(ts_identifier("!!!"), "_");
    }

    #[test]
    fn string_literals() {
        assert_eq!(ts_string_literal("first-name"), "'first-name'");
        assert_eq!(
            ts_string_literal("https://example.com/ont/it's"),
            r"'https://example.com/ont/it\'s'"
        );
        assert_eq!(ts_string_literal(r"a\b"), r"'a\\b'");
        assert_eq!(ts_string_literal("a\nb"), r"'a\nb'");
    }

    #[test]
    fn subject_tails() {
        assert_eq!(subject_tail("https://example.com/ont/color"), "color");
        assert_eq!(subject_tail("https://example.com/ont/color/"), "color");
        assert_eq!(subject_tail("https://example.com/ont#color"), "color");
    }

    fn named(subject: &str, shortname: &str) -> Resource {
        let mut res = Resource::new(subject);
        res.set(
            properties::SHORTNAME.as_str(),
            Value::String(shortname.to_owned()),
        );
        res
    }

    #[tokio::test]
    async fn base_object_and_reverse_mapping() {
        let mut ont = named("https://example.com/ont", "my-ontology");
        ont.set_array(
            properties::CLASSES.as_str(),
            vec!["https://example.com/ont/person".to_owned()],
        );
        ont.set_array(
            properties::PROPERTIES.as_str(),
            vec![
                "https://example.com/ont/first-name".to_owned(),
                "https://example.com/other/first-name".to_owned(),
                "https://example.com/ont/first-name".to_owned(),
                "https://example.com/ont/missing".to_owned(),
                "https://example.com/ont/it's".to_owned(),
            ],
        );
        let store = MemoryStore::new();
        store
            .populate(vec![
                named("https://example.com/ont/person", "person"),
                named("https://example.com/ont/first-name", "first-name"),
                named("https://example.com/other/first-name", "first-name"),
                named("https://example.com/ont/it's", "apostrophe"),
            ])
            .await;

        let (obj, mapping) = generate_base_object(&store, &ont).await.unwrap();

        assert_eq!(
            obj,
            "export const myOntology = {
  classes: {
    person: 'https://example.com/ont/person',
  },
  properties: {
    firstName: 'https://example.com/ont/first-name',
    firstName__2: 'https://example.com/other/first-name',
    missing: 'https://example.com/ont/missing',
    apostrophe: 'https://example.com/ont/it\\'s',
  },
} as const;
"
        );
        assert_eq!(mapping.len(), 5);
        assert_eq!(
            mapping.get("https://example.com/other/first-name").unwrap(),
            "myOntology.properties.firstName__2"
        );
        assert_eq!(
            mapping.get("https://example.com/ont/person").unwrap(),
            "myOntology.classes.person"
        );
    }
}
