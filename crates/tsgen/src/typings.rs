// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::collections::HashMap;

use once_cell::sync::Lazy;
use ontokit_store::{Datatype, Error as StoreError, Resource, Storelike, Value};
use ontokit_vocab::properties;

use crate::mapping::{dedupe, subject_tail, ts_string_literal, ReverseMapping};
use crate::{Error, Result};

pub const TS_JSON_VALUE: &str = "JSONValue";

pub static DATATYPE_TO_TS: Lazy<HashMap<Datatype, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (Datatype::AtomicUrl, "string"),
        (Datatype::ResourceArray, "string[]"),
        (Datatype::Boolean, "boolean"),
        (Datatype::Date, "string"),
        (Datatype::Timestamp, "string"),
        (Datatype::Integer, "number"),
        (Datatype::Float, "number"),
        (Datatype::String, "string"),
        (Datatype::Slug, "string"),
        (Datatype::Markdown, "string"),
        (Datatype::Uri, "string"),
        (Datatype::Json, TS_JSON_VALUE),
        (Datatype::Unknown, TS_JSON_VALUE),
    ])
});

/// The TypeScript type used for values of the given datatype.
#[must_use]
pub fn ts_type(datatype: Datatype) -> &'static str {
    DATATYPE_TO_TS
        .get(&datatype)
        .copied()
        .unwrap_or(TS_JSON_VALUE)
}

fn mapped<'m>(reverse_mapping: &'m ReverseMapping, subject: &str) -> Result<&'m str> {
    reverse_mapping
        .get(subject)
        .map(String::as_str)
        .ok_or_else(|| Error::MissingReverseMapping(subject.to_owned()))
}

fn interface(name: &str, lines: &[String]) -> String {
    if lines.is_empty() {
        format!("interface {name} {{}}")
    } else {
        format!("interface {name} {{\n{}\n}}", lines.join("\n"))
    }
}

/// Fetches all properties of `ontology`.
/// Properties that are not found are replaced by a stand-in
/// without a datatype, named after the last segment of their subject,
/// the same way [`crate::mapping::generate_base_object`] names them.
async fn ontology_properties<S: Storelike + ?Sized>(
    store: &S,
    ontology: &Resource,
) -> Result<Vec<Resource>> {
    let mut props = Vec::new();
    for subject in dedupe(ontology.get_array(properties::PROPERTIES.as_str())) {
        match store.get_resource(&subject).await {
            Ok(prop) => props.push(prop),
            Err(StoreError::NotFound(_)) => {
                tracing::warn!(
                    "Property '{subject}' is not available; typing it as {TS_JSON_VALUE}"
                );
                let mut stand_in = Resource::new(subject.clone());
                stand_in.set(
                    properties::SHORTNAME.as_str(),
                    Value::String(subject_tail(&subject).to_owned()),
                );
                props.push(stand_in);
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(props)
}

/// Generates the `PropTypeMapping` interface,
/// mapping every property of `ontology`
/// (by its accessor from `reverse_mapping`)
/// to the TypeScript type of its datatype.
///
/// # Errors
///
/// - one of the properties cannot be fetched
///   for another reason than not being found
/// - one of the properties is missing from `reverse_mapping`
pub async fn generate_prop_type_mapping<S: Storelike + ?Sized>(
    store: &S,
    ontology: &Resource,
    reverse_mapping: &ReverseMapping,
) -> Result<String> {
    let mut lines = Vec::new();
    for prop in ontology_properties(store, ontology).await? {
        let datatype = prop
            .get_string(properties::DATATYPE.as_str())
            .map_or(Datatype::Unknown, Datatype::from_subject);
        if datatype == Datatype::Unknown {
            tracing::warn!(
                "Property '{}' has no known datatype; typing it as {TS_JSON_VALUE}",
                prop.subject()
            );
        }
        lines.push(format!(
            "  [{}]: {};",
            mapped(reverse_mapping, prop.subject())?,
            ts_type(datatype)
        ));
    }
    Ok(interface("PropTypeMapping", &lines))
}

/// Generates the `PropSubjectToNameMapping` interface,
/// mapping every property of `ontology` to its shortname.
///
/// # Errors
///
/// - one of the properties cannot be fetched
///   for another reason than not being found
/// - one of the properties is missing from `reverse_mapping`
pub async fn generate_subject_to_name_mapping<S: Storelike + ?Sized>(
    store: &S,
    ontology: &Resource,
    reverse_mapping: &ReverseMapping,
) -> Result<String> {
    let mut lines = Vec::new();
    for prop in ontology_properties(store, ontology).await? {
        let name = prop.shortname().unwrap_or_else(|| prop.title());
        lines.push(format!(
            "  [{}]: {};",
            mapped(reverse_mapping, prop.subject())?,
            ts_string_literal(name)
        ));
    }
    Ok(interface("PropSubjectToNameMapping", &lines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ontokit_store::{MemoryStore, Value};
    use ontokit_vocab::datatypes;

    const ONT: &str = "https://example.com/ont";
    const AGE: &str = "https://example.com/ont/age";
    const TAGS: &str = "https://example.com/ont/tags";
    const BLOB: &str = "https://example.com/ont/blob";

    fn prop(subject: &str, shortname: &str, datatype: Option<&str>) -> Resource {
        let mut res = Resource::new(subject);
        res.set(
            properties::SHORTNAME.as_str(),
            Value::String(shortname.to_owned()),
        );
        if let Some(datatype) = datatype {
            res.set(
                properties::DATATYPE.as_str(),
                Value::AtomicUrl(datatype.to_owned()),
            );
        }
        res
    }

    async fn setup() -> (MemoryStore, Resource, ReverseMapping) {
        let mut ont = Resource::new(ONT);
        ont.set_array(
            properties::PROPERTIES.as_str(),
            vec![AGE.to_owned(), TAGS.to_owned(), BLOB.to_owned()],
        );
        let store = MemoryStore::new();
        store
            .populate(vec![
                prop(AGE, "age", Some(datatypes::INTEGER.as_str())),
                prop(TAGS, "tags", Some(datatypes::RESOURCE_ARRAY.as_str())),
                prop(BLOB, "blob", None),
            ])
            .await;
        let reverse_mapping = ReverseMapping::from([
            (AGE.to_owned(), "ont.properties.age".to_owned()),
            (TAGS.to_owned(), "ont.properties.tags".to_owned()),
            (BLOB.to_owned(), "ont.properties.blob".to_owned()),
        ]);
        (store, ont, reverse_mapping)
    }

    #[test]
    fn datatype_types() {
        assert_eq!(ts_type(Datatype::AtomicUrl), "string");
        assert_eq!(ts_type(Datatype::ResourceArray), "string[]");
        assert_eq!(ts_type(Datatype::Boolean), "boolean");
        assert_eq!(ts_type(Datatype::Timestamp), "string");
        assert_eq!(ts_type(Datatype::Float), "number");
        assert_eq!(ts_type(Datatype::Unknown), "JSONValue");
    }

    #[tokio::test]
    async fn prop_type_mapping() {
        let (store, ont, reverse_mapping) = setup().await;
        let out = generate_prop_type_mapping(&store, &ont, &reverse_mapping)
            .await
            .unwrap();
        assert_eq!(
            out,
            "interface PropTypeMapping {
  [ont.properties.age]: number;
  [ont.properties.tags]: string[];
  [ont.properties.blob]: JSONValue;
}"
        );
    }

    #[tokio::test]
    async fn subject_to_name_mapping() {
        let (store, ont, reverse_mapping) = setup().await;
        let out = generate_subject_to_name_mapping(&store, &ont, &reverse_mapping)
            .await
            .unwrap();
        assert_eq!(
            out,
            "interface PropSubjectToNameMapping {
  [ont.properties.age]: 'age';
  [ont.properties.tags]: 'tags';
  [ont.properties.blob]: 'blob';
}"
        );
    }

    #[tokio::test]
    async fn empty_ontology() {
        let store = MemoryStore::new();
        let out = generate_prop_type_mapping(&store, &Resource::new(ONT), &ReverseMapping::new())
            .await
            .unwrap();
        assert_eq!(out, "interface PropTypeMapping {}");
    }

    #[tokio::test]
    async fn unmapped_property_is_an_error() {
        let (store, ont, mut reverse_mapping) = setup().await;
        reverse_mapping.remove(TAGS);
        assert!(matches!(
            generate_prop_type_mapping(&store, &ont, &reverse_mapping).await,
            Err(Error::MissingReverseMapping(subject)) if subject == TAGS
        ));
    }

    #[tokio::test]
    async fn missing_property_is_typed_as_json() {
        let (store, ont, reverse_mapping) = setup().await;
        store.destroy(AGE).await.unwrap();
        let types = generate_prop_type_mapping(&store, &ont, &reverse_mapping)
            .await
            .unwrap();
        assert!(types.contains("  [ont.properties.age]: JSONValue;\n"));
        let names = generate_subject_to_name_mapping(&store, &ont, &reverse_mapping)
            .await
            .unwrap();
        assert!(names.contains("  [ont.properties.age]: 'age';\n"));
    }

    #[tokio::test]
    async fn shortnames_are_escaped() {
        let (store, ont, reverse_mapping) = setup().await;
        store.save(&prop(BLOB, "it's", None)).await.unwrap();
        let names = generate_subject_to_name_mapping(&store, &ont, &reverse_mapping)
            .await
            .unwrap();
        assert!(names.contains(r"  [ont.properties.blob]: 'it\'s';"));
    }
}
