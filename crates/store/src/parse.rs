// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Reading resources from JSON-AD and RDF.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use ontokit_subject::Subject;
use ontokit_vocab::properties::{ARRAY_PROPERTIES, URL_PROPERTIES};
use oxrdf::vocab::xsd;
use oxrdf::{LiteralRef, NamedNodeRef, Subject as RdfSubject, Term};
use oxrdfio::{RdfFormat, RdfParser};
use serde_json::{Map, Value as JsonValue};

use crate::datatype::Datatype;
use crate::error::{Error, Result};
use crate::resource::Resource;
use crate::value::Value;

pub const JSON_AD_ID: &str = "@id";
pub const JSON_AD_EXTENSIONS: [&str; 2] = ["json", "jsonad"];

fn is_one_of(property: &str, nodes: &[NamedNodeRef<'_>]) -> bool {
    nodes.iter().any(|node| node.as_str() == property)
}

fn validated_subject(subject: &str) -> Result<String> {
    Subject::parse(subject)
        .map(Subject::into_string)
        .map_err(|err| Error::InvalidSubject {
            subject: subject.to_owned(),
            reason: err.to_string(),
        })
}

/// Parses a JSON-AD document:
/// either a single resource object, or an array of them.
/// Named nested resources (objects with an `@id`) are returned as resources
/// of their own, and referenced by subject from their parent.
///
/// # Errors
///
/// - the input is not valid JSON
/// - a top-level object has no `@id`, or its `@id` is not a valid IRI
pub fn json_ad(input: &[u8]) -> Result<Vec<Resource>> {
    let json: JsonValue = serde_json::from_slice(input)?;
    let mut resources = Vec::new();
    match json {
        JsonValue::Array(objects) => {
            for object in objects {
                if let JsonValue::Object(map) = object {
                    json_ad_object(map, &mut resources)?;
                } else {
                    return Err(Error::Syntax(format!(
                        "Expected a JSON-AD resource object, got: {object}"
                    )));
                }
            }
        }
        JsonValue::Object(map) => {
            json_ad_object(map, &mut resources)?;
        }
        other => {
            return Err(Error::Syntax(format!(
                "Expected a JSON-AD resource object or an array of them, got: {other}"
            )));
        }
    }
    Ok(resources)
}

fn json_ad_object(mut map: Map<String, JsonValue>, out: &mut Vec<Resource>) -> Result<String> {
    let subject = match map.remove(JSON_AD_ID) {
        Some(JsonValue::String(subject)) => validated_subject(&subject)?,
        _ => {
            return Err(Error::Syntax(format!(
                "JSON-AD resource without a string '{JSON_AD_ID}': {}",
                JsonValue::Object(map)
            )));
        }
    };
    let mut resource = Resource::new(subject.clone());
    for (property, json_value) in map {
        if let Some(value) = json_ad_value(&subject, &property, json_value, out)? {
            resource.set(property, value);
        }
    }
    out.push(resource);
    Ok(subject)
}

fn json_ad_value(
    subject: &str,
    property: &str,
    json_value: JsonValue,
    out: &mut Vec<Resource>,
) -> Result<Option<Value>> {
    Ok(match json_value {
        JsonValue::Null => None,
        JsonValue::Bool(val) => Some(Value::Boolean(val)),
        JsonValue::Number(num) => num
            .as_i64()
            .map(Value::Integer)
            .or_else(|| num.as_f64().map(Value::Float)),
        JsonValue::String(val) => {
            if is_one_of(property, &URL_PROPERTIES) {
                Some(Value::AtomicUrl(val))
            } else {
                Some(Value::String(val))
            }
        }
        JsonValue::Array(items) => {
            let mut subjects = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    JsonValue::String(val) => subjects.push(val),
                    JsonValue::Object(nested) if nested.contains_key(JSON_AD_ID) => {
                        subjects.push(json_ad_object(nested, out)?);
                    }
                    other => {
                        tracing::warn!(
                            "Only subjects and named resources are supported within arrays -> ignored! ({subject} {property}: {other})"
                        );
                    }
                }
            }
            Some(Value::ResourceArray(subjects))
        }
        JsonValue::Object(nested) => {
            if nested.contains_key(JSON_AD_ID) {
                Some(Value::AtomicUrl(json_ad_object(nested, out)?))
            } else {
                tracing::warn!(
                    "Anonymous nested resources are not supported -> ignored! ({subject} {property})"
                );
                None
            }
        }
    })
}

fn literal_datatype(literal: LiteralRef<'_>) -> Datatype {
    let datatype = literal.datatype();
    if [xsd::INTEGER, xsd::INT, xsd::LONG, xsd::SHORT].contains(&datatype) {
        Datatype::Integer
    } else if [xsd::DECIMAL, xsd::DOUBLE, xsd::FLOAT].contains(&datatype) {
        Datatype::Float
    } else if datatype == xsd::BOOLEAN {
        Datatype::Boolean
    } else {
        match Datatype::from_subject(datatype.as_str()) {
            Datatype::Unknown => Datatype::String,
            known => known,
        }
    }
}

fn append_subject(resource: &mut Resource, property: &str, object: String) {
    let value = match resource.remove(property) {
        Some(Value::ResourceArray(mut subjects)) => {
            subjects.push(object);
            Value::ResourceArray(subjects)
        }
        Some(Value::AtomicUrl(previous)) => Value::ResourceArray(vec![previous, object]),
        Some(_) | None => {
            if is_one_of(property, &ARRAY_PROPERTIES) {
                Value::ResourceArray(vec![object])
            } else {
                Value::AtomicUrl(object)
            }
        }
    };
    resource.set(property, value);
}

/// Reads RDF triples into resources.
///
/// Named node objects become URLs;
/// repeated predicates and the core array properties
/// (e.g. `allowsOnly`) become resource arrays.
/// Literals are typed by their XSD or Atomic Data datatype.
///
/// # Errors
///
/// - the input is not valid in the given format
/// - a typed literal does not match its datatype
pub fn rdf<R>(input: R, format: RdfFormat) -> Result<Vec<Resource>>
where
    R: Read,
{
    let mut resources: BTreeMap<String, Resource> = BTreeMap::new();

    for quad_res in RdfParser::from_format(format).for_reader(input) {
        let quad = quad_res.map_err(|err| Error::Syntax(err.to_string()))?;
        let RdfSubject::NamedNode(subj) = &quad.subject else {
            tracing::warn!("Ignoring triple with subject: {quad:?}");
            continue;
        };
        let property = quad.predicate.as_str();
        let resource = resources
            .entry(subj.as_str().to_owned())
            .or_insert_with(|| Resource::new(subj.as_str()));
        match &quad.object {
            Term::NamedNode(obj) => append_subject(resource, property, obj.as_str().to_owned()),
            Term::Literal(lit) => {
                let value = Value::parse(lit.value(), literal_datatype(lit.as_ref()))?;
                if resource.get(property).is_some() {
                    tracing::warn!(
                        "Multiple literal values for {subj} {property} -> keeping the last one"
                    );
                }
                resource.set(property, value);
            }
            other => {
                tracing::warn!("Only named node and literal objects are supported -> ignored! {other:?}");
            }
        }
    }

    Ok(resources.into_values().collect())
}

/// Reads all resources from a file,
/// choosing the format by the file extension
/// (`.json`/`.jsonad` for JSON-AD, otherwise any RDF format known to `oxrdfio`).
///
/// # Errors
///
/// - the file cannot be read
/// - the extension does not indicate a supported format
/// - the content cannot be parsed (see [`json_ad`] and [`rdf`])
pub async fn load_file(path: &Path) -> Result<Vec<Resource>> {
    let ext = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .ok_or_else(|| Error::UnsupportedFormat(path.display().to_string()))?;
    let content = tokio::fs::read(path).await?;
    tracing::debug!("Loading '{}' ...", path.display());
    if JSON_AD_EXTENSIONS.contains(&ext.as_str()) {
        json_ad(&content)
    } else if let Some(format) = RdfFormat::from_extension(&ext) {
        rdf(content.as_slice(), format)
    } else {
        Err(Error::UnsupportedFormat(path.display().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ontokit_vocab::properties;

    const ONT: &str = "https://example.com/ont";

    #[test]
    fn json_ad_with_nested_resources() {
        let input = br#"[
            {
                "@id": "https://example.com/ont",
                "https://atomicdata.dev/properties/shortname": "ont",
                "https://atomicdata.dev/properties/properties": [
                    {
                        "@id": "https://example.com/ont/color",
                        "https://atomicdata.dev/properties/shortname": "color",
                        "https://atomicdata.dev/properties/datatype": "https://atomicdata.dev/datatypes/atomicURL"
                    }
                ],
                "https://example.com/anonymous": { "https://example.com/x": 1 },
                "https://example.com/count": 3,
                "https://example.com/ratio": 0.5
            }
        ]"#;
        let resources = json_ad(input).unwrap();
        assert_eq!(resources.len(), 2);
        let prop = resources
            .iter()
            .find(|r| r.subject() == "https://example.com/ont/color")
            .unwrap();
        assert_eq!(
            prop.get(properties::DATATYPE.as_str()),
            Some(&Value::AtomicUrl(
                "https://atomicdata.dev/datatypes/atomicURL".to_owned()
            ))
        );
        let ont = resources.iter().find(|r| r.subject() == ONT).unwrap();
        assert_eq!(
            ont.get_array(properties::PROPERTIES.as_str()),
            vec!["https://example.com/ont/color".to_owned()]
        );
        assert_eq!(ont.get("https://example.com/anonymous"), None);
        assert_eq!(ont.get("https://example.com/count"), Some(&Value::Integer(3)));
        assert_eq!(ont.get("https://example.com/ratio"), Some(&Value::Float(0.5)));
    }

    #[test]
    fn json_ad_requires_ids() {
        assert!(matches!(
            json_ad(br#"[{"https://atomicdata.dev/properties/shortname": "x"}]"#),
            Err(Error::Syntax(_))
        ));
        assert!(matches!(
            json_ad(br#"{"@id": "not an iri"}"#),
            Err(Error::InvalidSubject { .. })
        ));
        assert!(matches!(json_ad(b"[1, 2"), Err(Error::Json(_))));
    }

    #[test]
    fn turtle_arrays_and_literals() {
        let input = r#"
@prefix p: <https://atomicdata.dev/properties/> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .

<https://example.com/ont>
    p:shortname "ont" ;
    p:properties <https://example.com/ont/color> ;
    p:instances <https://example.com/ont/red> , <https://example.com/ont/blue> .

<https://example.com/ont/color>
    p:parent <https://example.com/ont> ;
    p:see <https://example.com/a> , <https://example.com/b> ;
    p:rank "7"^^xsd:integer ;
    p:deprecated "false"^^xsd:boolean .

_:blank p:shortname "ignored" .
"#;
        let resources = rdf(input.as_bytes(), RdfFormat::Turtle).unwrap();
        assert_eq!(resources.len(), 2);
        let ont = resources.first().unwrap();
        assert_eq!(ont.subject(), ONT);
        assert_eq!(ont.shortname(), Some("ont"));
        assert_eq!(
            ont.get_array(properties::PROPERTIES.as_str()),
            vec!["https://example.com/ont/color".to_owned()]
        );
        assert_eq!(ont.get_array(properties::INSTANCES.as_str()).len(), 2);

        let color = resources.get(1).unwrap();
        assert_eq!(color.parent(), Some(ONT));
        assert_eq!(
            color.get_array("https://atomicdata.dev/properties/see").len(),
            2
        );
        assert_eq!(
            color.get("https://atomicdata.dev/properties/rank"),
            Some(&Value::Integer(7))
        );
        assert_eq!(
            color.get("https://atomicdata.dev/properties/deprecated"),
            Some(&Value::Boolean(false))
        );
    }

    #[test]
    fn turtle_syntax_errors_are_reported() {
        assert!(matches!(
            rdf("<https://example.com/a> <https://example.com/b> ".as_bytes(), RdfFormat::Turtle),
            Err(Error::Syntax(_))
        ));
    }

    #[test]
    fn n_triples_lenient_literals() {
        let input = r#"<https://example.com/a> <https://example.com/flag> "1"^^<http://www.w3.org/2001/XMLSchema#boolean> .
<https://example.com/a> <https://example.com/count> "99999999999999999999"^^<http://www.w3.org/2001/XMLSchema#integer> .
"#;
        let resources = rdf(input.as_bytes(), RdfFormat::NTriples).unwrap();
        assert_eq!(resources.len(), 1);
        let res = &resources[0];
        assert_eq!(res.get("https://example.com/flag"), Some(&Value::Boolean(true)));
        assert_eq!(
            res.get("https://example.com/count"),
            Some(&Value::String("99999999999999999999".to_owned()))
        );
    }
}
