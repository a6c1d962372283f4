// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Checks the resources of a store against the definitions
//! of their properties and classes.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use ontokit_vocab::{classes, properties};
use oxrdf::NamedNodeRef;

use crate::datatype::Datatype;
use crate::error::{Error, Result};
use crate::resource::Resource;
use crate::store::Storelike;
use crate::value::Value;

/// Datatypes of the core properties,
/// which are usually not part of the validated data itself.
const CORE_PROPERTIES: [(NamedNodeRef<'_>, Datatype); 13] = [
    (properties::ALLOWS_ONLY, Datatype::ResourceArray),
    (properties::CLASSES, Datatype::ResourceArray),
    (properties::COLOR, Datatype::String),
    (properties::DATATYPE, Datatype::AtomicUrl),
    (properties::DESCRIPTION, Datatype::Markdown),
    (properties::EMOJI, Datatype::String),
    (properties::INSTANCES, Datatype::ResourceArray),
    (properties::IS_A, Datatype::ResourceArray),
    (properties::NAME, Datatype::String),
    (properties::PARENT, Datatype::AtomicUrl),
    (properties::PROPERTIES, Datatype::ResourceArray),
    (properties::REQUIRES, Datatype::ResourceArray),
    (properties::SHORTNAME, Datatype::Slug),
];

/// Core classes, which are known even when not part of the validated data.
const CORE_CLASSES: [NamedNodeRef<'_>; 4] = [
    classes::CLASS,
    classes::ONTOLOGY,
    classes::PROPERTY,
    classes::TAG,
];

/// A value that does not match the datatype of its property.
#[derive(Clone, Debug, PartialEq)]
pub struct InvalidAtom {
    pub subject: String,
    pub property: String,
    pub value: Value,
    pub reason: String,
}

/// A property required by a class, but missing on one of its instances.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissingProperty {
    pub subject: String,
    pub property: String,
    pub class: String,
}

/// The outcome of [`validate_store`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationReport {
    pub resource_count: usize,
    /// Number of property-value pairs checked.
    pub atom_count: usize,
    pub invalid_values: Vec<InvalidAtom>,
    pub unfetchable_props: BTreeSet<String>,
    pub unfetchable_classes: BTreeSet<String>,
    pub missing_props: Vec<MissingProperty>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.invalid_values.is_empty()
            && self.unfetchable_props.is_empty()
            && self.unfetchable_classes.is_empty()
            && self.missing_props.is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Checked {} resources with {} atoms: ",
            self.resource_count, self.atom_count
        )?;
        if self.is_valid() {
            return writeln!(f, "valid");
        }
        writeln!(f, "invalid")?;
        for property in &self.unfetchable_props {
            writeln!(f, "Cannot fetch property '{property}'")?;
        }
        for class in &self.unfetchable_classes {
            writeln!(f, "Cannot fetch class '{class}'")?;
        }
        for atom in &self.invalid_values {
            writeln!(
                f,
                "Invalid value '{}' of '{}' in '{}': {}",
                atom.value.to_literal(),
                atom.property,
                atom.subject,
                atom.reason
            )?;
        }
        for missing in &self.missing_props {
            writeln!(
                f,
                "Resource '{}' misses property '{}', required by class '{}'",
                missing.subject, missing.property, missing.class
            )?;
        }
        Ok(())
    }
}

fn core_datatype(property: &str) -> Option<Datatype> {
    CORE_PROPERTIES
        .iter()
        .find(|(core, _)| core.as_str() == property)
        .map(|(_, datatype)| *datatype)
}

/// The datatype of `property`;
/// `Ok(None)` if the property can not be found.
async fn property_datatype<S: Storelike + ?Sized>(
    store: &S,
    property: &str,
) -> Result<Option<Datatype>> {
    match store.get_resource(property).await {
        Ok(prop) => Ok(Some(
            prop.get_string(properties::DATATYPE.as_str())
                .map_or(Datatype::Unknown, Datatype::from_subject),
        )),
        Err(Error::NotFound(_)) => Ok(core_datatype(property)),
        Err(err) => Err(err),
    }
}

/// The properties required by `class`;
/// `Ok(None)` if the class can not be found.
async fn required_properties<S: Storelike + ?Sized>(
    store: &S,
    class: &str,
) -> Result<Option<Vec<String>>> {
    match store.get_resource(class).await {
        Ok(resource) => Ok(Some(resource.get_array(properties::REQUIRES.as_str()))),
        Err(Error::NotFound(_)) if CORE_CLASSES.iter().any(|core| core.as_str() == class) => {
            Ok(Some(Vec::new()))
        }
        Err(Error::NotFound(_)) => Ok(None),
        Err(err) => Err(err),
    }
}

fn check_value(datatype: Datatype, value: &Value) -> std::result::Result<(), String> {
    if datatype == Datatype::Unknown || value.datatype() == datatype {
        return Ok(());
    }
    Value::parse(&value.to_literal(), datatype)
        .map(|_| ())
        .map_err(|err| err.to_string())
}

/// Checks every resource in `store`:
///
/// - whether its values can be parsed as the datatype of their property
/// - whether its properties and classes can be found
///   (core vocabulary terms are always known)
/// - whether it has all the properties required by its classes
///
/// Problems are collected in the returned report,
/// instead of aborting the validation.
///
/// # Errors
///
/// If the store fails in any other way than not finding a resource.
#[allow(clippy::module_name_repetitions)]
pub async fn validate_store<S: Storelike + ?Sized>(store: &S) -> Result<ValidationReport> {
    let mut report = ValidationReport::default();
    let mut datatypes: HashMap<String, Option<Datatype>> = HashMap::new();
    let mut requirements: HashMap<String, Option<Vec<String>>> = HashMap::new();

    for subject in store.subjects().await {
        let resource = store.get_resource(&subject).await?;
        tracing::debug!("Validating '{subject}' ...");
        report.resource_count += 1;
        check_values(store, &resource, &mut datatypes, &mut report).await?;

        for class in resource.is_a() {
            if !requirements.contains_key(&class) {
                let required = required_properties(store, &class).await?;
                requirements.insert(class.clone(), required);
            }
            let Some(Some(required)) = requirements.get(&class) else {
                report.unfetchable_classes.insert(class);
                continue;
            };
            for property in required {
                if resource.get(property).is_none() {
                    report.missing_props.push(MissingProperty {
                        subject: subject.clone(),
                        property: property.clone(),
                        class: class.clone(),
                    });
                }
            }
        }
    }

    Ok(report)
}

async fn check_values<S: Storelike + ?Sized>(
    store: &S,
    resource: &Resource,
    datatypes: &mut HashMap<String, Option<Datatype>>,
    report: &mut ValidationReport,
) -> Result<()> {
    for (property, value) in resource.propvals() {
        report.atom_count += 1;
        if !datatypes.contains_key(property) {
            let datatype = property_datatype(store, property).await?;
            datatypes.insert(property.clone(), datatype);
        }
        let Some(Some(datatype)) = datatypes.get(property) else {
            report.unfetchable_props.insert(property.clone());
            continue;
        };
        if let Err(reason) = check_value(*datatype, value) {
            report.invalid_values.push(InvalidAtom {
                subject: resource.subject().to_owned(),
                property: property.clone(),
                value: value.clone(),
                reason,
            });
        }
    }
    Ok(())
}
