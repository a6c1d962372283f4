// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::collections::BTreeMap;

use ontokit_vocab::properties;
use oxrdf::NamedNodeRef;

use crate::error::Result;
use crate::store::Storelike;
use crate::value::Value;

/// A single node of the graph:
/// its subject, plus a map from property subjects to values.
#[derive(Clone, Debug, PartialEq)]
pub struct Resource {
    subject: String,
    propvals: BTreeMap<String, Value>,
}

impl Resource {
    #[must_use]
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            propvals: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub const fn propvals(&self) -> &BTreeMap<String, Value> {
        &self.propvals
    }

    #[must_use]
    pub fn get(&self, property: &str) -> Option<&Value> {
        self.propvals.get(property)
    }

    pub fn set(&mut self, property: impl Into<String>, value: Value) -> &mut Self {
        self.propvals.insert(property.into(), value);
        self
    }

    pub fn remove(&mut self, property: &str) -> Option<Value> {
        self.propvals.remove(property)
    }

    /// The string content of a string or URL valued property.
    #[must_use]
    pub fn get_string(&self, property: &str) -> Option<&str> {
        self.get(property).and_then(Value::as_str)
    }

    /// The subjects stored in a resource array property.
    /// A missing property (or one of a different type) yields an empty list.
    #[must_use]
    pub fn get_array(&self, property: &str) -> Vec<String> {
        self.get(property)
            .and_then(Value::as_array)
            .map(<[String]>::to_vec)
            .unwrap_or_default()
    }

    pub fn set_array(&mut self, property: impl Into<String>, subjects: Vec<String>) -> &mut Self {
        self.set(property, Value::ResourceArray(subjects))
    }

    #[must_use]
    pub fn shortname(&self) -> Option<&str> {
        self.get_string(properties::SHORTNAME.as_str())
    }

    #[must_use]
    pub fn parent(&self) -> Option<&str> {
        self.get_string(properties::PARENT.as_str())
    }

    #[must_use]
    pub fn is_a(&self) -> Vec<String> {
        self.get_array(properties::IS_A.as_str())
    }

    /// Whether the `isA` property of this resource lists `class`.
    #[must_use]
    pub fn is_instance_of(&self, class: NamedNodeRef<'_>) -> bool {
        self.get(properties::IS_A.as_str())
            .and_then(Value::as_array)
            .is_some_and(|classes| classes.iter().any(|c| c == class.as_str()))
    }

    /// A human readable title: the name, else the shortname, else the subject.
    #[must_use]
    pub fn title(&self) -> &str {
        self.get_string(properties::NAME.as_str())
            .or_else(|| self.shortname())
            .unwrap_or(&self.subject)
    }

    /// Stores this resource in `store`, replacing any previous version.
    ///
    /// # Errors
    ///
    /// See [`Storelike::save`].
    pub async fn save<S: Storelike + ?Sized>(&self, store: &S) -> Result<()> {
        store.save(self).await
    }

    /// Removes this resource from `store`.
    ///
    /// # Errors
    ///
    /// See [`Storelike::destroy`].
    pub async fn destroy<S: Storelike + ?Sized>(&self, store: &S) -> Result<()> {
        store.destroy(&self.subject).await
    }
}
