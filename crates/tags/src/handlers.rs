// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use ontokit_store::{Error as StoreError, Resource, Storelike};
use ontokit_vocab::properties;

use crate::Result;

/// What [`EnumHandlers::remove_tag`] did with the tag itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagRemoval {
    /// The tag is still used elsewhere (or not owned by the ontology),
    /// so it was only detached from the property.
    Detached,
    /// Nothing references the tag anymore;
    /// it was removed from the ontology's instances and destroyed.
    Deleted,
}

/// Edits the enumerated (`allowsOnly`) tags of one ontology property.
///
/// Every operation fetches the current versions of the property and ontology
/// from the store, and saves each change right away.
#[derive(Debug)]
pub struct EnumHandlers<'a, S: Storelike + ?Sized> {
    store: &'a S,
    property: String,
    ontology: String,
}

fn without(subjects: Vec<String>, subject: &str) -> Vec<String> {
    subjects.into_iter().filter(|s| s != subject).collect()
}

impl<'a, S: Storelike + ?Sized> EnumHandlers<'a, S> {
    pub fn new(store: &'a S, property: impl Into<String>, ontology: impl Into<String>) -> Self {
        Self {
            store,
            property: property.into(),
            ontology: ontology.into(),
        }
    }

    /// The tags currently allowed by the property.
    ///
    /// # Errors
    ///
    /// If the property cannot be fetched.
    pub async fn allows_only(&self) -> Result<Vec<String>> {
        Ok(self
            .store
            .get_resource(&self.property)
            .await?
            .get_array(properties::ALLOWS_ONLY.as_str()))
    }

    /// The instances (tags) currently owned by the ontology.
    ///
    /// # Errors
    ///
    /// If the ontology cannot be fetched.
    pub async fn instances(&self) -> Result<Vec<String>> {
        Ok(self
            .store
            .get_resource(&self.ontology)
            .await?
            .get_array(properties::INSTANCES.as_str()))
    }

    async fn update_array<F>(&self, subject: &str, property: &str, update: F) -> Result<()>
    where
        F: FnOnce(Vec<String>) -> Vec<String> + Send,
    {
        let mut resource = self.store.get_resource(subject).await?;
        let current = resource.get_array(property);
        resource.set_array(property, update(current));
        resource.save(self.store).await?;
        Ok(())
    }

    /// Allows `tag` on the property, registers it as an instance of the ontology,
    /// and saves the tag itself.
    ///
    /// # Errors
    ///
    /// If the property or ontology cannot be fetched,
    /// or one of the resources cannot be saved.
    pub async fn add_tag(&self, tag: &Resource) -> Result<()> {
        let tag_subject = tag.subject().to_owned();
        tracing::debug!("Adding tag '{tag_subject}' to '{}'", self.property);

        self.update_array(&self.property, properties::ALLOWS_ONLY.as_str(), |mut tags| {
            if !tags.contains(&tag_subject) {
                tags.push(tag_subject.clone());
            }
            tags
        })
        .await?;
        self.update_array(&self.ontology, properties::INSTANCES.as_str(), |mut instances| {
            if !instances.contains(&tag_subject) {
                instances.push(tag_subject.clone());
            }
            instances
        })
        .await?;

        tag.save(self.store).await?;
        Ok(())
    }

    /// Disallows the tag `subject` on the property.
    /// If no other property of the ontology allows it
    /// and the ontology owns it,
    /// it is also removed from the ontology's instances and destroyed.
    ///
    /// # Errors
    ///
    /// If the property or ontology cannot be fetched,
    /// a resource cannot be saved,
    /// or the tag cannot be destroyed.
    pub async fn remove_tag(&self, subject: &str) -> Result<TagRemoval> {
        tracing::debug!("Removing tag '{subject}' from '{}'", self.property);

        self.update_array(&self.property, properties::ALLOWS_ONLY.as_str(), |tags| {
            without(tags, subject)
        })
        .await?;

        let ontology = self.store.get_resource(&self.ontology).await?;
        if is_tag_used(self.store, subject, &ontology).await? {
            tracing::debug!("Tag '{subject}' is still in use; keeping it");
            return Ok(TagRemoval::Detached);
        }

        self.update_array(&self.ontology, properties::INSTANCES.as_str(), |instances| {
            without(instances, subject)
        })
        .await?;
        self.store.destroy(subject).await?;
        tracing::info!("Deleted unused tag '{subject}'");
        Ok(TagRemoval::Deleted)
    }
}

/// Checks whether the tag `tag_subject` must be kept.
///
/// This is the case if it is not owned by `ontology`
/// (its `parent` differs, or it cannot be found at all),
/// or if any property of `ontology` still lists it in its `allowsOnly`.
/// Properties that cannot be found are skipped.
///
/// # Errors
///
/// If fetching the tag or one of the properties fails
/// for another reason than the resource not being found.
pub async fn is_tag_used<S: Storelike + ?Sized>(
    store: &S,
    tag_subject: &str,
    ontology: &Resource,
) -> Result<bool> {
    let tag = match store.get_resource(tag_subject).await {
        Ok(tag) => tag,
        Err(StoreError::NotFound(_)) => {
            tracing::warn!("Tag '{tag_subject}' not found; treating it as not owned by the ontology");
            return Ok(true);
        }
        Err(err) => return Err(err.into()),
    };

    if tag.parent() != Some(ontology.subject()) {
        return Ok(true);
    }

    for property in ontology.get_array(properties::PROPERTIES.as_str()) {
        let property_resource = match store.get_resource(&property).await {
            Ok(res) => res,
            Err(StoreError::NotFound(_)) => {
                tracing::warn!("Property '{property}' of '{}' not found; skipping it", ontology.subject());
                continue;
            }
            Err(err) => return Err(err.into()),
        };
        if property_resource
            .get_array(properties::ALLOWS_ONLY.as_str())
            .iter()
            .any(|allowed| allowed == tag_subject)
        {
            return Ok(true);
        }
    }

    Ok(false)
}
