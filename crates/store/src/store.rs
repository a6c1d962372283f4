// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{Error, Result};
use crate::resource::Resource;

/// Access to a graph of resources.
///
/// Every call is a complete, awaited round-trip;
/// implementations never hand out references into their storage.
#[async_trait]
pub trait Storelike: Send + Sync {
    /// Fetches the current version of a resource.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if there is no resource with that subject
    async fn get_resource(&self, subject: &str) -> Result<Resource>;

    /// Inserts `resource`, or replaces the stored version of it.
    ///
    /// # Errors
    ///
    /// If the backend fails to persist the resource.
    async fn save(&self, resource: &Resource) -> Result<()>;

    /// Removes a resource.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if there is no resource with that subject
    async fn destroy(&self, subject: &str) -> Result<()>;

    /// The subjects of all resources in the store, in sorted order.
    async fn subjects(&self) -> Vec<String>;
}

/// A [`Storelike`] that keeps all resources in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    resources: RwLock<BTreeMap<String, Resource>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds all the given resources,
    /// replacing already stored ones with the same subject.
    pub async fn populate<I>(&self, resources: I)
    where
        I: IntoIterator<Item = Resource> + Send,
        I::IntoIter: Send,
    {
        let mut store = self.resources.write().await;
        for resource in resources {
            store.insert(resource.subject().to_owned(), resource);
        }
    }
}

#[async_trait]
impl Storelike for MemoryStore {
    async fn get_resource(&self, subject: &str) -> Result<Resource> {
        self.resources
            .read()
            .await
            .get(subject)
            .cloned()
            .ok_or_else(|| Error::NotFound(subject.to_owned()))
    }

    async fn save(&self, resource: &Resource) -> Result<()> {
        tracing::trace!("Saving '{}'", resource.subject());
        self.resources
            .write()
            .await
            .insert(resource.subject().to_owned(), resource.clone());
        Ok(())
    }

    async fn destroy(&self, subject: &str) -> Result<()> {
        tracing::trace!("Destroying '{subject}'");
        self.resources
            .write()
            .await
            .remove(subject)
            .map(|_| ())
            .ok_or_else(|| Error::NotFound(subject.to_owned()))
    }

    async fn subjects(&self) -> Vec<String> {
        self.resources.read().await.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[tokio::test]
    async fn save_get_destroy() {
        let store = MemoryStore::new();
        let mut res = Resource::new("https://example.com/a");
        res.set("https://example.com/p", Value::Integer(1));
        res.save(&store).await.unwrap();
        assert_eq!(store.get_resource("https://example.com/a").await.unwrap(), res);

        res.set("https://example.com/p", Value::Integer(2));
        store.save(&res).await.unwrap();
        assert_eq!(
            store
                .get_resource("https://example.com/a")
                .await
                .unwrap()
                .get("https://example.com/p"),
            Some(&Value::Integer(2))
        );

        res.destroy(&store).await.unwrap();
        assert!(matches!(
            store.get_resource("https://example.com/a").await,
            Err(Error::NotFound(_))
        ));
        assert!(matches!(
            store.destroy("https://example.com/a").await,
            Err(Error::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn populate_orders_subjects() {
        let store = MemoryStore::new();
        store
            .populate(vec![
                Resource::new("https://example.com/b"),
                Resource::new("https://example.com/a"),
            ])
            .await;
        assert_eq!(
            store.subjects().await,
            vec![
                "https://example.com/a".to_owned(),
                "https://example.com/b".to_owned()
            ]
        );
    }
}
