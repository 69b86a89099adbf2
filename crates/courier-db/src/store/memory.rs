//! In-process contact store.
//!
//! Records live only as long as the process. Used for local development
//! (`database.backend = "memory"`) and tests.

use std::collections::BTreeMap;

use futures::future::BoxFuture;
use tokio::sync::RwLock;

use courier_core::contact::{Contact, ContactId, ContactSubmission};

use crate::error::{DbError, DbResult};

use super::ContactStore;

#[derive(Debug, Default)]
pub struct MemoryContactStore {
    // Keyed by time-ordered id, so iteration order is insertion order.
    contacts: RwLock<BTreeMap<ContactId, Contact>>,
}

impl MemoryContactStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.contacts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.contacts.read().await.is_empty()
    }
}

impl ContactStore for MemoryContactStore {
    fn insert<'a>(&'a self, submission: &'a ContactSubmission) -> BoxFuture<'a, DbResult<ContactId>> {
        Box::pin(async move {
            let mut contacts = self.contacts.write().await;
            let id = ContactId::generate();
            let contact = Contact::from_submission(id, submission.clone(), chrono::Utc::now());
            contacts.insert(id, contact);
            tracing::debug!(contact_id = %id, "Contact inserted");
            Ok(id)
        })
    }

    fn list_all(&self, limit: u32) -> BoxFuture<'_, DbResult<Vec<Contact>>> {
        Box::pin(async move {
            let contacts = self.contacts.read().await;
            let limit = usize::try_from(limit).unwrap_or(usize::MAX);
            Ok(contacts.values().rev().take(limit).cloned().collect())
        })
    }

    fn update<'a>(
        &'a self,
        id: ContactId,
        submission: &'a ContactSubmission,
    ) -> BoxFuture<'a, DbResult<()>> {
        Box::pin(async move {
            let mut contacts = self.contacts.write().await;
            let contact = contacts.get_mut(&id).ok_or(DbError::NotFound(id))?;
            contact.apply(submission.clone());
            Ok(())
        })
    }

    fn delete(&self, id: ContactId) -> BoxFuture<'_, DbResult<()>> {
        Box::pin(async move {
            self.contacts
                .write()
                .await
                .remove(&id)
                .map(|_removed| ())
                .ok_or(DbError::NotFound(id))
        })
    }
}
