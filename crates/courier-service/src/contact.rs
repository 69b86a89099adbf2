//! Contact submission flow.
//!
//! ## Summary
//! Validate, persist, then notify. The store write is the outcome that
//! matters; notification is best-effort and never undoes or fails a write.

use std::sync::Arc;

use serde_json::{Map, Value};

use courier_core::contact::{Contact, ContactId, validate};
use courier_db::store::ContactStore;

use crate::error::ServiceResult;
use crate::notify::{NotificationStatus, Notifier};

/// Result of a stored submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub id: ContactId,
    pub notification: NotificationStatus,
}

/// Long-lived contact service shared by every request.
pub struct ContactService {
    store: Arc<dyn ContactStore>,
    notifier: Arc<dyn Notifier>,
    list_limit: u32,
}

impl ContactService {
    #[must_use]
    pub fn new(store: Arc<dyn ContactStore>, notifier: Arc<dyn Notifier>, list_limit: u32) -> Self {
        Self {
            store,
            notifier,
            list_limit,
        }
    }

    /// ## Summary
    /// Validates and stores a new submission, then attempts one notification.
    ///
    /// ## Side Effects
    /// - Inserts one contact record
    /// - Sends at most one notification email
    ///
    /// ## Errors
    /// Returns a validation error before touching the store, or a database
    /// error if the insert fails. Notification failures are not errors.
    #[tracing::instrument(skip_all)]
    pub async fn submit(&self, payload: &Map<String, Value>) -> ServiceResult<Submission> {
        let submission = validate(payload)?;

        let id = self.store.insert(&submission).await?;
        tracing::info!(contact_id = %id, "Contact submission stored");

        let notification = if self.notifier.is_enabled() {
            match self.notifier.notify(id, &submission).await {
                Ok(()) => NotificationStatus::Sent,
                Err(e) => {
                    tracing::warn!(contact_id = %id, error = %e, "Failed to send contact notification");
                    NotificationStatus::Failed
                }
            }
        } else {
            NotificationStatus::Disabled
        };

        Ok(Submission { id, notification })
    }

    /// ## Summary
    /// Lists stored contacts, newest first, up to the configured limit.
    ///
    /// ## Errors
    /// Returns a database error if the store cannot be read.
    #[tracing::instrument(skip(self), fields(limit = self.list_limit))]
    pub async fn list(&self) -> ServiceResult<Vec<Contact>> {
        Ok(self.store.list_all(self.list_limit).await?)
    }

    /// ## Summary
    /// Replaces the mutable fields of the contact `raw_id`.
    ///
    /// ## Errors
    /// Returns `InvalidIdentifier` for a malformed id, a validation error for a
    /// bad payload, `NotFound` if no contact matches, or a database error.
    #[tracing::instrument(skip(self, payload))]
    pub async fn update(&self, raw_id: &str, payload: &Map<String, Value>) -> ServiceResult<()> {
        let id: ContactId = raw_id.parse()?;
        let submission = validate(payload)?;

        self.store.update(id, &submission).await?;
        tracing::info!(contact_id = %id, "Contact updated");

        Ok(())
    }

    /// ## Summary
    /// Deletes the contact `raw_id`.
    ///
    /// ## Errors
    /// Returns `InvalidIdentifier` for a malformed id, `NotFound` if no
    /// contact matches, or a database error.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, raw_id: &str) -> ServiceResult<()> {
        let id: ContactId = raw_id.parse()?;

        self.store.delete(id).await?;
        tracing::info!(contact_id = %id, "Contact deleted");

        Ok(())
    }
}
