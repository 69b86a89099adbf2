//! Contact store gateway.
//!
//! ## Summary
//! [`ContactStore`] is the seam between the contact service and whatever
//! holds the records. Every operation targets one logical collection keyed by
//! [`ContactId`]. Implementations assign ids and `created_at` themselves.

pub mod memory;
pub mod pg;

use futures::future::BoxFuture;

use courier_core::contact::{Contact, ContactId, ContactSubmission};

use crate::error::DbResult;

pub use memory::MemoryContactStore;
pub use pg::PgContactStore;

pub trait ContactStore: Send + Sync {
    /// ## Summary
    /// Persists a new contact, returning its freshly assigned id.
    ///
    /// ## Errors
    /// Returns an error only if the store is unavailable or the write fails.
    fn insert<'a>(&'a self, submission: &'a ContactSubmission) -> BoxFuture<'a, DbResult<ContactId>>;

    /// ## Summary
    /// Returns at most `limit` contacts, newest first.
    ///
    /// ## Errors
    /// Returns an error if the store is unavailable or the read fails.
    fn list_all(&self, limit: u32) -> BoxFuture<'_, DbResult<Vec<Contact>>>;

    /// ## Summary
    /// Replaces every mutable field of the contact `id` in one operation.
    ///
    /// ## Errors
    /// Returns `DbError::NotFound` if no contact has this id.
    fn update<'a>(
        &'a self,
        id: ContactId,
        submission: &'a ContactSubmission,
    ) -> BoxFuture<'a, DbResult<()>>;

    /// ## Summary
    /// Removes the contact `id`.
    ///
    /// ## Errors
    /// Returns `DbError::NotFound` if no contact has this id.
    fn delete(&self, id: ContactId) -> BoxFuture<'_, DbResult<()>>;
}
