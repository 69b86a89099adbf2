//! PostgreSQL-backed contact store.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use futures::future::BoxFuture;
use tracing::Instrument;

use courier_core::contact::{Contact, ContactId, ContactSubmission};

use crate::db::DbProvider;
use crate::db::connection::DbPool;
use crate::db::query::contact as query;
use crate::db::schema::contact;
use crate::error::{DbError, DbResult};
use crate::model::contact::{ContactChanges, ContactRow, NewContact};

use super::ContactStore;

#[derive(Clone)]
pub struct PgContactStore {
    pool: DbPool,
}

impl PgContactStore {
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl ContactStore for PgContactStore {
    fn insert<'a>(&'a self, submission: &'a ContactSubmission) -> BoxFuture<'a, DbResult<ContactId>> {
        let id = ContactId::generate();
        let span = tracing::info_span!("contact_insert", contact_id = %id);

        Box::pin(async move {
            let mut conn = self.pool.get_connection().await?;

            let new_contact = NewContact::new(id, submission, chrono::Utc::now());

            let inserted: uuid::Uuid = diesel::insert_into(contact::table)
                .values(&new_contact)
                .returning(contact::id)
                .get_result(&mut conn)
                .await?;

            tracing::debug!("Contact inserted");

            Ok(ContactId::from_uuid(inserted))
        }
        .instrument(span))
    }

    fn list_all(&self, limit: u32) -> BoxFuture<'_, DbResult<Vec<Contact>>> {
        let span = tracing::info_span!("contact_list", limit);

        Box::pin(async move {
            let mut conn = self.pool.get_connection().await?;

            let rows = query::newest_first(i64::from(limit))
                .select(ContactRow::as_select())
                .load::<ContactRow>(&mut conn)
                .await?;

            tracing::debug!(count = rows.len(), "Contacts loaded");

            Ok(rows.into_iter().map(Contact::from).collect())
        }
        .instrument(span))
    }

    fn update<'a>(
        &'a self,
        id: ContactId,
        submission: &'a ContactSubmission,
    ) -> BoxFuture<'a, DbResult<()>> {
        let span = tracing::info_span!("contact_update", contact_id = %id);

        Box::pin(async move {
            let mut conn = self.pool.get_connection().await?;

            let updated = diesel::update(contact::table.find(id.as_uuid()))
                .set(&ContactChanges::from(submission))
                .execute(&mut conn)
                .await?;

            if updated == 0 {
                return Err(DbError::NotFound(id));
            }

            Ok(())
        }
        .instrument(span))
    }

    fn delete(&self, id: ContactId) -> BoxFuture<'_, DbResult<()>> {
        let span = tracing::info_span!("contact_delete", contact_id = %id);

        Box::pin(async move {
            let mut conn = self.pool.get_connection().await?;

            let deleted = diesel::delete(contact::table.find(id.as_uuid()))
                .execute(&mut conn)
                .await?;

            if deleted == 0 {
                return Err(DbError::NotFound(id));
            }

            Ok(())
        }
        .instrument(span))
    }
}
