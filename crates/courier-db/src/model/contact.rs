use diesel::{pg::Pg, prelude::*};

use courier_core::contact::{Contact, ContactId, ContactSubmission};

use crate::db::schema;

/// Stored contact row
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = schema::contact)]
#[diesel(check_for_backend(Pg))]
pub struct ContactRow {
    pub id: uuid::Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub message: String,
    pub services: Vec<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<ContactRow> for Contact {
    fn from(row: ContactRow) -> Self {
        Self {
            id: ContactId::from_uuid(row.id),
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            phone_number: row.phone_number,
            message: row.message,
            services: row.services,
            created_at: row.created_at,
        }
    }
}

/// Insert struct for creating new contacts
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::contact)]
pub struct NewContact<'a> {
    pub id: uuid::Uuid,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub phone_number: &'a str,
    pub message: &'a str,
    pub services: &'a [String],
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl<'a> NewContact<'a> {
    #[must_use]
    pub fn new(
        id: ContactId,
        submission: &'a ContactSubmission,
        created_at: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        Self {
            id: id.as_uuid(),
            first_name: &submission.first_name,
            last_name: &submission.last_name,
            email: &submission.email,
            phone_number: &submission.phone_number,
            message: &submission.message,
            services: &submission.services,
            created_at,
        }
    }
}

/// Full replacement of the mutable columns. `id` and `created_at` are not
/// part of the changeset.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = schema::contact)]
pub struct ContactChanges<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub phone_number: &'a str,
    pub message: &'a str,
    pub services: &'a [String],
}

impl<'a> From<&'a ContactSubmission> for ContactChanges<'a> {
    fn from(submission: &'a ContactSubmission) -> Self {
        Self {
            first_name: &submission.first_name,
            last_name: &submission.last_name,
            email: &submission.email,
            phone_number: &submission.phone_number,
            message: &submission.message,
            services: &submission.services,
        }
    }
}
