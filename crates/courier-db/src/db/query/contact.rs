//! Query builder functions for contacts.

use diesel::prelude::*;

use crate::db::schema::contact;

/// ## Summary
/// Returns a query to select all contacts.
#[must_use]
pub fn all() -> contact::BoxedQuery<'static, diesel::pg::Pg> {
    contact::table.into_boxed()
}

/// ## Summary
/// Returns a query for at most `limit` contacts, newest first.
///
/// UUIDv7 ids sort by creation time, so ordering by id is insertion order.
#[must_use]
pub fn newest_first(limit: i64) -> contact::BoxedQuery<'static, diesel::pg::Pg> {
    all().order(contact::id.desc()).limit(limit)
}
