//! Courier persistence: diesel schema, row models and the contact store.

pub mod db;
pub mod error;
pub mod model;
pub mod store;
