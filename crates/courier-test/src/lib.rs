//! Courier contact service - integration test support.
//!
//! This crate re-exports the workspace crates so integration tests can use
//! `courier_test::` paths.

pub use courier_app as app;
pub use courier_core as domain;
pub use courier_db as db;
pub use courier_service as service;
