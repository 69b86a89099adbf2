//! Courier core: configuration, errors and the contact domain model.

pub mod config;
pub mod constants;
pub mod contact;
pub mod error;
