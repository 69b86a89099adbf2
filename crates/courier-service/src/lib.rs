//! Courier services: the contact submission flow and its notifier.

pub mod contact;
pub mod error;
pub mod notify;
