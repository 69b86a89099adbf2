//! HTTP integration tests for the contact API.

mod contact;
mod cors;
