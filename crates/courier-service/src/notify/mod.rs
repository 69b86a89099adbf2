//! Submission notifications.
//!
//! ## Summary
//! A [`Notifier`] gets exactly one attempt per stored submission. Callers
//! treat failure as informational: the record is already persisted.

pub mod smtp;

use futures::future::BoxFuture;
use thiserror::Error;

use courier_core::contact::{ContactId, ContactSubmission};

pub use smtp::SmtpNotifier;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Invalid email address: {0}")]
    AddressError(#[from] lettre::address::AddressError),

    #[error("Failed to build notification email: {0}")]
    MessageError(#[from] lettre::error::Error),

    #[error("SMTP error: {0}")]
    TransportError(#[from] lettre::transport::smtp::Error),
}

/// Outcome of the notification attempt for one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationStatus {
    Sent,
    Failed,
    Disabled,
}

pub trait Notifier: Send + Sync {
    /// ## Summary
    /// Sends one notification for the stored submission `id`.
    ///
    /// ## Errors
    /// Returns an error if the notification could not be delivered.
    fn notify<'a>(
        &'a self,
        id: ContactId,
        submission: &'a ContactSubmission,
    ) -> BoxFuture<'a, Result<(), NotifyError>>;

    /// Whether this notifier delivers anything at all.
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Notifier used when no mail settings are configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledNotifier;

impl Notifier for DisabledNotifier {
    fn notify<'a>(
        &'a self,
        id: ContactId,
        _submission: &'a ContactSubmission,
    ) -> BoxFuture<'a, Result<(), NotifyError>> {
        Box::pin(async move {
            tracing::debug!(contact_id = %id, "Notifications disabled, skipping");
            Ok(())
        })
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

/// Subject and plain-text body of a submission notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationEmail {
    pub subject: String,
    pub body: String,
}

impl NotificationEmail {
    #[must_use]
    pub fn compose(submission: &ContactSubmission) -> Self {
        let full_name = submission.full_name();
        let services = if submission.services.is_empty() {
            "None".to_string()
        } else {
            submission.services.join(", ")
        };

        Self {
            subject: format!("New Contact Form Submission from {full_name}"),
            body: format!(
                "You have a new contact form submission!\n\n\
                 Full Name: {full_name}\n\
                 Email: {email}\n\
                 Phone: {phone}\n\
                 Services: {services}\n\
                 Message:\n\
                 {message}",
                email = submission.email,
                phone = submission.phone_number,
                message = submission.message,
            ),
        }
    }
}
