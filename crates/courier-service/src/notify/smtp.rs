//! SMTP notifier built on `lettre`'s async transport.

use futures::future::BoxFuture;
use lettre::message::{Mailbox, header::ContentType};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::Instrument;

use courier_core::config::MailConfig;
use courier_core::contact::{ContactId, ContactSubmission};

use super::{NotificationEmail, Notifier, NotifyError};

/// Sends submission notifications to a fixed recipient over STARTTLS.
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpNotifier {
    /// ## Summary
    /// Builds the notifier from mail settings. No connection is opened until
    /// the first notification is sent.
    ///
    /// ## Errors
    /// Returns an error if the sender or recipient address is malformed, or
    /// the relay host cannot be used for TLS.
    pub fn from_config(config: &MailConfig) -> Result<Self, NotifyError> {
        let from: Mailbox = config.sender().parse()?;
        let to: Mailbox = config.notify_email.parse()?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        tracing::info!(
            host = %config.host,
            port = config.port,
            "SMTP notifier configured"
        );

        Ok(Self { transport, from, to })
    }

    fn build_message(&self, submission: &ContactSubmission) -> Result<Message, NotifyError> {
        let email = NotificationEmail::compose(submission);

        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(email.subject)
            .header(ContentType::TEXT_PLAIN);

        // Replying goes straight to the submitter when their address parses
        // as a mailbox.
        if let Ok(reply_to) = submission.email.parse::<Mailbox>() {
            builder = builder.reply_to(reply_to);
        }

        Ok(builder.body(email.body)?)
    }
}

impl Notifier for SmtpNotifier {
    fn notify<'a>(
        &'a self,
        id: ContactId,
        submission: &'a ContactSubmission,
    ) -> BoxFuture<'a, Result<(), NotifyError>> {
        let span = tracing::info_span!("smtp_notify", contact_id = %id);

        Box::pin(async move {
            let message = self.build_message(submission)?;
            tracing::debug!("Sending notification email");
            let response = self.transport.send(message).await?;
            tracing::debug!(code = %response.code(), "Notification email accepted");
            Ok(())
        }
        .instrument(span))
    }
}
