use std::sync::Arc;

use askama::Template;
use folio_shared::SendEmailRequest;

use crate::{
    MailTransport, OutgoingEmail, TransportError,
    template::{ContactMessageHtml, ContactMessagePlain},
};

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("failed to render email: {0}")]
    Render(#[from] askama::Error),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Turns contact form submissions into emails for the site owner.
///
/// The relay trusts its caller: fields are not validated here, so a request
/// with a missing message still produces an email with an empty body.
#[derive(Clone)]
pub struct ContactRelay {
    transport: Arc<dyn MailTransport>,
    contact_address: String,
}

impl ContactRelay {
    pub fn new(transport: Arc<dyn MailTransport>, contact_address: impl Into<String>) -> Self {
        Self {
            transport,
            contact_address: contact_address.into(),
        }
    }

    pub fn compose(&self, request: &SendEmailRequest) -> Result<OutgoingEmail, RelayError> {
        let to = match request.to.as_deref() {
            Some(to) if !to.trim().is_empty() => to.to_owned(),
            _ => self.contact_address.to_owned(),
        };

        let html = ContactMessageHtml {
            name: &request.name,
            email: &request.email,
            message: &request.message,
        }
        .render()?;

        let plain = ContactMessagePlain {
            name: &request.name,
            email: &request.email,
            message: &request.message,
        }
        .render()?;

        Ok(OutgoingEmail {
            to,
            subject: format!("New message from {} ({})", request.name, request.email),
            plain,
            html,
        })
    }

    /// Hands the submission to the mail transport exactly once.
    pub async fn relay(&self, request: &SendEmailRequest) -> Result<(), RelayError> {
        let email = self.compose(request)?;

        tracing::info!(to = %email.to, subject = %email.subject, "Relaying contact message");

        if let Err(err) = self.transport.send(email).await {
            tracing::error!(error = %err, "Failed to relay contact message");
            return Err(err.into());
        }

        Ok(())
    }
}
