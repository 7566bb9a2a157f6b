//! Mail transport backed by lettre

use std::sync::Arc;

use async_trait::async_trait;
use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
};
use serde::Deserialize;
use tokio::sync::Mutex;

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    /// Account identity used to authenticate the SMTP session.
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    /// Sender address. Falls back to `smtp_username` when empty.
    #[serde(default)]
    pub from_address: String,
    /// Recipient used when a request does not name one.
    #[serde(default = "default_contact_address")]
    pub contact_address: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_address: String::new(),
            contact_address: default_contact_address(),
        }
    }
}

impl EmailConfig {
    pub fn sender(&self) -> &str {
        if self.from_address.is_empty() {
            &self.smtp_username
        } else {
            &self.from_address
        }
    }

    fn has_credentials(&self) -> bool {
        !self.smtp_username.is_empty() && !self.smtp_password.is_empty()
    }
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

fn default_smtp_port() -> u16 {
    465
}

pub fn default_contact_address() -> String {
    "contact@folio.localhost".to_string()
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("{0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("mail transport task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("{0}")]
    Rejected(String),
}

/// A fully rendered email ready to hand to a transport.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub plain: String,
    pub html: String,
}

/// Delivers one message per call.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, email: OutgoingEmail) -> Result<(), TransportError>;
}

/// SMTP transport that opens a fresh session for every message.
#[derive(Debug, Clone)]
pub struct SmtpMailTransport {
    config: EmailConfig,
}

impl SmtpMailTransport {
    pub fn new(config: EmailConfig) -> Self {
        if config.has_credentials() {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                from = %config.sender(),
                "Mail transport configured with authentication and TLS"
            );
        } else {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );
        }

        Self { config }
    }

    fn connect(&self) -> Result<SmtpTransport, TransportError> {
        if !self.config.has_credentials() {
            return Ok(SmtpTransport::builder_dangerous(&self.config.smtp_host)
                .port(self.config.smtp_port)
                .build());
        }

        let creds = Credentials::new(
            self.config.smtp_username.clone(),
            self.config.smtp_password.clone(),
        );

        Ok(SmtpTransport::relay(&self.config.smtp_host)?
            .port(self.config.smtp_port)
            .credentials(creds)
            .build())
    }
}

#[async_trait]
impl MailTransport for SmtpMailTransport {
    #[tracing::instrument(skip_all, fields(to = %email.to, subject = %email.subject))]
    async fn send(&self, email: OutgoingEmail) -> Result<(), TransportError> {
        let from: Mailbox = self.config.sender().parse()?;
        let to: Mailbox = email.to.parse()?;

        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(email.subject)
            .multipart(MultiPart::alternative_plain_html(email.plain, email.html))?;

        let mailer = self.connect()?;

        tokio::task::spawn_blocking(move || mailer.send(&message).map(|_| ())).await??;

        tracing::info!("Email sent");

        Ok(())
    }
}

/// Transport that keeps messages in memory instead of delivering them.
///
/// Intended for tests: it records every message it is given and can be told
/// to fail every call.
#[derive(Clone, Default)]
pub struct MemoryTransport {
    sent: Arc<Mutex<Vec<OutgoingEmail>>>,
    failure: Option<String>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(error: impl Into<String>) -> Self {
        Self {
            sent: Arc::default(),
            failure: Some(error.into()),
        }
    }

    /// Every message handed to this transport, including failed attempts.
    pub async fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl MailTransport for MemoryTransport {
    async fn send(&self, email: OutgoingEmail) -> Result<(), TransportError> {
        self.sent.lock().await.push(email);

        match &self.failure {
            Some(error) => Err(TransportError::Rejected(error.to_owned())),
            None => Ok(()),
        }
    }
}
