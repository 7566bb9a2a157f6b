use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

use tokio::sync::watch;

use crate::{Field, FormState, HttpSubmitter, SubmissionStatus, Submitter, validate};

pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";

#[derive(Debug, Clone)]
pub struct ContactFormConfig {
    /// Base URL of the site serving the mail relay.
    pub endpoint: String,
    /// Address offered to visitors when sending fails.
    pub direct_email: String,
    /// How long a status message stays visible.
    pub status_timeout: Duration,
}

impl Default for ContactFormConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:3000".to_owned(),
            direct_email: "contact@folio.localhost".to_owned(),
            status_timeout: Duration::from_secs(6),
        }
    }
}

impl ContactFormConfig {
    pub fn failure_message(&self) -> String {
        format!(
            "Oops! Something went wrong. Please try again or email me directly at {}.",
            self.direct_email
        )
    }
}

/// Holds the contact form, validates it and submits it to the relay.
pub struct ContactForm<S> {
    form: FormState,
    submitter: S,
    config: ContactFormConfig,
    status: Arc<watch::Sender<SubmissionStatus>>,
    generation: Arc<AtomicU64>,
}

impl ContactForm<HttpSubmitter> {
    pub fn http(config: ContactFormConfig) -> Self {
        let submitter = HttpSubmitter::new(&config.endpoint);
        Self::new(submitter, config)
    }
}

impl<S: Submitter> ContactForm<S> {
    pub fn new(submitter: S, config: ContactFormConfig) -> Self {
        let (status, _) = watch::channel(SubmissionStatus::default());

        Self {
            form: FormState::default(),
            submitter,
            config,
            status: Arc::new(status),
            generation: Arc::default(),
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.update_field(field, value);
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SubmissionStatus> {
        self.status.subscribe()
    }

    /// A UI should keep its submit control inert while this is true.
    pub fn is_sending(&self) -> bool {
        self.status.borrow().sending
    }

    /// Validates the form and, when it passes, sends it to the relay.
    ///
    /// Failures of any kind collapse into one generic message and leave the
    /// form untouched. On success every field is cleared.
    ///
    /// # Panics
    ///
    /// Must run inside a tokio runtime: the auto-clear timer is spawned with
    /// `tokio::spawn`.
    pub async fn submit(&mut self) -> SubmissionStatus {
        if let Err(err) = validate(&self.form) {
            tracing::debug!(error = %err, "Contact form rejected locally");
            return self.show(SubmissionStatus::failed(err.to_string()));
        }

        self.show(SubmissionStatus::sending());

        let payload = self.form.to_payload();

        match self.submitter.submit(&payload).await {
            Ok(()) => {
                tracing::info!("Contact form submitted");
                self.form.clear();
                self.show(SubmissionStatus::succeeded(SUCCESS_MESSAGE))
            }
            Err(err) => {
                tracing::warn!(error = %err, "Contact form submission failed");
                self.show(SubmissionStatus::failed(self.config.failure_message()))
            }
        }
    }

    /// Publishes a status and arms the auto-clear timer for it.
    ///
    /// Each call supersedes the pending timer of the previous one.
    fn show(&self, status: SubmissionStatus) -> SubmissionStatus {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.status.send_replace(status.clone());

        if status.is_empty() {
            return status;
        }

        let sender = self.status.clone();
        let current = self.generation.clone();
        let timeout = self.config.status_timeout;

        tokio::spawn(async move {
            tokio::time::sleep(timeout).await;

            sender.send_if_modified(|status| {
                if current.load(Ordering::SeqCst) != generation {
                    return false;
                }
                *status = SubmissionStatus::default();
                true
            });
        });

        status
    }
}
