use std::sync::Arc;

use async_trait::async_trait;
use folio_contact::{Field, SubmitError, Submitter};
use folio_shared::SubmissionPayload;
use tokio::sync::{Mutex, Notify};

/// Submitter that records payloads instead of sending them.
#[derive(Clone, Default)]
pub struct FakeSubmitter {
    pub calls: Arc<Mutex<Vec<SubmissionPayload>>>,
    pub fail: bool,
    pub gate: Option<Arc<Notify>>,
}

impl FakeSubmitter {
    #[allow(dead_code)]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    #[allow(dead_code)]
    pub fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::default()
        }
    }
}

#[async_trait]
impl Submitter for FakeSubmitter {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmitError> {
        self.calls.lock().await.push(payload.clone());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        if self.fail {
            return Err(SubmitError::Rejected {
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                reason: "535 authentication failed".to_owned(),
            });
        }

        Ok(())
    }
}

#[allow(dead_code)]
pub fn fill<S: Submitter>(
    form: &mut folio_contact::ContactForm<S>,
    name: &str,
    email: &str,
    subject: &str,
    message: &str,
) {
    form.update_field(Field::Name, name);
    form.update_field(Field::Email, email);
    form.update_field(Field::Subject, subject);
    form.update_field(Field::Message, message);
}
