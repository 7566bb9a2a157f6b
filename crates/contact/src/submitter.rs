use async_trait::async_trait;
use folio_shared::{SEND_EMAIL_PATH, SendEmailRequest, SendEmailResponse, SubmissionPayload};
use reqwest::Client;

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("relay answered {status}: {reason}")]
    Rejected {
        status: reqwest::StatusCode,
        reason: String,
    },
}

/// Sends one payload to the mail relay.
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmitError>;
}

/// Posts submissions as JSON to `{base_url}/api/send-email`.
///
/// Connection failures and any non-2xx answer count as a rejection. No
/// timeout is set beyond what the HTTP client does on its own.
#[derive(Clone, Debug)]
pub struct HttpSubmitter {
    client: Client,
    endpoint: String,
}

impl HttpSubmitter {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl AsRef<str>) -> Self {
        let endpoint = format!(
            "{}{}",
            base_url.as_ref().trim_end_matches('/'),
            SEND_EMAIL_PATH
        );

        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Submitter for HttpSubmitter {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmitError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&SendEmailRequest::from(payload.clone()))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let reason = response
            .json::<SendEmailResponse>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| status.to_string());

        Err(SubmitError::Rejected { status, reason })
    }
}
