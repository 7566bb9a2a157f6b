use serde::{Deserialize, Serialize};

/// Route of the mail relay endpoint, relative to the site root.
pub const SEND_EMAIL_PATH: &str = "/api/send-email";

/// What a visitor submits through the contact form.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Body accepted by `POST /api/send-email`.
///
/// Every string field falls back to empty when missing: the relay does not
/// validate its input and delivers whatever it is given.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendEmailRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

impl From<SubmissionPayload> for SendEmailRequest {
    fn from(value: SubmissionPayload) -> Self {
        Self {
            name: value.name,
            email: value.email,
            message: value.message,
            subject: Some(value.subject),
            to: None,
        }
    }
}

/// Body returned by `POST /api/send-email`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendEmailResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SendEmailResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}
