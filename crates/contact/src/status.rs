/// Outcome of the latest submission, as shown next to the form.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct SubmissionStatus {
    pub sending: bool,
    pub success: bool,
    pub message: String,
}

impl SubmissionStatus {
    pub fn sending() -> Self {
        Self {
            sending: true,
            ..Self::default()
        }
    }

    pub fn succeeded(message: impl Into<String>) -> Self {
        Self {
            sending: false,
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            sending: false,
            success: false,
            message: message.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.message.is_empty()
    }
}
