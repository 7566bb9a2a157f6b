use std::sync::LazyLock;

use folio_shared::SubmissionPayload;
use regex::Regex;
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::Validate;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is valid"));

/// Contact form fields, in the order they are validated.
#[derive(EnumString, Display, VariantArray, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name is required.")]
    NameRequired,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Subject is required.")]
    SubjectRequired,

    #[error("Message must be at least 10 characters long.")]
    MessageTooShort,
}

impl From<Field> for ValidationError {
    fn from(value: Field) -> Self {
        match value {
            Field::Name => Self::NameRequired,
            Field::Email => Self::InvalidEmail,
            Field::Subject => Self::SubjectRequired,
            Field::Message => Self::MessageTooShort,
        }
    }
}

/// In-memory state of the contact form.
#[derive(Validate, Default, Clone, Debug, PartialEq)]
pub struct FormState {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(regex(path = *EMAIL_REGEX))]
    pub email: String,
    #[validate(length(min = 1))]
    pub subject: String,
    #[validate(length(min = 10))]
    pub message: String,
}

impl FormState {
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn to_payload(&self) -> SubmissionPayload {
        SubmissionPayload {
            name: self.name.to_owned(),
            email: self.email.to_owned(),
            subject: self.subject.to_owned(),
            message: self.message.to_owned(),
        }
    }
}

/// Checks the form and reports the first failing rule only.
///
/// Rules run in field order: name, email, subject, message.
pub fn validate(form: &FormState) -> Result<(), ValidationError> {
    let Err(errors) = Validate::validate(form) else {
        return Ok(());
    };

    let failed = errors.field_errors();

    let first = Field::VARIANTS.iter().copied().find(|field| {
        let name: &str = field.as_ref();
        failed.contains_key(name)
    });

    match first {
        Some(field) => Err(field.into()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn valid() -> FormState {
        FormState {
            name: "Jo".to_owned(),
            email: "a@b.com".to_owned(),
            subject: "Hi".to_owned(),
            message: "1234567890".to_owned(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert_eq!(validate(&valid()), Ok(()));
    }

    #[test]
    fn test_empty_name() {
        let form = FormState {
            name: String::new(),
            ..valid()
        };
        let err = validate(&form).unwrap_err();
        assert_eq!(err.to_string(), "Name is required.");
    }

    #[test]
    fn test_bad_email() {
        let form = FormState {
            email: "bad-email".to_owned(),
            ..valid()
        };
        let err = validate(&form).unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid email address.");
    }

    #[test]
    fn test_email_shapes() {
        for email in ["a@b.com", "first.last@sub.domain.io", "x@y.z"] {
            let form = FormState {
                email: email.to_owned(),
                ..valid()
            };
            assert_eq!(validate(&form), Ok(()), "{email} should be accepted");
        }

        for email in ["", "a@b", "@b.com", "a b@c.com", "a@b.", "ab.com"] {
            let form = FormState {
                email: email.to_owned(),
                ..valid()
            };
            assert_eq!(
                validate(&form),
                Err(ValidationError::InvalidEmail),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn test_empty_subject() {
        let form = FormState {
            subject: String::new(),
            ..valid()
        };
        assert_eq!(validate(&form), Err(ValidationError::SubjectRequired));
    }

    #[test]
    fn test_short_message() {
        let form = FormState {
            message: "short".to_owned(),
            ..valid()
        };
        let err = validate(&form).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Message must be at least 10 characters long."
        );

        let form = FormState {
            message: "123456789".to_owned(),
            ..valid()
        };
        assert_eq!(validate(&form), Err(ValidationError::MessageTooShort));
    }

    #[test]
    fn test_only_first_failure_is_reported() {
        assert_eq!(
            validate(&FormState::default()),
            Err(ValidationError::NameRequired)
        );

        let form = FormState {
            email: "nope".to_owned(),
            subject: String::new(),
            message: "short".to_owned(),
            ..valid()
        };
        assert_eq!(validate(&form), Err(ValidationError::InvalidEmail));

        let form = FormState {
            subject: String::new(),
            message: String::new(),
            ..valid()
        };
        assert_eq!(validate(&form), Err(ValidationError::SubjectRequired));
    }

    #[test]
    fn test_update_field_is_idempotent() {
        let mut form = valid();
        form.update_field(Field::Subject, "Hello");
        let once = form.clone();
        form.update_field(Field::Subject, "Hello");

        assert_eq!(form, once);
        assert_eq!(form.get(Field::Subject), "Hello");
    }

    #[test]
    fn test_field_names() {
        assert_eq!(Field::from_str("message"), Ok(Field::Message));
        assert_eq!(Field::Email.to_string(), "email");
        assert!(Field::from_str("phone").is_err());
    }
}
