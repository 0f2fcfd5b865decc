use serde::Deserialize;
use validator::{Validate, ValidationErrors};

/// Contact form body as posted by the landing page.
///
/// Absent keys, `null` and empty strings are all treated as missing.
#[derive(Debug, Default, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendInput {
    #[validate(required, length(min = 1))]
    pub name_form: Option<String>,
    #[validate(required, length(min = 1))]
    pub email_form: Option<String>,
    #[validate(required, length(min = 1))]
    pub message_form: Option<String>,
}

/// A submission that passed the required-field check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    name: String,
    email: String,
    message: String,
}

impl ContactRequest {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl TryFrom<SendInput> for ContactRequest {
    type Error = ValidationErrors;

    fn try_from(input: SendInput) -> Result<Self, Self::Error> {
        input.validate()?;

        Ok(Self {
            name: input.name_form.unwrap_or_default(),
            email: input.email_form.unwrap_or_default(),
            message: input.message_form.unwrap_or_default(),
        })
    }
}

/// Wire names of the fields that failed validation, sorted.
pub fn missing_fields(errors: &ValidationErrors) -> Vec<String> {
    let mut fields = errors
        .field_errors()
        .keys()
        .map(|field| match &**field {
            "name_form" => "nameForm".to_owned(),
            "email_form" => "emailForm".to_owned(),
            "message_form" => "messageForm".to_owned(),
            other => other.to_owned(),
        })
        .collect::<Vec<_>>();

    fields.sort();
    fields
}
