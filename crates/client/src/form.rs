use serde::Serialize;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    /// Required check only: every field must be non-empty.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.message.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }

    pub fn to_payload(&self) -> ContactPayload {
        ContactPayload {
            name_form: self.name.clone(),
            email_form: self.email.clone(),
            message_form: self.message.clone(),
        }
    }
}

/// JSON body of `POST /api/send`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    pub name_form: String,
    pub email_form: String,
    pub message_form: String,
}
