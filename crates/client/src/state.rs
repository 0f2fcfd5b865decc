use reqwest::StatusCode;

use crate::{ContactFields, ContactPayload, Transport, TransportError};

pub const SUCCESS_MESSAGE: &str = "Mensagem enviada com sucesso!";
pub const FAILURE_MESSAGE: &str = "Não foi possível enviar sua mensagem. Tente novamente.";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    /// Carries the user-facing message
    Failed(String),
}

pub struct SubmissionClient<T> {
    transport: T,
    fields: ContactFields,
    state: SubmissionState,
}

impl<T> SubmissionClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            fields: ContactFields::default(),
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn is_success(&self) -> bool {
        self.state == SubmissionState::Succeeded
    }

    pub fn success_message(&self) -> Option<&str> {
        self.is_success().then_some(SUCCESS_MESSAGE)
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            SubmissionState::Failed(reason) => Some(reason.as_str()),
            _ => None,
        }
    }

    /// Inputs and the submit control are disabled while a request is in flight.
    pub fn inputs_disabled(&self) -> bool {
        self.is_submitting()
    }

    /// Whether a page unload should prompt the user.
    pub fn should_block_unload(&self) -> bool {
        self.is_submitting()
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        if !self.inputs_disabled() {
            self.fields.name = value.into();
        }
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        if !self.inputs_disabled() {
            self.fields.email = value.into();
        }
    }

    pub fn set_message(&mut self, value: impl Into<String>) {
        if !self.inputs_disabled() {
            self.fields.message = value.into();
        }
    }

    /// Enter `Submitting` and hand back the body to post.
    ///
    /// Returns `None` without changing state when a request is already in
    /// flight or a field is empty. Submitting while a notice is showing
    /// dismisses it first.
    pub fn begin_submit(&mut self) -> Option<ContactPayload> {
        if self.is_submitting() {
            tracing::debug!("Submission already in flight, ignoring submit");
            return None;
        }

        if !self.fields.is_complete() {
            tracing::debug!("Contact form incomplete, ignoring submit");
            return None;
        }

        self.state = SubmissionState::Submitting;

        Some(self.fields.to_payload())
    }

    /// Apply the relay outcome. Ignored unless a submission is in flight.
    pub fn finish_submit(&mut self, outcome: Result<StatusCode, TransportError>) {
        if !self.is_submitting() {
            tracing::warn!("Received a submission outcome with nothing in flight");
            return;
        }

        self.state = match outcome {
            Ok(status) if status.is_success() => {
                self.fields.clear();
                SubmissionState::Succeeded
            }
            Ok(status) => {
                tracing::warn!(status = status.as_u16(), "Contact relay refused the submission");
                SubmissionState::Failed(FAILURE_MESSAGE.to_owned())
            }
            Err(err) => {
                tracing::warn!(err = %err, "Contact submission failed");
                SubmissionState::Failed(FAILURE_MESSAGE.to_owned())
            }
        };
    }

    /// Close the success or error notice.
    pub fn dismiss(&mut self) {
        if matches!(
            self.state,
            SubmissionState::Succeeded | SubmissionState::Failed(_)
        ) {
            self.state = SubmissionState::Idle;
        }
    }
}

impl<T: Transport> SubmissionClient<T> {
    /// Run one full submission. Returns `false` when the submit was a no-op.
    pub async fn submit(&mut self) -> bool {
        let Some(payload) = self.begin_submit() else {
            return false;
        };

        let outcome = self.transport.post_contact(&payload).await;
        self.finish_submit(outcome);

        true
    }
}
