use std::sync::Arc;

use spm_notification::{EmailProvider, ProviderError};
use validator::ValidationErrors;

use crate::{ContactRequest, SendInput, missing_fields, notification_email};

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("missing required fields: {}", missing_fields(.0).join(", "))]
    Validation(#[from] ValidationErrors),

    #[error("failed to deliver contact notification: {0}")]
    Provider(#[from] ProviderError),
}

/// Forwards contact submissions to the operator inbox.
///
/// Stateless: every call is one provider attempt, with no retry.
#[derive(Clone)]
pub struct Relay {
    provider: Arc<dyn EmailProvider>,
    to: String,
}

impl Relay {
    pub fn new(provider: Arc<dyn EmailProvider>, to: impl Into<String>) -> Self {
        Self {
            provider,
            to: to.into(),
        }
    }

    pub fn destination(&self) -> &str {
        &self.to
    }

    /// Validate the raw form and deliver it.
    ///
    /// The provider is not called when a field is missing.
    pub async fn submit(&self, input: SendInput) -> Result<(), RelayError> {
        let request = ContactRequest::try_from(input)?;

        self.send(&request).await
    }

    #[tracing::instrument(skip_all, fields(provider = self.provider.name()))]
    pub async fn send(&self, request: &ContactRequest) -> Result<(), RelayError> {
        let email = notification_email(request, &self.to);

        self.provider.send(email).await?;

        tracing::info!("Contact notification delivered");

        Ok(())
    }
}
