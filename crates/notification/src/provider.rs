use async_trait::async_trait;

/// A fully addressed message, ready for a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
    pub text: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("email provider rejected the message ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("resend api key is not configured")]
    MissingApiKey,

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("smtp error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("invalid message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("delivery task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Capability to deliver one email.
///
/// Implementations make a single delivery attempt per call and never retry.
#[async_trait]
pub trait EmailProvider: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    async fn send(&self, email: OutgoingEmail) -> Result<(), ProviderError>;
}
