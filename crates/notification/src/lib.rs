//! Outbound email delivery.
//!
//! The contact relay only ever talks to an [`EmailProvider`]. Two providers
//! ship with the crate:
//!
//! - [`ResendProvider`] - the Resend transactional API over HTTPS (default)
//! - [`SmtpProvider`] - any SMTP relay, useful with a local MailDev in development
//!
//! [`provider_from_config`] picks one based on [`EmailConfig::provider`].

mod config;
mod provider;
mod resend;
mod smtp;

pub use config::*;
pub use provider::*;
pub use resend::*;
pub use smtp::*;

use std::sync::Arc;

/// Build the provider selected by configuration.
pub fn provider_from_config(config: &EmailConfig) -> Result<Arc<dyn EmailProvider>, ProviderError> {
    let provider: Arc<dyn EmailProvider> = match config.provider {
        ProviderKind::Resend => Arc::new(ResendProvider::new(
            &config.resend_api_key,
            &config.resend_api_base,
        )?),
        ProviderKind::Smtp => Arc::new(SmtpProvider::new(config)?),
    };

    tracing::info!(provider = provider.name(), "Email provider initialized");

    Ok(provider)
}
