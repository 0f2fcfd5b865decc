//! SMTP delivery using lettre

use async_trait::async_trait;
use lettre::{
    Message, SmtpTransport, Transport, message::MultiPart,
    transport::smtp::authentication::Credentials,
};

use crate::{EmailConfig, EmailProvider, OutgoingEmail, ProviderError};

#[derive(Clone)]
pub struct SmtpProvider {
    mailer: SmtpTransport,
}

impl SmtpProvider {
    pub fn new(config: &EmailConfig) -> Result<Self, ProviderError> {
        let mailer = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );

            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP relay initialized with authentication and TLS"
            );

            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

            SmtpTransport::relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        };

        Ok(Self { mailer })
    }
}

#[async_trait]
impl EmailProvider for SmtpProvider {
    fn name(&self) -> &'static str {
        "smtp"
    }

    async fn send(&self, email: OutgoingEmail) -> Result<(), ProviderError> {
        tracing::info!(to = %email.to, subject = %email.subject, "Sending email");

        let message = Message::builder()
            .from(email.from.parse()?)
            .to(email.to.parse()?)
            .subject(email.subject)
            .multipart(MultiPart::alternative_plain_html(email.text, email.html))?;

        // SmtpTransport is blocking
        let mailer = self.mailer.clone();
        tokio::task::spawn_blocking(move || mailer.send(&message)).await??;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(to: &str) -> OutgoingEmail {
        OutgoingEmail {
            from: "SPM Contact Form <onboarding@resend.dev>".to_owned(),
            to: to.to_owned(),
            subject: "Hello".to_owned(),
            html: "<p>Hi</p>".to_owned(),
            text: "Hi".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_invalid_destination_fails_before_connecting() {
        let provider = SmtpProvider::new(&EmailConfig::default()).unwrap();
        let err = provider.send(email("not an address")).await.unwrap_err();

        assert!(matches!(err, ProviderError::Address(_)));
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        let config = EmailConfig {
            smtp_host: "127.0.0.1".to_owned(),
            smtp_port: 9,
            ..EmailConfig::default()
        };

        let provider = SmtpProvider::new(&config).unwrap();
        let err = provider.send(email("ops@spm.dev")).await.unwrap_err();

        assert!(matches!(err, ProviderError::Smtp(_)));
    }
}
