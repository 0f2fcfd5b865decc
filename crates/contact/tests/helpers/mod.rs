use std::sync::Mutex;

use async_trait::async_trait;
use spm_notification::{EmailProvider, OutgoingEmail, ProviderError};

/// Records every email instead of delivering it.
#[derive(Default)]
pub struct RecordingProvider {
    sent: Mutex<Vec<OutgoingEmail>>,
}

impl RecordingProvider {
    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailProvider for RecordingProvider {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn send(&self, email: OutgoingEmail) -> Result<(), ProviderError> {
        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}

/// Rejects every email, counting attempts.
#[derive(Default)]
pub struct RejectingProvider {
    attempts: Mutex<usize>,
}

impl RejectingProvider {
    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl EmailProvider for RejectingProvider {
    fn name(&self) -> &'static str {
        "rejecting"
    }

    async fn send(&self, _email: OutgoingEmail) -> Result<(), ProviderError> {
        *self.attempts.lock().unwrap() += 1;

        Err(ProviderError::Rejected {
            status: 403,
            message: "API key is invalid".to_owned(),
        })
    }
}
