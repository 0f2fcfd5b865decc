#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use spm::{AppState, SiteContent};
use spm_contact::Relay;
use spm_notification::{EmailProvider, OutgoingEmail, ProviderError};
use tower::ServiceExt;

pub const OPERATOR: &str = "ops@spm.dev";

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

pub struct RejectingProvider;

#[async_trait]
impl EmailProvider for RejectingProvider {
    fn name(&self) -> &'static str {
        "rejecting"
    }

    async fn send(&self, _email: OutgoingEmail) -> Result<(), ProviderError> {
        Err(ProviderError::Rejected {
            status: 403,
            message: "API key is invalid".to_owned(),
        })
    }
}

pub struct PanickingProvider;

#[async_trait]
impl EmailProvider for PanickingProvider {
    fn name(&self) -> &'static str {
        "panicking"
    }

    async fn send(&self, _email: OutgoingEmail) -> Result<(), ProviderError> {
        panic!("provider exploded");
    }
}

pub fn app(provider: Arc<dyn EmailProvider>) -> Router {
    spm::router(AppState::new(
        Relay::new(provider, OPERATOR),
        SiteContent::default(),
    ))
}

pub async fn post_send(app: Router, body: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/send")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, serde_json::from_slice(&bytes).unwrap())
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, String::from_utf8(bytes.to_vec()).unwrap())
}
