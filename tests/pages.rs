use std::sync::Arc;

use axum::http::StatusCode;
use spm::{AppState, SiteContent};
use spm_contact::Relay;

mod helpers;

#[tokio::test]
async fn test_landing_page_renders_default_content() {
    let app = helpers::app(Arc::new(helpers::RecordingProvider::default()));

    let (status, html) = helpers::get(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Institutional Website Developer"));
    assert!(html.contains("Custom Web Development"));
    assert!(html.contains("Project 6"));
    assert!(html.contains(r##"href="#quemsomos""##));
    assert!(html.contains(r#"id="contact-form""#));
    assert!(html.contains("/api/send"));
    assert!(!html.contains(r#"<section id="quemsomos">"#));
}

#[tokio::test]
async fn test_landing_page_uses_configured_content() {
    let site = SiteContent::builder()
        .brand("Acme <Labs>")
        .clear_services()
        .service("Hosting", "Managed hosting")
        .member("Ana", "Designer")
        .build();
    let relay = Relay::new(Arc::new(helpers::RecordingProvider::default()), helpers::OPERATOR);
    let app = spm::router(AppState::new(relay, site));

    let (status, html) = helpers::get(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Acme &#60;Labs&#62;") || html.contains("Acme &lt;Labs&gt;"));
    assert!(html.contains("Managed hosting"));
    assert!(!html.contains("Custom Web Development"));
    assert!(html.contains(r#"<section id="quemsomos">"#));
    assert!(html.contains("Designer"));
}

#[tokio::test]
async fn test_health() {
    let app = helpers::app(Arc::new(helpers::RecordingProvider::default()));

    let (status, body) = helpers::get(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"status":"ok"}"#);
}
