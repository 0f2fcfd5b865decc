use std::sync::Arc;

use spm_contact::{Relay, RelayError, SUBJECT, SendInput};

mod helpers;

fn input(name: &str, email: &str, message: &str) -> SendInput {
    SendInput {
        name_form: Some(name.to_owned()),
        email_form: Some(email.to_owned()),
        message_form: Some(message.to_owned()),
    }
}

#[tokio::test]
async fn test_submit_sends_exactly_once() -> anyhow::Result<()> {
    let provider = Arc::new(helpers::RecordingProvider::default());
    let relay = Relay::new(provider.clone(), "ops@spm.dev");

    relay.submit(input("Ana", "ana@x.com", "Hello")).await?;

    let sent = provider.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "ops@spm.dev");
    assert_eq!(sent[0].subject, SUBJECT);
    assert!(sent[0].html.contains("Ana"));
    assert!(sent[0].html.contains("ana@x.com"));
    assert!(sent[0].html.contains("Hello"));

    Ok(())
}

#[tokio::test]
async fn test_missing_fields_never_reach_provider() {
    let provider = Arc::new(helpers::RecordingProvider::default());
    let relay = Relay::new(provider.clone(), "ops@spm.dev");

    let cases = vec![
        input("", "ana@x.com", "Hello"),
        input("Ana", "", "Hello"),
        input("Ana", "ana@x.com", ""),
        SendInput {
            name_form: Some("Ana".to_owned()),
            email_form: None,
            message_form: Some("Hello".to_owned()),
        },
        SendInput::default(),
    ];

    for case in cases {
        let err = relay.submit(case).await.unwrap_err();
        assert!(matches!(err, RelayError::Validation(_)));
        assert!(!err.to_string().is_empty());
    }

    assert!(provider.sent().is_empty());
}

#[tokio::test]
async fn test_provider_error_is_terminal() {
    let provider = Arc::new(helpers::RejectingProvider::default());
    let relay = Relay::new(provider.clone(), "ops@spm.dev");

    let err = relay
        .submit(input("Ana", "ana@x.com", "Hello"))
        .await
        .unwrap_err();

    assert!(matches!(err, RelayError::Provider(_)));
    assert_eq!(provider.attempts(), 1);
}

#[tokio::test]
async fn test_validation_error_names_fields() {
    let provider = Arc::new(helpers::RecordingProvider::default());
    let relay = Relay::new(provider, "ops@spm.dev");

    let err = relay
        .submit(input("", "ana@x.com", ""))
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "missing required fields: messageForm, nameForm"
    );
}
