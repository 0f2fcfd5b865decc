use spm_notification::OutgoingEmail;

use crate::ContactRequest;

/// Sender identity of every notification. Not configurable.
pub const SENDER: &str = "SPM Contact Form <onboarding@resend.dev>";

pub const SUBJECT: &str = "Nova mensagem do formulário de contato";

// Submitted values are interpolated as-is, with no HTML escaping.
pub fn notification_html(request: &ContactRequest) -> String {
    format!(
        r#"<div style="font-family: Arial, sans-serif; line-height: 1.5">
  <h1>📬 Nova mensagem do formulário de contato!</h1>
  <p>👤 <strong>Nome:</strong> {}</p>
  <p>📧 <strong>Email:</strong> {}</p>
  <p>📝 <strong>Mensagem:</strong></p>
  <blockquote style="background-color: #f9f9f9; padding: 10px; border-left: 4px solid #ccc">{}</blockquote>
</div>"#,
        request.name(),
        request.email(),
        request.message()
    )
}

pub fn notification_text(request: &ContactRequest) -> String {
    format!(
        r#"📬 Nova mensagem do formulário de contato!

👤 Nome: {}
📧 Email: {}
📝 Mensagem:
{}
"#,
        request.name(),
        request.email(),
        request.message()
    )
}

pub fn notification_email(request: &ContactRequest, to: impl Into<String>) -> OutgoingEmail {
    OutgoingEmail {
        from: SENDER.to_owned(),
        to: to.into(),
        subject: SUBJECT.to_owned(),
        html: notification_html(request),
        text: notification_text(request),
    }
}
