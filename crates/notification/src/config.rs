use serde::Deserialize;

use crate::RESEND_API_BASE;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, strum::Display, strum::AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    Resend,
    Smtp,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default)]
    pub provider: ProviderKind,
    /// Operator inbox receiving every contact notification
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub resend_api_key: String,
    #[serde(default = "default_resend_api_base")]
    pub resend_api_base: String,
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            to: String::new(),
            resend_api_key: String::new(),
            resend_api_base: default_resend_api_base(),
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
        }
    }
}

fn default_resend_api_base() -> String {
    RESEND_API_BASE.to_owned()
}

fn default_smtp_host() -> String {
    "localhost".to_owned()
}

fn default_smtp_port() -> u16 {
    1025
}
