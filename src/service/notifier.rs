//! Notification dispatch behind a trait seam so handlers and tests never
//! touch live gateway credentials.

use crate::api::AfricasTalkingApi;
use crate::config::Config;
use crate::error::CareError;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use url::Url;

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Dispatch one message to the given recipients. Best-effort: callers
    /// log failures and move on, they never retry or fail the response.
    async fn send(&self, message: &str, recipients: &[String]) -> Result<(), CareError>;
}

/// SMS dispatch through the Africa's Talking messaging API.
pub struct AfricasTalkingClient {
    client: reqwest::Client,
    endpoint: Url,
    username: String,
    api_key: String,
    from: Option<String>,
}

impl AfricasTalkingClient {
    /// Create a client from configured credentials. Returns `None` when
    /// either credential is absent, so callers can fall back to the no-op
    /// notifier.
    pub fn from_config(cfg: &Config) -> Option<Self> {
        let username = cfg.at_username.clone()?;
        let api_key = cfg.at_api_key.clone()?;
        let client = reqwest::Client::builder()
            .user_agent("mamacare-sms/1.0")
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(15))
            .build()
            .expect("FATAL: initialize SMS HTTP client failed");
        Some(Self {
            client,
            endpoint: cfg.sms_endpoint.clone(),
            username,
            api_key,
            from: cfg.sms_from.clone(),
        })
    }
}

#[async_trait]
impl Notifier for AfricasTalkingClient {
    async fn send(&self, message: &str, recipients: &[String]) -> Result<(), CareError> {
        let ack = AfricasTalkingApi::send_sms(
            &self.client,
            &self.endpoint,
            &self.username,
            &self.api_key,
            self.from.as_deref(),
            message,
            recipients,
        )
        .await?;
        for recipient in &ack.sms_message_data.recipients {
            debug!(
                number = %recipient.number,
                status = %recipient.status,
                "SMS dispatch acknowledged"
            );
        }
        Ok(())
    }
}

/// Stand-in used when no SMS credentials are configured; logs and drops.
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn send(&self, message: &str, recipients: &[String]) -> Result<(), CareError> {
        debug!(
            recipients = recipients.len(),
            message, "SMS dispatch disabled; dropping notification"
        );
        Ok(())
    }
}
