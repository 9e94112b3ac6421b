//! Raw HTTP call against the Africa's Talking messaging endpoint.

use crate::error::CareError;
use axum::http::StatusCode;
use serde::Deserialize;
use url::Url;

/// Delivery acknowledgment envelope returned by the messaging endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SmsAck {
    #[serde(rename = "SMSMessageData")]
    pub sms_message_data: SmsMessageData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SmsMessageData {
    pub message: String,
    #[serde(default)]
    pub recipients: Vec<SmsRecipientStatus>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsRecipientStatus {
    pub number: String,
    pub status: String,
    #[serde(default)]
    pub message_id: Option<String>,
}

pub struct AfricasTalkingApi;

impl AfricasTalkingApi {
    /// One form-encoded POST, no retries; delivery is best-effort and the
    /// provider's own retry semantics are opaque to this service.
    pub async fn send_sms(
        client: &reqwest::Client,
        endpoint: &Url,
        username: &str,
        api_key: &str,
        from: Option<&str>,
        message: &str,
        recipients: &[String],
    ) -> Result<SmsAck, CareError> {
        let to = recipients.join(",");
        let mut form = vec![
            ("username", username),
            ("to", to.as_str()),
            ("message", message),
        ];
        if let Some(from) = from {
            form.push(("from", from));
        }

        let resp = client
            .post(endpoint.clone())
            .header("apiKey", api_key)
            .header("Accept", "application/json")
            .form(&form)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CareError::SmsStatus(
                StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY),
            ));
        }
        Ok(resp.json::<SmsAck>().await?)
    }
}
