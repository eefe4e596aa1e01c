use serde::{Deserialize, Serialize};

use crate::error::MessagingError;
use crate::gateway::{BoxFuture, DeliveryReceipt, MessagingGateway};

pub const DEFAULT_URL: &str = "https://gate.whapi.cloud/messages/text";

/// Whapi Cloud text-message client.
pub struct WhapiGateway {
    client: reqwest::Client,
    url: String,
    token: String,
}

impl WhapiGateway {
    pub fn new(url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            token: token.into(),
        }
    }
}

#[derive(Serialize)]
struct SendTextRequest<'a> {
    typing_time: u32,
    to: &'a str,
    body: &'a str,
}

#[derive(Deserialize)]
struct SendTextResponse {
    #[serde(default)]
    message: Option<SentMessage>,
}

#[derive(Deserialize)]
struct SentMessage {
    #[serde(default)]
    id: Option<String>,
}

impl MessagingGateway for WhapiGateway {
    fn send_text<'a>(
        &'a self,
        to: &'a str,
        body: &'a str,
    ) -> BoxFuture<'a, Result<DeliveryReceipt, MessagingError>> {
        Box::pin(async move {
            let response = self
                .client
                .post(&self.url)
                .bearer_auth(&self.token)
                .header(reqwest::header::ACCEPT, "application/json")
                .json(&SendTextRequest {
                    typing_time: 0,
                    to,
                    body,
                })
                .send()
                .await
                .map_err(|e| MessagingError::Http(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(MessagingError::Rejected {
                    status: status.as_u16(),
                    body,
                });
            }

            // A 2xx with an unexpected body still means the message was queued.
            let message_id = response
                .json::<SendTextResponse>()
                .await
                .ok()
                .and_then(|r| r.message)
                .and_then(|m| m.id);

            tracing::info!(to, message_id = ?message_id, "whatsapp message sent");
            Ok(DeliveryReceipt { message_id })
        })
    }
}
