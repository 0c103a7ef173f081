use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::error::{AppError, Result};

/// JSON document posted to the contact webhook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRelayPayload {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

/// Client forwarding accepted submissions to a webhook (mail relay, chat hook, ...)
pub struct ContactRelayClient {
    http_client: Client,
    webhook_url: String,
}

impl ContactRelayClient {
    pub fn new(webhook_url: String, timeout: Duration) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build relay HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            webhook_url,
        })
    }

    pub async fn relay(&self, payload: &ContactRelayPayload) -> Result<()> {
        tracing::debug!("Relaying contact submission {} to webhook", payload.id);

        let response = self
            .http_client
            .post(&self.webhook_url)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to reach contact webhook: {}", e);
                AppError::ExternalServiceError(
                    "Failed to deliver your message. Please try again later.".to_string(),
                )
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Contact webhook error: HTTP {} - {}", status, body);
            return Err(AppError::ExternalServiceError(
                "Failed to deliver your message. Please try again later.".to_string(),
            ));
        }

        Ok(())
    }
}
