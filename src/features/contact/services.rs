//! Contact Service - accepts submissions and hands them to the relay

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::contact::clients::{ContactRelayClient, ContactRelayPayload};
use crate::features::contact::dtos::{ContactFormDto, ContactResponseDto};

pub struct ContactService {
    relay_client: Option<Arc<ContactRelayClient>>,
}

impl ContactService {
    pub fn new(relay_client: Option<Arc<ContactRelayClient>>) -> Self {
        Self { relay_client }
    }

    /// Accept a validated submission.
    ///
    /// Without a configured relay the submission is only logged.
    pub async fn submit(&self, dto: ContactFormDto) -> Result<ContactResponseDto> {
        let payload = ContactRelayPayload {
            id: Uuid::now_v7(),
            submitted_at: Utc::now(),
            name: dto.name,
            phone: dto.phone,
            email: dto.email,
            message: dto.message,
        };

        match &self.relay_client {
            Some(relay) => relay.relay(&payload).await?,
            None => tracing::warn!(
                "No contact webhook configured; submission {} from {} <{}> was not relayed",
                payload.id,
                payload.name,
                payload.email
            ),
        }

        tracing::info!("Contact submission accepted: id={}", payload.id);

        Ok(ContactResponseDto {
            id: payload.id,
            received_at: payload.submitted_at,
        })
    }
}
