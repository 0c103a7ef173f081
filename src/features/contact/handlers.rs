//! Contact form handler

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::TextForm;
use crate::features::contact::dtos::{ContactFormDto, ContactResponseDto, SUCCESS_MESSAGE};
use crate::features::contact::services::ContactService;
use crate::shared::types::ApiResponse;

/// Multipart body of `POST /api/contact` (OpenAPI schema only)
#[derive(Deserialize, ToSchema)]
#[allow(dead_code)]
pub struct ContactFormUpload {
    pub name: String,
    /// Digits, spaces and `+ - ( )`
    pub phone: String,
    pub email: String,
    pub message: String,
}

/// Submit the contact form
///
/// Public endpoint. Unknown fields are ignored.
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body(
        content = ContactFormUpload,
        content_type = "multipart/form-data",
        description = "Contact form fields: name, phone, email, message",
    ),
    responses(
        (status = 200, description = "Submission accepted", body = ApiResponse<ContactResponseDto>),
        (status = 400, description = "Missing or invalid field"),
        (status = 502, description = "Submission could not be relayed")
    ),
    tag = "contact"
)]
pub async fn submit_contact(
    State(service): State<Arc<ContactService>>,
    mut form: TextForm,
) -> Result<Json<ApiResponse<ContactResponseDto>>> {
    let dto = ContactFormDto {
        name: form.take_required("name")?.trim().to_string(),
        phone: form.take_required("phone")?.trim().to_string(),
        email: form.take_required("email")?.trim().to_string(),
        message: form.take_required("message")?,
    };

    for ignored in form.0.keys() {
        tracing::debug!("Ignoring unknown contact field: {}", ignored);
    }

    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let result = service.submit(dto).await?;

    Ok(Json(ApiResponse::success(
        Some(result),
        Some(SUCCESS_MESSAGE.to_string()),
        None,
    )))
}
