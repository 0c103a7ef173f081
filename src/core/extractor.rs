use std::collections::HashMap;

use axum::{
    body::Body,
    extract::{FromRequest, Multipart, Request},
};

use crate::core::error::AppError;

/// Multipart extractor collecting text fields by name.
///
/// File parts are skipped. When a field name repeats, the last value wins,
/// matching how browsers' `FormData.get` is usually consumed.
pub struct TextForm(pub HashMap<String, String>);

impl TextForm {
    /// Removes and returns a field, failing with a 400 when it is absent
    pub fn take_required(&mut self, name: &str) -> Result<String, AppError> {
        self.0
            .remove(name)
            .ok_or_else(|| AppError::BadRequest(format!("Field '{}' is required", name)))
    }
}

impl<S> FromRequest<S> for TextForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(format!("Invalid multipart request: {}", e)))?;

        let mut fields = HashMap::new();

        while let Some(field) = multipart.next_field().await.map_err(|e| {
            tracing::debug!("Failed to read multipart field: {}", e);
            AppError::BadRequest(format!("Failed to read multipart data: {}", e))
        })? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            if field.file_name().is_some() {
                tracing::debug!("Ignoring file field: {}", name);
                continue;
            }

            let text = field.text().await.map_err(|e| {
                AppError::BadRequest(format!("Failed to read field '{}': {}", name, e))
            })?;
            fields.insert(name, text);
        }

        Ok(Self(fields))
    }
}
