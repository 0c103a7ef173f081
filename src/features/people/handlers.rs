//! People listing handler

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::core::error::Result;
use crate::features::people::dtos::{PersonDto, NO_PEOPLE_FOUND};
use crate::features::people::services::PeopleService;

/// List people
///
/// Returns the bare JSON array (no response envelope), or the JSON string
/// `"No people found."` with a 404 when nothing could be listed.
#[utoipa::path(
    get,
    path = "/api/people",
    responses(
        (status = 200, description = "People listed successfully", body = Vec<PersonDto>),
        (status = 404, description = "No people found", body = String, example = json!("No people found.")),
        (status = 502, description = "Notion request failed")
    ),
    tag = "people"
)]
pub async fn list_people(State(service): State<Arc<PeopleService>>) -> Result<Response> {
    let people = service.list_people().await?;

    if people.is_empty() {
        return Ok((StatusCode::NOT_FOUND, Json(NO_PEOPLE_FOUND)).into_response());
    }

    Ok((StatusCode::OK, Json(people)).into_response())
}
