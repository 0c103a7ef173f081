use utoipa::{Modify, OpenApi};

use crate::features::contact::{dtos as contact_dtos, handlers as contact_handlers};
use crate::features::people::{dtos as people_dtos, handlers as people_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // People (public)
        people_handlers::list_people,
        // Contact (public)
        contact_handlers::submit_contact,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // People
            people_dtos::PersonDto,
            // Contact
            contact_dtos::ContactFormDto,
            contact_dtos::ContactResponseDto,
            contact_handlers::ContactFormUpload,
            ApiResponse<contact_dtos::ContactResponseDto>,
        )
    ),
    tags(
        (name = "people", description = "Team members sourced from Notion (public)"),
        (name = "contact", description = "Contact form submissions (public)"),
    ),
    info(
        title = "Manuvantara API",
        version = "0.1.0",
        description = "API documentation for the Manuvantara website",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
