use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::notion::{Page, PropertyValue};

/// Notion property names read from each person page
pub const NAME_PROPERTY: &str = "Name";
pub const TITLE_PROPERTY: &str = "Title";
pub const IMAGE_PROPERTY: &str = "Image";
pub const LOCATION_PROPERTY: &str = "Location";

/// Body returned with a 404 when no person could be listed
pub const NO_PEOPLE_FOUND: &str = "No people found.";

/// Person shown on the team page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PersonDto {
    pub id: String,
    pub name: String,
    /// Job title
    pub title: String,
    /// External image URL, or empty when the page has no external image
    pub image: String,
    pub location: String,
}

impl From<&Page> for PersonDto {
    /// Total mapping: a missing property, a property of another type, or an
    /// empty value list all yield an empty string.
    fn from(page: &Page) -> Self {
        Self {
            id: page.id.clone(),
            name: read_property(page, NAME_PROPERTY, PropertyValue::title_text),
            title: read_property(page, TITLE_PROPERTY, PropertyValue::rich_text),
            image: read_property(page, IMAGE_PROPERTY, PropertyValue::first_external_url),
            location: read_property(page, LOCATION_PROPERTY, PropertyValue::rich_text),
        }
    }
}

fn read_property(page: &Page, name: &str, extract: fn(&PropertyValue) -> Option<&str>) -> String {
    page.property(name)
        .and_then(extract)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::notion::models::PageResult;
    use crate::shared::test_helpers::{page_with_properties, person_page, rich_text_segment};
    use serde_json::json;

    fn page(value: serde_json::Value) -> Page {
        serde_json::from_value::<PageResult>(value)
            .unwrap()
            .into_full()
            .unwrap()
    }

    #[test]
    fn test_well_formed_page() {
        let person = PersonDto::from(&page(person_page(
            "p1",
            "Ada",
            "Engineer",
            "http://x/y.png",
            "Remote",
        )));

        assert_eq!(
            person,
            PersonDto {
                id: "p1".to_string(),
                name: "Ada".to_string(),
                title: "Engineer".to_string(),
                image: "http://x/y.png".to_string(),
                location: "Remote".to_string(),
            }
        );
    }

    #[test]
    fn test_serialized_shape() {
        let person = PersonDto::from(&page(person_page("p1", "Ada", "Engineer", "", "Remote")));
        assert_eq!(
            serde_json::to_value(&person).unwrap(),
            json!({
                "id": "p1",
                "name": "Ada",
                "title": "Engineer",
                "image": "",
                "location": "Remote"
            })
        );
    }

    #[test]
    fn test_name_with_other_type_is_empty() {
        let person = PersonDto::from(&page(page_with_properties(
            "p2",
            json!({
                "Name": { "type": "rich_text", "rich_text": [rich_text_segment("Ada")] },
                "Title": { "type": "rich_text", "rich_text": [rich_text_segment("Engineer")] }
            }),
        )));

        assert_eq!(person.name, "");
        assert_eq!(person.title, "Engineer");
    }

    #[test]
    fn test_hosted_image_is_empty() {
        let person = PersonDto::from(&page(page_with_properties(
            "p3",
            json!({
                "Image": {
                    "type": "files",
                    "files": [{
                        "name": "upload.png",
                        "type": "file",
                        "file": {
                            "url": "https://prod-files.example.com/upload.png",
                            "expiry_time": "2023-05-01T11:00:00.000Z"
                        }
                    }]
                }
            }),
        )));

        assert_eq!(person.image, "");
    }

    #[test]
    fn test_empty_lists_and_missing_properties_are_empty() {
        let person = PersonDto::from(&page(page_with_properties(
            "p4",
            json!({
                "Name": { "type": "title", "title": [] },
                "Title": { "type": "rich_text", "rich_text": [] },
                "Image": { "type": "files", "files": [] }
            }),
        )));

        assert_eq!(person.id, "p4");
        assert_eq!(person.name, "");
        assert_eq!(person.title, "");
        assert_eq!(person.image, "");
        assert_eq!(person.location, "");
    }
}
