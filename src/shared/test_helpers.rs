use std::time::Duration;

use serde_json::{json, Value};

use crate::core::config::NotionConfig;

pub const TEST_DATABASE_ID: &str = "people-db";
pub const TEST_QUERY_PATH: &str = "/v1/databases/people-db/query";

pub fn notion_test_config(base_url: &str) -> NotionConfig {
    NotionConfig {
        token: "secret_test".to_string(),
        people_database_id: TEST_DATABASE_ID.to_string(),
        api_base_url: base_url.to_string(),
        version: "2022-06-28".to_string(),
        page_size: 100,
        timeout: Duration::from_secs(5),
    }
}

/// Full Notion page with the four person properties well-formed
pub fn person_page(id: &str, name: &str, title: &str, image_url: &str, location: &str) -> Value {
    json!({
        "object": "page",
        "id": id,
        "url": format!("https://www.notion.so/{}", id),
        "created_time": "2023-05-01T10:00:00.000Z",
        "last_edited_time": "2023-05-02T10:00:00.000Z",
        "archived": false,
        "properties": {
            "Name": {
                "id": "title",
                "type": "title",
                "title": [rich_text_segment(name)]
            },
            "Title": {
                "id": "t%3Ax",
                "type": "rich_text",
                "rich_text": [rich_text_segment(title)]
            },
            "Image": {
                "id": "i%3Ay",
                "type": "files",
                "files": [{
                    "name": "photo",
                    "type": "external",
                    "external": { "url": image_url }
                }]
            },
            "Location": {
                "id": "l%3Az",
                "type": "rich_text",
                "rich_text": [rich_text_segment(location)]
            }
        }
    })
}

/// Full Notion page with an arbitrary property map
pub fn page_with_properties(id: &str, properties: Value) -> Value {
    json!({
        "object": "page",
        "id": id,
        "url": format!("https://www.notion.so/{}", id),
        "properties": properties
    })
}

pub fn partial_page(id: &str) -> Value {
    json!({ "object": "page", "id": id })
}

pub fn rich_text_segment(text: &str) -> Value {
    json!({
        "type": "text",
        "text": { "content": text, "link": null },
        "plain_text": text,
        "href": null
    })
}

/// Body of a database query response holding the given results
pub fn query_body(results: Vec<Value>) -> String {
    json!({
        "object": "list",
        "results": results,
        "next_cursor": null,
        "has_more": false,
        "type": "page_or_database"
    })
    .to_string()
}
