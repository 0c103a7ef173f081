//! Typed subset of the Notion page object model.
//!
//! Only the property kinds the site reads are modelled; every other kind
//! deserializes to an `Unsupported` variant instead of failing the response.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// Response body of `POST /v1/databases/{id}/query`
#[derive(Debug, Clone, Deserialize)]
pub struct QueryDatabaseResponse {
    #[serde(default)]
    pub results: Vec<PageResult>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

/// A query result is either a fully resolved page or a reference-only stub.
///
/// A page counts as full when it carries both `url` and `properties`,
/// the same test the official SDK's `isFullPage` applies. The shape of the
/// individual properties plays no part in the decision.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RawPage")]
pub enum PageResult {
    Full(Page),
    Partial(PartialPage),
}

impl PageResult {
    pub fn id(&self) -> &str {
        match self {
            PageResult::Full(page) => &page.id,
            PageResult::Partial(partial) => &partial.id,
        }
    }

    /// Returns the page if it is fully resolved
    pub fn into_full(self) -> Option<Page> {
        match self {
            PageResult::Full(page) => Some(page),
            PageResult::Partial(_) => None,
        }
    }
}

/// Result as it comes off the wire, before full/partial classification
#[derive(Debug, Deserialize)]
struct RawPage {
    id: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    properties: Option<HashMap<String, Value>>,
}

impl From<RawPage> for PageResult {
    fn from(raw: RawPage) -> Self {
        match (raw.url, raw.properties) {
            (Some(_), Some(properties)) => {
                let properties = properties
                    .into_iter()
                    .map(|(name, value)| {
                        let value = PropertyValue::decode(&raw.id, &name, value);
                        (name, value)
                    })
                    .collect();
                PageResult::Full(Page {
                    id: raw.id,
                    properties,
                })
            }
            _ => PageResult::Partial(PartialPage { id: raw.id }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Page {
    pub id: String,
    pub properties: HashMap<String, PropertyValue>,
}

impl Page {
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }
}

#[derive(Debug, Clone)]
pub struct PartialPage {
    pub id: String,
}

/// Property value, discriminated by its `type` tag
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    Title {
        #[serde(default)]
        title: Vec<RichText>,
    },
    RichText {
        #[serde(default)]
        rich_text: Vec<RichText>,
    },
    Files {
        #[serde(default)]
        files: Vec<FileObject>,
    },
    #[serde(other)]
    Unsupported,
}

impl PropertyValue {
    /// Decode one property, degrading to `Unsupported` when its body is malformed
    fn decode(page_id: &str, name: &str, value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_else(|e| {
            tracing::debug!(
                "Unreadable property '{}' on Notion page {}: {}",
                name,
                page_id,
                e
            );
            PropertyValue::Unsupported
        })
    }

    /// Plain text of the first segment of a `title` property
    pub fn title_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Title { title } => title.first().map(|t| t.plain_text.as_str()),
            _ => None,
        }
    }

    /// Plain text of the first segment of a `rich_text` property
    pub fn rich_text(&self) -> Option<&str> {
        match self {
            PropertyValue::RichText { rich_text } => {
                rich_text.first().map(|t| t.plain_text.as_str())
            }
            _ => None,
        }
    }

    /// URL of the first file of a `files` property, only when it is an external link
    pub fn first_external_url(&self) -> Option<&str> {
        match self {
            PropertyValue::Files { files } => match files.first() {
                Some(FileObject::External { external, .. }) => Some(external.url.as_str()),
                _ => None,
            },
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RichText {
    #[serde(default)]
    pub plain_text: String,
}

/// Entry of a `files` property
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FileObject {
    External { external: ExternalFile },
    /// Notion-hosted upload; its signed URL expires, so it is never exposed
    File,
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExternalFile {
    pub url: String,
}
