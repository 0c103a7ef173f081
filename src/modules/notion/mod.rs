//! Notion CMS module
//!
//! Provides a minimal Notion API client for querying databases, plus the
//! typed subset of the page object model the site consumes.

mod client;
pub mod models;

pub use client::NotionClient;
pub use models::{Page, PropertyValue};
