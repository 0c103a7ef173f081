//! Notion API client
//!
//! Wraps the database query endpoint. Authentication uses an internal
//! integration token; the API version is pinned through the
//! `Notion-Version` header.

use reqwest::Client;
use serde_json::json;
use tracing::{debug, error, warn};

use crate::core::config::NotionConfig;
use crate::core::error::AppError;

use super::models::QueryDatabaseResponse;

const UPSTREAM_UNAVAILABLE: &str = "People directory is temporarily unavailable";

pub struct NotionClient {
    http_client: Client,
    config: NotionConfig,
}

impl NotionClient {
    pub fn new(config: NotionConfig) -> Result<Self, AppError> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build Notion HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            config,
        })
    }

    pub fn people_database_id(&self) -> &str {
        &self.config.people_database_id
    }

    /// Query a database and return the first batch of results.
    ///
    /// Pagination cursors are not followed.
    pub async fn query_database(&self, database_id: &str) -> Result<QueryDatabaseResponse, AppError> {
        let url = format!(
            "{}/v1/databases/{}/query",
            self.config.api_base_url, database_id
        );

        debug!("Querying Notion database: {}", url);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.config.token)
            .header("Notion-Version", &self.config.version)
            .json(&json!({ "page_size": self.config.page_size }))
            .send()
            .await
            .map_err(|e| {
                error!("Failed to query Notion database {}: {}", database_id, e);
                AppError::ExternalServiceError(UPSTREAM_UNAVAILABLE.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("Notion API error: HTTP {} - {}", status, body);
            return Err(AppError::ExternalServiceError(
                UPSTREAM_UNAVAILABLE.to_string(),
            ));
        }

        let result = response.json::<QueryDatabaseResponse>().await.map_err(|e| {
            error!("Failed to parse Notion response: {}", e);
            AppError::ExternalServiceError(UPSTREAM_UNAVAILABLE.to_string())
        })?;

        if result.has_more {
            warn!(
                "Notion database {} has more results than one batch ({}); only the first batch is used",
                database_id, self.config.page_size
            );
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::notion_test_config as test_config;

    #[tokio::test]
    async fn test_query_database_sends_auth_and_version() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/databases/people-db/query")
            .match_header("authorization", "Bearer secret_test")
            .match_header("notion-version", "2022-06-28")
            .match_body(mockito::Matcher::Json(json!({ "page_size": 100 })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"object":"list","results":[{"object":"page","id":"p1"}],"next_cursor":null,"has_more":false}"#)
            .create_async()
            .await;

        let client = NotionClient::new(test_config(&server.url())).unwrap();
        let result = client
            .query_database(client.people_database_id())
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(result.results.len(), 1);
        assert!(!result.has_more);
    }

    #[tokio::test]
    async fn test_query_database_upstream_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1/databases/people-db/query")
            .with_status(401)
            .with_body(r#"{"object":"error","status":401,"code":"unauthorized"}"#)
            .create_async()
            .await;

        let client = NotionClient::new(test_config(&server.url())).unwrap();
        let err = client.query_database("people-db").await.unwrap_err();

        match err {
            AppError::ExternalServiceError(msg) => {
                assert_eq!(msg, UPSTREAM_UNAVAILABLE);
                assert!(!msg.contains("unauthorized"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_query_database_malformed_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1/databases/people-db/query")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let client = NotionClient::new(test_config(&server.url())).unwrap();
        let err = client.query_database("people-db").await.unwrap_err();

        assert!(matches!(err, AppError::ExternalServiceError(_)));
    }
}
