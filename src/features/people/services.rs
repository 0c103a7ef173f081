//! People Service - Notion database to person records

use std::sync::Arc;

use crate::core::error::Result;
use crate::features::people::dtos::PersonDto;
use crate::modules::notion::NotionClient;

/// Service listing people from the Notion people database
pub struct PeopleService {
    notion_client: Arc<NotionClient>,
}

impl PeopleService {
    pub fn new(notion_client: Arc<NotionClient>) -> Self {
        Self { notion_client }
    }

    /// Fetch the first batch of the people database and normalize it.
    ///
    /// Partial pages are skipped without error. Upstream order is kept.
    pub async fn list_people(&self) -> Result<Vec<PersonDto>> {
        let response = self
            .notion_client
            .query_database(self.notion_client.people_database_id())
            .await?;

        let total = response.results.len();
        let people: Vec<PersonDto> = response
            .results
            .into_iter()
            .filter_map(|result| {
                let id = result.id().to_string();
                let page = result.into_full();
                if page.is_none() {
                    tracing::debug!("Skipping partial Notion page: {}", id);
                }
                page
            })
            .map(|page| PersonDto::from(&page))
            .collect();

        tracing::info!(
            "People listed: {} of {} Notion results",
            people.len(),
            total
        );

        Ok(people)
    }
}
