use crate::core::MutationClient;
use crate::utils::error::{IngestError, Result};
use serde::Deserialize;

pub const PAGE_COUNT_QUERY: &str = "words:pageCount";
pub const PAGE_OF_WORDS_QUERY: &str = "words:pageOfWords";

/// A stored word as returned by the deployment; system fields other than
/// `_id` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoredWord {
    #[serde(rename = "_id")]
    pub id: String,
    pub word: String,
}

/// Read-only view of the word pages the deployment computes after ingest.
pub struct PageReader<M: MutationClient> {
    client: M,
}

impl<M: MutationClient> PageReader<M> {
    pub fn new(client: M) -> Self {
        Self { client }
    }

    /// `None` until the deployment has computed pages.
    pub async fn page_count(&self) -> Result<Option<u64>> {
        let value = self
            .client
            .query(PAGE_COUNT_QUERY, serde_json::json!({}))
            .await?;

        match value {
            serde_json::Value::Null => Ok(None),
            other => other
                .as_f64()
                .filter(|n| *n >= 0.0 && n.fract() == 0.0)
                .map(|n| Some(n as u64))
                .ok_or_else(|| IngestError::QueryError {
                    path: PAGE_COUNT_QUERY.to_string(),
                    message: format!("expected a page count, got {}", other),
                }),
        }
    }

    pub async fn page_of_words(&self, page_index: u64) -> Result<Vec<StoredWord>> {
        let value = self
            .client
            .query(
                PAGE_OF_WORDS_QUERY,
                serde_json::json!({ "pageIndex": page_index }),
            )
            .await?;

        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::convex::ConvexClient;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_page_count_null_means_not_computed() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST)
                .path("/api/query")
                .json_body_partial(r#"{"path": "words:pageCount"}"#);
            then.status(200)
                .json_body(serde_json::json!({"status": "success", "value": null}));
        });

        let reader = PageReader::new(ConvexClient::new(server.base_url()));
        assert_eq!(reader.page_count().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_page_count_number() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/query");
            then.status(200)
                .json_body(serde_json::json!({"status": "success", "value": 236.0}));
        });

        let reader = PageReader::new(ConvexClient::new(server.base_url()));
        assert_eq!(reader.page_count().await.unwrap(), Some(236));
    }

    #[tokio::test]
    async fn test_page_count_rejects_non_number() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/query");
            then.status(200)
                .json_body(serde_json::json!({"status": "success", "value": "many"}));
        });

        let reader = PageReader::new(ConvexClient::new(server.base_url()));
        assert!(reader.page_count().await.is_err());
    }

    #[tokio::test]
    async fn test_page_of_words() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/api/query").json_body(serde_json::json!({
                "path": "words:pageOfWords",
                "args": {"pageIndex": 2},
                "format": "json"
            }));
            then.status(200).json_body(serde_json::json!({
                "status": "success",
                "value": [
                    {"_id": "k1", "_creationTime": 1.0, "word": "aardvark"},
                    {"_id": "k2", "_creationTime": 2.0, "word": "abacus"}
                ]
            }));
        });

        let reader = PageReader::new(ConvexClient::new(server.base_url()));
        let words = reader.page_of_words(2).await.unwrap();

        api_mock.assert();
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].word, "aardvark");
        assert_eq!(words[1].id, "k2");
    }
}
