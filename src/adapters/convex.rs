use crate::domain::ports::MutationClient;
use crate::utils::error::{IngestError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const CLIENT_HEADER: &str = concat!("word-ingest-", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FunctionKind {
    Mutation,
    Query,
}

impl FunctionKind {
    fn route(self) -> &'static str {
        match self {
            FunctionKind::Mutation => "api/mutation",
            FunctionKind::Query => "api/query",
        }
    }
}

#[derive(Debug, Serialize)]
struct FunctionRequest<'a> {
    path: &'a str,
    args: serde_json::Value,
    format: &'static str,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum FunctionResponse {
    Success {
        #[serde(default)]
        value: serde_json::Value,
    },
    Error {
        #[serde(rename = "errorMessage")]
        error_message: String,
    },
}

/// Client for the HTTP function API of a Convex deployment.
///
/// The deployment URL is given at construction; nothing here reads the
/// environment.
#[derive(Debug, Clone)]
pub struct ConvexClient {
    deployment_url: String,
    client: Client,
    timeout: Option<Duration>,
}

impl ConvexClient {
    pub fn new(deployment_url: impl Into<String>) -> Self {
        let deployment_url = deployment_url.into().trim_end_matches('/').to_string();
        Self {
            deployment_url,
            client: Client::new(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn deployment_url(&self) -> &str {
        &self.deployment_url
    }

    async fn call(
        &self,
        kind: FunctionKind,
        path: &str,
        args: serde_json::Value,
    ) -> Result<serde_json::Value> {
        let url = format!("{}/{}", self.deployment_url, kind.route());
        let body = FunctionRequest {
            path,
            args,
            format: "json",
        };

        let mut request = self
            .client
            .post(&url)
            .header("Convex-Client", CLIENT_HEADER)
            .json(&body);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        tracing::trace!("POST {} path={}", url, path);
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        match serde_json::from_str::<FunctionResponse>(&text) {
            Ok(FunctionResponse::Success { value }) => Ok(value),
            Ok(FunctionResponse::Error { error_message }) => {
                let path = path.to_string();
                Err(match kind {
                    FunctionKind::Mutation => IngestError::MutationError {
                        path,
                        message: error_message,
                    },
                    FunctionKind::Query => IngestError::QueryError {
                        path,
                        message: error_message,
                    },
                })
            }
            Err(_) if !status.is_success() => Err(IngestError::HttpStatusError {
                status: status.as_u16(),
                body: text,
            }),
            Err(e) => Err(IngestError::SerializationError(e)),
        }
    }
}

#[async_trait]
impl MutationClient for ConvexClient {
    async fn mutation(&self, path: &str, args: serde_json::Value) -> Result<serde_json::Value> {
        self.call(FunctionKind::Mutation, path, args).await
    }

    async fn query(&self, path: &str, args: serde_json::Value) -> Result<serde_json::Value> {
        self.call(FunctionKind::Query, path, args).await
    }
}
