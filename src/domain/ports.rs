use crate::domain::model::{LoadSummary, WordRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn words_file(&self) -> &str;
    fn mutation(&self) -> &str;
    fn field(&self) -> &str;
}

/// A remote store that runs named functions against JSON arguments.
#[async_trait]
pub trait MutationClient: Send + Sync {
    async fn mutation(&self, path: &str, args: serde_json::Value) -> Result<serde_json::Value>;
    async fn query(&self, path: &str, args: serde_json::Value) -> Result<serde_json::Value>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<String>>;
    async fn transform(&self, lines: Vec<String>) -> Result<Vec<WordRecord>>;
    async fn load(&self, words: Vec<WordRecord>) -> Result<LoadSummary>;
}
