use crate::core::{ConfigProvider, LoadSummary, MutationClient, Pipeline, Storage, WordRecord};
use crate::domain::model::split_lines;
use crate::utils::error::{IngestError, Result};

/// Reads the word list and inserts one word per mutation call.
///
/// Calls are made one at a time in file order; the first failure stops the
/// run and later lines are never sent.
pub struct WordIngestor<S: Storage, C: ConfigProvider, M: MutationClient> {
    storage: S,
    config: C,
    client: M,
}

impl<S: Storage, C: ConfigProvider, M: MutationClient> WordIngestor<S, C, M> {
    pub fn new(storage: S, config: C, client: M) -> Self {
        Self {
            storage,
            config,
            client,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, M: MutationClient> Pipeline for WordIngestor<S, C, M> {
    async fn extract(&self) -> Result<Vec<String>> {
        let path = self.config.words_file();
        tracing::debug!("Reading word list from {}", path);
        let bytes = self.storage.read_file(path).await?;

        let content = String::from_utf8(bytes).map_err(|e| {
            IngestError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })?;

        Ok(split_lines(&content))
    }

    async fn transform(&self, lines: Vec<String>) -> Result<Vec<WordRecord>> {
        // 不過濾空行，原樣送出
        Ok(lines.iter().map(|line| WordRecord::from_line(line)).collect())
    }

    async fn load(&self, words: Vec<WordRecord>) -> Result<LoadSummary> {
        let mutation = self.config.mutation();
        let field = self.config.field();
        let mut summary = LoadSummary::default();

        for (index, record) in words.into_iter().enumerate() {
            tracing::trace!("{} {:?}", mutation, record.word);
            if let Err(e) = self.client.mutation(mutation, record.to_args(field)).await {
                return Err(IngestError::SubmissionError {
                    line: index + 1,
                    word: record.word,
                    source: Box::new(e),
                });
            }
            summary.submitted += 1;
        }

        Ok(summary)
    }
}
