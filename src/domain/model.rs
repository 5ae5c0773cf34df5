use serde::{Deserialize, Serialize};

/// One dictionary entry, built from a single line of the word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub word: String,
}

impl WordRecord {
    /// Trailing whitespace (including a stray `\r`) is dropped, leading whitespace is kept.
    pub fn from_line(line: &str) -> Self {
        Self {
            word: line.trim_end().to_string(),
        }
    }

    /// Mutation arguments: a single-key object, `{ "<field>": "<word>" }`.
    pub fn to_args(&self, field: &str) -> serde_json::Value {
        let mut args = serde_json::Map::with_capacity(1);
        args.insert(
            field.to_string(),
            serde_json::Value::String(self.word.clone()),
        );
        serde_json::Value::Object(args)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadSummary {
    pub submitted: usize,
}

/// Splits a word list into lines in file order.
///
/// An empty input has no lines; a final line without a newline still counts.
pub fn split_lines(content: &str) -> Vec<String> {
    content.lines().map(str::to_string).collect()
}
