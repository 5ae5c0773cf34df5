use crate::config::settings::SettingsLayer;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional file form of the settings. Every key may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub convex: ConvexConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    pub words_file: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConvexConfig {
    pub url: Option<String>,
    pub mutation: Option<String>,
    pub field: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn into_layer(self) -> SettingsLayer {
        SettingsLayer {
            words_file: self.source.words_file,
            convex_url: self.convex.url,
            mutation: self.convex.mutation,
            field: self.convex.field,
            timeout_seconds: self.convex.timeout_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::IngestError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[source]
words_file = "/tmp/words"

[convex]
url = "https://happy-otter-123.convex.cloud"
mutation = "words:insert"
field = "word"
timeout_seconds = 30
"#;
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.source.words_file.as_deref(), Some("/tmp/words"));
        assert_eq!(config.convex.timeout_seconds, Some(30));

        let layer = config.into_layer();
        assert_eq!(
            layer.convex_url.as_deref(),
            Some("https://happy-otter-123.convex.cloud")
        );
        assert_eq!(layer.mutation.as_deref(), Some("words:insert"));
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = TomlConfig::parse("").unwrap();
        assert!(config.source.words_file.is_none());
        assert!(config.convex.url.is_none());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = TomlConfig::parse("[convex]\nbatch_size = 10\n").unwrap_err();
        assert!(matches!(err, IngestError::TomlError(_)));
    }
}
