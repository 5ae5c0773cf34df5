use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::time::Duration;

pub const DEFAULT_WORDS_FILE: &str = "/usr/share/dict/words";
pub const DEFAULT_MUTATION: &str = "words:insert";
pub const DEFAULT_FIELD: &str = "word";

/// One source of settings (CLI flags, environment, config file). Unset
/// values fall through to the next layer.
#[derive(Debug, Clone, Default)]
pub struct SettingsLayer {
    pub words_file: Option<String>,
    pub convex_url: Option<String>,
    pub mutation: Option<String>,
    pub field: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl SettingsLayer {
    pub fn from_convex_url(convex_url: Option<String>) -> Self {
        Self {
            convex_url,
            ..Self::default()
        }
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestSettings {
    pub words_file: String,
    pub convex_url: String,
    pub mutation: String,
    pub field: String,
    pub timeout_seconds: Option<u64>,
}

fn first<T: Clone>(
    layers: &[SettingsLayer],
    pick: impl Fn(&SettingsLayer) -> &Option<T>,
) -> Option<T> {
    layers.iter().find_map(|layer| pick(layer).clone())
}

impl IngestSettings {
    /// Merges `layers` highest priority first, applies defaults and validates.
    /// A missing deployment URL is an error here, before any request is made.
    pub fn from_layers(layers: &[SettingsLayer]) -> Result<Self> {
        let convex_url = first(layers, |l| &l.convex_url);
        let convex_url = validation::validate_required_field("convex_url", &convex_url)?.clone();

        let settings = Self {
            words_file: first(layers, |l| &l.words_file)
                .unwrap_or_else(|| DEFAULT_WORDS_FILE.to_string()),
            convex_url,
            mutation: first(layers, |l| &l.mutation)
                .unwrap_or_else(|| DEFAULT_MUTATION.to_string()),
            field: first(layers, |l| &l.field).unwrap_or_else(|| DEFAULT_FIELD.to_string()),
            timeout_seconds: first(layers, |l| &l.timeout_seconds),
        };

        settings.validate()?;
        Ok(settings)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for IngestSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("convex_url", &self.convex_url)?;
        validation::validate_path("words_file", &self.words_file)?;
        validation::validate_function_path("mutation", &self.mutation)?;
        validation::validate_non_empty_string("field", &self.field)?;
        if let Some(timeout) = self.timeout_seconds {
            validation::validate_positive_number("timeout_seconds", timeout, 1)?;
        }
        Ok(())
    }
}

impl ConfigProvider for IngestSettings {
    fn words_file(&self) -> &str {
        &self.words_file
    }

    fn mutation(&self) -> &str {
        &self.mutation
    }

    fn field(&self) -> &str {
        &self.field
    }
}
