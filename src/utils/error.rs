use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Config file parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Convex returned HTTP {status}: {body}")]
    HttpStatusError { status: u16, body: String },

    #[error("Mutation {path} failed: {message}")]
    MutationError { path: String, message: String },

    #[error("Query {path} failed: {message}")]
    QueryError { path: String, message: String },

    #[error("Submitting line {line} ({word:?}) failed: {source}")]
    SubmissionError {
        line: usize,
        word: String,
        #[source]
        source: Box<IngestError>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Remote,
    Io,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl IngestError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            IngestError::ApiError(_) | IngestError::HttpStatusError { .. } => {
                ErrorCategory::Network
            }
            IngestError::IoError(_) => ErrorCategory::Io,
            IngestError::SerializationError(_) => ErrorCategory::Data,
            IngestError::TomlError(_)
            | IngestError::MissingConfigError { .. }
            | IngestError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            IngestError::MutationError { .. } | IngestError::QueryError { .. } => {
                ErrorCategory::Remote
            }
            IngestError::SubmissionError { source, .. } => source.category(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Remote | ErrorCategory::Io | ErrorCategory::Data => {
                ErrorSeverity::High
            }
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    /// 進程退出碼，依嚴重程度決定
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            IngestError::MissingConfigError { field } if field == "convex_url" => {
                "Set VITE_CONVEX_URL in .env.local, .env or the environment, or pass --convex-url"
                    .to_string()
            }
            IngestError::MissingConfigError { field } => {
                format!("Provide a value for {}", field)
            }
            IngestError::InvalidConfigValueError { field, .. } => {
                format!("Check the value given for {}", field)
            }
            IngestError::TomlError(_) => {
                "Check the TOML config file syntax".to_string()
            }
            IngestError::IoError(_) => {
                "Check that the word list exists and is readable (--words-file)".to_string()
            }
            IngestError::ApiError(_) | IngestError::HttpStatusError { .. } => {
                "Check network connectivity and that the deployment URL is correct".to_string()
            }
            IngestError::MutationError { path, .. } | IngestError::QueryError { path, .. } => {
                format!("Check that {} is deployed and accepts these arguments", path)
            }
            IngestError::SerializationError(_) => {
                "The deployment returned an unexpected response body".to_string()
            }
            IngestError::SubmissionError { line, source, .. } => format!(
                "{} Lines before {} were already inserted.",
                source.recovery_suggestion(),
                line
            ),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            IngestError::MissingConfigError { field } => {
                format!("Missing configuration: {}", field)
            }
            IngestError::IoError(e) => format!("Could not read the word list: {}", e),
            IngestError::SubmissionError { line, word, source } => format!(
                "Stopped at line {} ({:?}): {}",
                line,
                word,
                source.user_friendly_message()
            ),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_url_is_critical() {
        let err = IngestError::MissingConfigError {
            field: "convex_url".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
        assert!(err.recovery_suggestion().contains("VITE_CONVEX_URL"));
    }

    #[test]
    fn test_submission_error_takes_category_of_source() {
        let err = IngestError::SubmissionError {
            line: 7,
            word: "apple".to_string(),
            source: Box::new(IngestError::HttpStatusError {
                status: 503,
                body: "unavailable".to_string(),
            }),
        };
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.exit_code(), 2);
        assert!(err.user_friendly_message().contains("line 7"));
        assert!(err.recovery_suggestion().contains("before 7"));
    }
}
