use crate::utils::error::{IngestError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(IngestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(IngestError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(IngestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(IngestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(IngestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(IngestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| IngestError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(IngestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Convex function paths look like `module:function`, e.g. `words:insert`.
pub fn validate_function_path(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    match value.split_once(':') {
        Some((module, function))
            if !module.is_empty() && !function.is_empty() && !function.contains(':') =>
        {
            Ok(())
        }
        _ => Err(IngestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Expected a function path of the form module:function".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("convex_url", "https://happy-otter-123.convex.cloud").is_ok());
        assert!(validate_url("convex_url", "http://127.0.0.1:3210").is_ok());
        assert!(validate_url("convex_url", "").is_err());
        assert!(validate_url("convex_url", "invalid-url").is_err());
        assert!(validate_url("convex_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("timeout_seconds", 5, 1).is_ok());
        assert!(validate_positive_number("timeout_seconds", 0, 1).is_err());
    }

    #[test]
    fn test_validate_function_path() {
        assert!(validate_function_path("mutation", "words:insert").is_ok());
        assert!(validate_function_path("mutation", "dir/words:insert").is_ok());
        assert!(validate_function_path("mutation", "").is_err());
        assert!(validate_function_path("mutation", "insert").is_err());
        assert!(validate_function_path("mutation", ":insert").is_err());
        assert!(validate_function_path("mutation", "words:").is_err());
        assert!(validate_function_path("mutation", "a:b:c").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let missing: Option<String> = None;
        match validate_required_field("convex_url", &missing) {
            Err(IngestError::MissingConfigError { field }) => assert_eq!(field, "convex_url"),
            other => panic!("unexpected result: {:?}", other),
        }
        let present = Some("x".to_string());
        assert_eq!(validate_required_field("convex_url", &present).unwrap(), "x");
    }
}
