//! Configuration validation utilities
//!
//! Every rule is checked and all failures are reported together, so a broken
//! config file can be fixed in one pass.

use super::GitHubConfig;
use reqwest::Url;

/// Enumeration of possible validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Base URL could not be parsed as an absolute URL
    InvalidBaseUrl(String),
    /// Base URL uses something other than http or https
    UnsupportedScheme(String),
    /// Token is empty or whitespace-only
    EmptyToken,
    /// Request timeout of zero seconds
    ZeroTimeout,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidBaseUrl(url) => {
                write!(f, "Invalid base URL: '{}'", url)
            }
            ValidationError::UnsupportedScheme(url) => {
                write!(f, "Base URL must use http or https: '{}'", url)
            }
            ValidationError::EmptyToken => {
                write!(f, "GitHub token cannot be empty")
            }
            ValidationError::ZeroTimeout => {
                write!(f, "Request timeout must be greater than zero")
            }
        }
    }
}

/// Validates a complete configuration object
pub fn validate_config(config: &GitHubConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(error) = validate_base_url(&config.base_url) {
        errors.push(error);
    }

    if config.token.trim().is_empty() {
        errors.push(ValidationError::EmptyToken);
    }

    if config.timeout_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates that the base URL is an absolute http(s) URL
pub fn validate_base_url(base_url: &str) -> Result<(), ValidationError> {
    let url =
        Url::parse(base_url).map_err(|_| ValidationError::InvalidBaseUrl(base_url.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(ValidationError::UnsupportedScheme(base_url.to_string())),
    }
}

/// Converts validation errors to a user-friendly anyhow error
pub fn validation_errors_to_anyhow(errors: Vec<ValidationError>) -> anyhow::Error {
    let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    anyhow::anyhow!("Validation errors: {}", error_messages.join("; "))
}
