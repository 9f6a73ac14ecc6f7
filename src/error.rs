//! Error types and handling for the Kay Jay site services

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Application error types shared by the CLI and the HTTP API
#[derive(Debug, Serialize)]
pub enum AppError {
    InvalidInput(String),
    NotFound(String),
    UpstreamFailed(String),
    ParseFailed(String),
    StorageFailed(String),
    MailRelayFailed(String),
    Timeout(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::UpstreamFailed(msg) => write!(f, "Upstream service failed: {}", msg),
            AppError::ParseFailed(msg) => write!(f, "Response parse failed: {}", msg),
            AppError::StorageFailed(msg) => write!(f, "Submission storage failed: {}", msg),
            AppError::MailRelayFailed(msg) => write!(f, "Mail relay failed: {}", msg),
            AppError::Timeout(msg) => write!(f, "Timeout: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// Get the stable error code used in API responses and exit-code mapping
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "invalid_input",
            AppError::NotFound(_) => "not_found",
            AppError::UpstreamFailed(_) => "upstream_failed",
            AppError::ParseFailed(_) => "parse_failed",
            AppError::StorageFailed(_) => "storage_failed",
            AppError::MailRelayFailed(_) => "mail_relay_failed",
            AppError::Timeout(_) => "timeout",
            AppError::Internal(_) => "internal_error",
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Convert anyhow::Error to AppError
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Convert reqwest::Error to AppError
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Timeout(err.to_string())
        } else if err.is_connect() || err.is_request() || err.is_status() {
            AppError::UpstreamFailed(err.to_string())
        } else {
            AppError::Internal(err.to_string())
        }
    }
}

/// Convert serde_json::Error to AppError
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::ParseFailed(err.to_string())
    }
}

/// Validation functions
pub fn validate_query(query: &str) -> Result<(), AppError> {
    if query.trim().is_empty() {
        return Err(AppError::InvalidInput("Query cannot be empty".to_string()));
    }

    if query.len() > 500 {
        return Err(AppError::InvalidInput(
            "Query too long, maximum 500 characters".to_string(),
        ));
    }

    Ok(())
}

/// Loose email shape check, matching the original inquiry form: one '@'
/// followed somewhere by a '.', no whitespace in any segment.
pub fn validate_email(email: &str) -> Result<(), AppError> {
    let ok = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };

    if ok {
        Ok(())
    } else {
        Err(AppError::InvalidInput(format!(
            "Invalid email address: {}",
            email
        )))
    }
}

/// Check-out must come after check-in when both dates are given.
/// Dates stay optional throughout the inquiry flow.
pub fn validate_stay_dates(
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
) -> Result<(), AppError> {
    if let (Some(ci), Some(co)) = (check_in, check_out) {
        if co <= ci {
            return Err(AppError::InvalidInput(
                "Check-out date must be after the check-in date".to_string(),
            ));
        }
    }
    Ok(())
}

pub fn validate_guests(adults: u32) -> Result<(), AppError> {
    if adults < 1 {
        return Err(AppError::InvalidInput(
            "At least one adult must be selected".to_string(),
        ));
    }
    Ok(())
}

/// Normalize text using Unicode NFKC before search tokenization
pub fn normalize_text(text: &str) -> String {
    use unicode_normalization::UnicodeNormalization;
    text.nfkc().collect::<String>().trim().to_string()
}
