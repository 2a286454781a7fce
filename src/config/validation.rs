//! Configuration validation.
//!
//! # Responsibilities
//! - A config file must name its owning service
//! - Remote targets must be absolute http(s) URLs
//! - Local targets must name a file, not a directory
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ClientConfig → Result<(), Vec<ValidationError>>
//! - Empty targets are valid; they disable the sink

use std::fmt;
use std::path::MAIN_SEPARATOR;

use crate::config::schema::ClientConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `owning_service_name` is empty or blank.
    MissingServiceName,
    /// Remote target is not a parseable absolute URL.
    InvalidUrl { target: String, reason: String },
    /// Remote target uses a scheme other than http or https.
    UnsupportedScheme { target: String, scheme: String },
    /// Local target ends in a path separator.
    DirectoryTarget { target: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingServiceName => write!(f, "owning_service_name must be set"),
            ValidationError::InvalidUrl { target, reason } => {
                write!(f, "log_target '{}' is not a valid URL: {}", target, reason)
            }
            ValidationError::UnsupportedScheme { target, scheme } => {
                write!(f, "log_target '{}' uses unsupported scheme '{}'", target, scheme)
            }
            ValidationError::DirectoryTarget { target } => {
                write!(f, "log_target '{}' names a directory, not a file", target)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let target = config.log_target.as_str();

    if config.owning_service_name.trim().is_empty() {
        errors.push(ValidationError::MissingServiceName);
    }

    if !target.is_empty() {
        if config.remote_enabled {
            if let Err(e) = check_remote_target(target) {
                errors.push(e);
            }
        } else if target.ends_with('/') || target.ends_with(MAIN_SEPARATOR) {
            errors.push(ValidationError::DirectoryTarget {
                target: target.to_string(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_remote_target(target: &str) -> Result<(), ValidationError> {
    let url = url::Url::parse(target).map_err(|e| ValidationError::InvalidUrl {
        target: target.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(ValidationError::UnsupportedScheme {
            target: target.to_string(),
            scheme: scheme.to_string(),
        }),
    }
}
