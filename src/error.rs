//! Error types for page composition

use thiserror::Error;

/// Error type for page composition operations
#[derive(Debug, Error)]
pub enum PageError {
	/// Invalid configuration value passed to a setter
	#[error("Configuration error: {0}")]
	Configuration(String),

	/// Element cannot be attached where requested
	#[error("Invalid element: {0}")]
	InvalidElement(String),

	/// Unknown section name
	#[error("Invalid section: {0}")]
	InvalidSection(String),
}

/// Result type for page composition operations
pub type PageResult<T> = Result<T, PageError>;
