//! Error types for reading the JSON wire form.

use thiserror::Error;

/// Result type alias for refract-json operations.
pub type Result<T> = std::result::Result<T, ReadError>;

/// Errors that can occur while reading an element tree from JSON.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The input is not valid JSON at all.
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// An element object is missing a required field.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A field holds a value of the wrong JSON type.
    #[error("invalid type for {field}: expected {expected}")]
    InvalidType {
        field: String,
        expected: &'static str,
    },

    /// The document root is not a `parseResult` element.
    #[error("expected a parseResult root element, found `{0}`")]
    UnexpectedRoot(String),
}
