// src/error.rs
//! Application error types with structured error handling.
//!
//! Error types form the vocabulary for failure modes in the system.
//! Coercion and relation failures are kept as their own enums so that
//! each failure stays attributable to the field that caused it.

use std::fmt;
use thiserror::Error;

/// Notion API error codes as a typed vocabulary.
///
/// Instead of matching against magic strings like `"rate_limited"`,
/// the domain vocabulary is encoded in the type system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotionErrorCode {
    /// API rate limit exceeded
    RateLimited,
    /// The requested object does not exist or is inaccessible
    ObjectNotFound,
    /// API key is invalid or expired
    Unauthorized,
    /// API key lacks permission for this resource
    RestrictedResource,
    /// Request parameters failed Notion's validation
    ValidationFailed,
    /// Notion internal server error
    InternalError,
    /// Notion is temporarily unavailable
    ServiceUnavailable,
    /// HTTP status code fallback when the error body is unparseable
    HttpStatus(u16),
    /// An error code this client doesn't recognize yet
    Unknown(String),
}

impl NotionErrorCode {
    /// Parse a Notion API error code string into the typed vocabulary.
    pub fn from_api_response(code: &str) -> Self {
        match code {
            "rate_limited" => Self::RateLimited,
            "object_not_found" => Self::ObjectNotFound,
            "unauthorized" => Self::Unauthorized,
            "restricted_resource" => Self::RestrictedResource,
            "validation_error" => Self::ValidationFailed,
            "internal_server_error" => Self::InternalError,
            "service_unavailable" => Self::ServiceUnavailable,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Create from an HTTP status code when the error body is unparseable.
    pub fn from_http_status(status: u16) -> Self {
        Self::HttpStatus(status)
    }

    /// Whether this error means the resource simply doesn't exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ObjectNotFound)
    }
}

impl fmt::Display for NotionErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RateLimited => write!(f, "rate_limited"),
            Self::ObjectNotFound => write!(f, "object_not_found"),
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::RestrictedResource => write!(f, "restricted_resource"),
            Self::ValidationFailed => write!(f, "validation_error"),
            Self::InternalError => write!(f, "internal_server_error"),
            Self::ServiceUnavailable => write!(f, "service_unavailable"),
            Self::HttpStatus(code) => write!(f, "http_{}", code),
            Self::Unknown(code) => write!(f, "{}", code),
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Unknown database name: {0}")]
    UnknownDatabase(String),

    #[error("Invalid field format: {0} (expected Key=Value)")]
    InvalidFieldFormat(String),

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Notion API returned an error ({code}): {message}")]
    NotionService {
        code: NotionErrorCode,
        message: String,
        status: reqwest::StatusCode,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot coerce properties: {0}")]
    Coercion(#[from] CoercionError),

    #[error(transparent)]
    ValidationError(#[from] crate::types::ValidationError),
}

impl From<std::fmt::Error> for AppError {
    fn from(_: std::fmt::Error) -> Self {
        AppError::MalformedResponse("formatting error while writing output".to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

/// A field-level failure while coercing raw input against a database schema.
///
/// The first failure aborts the whole coercion; no partial result escapes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoercionError {
    #[error("invalid number for '{field}': {value}")]
    InvalidNumber { field: String, value: String },

    #[error("invalid date for '{field}': {value}")]
    InvalidDate { field: String, value: String },

    #[error("invalid boolean for '{field}': {value}")]
    InvalidBoolean { field: String, value: String },

    #[error("no option named '{value}' for '{field}'")]
    OptionNotFound { field: String, value: String },

    #[error("property '{field}' has unsupported type '{property_type}'")]
    UnsupportedPropertyType { field: String, property_type: String },

    #[error("property '{field}' is read-only")]
    ReadOnlyProperty { field: String },

    #[error("cannot resolve relation for '{field}': {source}")]
    Relation {
        field: String,
        #[source]
        source: RelationError,
    },
}

/// A failure while resolving a title fragment to a related record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelationError {
    #[error("no record found with a title starting with '{fragment}'")]
    NotFound { fragment: String },

    #[error("ambiguous reference '{fragment}': {count} records match")]
    AmbiguousReference { fragment: String, count: usize },

    #[error("query failed: {0}")]
    Query(String),
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;
