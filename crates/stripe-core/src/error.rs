//! # Error Types
//!
//! Typed error handling for the stripe-rest client.
//! All API operations return `Result<T, StripeError>`.

use thiserror::Error;

/// Errors produced while decoding a wire value into a typed filter or record.
///
/// These are the only failures the codec layer can produce; they are pure
/// data and carry enough context for the caller to report the exact field
/// that diverged from the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The top-level JSON value is neither an object nor a recognized scalar.
    /// `tag` identifies which polymorphic input failed dispatch
    /// (e.g. `"UnknownCreatedInput"`).
    #[error("{tag}: expected a timestamp or a bounds object, found {found}")]
    ShapeMismatch { tag: &'static str, found: String },

    /// A field was present but did not match its expected date/time type.
    /// Absence is never an error; only type mismatch is.
    #[error("invalid value for field `{field}`: {detail}")]
    FieldType { field: String, detail: String },
}

impl DecodeError {
    pub fn shape_mismatch(tag: &'static str, found: impl Into<String>) -> Self {
        DecodeError::ShapeMismatch {
            tag,
            found: found.into(),
        }
    }

    pub fn field_type(field: impl Into<String>, detail: impl Into<String>) -> Self {
        DecodeError::FieldType {
            field: field.into(),
            detail: detail.into(),
        }
    }
}

/// Core error type for all Stripe API operations
#[derive(Debug, Error)]
pub enum StripeError {
    /// Configuration errors (missing keys, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data, caught before any network call
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Error response returned by the Stripe API
    #[error("Stripe API error (HTTP {status}): {message}")]
    Api {
        status: u16,
        message: String,
        code: Option<String>,
        param: Option<String>,
    },

    /// Network/HTTP error communicating with the API
    #[error("Network error: {0}")]
    Network(String),

    /// Webhook signature verification failed
    #[error("Webhook verification failed: {0}")]
    SignatureVerification(String),

    /// A wire value failed shape-dispatch or field-level decoding
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Response body could not be parsed into the expected record
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl StripeError {
    /// Returns true if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            StripeError::Network(_) => true,
            StripeError::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

/// Result type alias for Stripe API operations
pub type StripeResult<T> = Result<T, StripeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(StripeError::Network("timeout".into()).is_retryable());
        assert!(StripeError::Api {
            status: 429,
            message: "rate limited".into(),
            code: None,
            param: None,
        }
        .is_retryable());
        assert!(StripeError::Api {
            status: 502,
            message: "bad gateway".into(),
            code: None,
            param: None,
        }
        .is_retryable());
        assert!(!StripeError::Api {
            status: 402,
            message: "card declined".into(),
            code: Some("card_declined".into()),
            param: None,
        }
        .is_retryable());
        assert!(!StripeError::InvalidRequest("bad data".into()).is_retryable());
    }

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::shape_mismatch("UnknownCreatedInput", "boolean");
        assert_eq!(
            err.to_string(),
            "UnknownCreatedInput: expected a timestamp or a bounds object, found boolean"
        );

        let err = DecodeError::field_type("gt", "not a timestamp");
        assert_eq!(err.to_string(), "invalid value for field `gt`: not a timestamp");
    }
}
