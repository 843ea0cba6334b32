//! Error types for the OFX client
//!
//! This module defines all error types that can occur during a request/response
//! cycle. Every error is fatal to the single call in progress and is surfaced
//! to the caller verbatim — nothing is retried or downgraded, with exactly two
//! tolerated defaults applied by the domain mapper (zero balance on
//! unparseable balance text, skip for account entries matching no known
//! sub-shape).
//!
//! # Error Categories
//!
//! - **Serialization**: the outbound element tree cannot be rendered (tag
//!   outside the schema vocabulary, or a node whose shape contradicts it)
//! - **Format**: the inbound text violates the tag-soup grammar (missing root
//!   marker, unterminated element, mismatched closing tag, unknown tag)
//! - **Protocol**: a well-formed reply that is semantically wrong (missing
//!   sign-on response, non-success sign-on status, missing requested
//!   message set)
//! - **Response**: a required scalar field of the reply cannot be parsed
//!   (transaction amount, posted date, missing account id)
//! - **Validation**: the caller supplied an invalid filter; raised before any
//!   I/O happens
//! - **Transport**: opaque network-level failure, propagated unchanged

use thiserror::Error;

/// Main error type for the OFX client
///
/// Each variant corresponds to one category of failure in the
/// build → serialize → send → deserialize → validate → extract sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OfxError {
    /// The outbound element tree cannot be rendered as wire text
    ///
    /// Raised before anything is sent; the caller never receives a partial
    /// request body.
    #[error("serialization failed: {detail}")]
    Serialization {
        /// Description of the offending node
        detail: String,
    },

    /// The inbound text violates the closing-tag-optional grammar
    #[error("malformed OFX: {detail}")]
    Format {
        /// Description of the grammar violation
        detail: String,
    },

    /// The reply parsed cleanly but is semantically wrong
    ///
    /// For sign-on failures the detail carries the server-supplied message
    /// text verbatim.
    #[error("protocol error: {detail}")]
    Protocol {
        /// Server message or description of the missing element
        detail: String,
    },

    /// A required scalar field in the reply cannot be parsed
    #[error("invalid response field: {detail}")]
    Response {
        /// Description of the field and the raw value
        detail: String,
    },

    /// The caller supplied an invalid transactions filter
    ///
    /// Raised locally, before any request is built or sent.
    #[error("invalid filter: {detail}")]
    Validation {
        /// Description of the rejected filter
        detail: String,
    },

    /// Network-level failure reported by the transport collaborator
    #[error("transport error: {detail}")]
    Transport {
        /// Underlying transport failure text
        detail: String,
    },
}

// The transport adapter surfaces reqwest failures unchanged, as text.
impl From<reqwest::Error> for OfxError {
    fn from(error: reqwest::Error) -> Self {
        OfxError::Transport {
            detail: error.to_string(),
        }
    }
}

// Helper constructors, one per category.

impl OfxError {
    /// Create a Serialization error
    pub fn serialization(detail: impl Into<String>) -> Self {
        OfxError::Serialization {
            detail: detail.into(),
        }
    }

    /// Create a Format error
    pub fn format(detail: impl Into<String>) -> Self {
        OfxError::Format {
            detail: detail.into(),
        }
    }

    /// Create a Protocol error
    pub fn protocol(detail: impl Into<String>) -> Self {
        OfxError::Protocol {
            detail: detail.into(),
        }
    }

    /// Create a Response error
    pub fn response(detail: impl Into<String>) -> Self {
        OfxError::Response {
            detail: detail.into(),
        }
    }

    /// Create a Validation error
    pub fn validation(detail: impl Into<String>) -> Self {
        OfxError::Validation {
            detail: detail.into(),
        }
    }

    /// Create a Transport error
    pub fn transport(detail: impl Into<String>) -> Self {
        OfxError::Transport {
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::serialization(
        OfxError::serialization("unknown tag <BOGUS>"),
        "serialization failed: unknown tag <BOGUS>"
    )]
    #[case::format(
        OfxError::format("unterminated element"),
        "malformed OFX: unterminated element"
    )]
    #[case::protocol(
        OfxError::protocol("authentication response missing"),
        "protocol error: authentication response missing"
    )]
    #[case::response(
        OfxError::response("transaction amount cannot be parsed: 'abc'"),
        "invalid response field: transaction amount cannot be parsed: 'abc'"
    )]
    #[case::validation(
        OfxError::validation("start date 2024-02-01 is after end date 2024-01-01"),
        "invalid filter: start date 2024-02-01 is after end date 2024-01-01"
    )]
    #[case::transport(
        OfxError::transport("connection refused"),
        "transport error: connection refused"
    )]
    fn test_error_display(#[case] error: OfxError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::protocol(OfxError::protocol("x"), OfxError::Protocol { detail: "x".to_string() })]
    #[case::format(OfxError::format("y"), OfxError::Format { detail: "y".to_string() })]
    fn test_helper_constructors(#[case] built: OfxError, #[case] expected: OfxError) {
        assert_eq!(built, expected);
    }
}
