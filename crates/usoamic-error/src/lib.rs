// Usoamic Error Handling
// Typed failure reasons surfaced by the contract client

use std::fmt;
use thiserror::Error;

// Re-export for downstream crates that define their own error types
pub use thiserror;

mod macros;

/// Error code structure for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ErrorCode(pub u32);
impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// Contract client error codes
pub mod codes {
    use crate::ErrorCode;

    // Contract error codes start with 7000
    pub const INVALID_ARGUMENT: ErrorCode = ErrorCode(7001);
    pub const TRANSACTION_FAILED: ErrorCode = ErrorCode(7002);
    pub const CALL_FAILED: ErrorCode = ErrorCode(7003);
    pub const MALFORMED_RESPONSE: ErrorCode = ErrorCode(7004);
    pub const UNKNOWN_ENUM_VARIANT: ErrorCode = ErrorCode(7005);
    pub const EMPTY_COLLECTION: ErrorCode = ErrorCode(7006);
    pub const TIMEOUT: ErrorCode = ErrorCode(7007);
    pub const CONFIG: ErrorCode = ErrorCode(7008);
}

/// Failure reasons of the contract marshaling layer.
///
/// Every operation returns one of these to its immediate caller. Nothing is
/// retried and nothing is swallowed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractError {
    /// An argument was rejected before any node round-trip
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Credential unlock, signing or node submission failed
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// The node rejected a read-only call
    #[error("Call failed: {0}")]
    CallFailed(String),

    /// The returned tuple does not match the expected schema
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// An ordinal outside the known variants of a wire enumeration.
    ///
    /// `ordinal` is the decimal rendering of the full wire word.
    #[error("Unknown {enum_name} variant: {ordinal}")]
    UnknownEnumVariant {
        enum_name: &'static str,
        ordinal: String,
    },

    /// A derived query was asked for the last id of an empty collection
    #[error("Empty collection: {0}")]
    EmptyCollection(String),

    /// The configured call timeout elapsed
    #[error("Operation timed out: {0}")]
    Timeout(String),

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ContractError {
    /// Numeric code for this error
    pub fn code(&self) -> ErrorCode {
        use codes::*;
        match self {
            ContractError::InvalidArgument(_) => INVALID_ARGUMENT,
            ContractError::TransactionFailed(_) => TRANSACTION_FAILED,
            ContractError::CallFailed(_) => CALL_FAILED,
            ContractError::MalformedResponse(_) => MALFORMED_RESPONSE,
            ContractError::UnknownEnumVariant { .. } => UNKNOWN_ENUM_VARIANT,
            ContractError::EmptyCollection(_) => EMPTY_COLLECTION,
            ContractError::Timeout(_) => TIMEOUT,
            ContractError::Config(_) => CONFIG,
        }
    }

    /// Returns a unique static string code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            ContractError::InvalidArgument(_) => "CONTRACT_INVALID_ARGUMENT",
            ContractError::TransactionFailed(_) => "CONTRACT_TRANSACTION_FAILED",
            ContractError::CallFailed(_) => "CONTRACT_CALL_FAILED",
            ContractError::MalformedResponse(_) => "CONTRACT_MALFORMED_RESPONSE",
            ContractError::UnknownEnumVariant { .. } => "CONTRACT_UNKNOWN_ENUM_VARIANT",
            ContractError::EmptyCollection(_) => "CONTRACT_EMPTY_COLLECTION",
            ContractError::Timeout(_) => "CONTRACT_TIMEOUT",
            ContractError::Config(_) => "CONTRACT_CONFIG",
        }
    }

    /// Serializable form used by machine-readable output
    pub fn to_message(&self) -> ErrorMessage {
        ErrorMessage {
            code: self.code(),
            error_code: self.error_code().to_string(),
            message: self.to_string(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        ContractError::InvalidArgument(message.into())
    }

    pub fn transaction_failed(message: impl Into<String>) -> Self {
        ContractError::TransactionFailed(message.into())
    }

    pub fn call_failed(message: impl Into<String>) -> Self {
        ContractError::CallFailed(message.into())
    }

    pub fn malformed_response(message: impl Into<String>) -> Self {
        ContractError::MalformedResponse(message.into())
    }

    pub fn empty_collection(message: impl Into<String>) -> Self {
        ContractError::EmptyCollection(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        ContractError::Config(message.into())
    }
}

/// Standard error message format for serialization
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ErrorMessage {
    pub code: ErrorCode,
    pub error_code: String,
    pub message: String,
}

/// Convenient Result type for contract operations
pub type ContractResult<T> = Result<T, ContractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_distinct() {
        let errors = [
            ContractError::invalid_argument("a"),
            ContractError::transaction_failed("b"),
            ContractError::call_failed("c"),
            ContractError::malformed_response("d"),
            ContractError::UnknownEnumVariant { enum_name: "IdeaStatus", ordinal: "99".into() },
            ContractError::empty_collection("e"),
            ContractError::Timeout("f".into()),
            ContractError::config("g"),
        ];
        let mut codes: Vec<u32> = errors.iter().map(|e| e.code().0).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_unknown_variant_display() {
        let err = ContractError::UnknownEnumVariant { enum_name: "VoteType", ordinal: "7".into() };
        assert_eq!(err.to_string(), "Unknown VoteType variant: 7");
        assert_eq!(err.code().to_string(), "7005");
    }

    #[test]
    fn test_error_message_serialization() {
        let message = ContractError::empty_collection("no ideas").to_message();
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["code"], 7006);
        assert_eq!(json["error_code"], "CONTRACT_EMPTY_COLLECTION");
        assert_eq!(json["message"], "Empty collection: no ideas");
    }
}
