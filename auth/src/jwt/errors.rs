use thiserror::Error;

/// Error type for token issuance and verification.
///
/// The distinction between variants is for server-side diagnostics only;
/// callers facing a client must collapse all verification failures into a
/// single "invalid token" response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token encoding is malformed: {0}")]
    Malformed(String),

    #[error("Token signature does not verify")]
    BadSignature,

    #[error("Token is expired")]
    Expired,

    #[error("Failed to sign token: {0}")]
    Signing(String),
}
