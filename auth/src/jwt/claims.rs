use serde::Deserialize;
use serde::Serialize;

/// Claims carried inside every issued token.
///
/// Deliberately minimal: the account identifier plus the issuance window.
/// Identity resolution from a verified token is self-contained; nothing
/// here requires a credential-store lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (account identifier)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}
