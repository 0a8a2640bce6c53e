use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Issues and verifies signed bearer tokens.
///
/// Tokens are compact JWTs signed with HS256 over a process-wide symmetric
/// secret. The secret and time-to-live are injected at construction, never
/// read from ambient state, so tests can build issuers with distinct
/// secrets.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
}

impl TokenIssuer {
    /// Create a new token issuer.
    ///
    /// # Arguments
    /// * `secret` - Symmetric signing secret (at least 32 bytes for HS256)
    /// * `ttl` - Lifetime of every issued token
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            ttl,
        }
    }

    /// Issue a signed token for an account.
    ///
    /// The token embeds the account id, the issuance time, and an expiry of
    /// now plus the configured TTL. Tokens are never mutated after issuance
    /// and cannot be revoked; they simply expire.
    ///
    /// # Arguments
    /// * `account_id` - Identifier to encode as the token subject
    ///
    /// # Returns
    /// Encoded JWT string
    ///
    /// # Errors
    /// * `Signing` - Token serialization or signing failed
    pub fn issue(&self, account_id: &str) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: account_id.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verify a token and return its claims.
    ///
    /// # Arguments
    /// * `token` - Encoded JWT string
    ///
    /// # Returns
    /// Decoded claims, only when the signature verifies and the token is
    /// not expired
    ///
    /// # Errors
    /// * `Malformed` - Token encoding cannot be parsed
    /// * `BadSignature` - Signature does not match this issuer's secret
    /// * `Expired` - Current time exceeds the embedded expiry
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is exact; the default 60s leeway would let stale tokens by.
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::BadSignature,
                _ => TokenError::Malformed(e.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(SECRET, Duration::hours(100))
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let issuer = issuer();

        let token = issuer.issue("user123").expect("Failed to issue token");
        let claims = issuer.verify(&token).expect("Failed to verify token");

        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.exp - claims.iat, 100 * 60 * 60);
    }

    #[test]
    fn test_expired_token_rejected() {
        let issuer = TokenIssuer::new(SECRET, Duration::seconds(-1));

        let token = issuer.issue("user123").expect("Failed to issue token");

        assert_eq!(issuer.verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_garbage_token_is_malformed() {
        let issuer = issuer();

        assert!(matches!(
            issuer.verify("garbage"),
            Err(TokenError::Malformed(_))
        ));
        assert!(matches!(
            issuer.verify("still.not-a.token"),
            Err(TokenError::Malformed(_))
        ));
    }

    #[test]
    fn test_tampered_signature_rejected() {
        let issuer = issuer();

        let token = issuer.issue("user123").expect("Failed to issue token");

        // Flip the first character of the signature segment, staying within
        // the base64url alphabet so the failure is the signature check
        // itself rather than base64 decoding.
        let dot = token.rfind('.').expect("Token has no signature segment");
        let original = token.as_bytes()[dot + 1];
        let flipped = if original == b'A' { 'B' } else { 'A' };
        let mut tampered = token.clone();
        tampered.replace_range(dot + 1..dot + 2, &flipped.to_string());
        assert_ne!(token, tampered);

        assert_eq!(issuer.verify(&tampered), Err(TokenError::BadSignature));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = issuer();
        let other = TokenIssuer::new(b"another_secret_key_32_bytes_long!!", Duration::hours(100));

        let token = issuer.issue("user123").expect("Failed to issue token");

        assert_eq!(other.verify(&token), Err(TokenError::BadSignature));
    }
}
