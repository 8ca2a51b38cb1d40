//! Session token issuance and verification

use crate::core::error::{RegistryError, Result};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Token validity window in seconds (1 hour).
///
/// Shorter than the 24-hour session cookie lifetime; an expired token can
/// still be sitting in a live cookie.
pub const TOKEN_TTL_SECS: i64 = 3600;

/// Claims embedded in a session token
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject user ID
    pub sub: String,
    /// Subject email
    pub email: String,
    /// Expiry instant (Unix timestamp, seconds)
    pub exp: usize,
}

/// Issue a signed session token for a user
///
/// The signing key is injected by the caller; there is no hidden
/// process-global secret.
pub fn issue_token(user_id: &str, email: &str, secret: &str) -> Result<String> {
    let expiration = chrono::Utc::now()
        .checked_add_signed(chrono::Duration::seconds(TOKEN_TTL_SECS))
        .ok_or_else(|| RegistryError::TokenCreation("Failed to calculate expiration".to_string()))?
        .timestamp() as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| RegistryError::TokenCreation(format!("Failed to sign token: {}", e)))
}

/// Verify a session token and extract its claims
///
/// Verification is binary: a bad signature, an unparseable structure, or a
/// passed expiry all fail the same way. The expiry check uses zero leeway,
/// so the current time must be strictly before the expiry instant.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims> {
    let mut validation = Validation::default();
    validation.leeway = 0;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| RegistryError::InvalidToken(e.to_string()))?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-signing-key";

    #[test]
    fn test_issue_and_verify_round_trip() {
        let token = issue_token("user-1", "a@x.com", SECRET).unwrap();
        let claims = verify_token(&token, SECRET).unwrap();

        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.email, "a@x.com");
        assert!(claims.exp > chrono::Utc::now().timestamp() as usize);
    }

    #[test]
    fn test_expired_token_rejected() {
        // Craft a token whose expiry is already in the past
        let claims = Claims {
            sub: "user-1".to_string(),
            email: "a@x.com".to_string(),
            exp: (chrono::Utc::now().timestamp() - 120) as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        let result = verify_token(&token, SECRET);
        assert!(matches!(result, Err(RegistryError::InvalidToken(_))));
    }

    #[test]
    fn test_wrong_key_rejected() {
        let token = issue_token("user-1", "a@x.com", SECRET).unwrap();
        let result = verify_token(&token, "a-different-key");
        assert!(matches!(result, Err(RegistryError::InvalidToken(_))));
    }

    #[test]
    fn test_tampered_signature_rejected() {
        let token = issue_token("user-1", "a@x.com", SECRET).unwrap();

        // Corrupt the first character of the signature segment
        let dot = token.rfind('.').unwrap();
        let mut tampered = token[..=dot].to_string();
        let signature = &token[dot + 1..];
        let flipped = if signature.starts_with('x') { 'y' } else { 'x' };
        tampered.push(flipped);
        tampered.push_str(&signature[1..]);

        let result = verify_token(&tampered, SECRET);
        assert!(matches!(result, Err(RegistryError::InvalidToken(_))));
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let token = issue_token("user-1", "a@x.com", SECRET).unwrap();

        // Swap the payload segment for one belonging to another user
        let other = issue_token("user-2", "b@x.com", SECRET).unwrap();
        let parts: Vec<&str> = token.split('.').collect();
        let other_parts: Vec<&str> = other.split('.').collect();
        let spliced = format!("{}.{}.{}", parts[0], other_parts[1], parts[2]);

        let result = verify_token(&spliced, SECRET);
        assert!(matches!(result, Err(RegistryError::InvalidToken(_))));
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(matches!(
            verify_token("not-a-token", SECRET),
            Err(RegistryError::InvalidToken(_))
        ));
    }
}
