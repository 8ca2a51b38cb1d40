//! Credential hashing

use sha2::{Digest, Sha256};

/// Hash a credential secret to a lowercase hex digest.
///
/// The transform is pure and unsalted: identical input always yields the
/// identical digest, which is what makes stored digests comparable at
/// login time. Callers are expected to assemble the secret as
/// password + email at every call site so the email acts as a per-user
/// salt substitute.
pub fn hash_secret(secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_digest() {
        // SHA-256 of the empty string
        assert_eq!(
            hash_secret(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_deterministic() {
        let secret = "Passw0rda@x.com";
        assert_eq!(hash_secret(secret), hash_secret(secret));
    }

    #[test]
    fn test_digest_is_hex_encoded() {
        let digest = hash_secret("Valid123a@x.com");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_different_passwords_same_email_differ() {
        let email = "a@x.com";
        let a = hash_secret(&format!("Passw0rd{}", email));
        let b = hash_secret(&format!("Passw1rd{}", email));
        assert_ne!(a, b);
    }

    proptest! {
        #[test]
        fn prop_hash_is_pure(secret in ".*") {
            prop_assert_eq!(hash_secret(&secret), hash_secret(&secret));
        }

        #[test]
        fn prop_distinct_secrets_distinct_digests(a in "[a-zA-Z0-9]{1,32}", b in "[a-zA-Z0-9]{1,32}") {
            prop_assume!(a != b);
            prop_assert_ne!(hash_secret(&a), hash_secret(&b));
        }
    }
}
