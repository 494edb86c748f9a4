//! Password hashing and verification
//!
//! Thin wrapper over bcrypt: every hash gets a fresh random salt, so hashing
//! the same password twice yields different strings that both verify.

use crate::domain::Result;
use bcrypt::DEFAULT_COST;

/// Hash a password with a random salt at the default bcrypt cost
///
/// # Example
///
/// ```no_run
/// use piilog::password::{hash_password, is_valid};
///
/// let hashed = hash_password("MyAmazingPassw0rd").unwrap();
/// assert!(is_valid(&hashed, "MyAmazingPassw0rd").unwrap());
/// ```
pub fn hash_password(password: &str) -> Result<String> {
    hash_password_with_cost(password, DEFAULT_COST)
}

/// Hash a password with an explicit bcrypt cost (4..=31)
pub fn hash_password_with_cost(password: &str, cost: u32) -> Result<String> {
    let hashed = bcrypt::hash(password, cost)?;
    tracing::debug!(cost, "Password hashed");
    Ok(hashed)
}

/// Check `password` against a previously produced hash
///
/// A wrong password is `Ok(false)`; a malformed hash is an error.
pub fn is_valid(hashed_password: &str, password: &str) -> Result<bool> {
    Ok(bcrypt::verify(password, hashed_password)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PiiLogError;

    const TEST_COST: u32 = 4;

    #[test]
    fn test_hash_and_verify() {
        let hashed = hash_password_with_cost("MyAmazingPassw0rd", TEST_COST).unwrap();
        assert!(hashed.starts_with("$2"));
        assert!(is_valid(&hashed, "MyAmazingPassw0rd").unwrap());
        assert!(!is_valid(&hashed, "wrong_password").unwrap());
    }

    #[test]
    fn test_salted_hashes_differ() {
        let a = hash_password_with_cost("same", TEST_COST).unwrap();
        let b = hash_password_with_cost("same", TEST_COST).unwrap();
        assert_ne!(a, b);
        assert!(is_valid(&a, "same").unwrap());
        assert!(is_valid(&b, "same").unwrap());
    }

    #[test]
    fn test_malformed_hash() {
        let result = is_valid("plaintext", "plaintext");
        assert!(matches!(result, Err(PiiLogError::Password(_))));
    }

    #[test]
    fn test_invalid_cost() {
        assert!(hash_password_with_cost("pw", 2).is_err());
    }
}
