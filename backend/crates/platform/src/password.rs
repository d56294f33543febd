//! One-Way Hashing for Passwords and Short Secrets
//!
//! NIST SP 800-63B compliant password handling with:
//! - Argon2id hashing (memory-hard, recommended by OWASP)
//! - Zeroization of sensitive data
//! - Constant-effort verification
//!
//! The low-level [`hash_secret`] / [`verify_secret`] pair is also used
//! for short secrets that are not passwords (e.g. one-time codes), so
//! the plaintext never needs to be stored anywhere.

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Constants (NIST SP 800-63B compliant)
// ============================================================================

/// Minimum password length (NIST: SHALL be at least 8)
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length (NIST: SHOULD permit at least 64)
pub const MAX_PASSWORD_LENGTH: usize = 128;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// Password is too short
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    /// Password is too long
    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    /// Password contains only whitespace
    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    /// Password contains invalid characters (control characters)
    #[error("Password contains invalid control characters")]
    InvalidCharacter,

    /// Password matches common patterns (sequential, repeated)
    #[error("Password is too common or follows a predictable pattern")]
    CommonPattern,
}

/// Hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Secret hashing failed: {0}")]
    HashingFailed(String),

    /// Invalid hash format
    #[error("Invalid hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Low-level hashing (shared by passwords and one-time codes)
// ============================================================================

/// Hash an arbitrary secret with Argon2id
///
/// ## Arguments
/// * `secret` - The plaintext secret bytes
/// * `pepper` - Optional application-wide secret appended before hashing
///
/// ## Returns
/// PHC-formatted hash string, safe to store
pub fn hash_secret(secret: &[u8], pepper: Option<&[u8]>) -> Result<String, PasswordHashError> {
    let input = peppered(secret, pepper);

    // Random 128-bit salt per hash
    let salt = SaltString::generate(OsRng);

    // OWASP recommended Argon2id parameters:
    // m=19456 (19 MiB), t=2, p=1
    let argon2 = Argon2::default();

    let hash = argon2
        .hash_password(&input, &salt)
        .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

    Ok(hash.to_string())
}

/// Verify a candidate secret against a stored PHC hash
///
/// Argon2 performs the comparison in constant time internally; an
/// unparseable hash verifies as false rather than erroring, so a
/// corrupt stored value behaves like a mismatch.
pub fn verify_secret(secret: &[u8], pepper: Option<&[u8]>, phc: &str) -> bool {
    let input = peppered(secret, pepper);

    let parsed_hash = match PasswordHash::new(phc) {
        Ok(h) => h,
        Err(_) => return false,
    };

    Argon2::default()
        .verify_password(&input, &parsed_hash)
        .is_ok()
}

fn peppered(secret: &[u8], pepper: Option<&[u8]>) -> Vec<u8> {
    match pepper {
        Some(p) => {
            let mut combined = secret.to_vec();
            combined.extend_from_slice(p);
            combined
        }
        None => secret.to_vec(),
    }
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// Ensures password data is securely erased from memory when the
/// value is dropped.
///
/// ## Security
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Create a new clear text password with validation
    ///
    /// Validates against NIST SP 800-63B requirements:
    /// - Minimum 8 characters
    /// - Maximum 128 characters
    /// - No control characters
    /// - Not empty/whitespace only
    ///
    /// Unicode is normalized using NFKC before validation.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        // NIST: Unicode NFKC normalization before processing
        let normalized: String = raw.nfkc().collect();

        if normalized.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        // NIST: Count Unicode code points (not bytes)
        let char_count = normalized.chars().count();

        if char_count < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        // Control characters are rejected (except space, tab, newline)
        for ch in normalized.chars() {
            if ch.is_control() && ch != ' ' && ch != '\t' && ch != '\n' {
                return Err(PasswordPolicyError::InvalidCharacter);
            }
        }

        if is_common_pattern(&normalized) {
            return Err(PasswordPolicyError::CommonPattern);
        }

        Ok(Self(normalized))
    }

    /// Create without validation (for testing or trusted input)
    ///
    /// ## Safety
    /// Only use this for testing or when password has already been validated
    #[cfg(test)]
    pub fn new_unchecked(raw: String) -> Self {
        Self(raw)
    }

    /// Get the password as bytes for hashing
    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash the password using Argon2id
    ///
    /// ## Arguments
    /// * `pepper` - Optional application-wide secret for additional security
    pub fn hash(&self, pepper: Option<&[u8]>) -> Result<HashedPassword, PasswordHashError> {
        let hash = hash_secret(self.as_bytes(), pepper)?;
        Ok(HashedPassword { hash })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Hashed password in PHC string format
///
/// The PHC string carries the algorithm identifier, version,
/// parameters, salt, and hash.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Create from PHC string (e.g., from database)
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();

        // Validate it's a valid PHC string
        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;

        Ok(Self { hash })
    }

    /// Get the PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a password against this hash
    ///
    /// ## Arguments
    /// * `password` - The clear text password to verify
    /// * `pepper` - Optional pepper (must match the one used during hashing)
    pub fn verify(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        verify_secret(password.as_bytes(), pepper, &self.hash)
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Check for common weak patterns
fn is_common_pattern(password: &str) -> bool {
    let lower = password.to_lowercase();

    // All same character (e.g., "aaaaaaaa")
    let mut chars = lower.chars();
    if let Some(first) = chars.next() {
        if chars.all(|c| c == first) {
            return true;
        }
    }

    if is_sequential_numbers(&lower) {
        return true;
    }

    const KEYBOARD_PATTERNS: &[&str] = &[
        "qwerty",
        "qwertyuiop",
        "asdfgh",
        "asdfghjkl",
        "zxcvbn",
        "qazwsx",
        "1qaz2wsx",
    ];

    for pattern in KEYBOARD_PATTERNS {
        if lower.contains(pattern) {
            return true;
        }
    }

    const COMMON_PASSWORDS: &[&str] = &[
        "password",
        "password1",
        "password123",
        "12345678",
        "123456789",
        "1234567890",
        "abcdefgh",
        "letmein",
        "welcome",
        "admin123",
        "iloveyou",
        "trustno1",
    ];

    COMMON_PASSWORDS.contains(&lower.as_str())
}

/// Check if string is sequential numbers
fn is_sequential_numbers(s: &str) -> bool {
    let digits: Vec<u32> = s.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.len() < 4 {
        return false;
    }

    let is_ascending = digits
        .windows(2)
        .all(|w| w[1] == w[0] + 1 || (w[0] == 9 && w[1] == 0));

    let is_descending = digits
        .windows(2)
        .all(|w| w[0] == w[1] + 1 || (w[0] == 0 && w[1] == 9));

    is_ascending || is_descending
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_secret_and_verify() {
        let phc = hash_secret(b"4821", None).unwrap();
        assert!(phc.starts_with("$argon2id$"));
        assert!(verify_secret(b"4821", None, &phc));
        assert!(!verify_secret(b"4822", None, &phc));
    }

    #[test]
    fn test_hash_secret_with_pepper() {
        let pepper = b"app_secret_pepper";
        let phc = hash_secret(b"4821", Some(pepper)).unwrap();

        assert!(verify_secret(b"4821", Some(pepper), &phc));
        assert!(!verify_secret(b"4821", None, &phc));
        assert!(!verify_secret(b"4821", Some(b"wrong"), &phc));
    }

    #[test]
    fn test_verify_secret_garbage_hash() {
        assert!(!verify_secret(b"4821", None, "not_a_phc_string"));
    }

    #[test]
    fn test_hash_is_salted() {
        let a = hash_secret(b"4821", None).unwrap();
        let b = hash_secret(b"4821", None).unwrap();
        assert_ne!(a, b, "Each hash must carry a fresh salt");
    }

    #[test]
    fn test_password_too_short() {
        let result = ClearTextPassword::new("short".to_string());
        assert!(matches!(result, Err(PasswordPolicyError::TooShort { .. })));
    }

    #[test]
    fn test_password_too_long() {
        let long_password = "a".repeat(MAX_PASSWORD_LENGTH + 1);
        let result = ClearTextPassword::new(long_password);
        assert!(matches!(result, Err(PasswordPolicyError::TooLong { .. })));
    }

    #[test]
    fn test_password_empty_or_whitespace() {
        assert!(matches!(
            ClearTextPassword::new("".to_string()),
            Err(PasswordPolicyError::EmptyOrWhitespace)
        ));
        assert!(matches!(
            ClearTextPassword::new("        ".to_string()),
            Err(PasswordPolicyError::EmptyOrWhitespace)
        ));
    }

    #[test]
    fn test_password_common_pattern() {
        let result = ClearTextPassword::new("password123".to_string());
        assert!(matches!(result, Err(PasswordPolicyError::CommonPattern)));

        let result = ClearTextPassword::new("qwertyuiop".to_string());
        assert!(matches!(result, Err(PasswordPolicyError::CommonPattern)));

        let result = ClearTextPassword::new("12345678".to_string());
        assert!(matches!(result, Err(PasswordPolicyError::CommonPattern)));
    }

    #[test]
    fn test_valid_password() {
        assert!(ClearTextPassword::new("MySecure#Pass2024!".to_string()).is_ok());
    }

    #[test]
    fn test_unicode_password() {
        assert!(ClearTextPassword::new("パスワード安全です!".to_string()).is_ok());
    }

    #[test]
    fn test_hash_and_verify() {
        let password = ClearTextPassword::new_unchecked("TestPassword123!".to_string());
        let hashed = password.hash(None).unwrap();

        assert!(hashed.verify(&password, None));

        let wrong_password = ClearTextPassword::new_unchecked("WrongPassword123!".to_string());
        assert!(!hashed.verify(&wrong_password, None));
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let password = ClearTextPassword::new_unchecked("TestPassword123!".to_string());
        let hashed = password.hash(None).unwrap();

        let phc_string = hashed.as_phc_string().to_string();
        let restored = HashedPassword::from_phc_string(phc_string).unwrap();

        assert!(restored.verify(&password, None));
    }

    #[test]
    fn test_invalid_phc_string() {
        let result = HashedPassword::from_phc_string("not_a_valid_hash");
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_redaction() {
        let password = ClearTextPassword::new_unchecked("secret".to_string());
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));
    }
}
