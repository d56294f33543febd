//! Cryptographic Utilities

use base64::{Engine, engine::general_purpose};
use rand::{Rng, RngCore, rngs::OsRng};

/// Generate cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Generate a fixed-length numeric code from a secure random source
///
/// Each digit is drawn independently, so leading zeros are possible
/// and every code of the requested length is equally likely.
pub fn numeric_code(len: usize) -> String {
    (0..len)
        .map(|_| char::from(b'0' + OsRng.gen_range(0..10u8)))
        .collect()
}

/// Encode bytes as base64
pub fn to_base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// Decode base64 to bytes
pub fn from_base64(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::STANDARD.decode(s)
}

/// Constant-time comparison to prevent timing attacks
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_bytes() {
        let bytes = random_bytes(32);
        assert_eq!(bytes.len(), 32);
        // Should not be all zeros (statistically)
        assert!(bytes.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_numeric_code_length_and_charset() {
        for len in [4, 6, 8] {
            let code = numeric_code(len);
            assert_eq!(code.len(), len);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_numeric_code_can_start_with_zero() {
        // With 1000 draws a leading zero is all but guaranteed
        let found = (0..1000).any(|_| numeric_code(4).starts_with('0'));
        assert!(found, "Codes starting with 0 must be possible");
    }

    #[test]
    fn test_numeric_code_varies() {
        use std::collections::HashSet;
        let codes: HashSet<String> = (0..50).map(|_| numeric_code(8)).collect();
        assert!(codes.len() > 45, "Should generate mostly unique codes");
    }

    #[test]
    fn test_base64_roundtrip() {
        let data = b"hello world";
        let encoded = to_base64(data);
        let decoded = from_base64(&encoded).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_constant_time_eq() {
        let a = [1u8, 2, 3, 4];
        let b = [1u8, 2, 3, 4];
        let c = [1u8, 2, 3, 5];
        assert!(constant_time_eq(&a, &b));
        assert!(!constant_time_eq(&a, &c));
        assert!(!constant_time_eq(&a, &b[..3]));
    }
}
