//! Reversible Authenticated Encryption
//!
//! AES-256-GCM sealing of short plaintexts into opaque, versioned
//! string tokens. A fresh random nonce is drawn per seal and framed
//! with the ciphertext, so the same plaintext never produces the same
//! token twice. Any tampering with the token fails authentication on
//! open.
//!
//! Token format: `v1:<nonce b64>:<ciphertext b64>` (unpadded base64)

use aes_gcm::{
    Aes256Gcm, Nonce,
    aead::{Aead, KeyInit},
};
use base64::{Engine, engine::general_purpose::STANDARD_NO_PAD};
use rand::{RngCore, rngs::OsRng};
use thiserror::Error;

const NONCE_LENGTH: usize = 12;
const TOKEN_VERSION: &str = "v1";

/// Cipher errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Encryption failed
    #[error("Encryption failed")]
    EncryptFailed,

    /// Token does not decrypt under this key (tampered, garbled, or wrong key)
    #[error("Token failed authentication")]
    OpenFailed,

    /// Token framing is not `v1:<nonce>:<ciphertext>`
    #[error("Malformed token")]
    Malformed,
}

/// Seal a plaintext into an opaque token under a 256-bit key
pub fn seal(key: &[u8; 32], plaintext: &[u8]) -> Result<String, CipherError> {
    let mut nonce_bytes = [0u8; NONCE_LENGTH];
    OsRng.fill_bytes(&mut nonce_bytes);

    let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| CipherError::EncryptFailed)?;
    let nonce = Nonce::from_slice(&nonce_bytes);
    let ciphertext = cipher
        .encrypt(nonce, plaintext)
        .map_err(|_| CipherError::EncryptFailed)?;

    Ok(format!(
        "{}:{}:{}",
        TOKEN_VERSION,
        STANDARD_NO_PAD.encode(nonce_bytes),
        STANDARD_NO_PAD.encode(ciphertext)
    ))
}

/// Open a sealed token, returning the original plaintext
///
/// Fails on any framing, decoding, or authentication error; no
/// distinction is exposed beyond [`CipherError::Malformed`] vs
/// [`CipherError::OpenFailed`].
pub fn open(key: &[u8; 32], token: &str) -> Result<Vec<u8>, CipherError> {
    let mut parts = token.splitn(3, ':');
    let version = parts.next().unwrap_or_default();
    let nonce_part = parts.next().unwrap_or_default();
    let cipher_part = parts.next().unwrap_or_default();

    if version != TOKEN_VERSION || nonce_part.is_empty() || cipher_part.is_empty() {
        return Err(CipherError::Malformed);
    }

    let nonce_bytes = STANDARD_NO_PAD
        .decode(nonce_part)
        .map_err(|_| CipherError::Malformed)?;
    if nonce_bytes.len() != NONCE_LENGTH {
        return Err(CipherError::Malformed);
    }
    let ciphertext = STANDARD_NO_PAD
        .decode(cipher_part)
        .map_err(|_| CipherError::Malformed)?;

    let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| CipherError::OpenFailed)?;
    cipher
        .decrypt(Nonce::from_slice(&nonce_bytes), ciphertext.as_ref())
        .map_err(|_| CipherError::OpenFailed)
}
