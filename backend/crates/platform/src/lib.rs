//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (secure randomness, numeric codes, Base64)
//! - One-way hashing for passwords and short secrets (Argon2id)
//! - Reversible authenticated encryption (AES-256-GCM)

pub mod cipher;
pub mod crypto;
pub mod password;
