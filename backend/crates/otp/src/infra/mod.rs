//! Infrastructure Layer
//!
//! PostgreSQL implementation of the code ledger, plus in-memory
//! implementations of every collaborator for tests and development.

pub mod memory;
pub mod postgres;
