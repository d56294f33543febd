//! Domain Layer
//!
//! Entities, value objects, collaborator traits, and pure services
//! for the one-time-code core.

pub mod entity;
pub mod repository;
pub mod services;
pub mod value_object;
