//! Domain Value Objects

pub mod channel;
pub mod ids;
pub mod mail;
pub mod purpose;
