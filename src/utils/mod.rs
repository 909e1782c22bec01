//! Shared helpers: input validation and elapsed-time formatting.

pub mod time;
pub mod validation;
