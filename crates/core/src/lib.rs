//! Framework-independent building blocks shared by the gear crates.

pub mod error;
pub mod json;
