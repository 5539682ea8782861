//! Saved delivery addresses.

pub mod entity;
pub mod error;

pub use error::*;
