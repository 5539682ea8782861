//! Order ledger entries and their status transitions.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
