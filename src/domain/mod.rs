//! Domain types and DTOs
//!
//! Wire shapes use camelCase field names to match the frontend contract.

pub mod agent;
pub mod documents;

pub use agent::*;
pub use documents::*;
