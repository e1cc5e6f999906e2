//! Shared types for the wholesale ordering platform
//!
//! Domain types used by the calculation engine and its callers:
//! order inputs, calculation lines, result breakdowns, and the
//! externally-owned customer and tax definition models.

pub mod models;
pub mod order;

// Re-exports
pub use serde::{Deserialize, Serialize};
