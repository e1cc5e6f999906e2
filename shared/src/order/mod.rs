//! Order Calculation Types
//!
//! This module provides the types flowing through the calculation engine:
//! - Inputs: cart items plus delivery and redemption requests
//! - Lines: the tagged breakdown lines of a computed order
//! - Result: the immutable order breakdown returned to callers

pub mod result;
pub mod types;

// Re-exports
pub use result::OrderResult;
pub use types::{CalcLine, OrderInput, OrderInputItem, OrderStatus};
