//! Order calculation engine for the wholesale ordering platform
//!
//! Turns a cart plus a customer's commercial terms into a financially
//! correct, auditable order breakdown:
//!
//! - tier-based unit pricing (tiers 1-5)
//! - flat per-unit excise taxes, resolved through a versioned cache over
//!   the admin-managed tax definition store
//! - loyalty point accrual and capped redemption
//! - cross-field checks returned as typed errors
//!
//! All monetary arithmetic is integer cents; decimal values exist only at
//! the input/output boundary. The engine holds no order state of its own:
//! a calculation is a pure function of its inputs plus the current tax
//! definitions, safe to run concurrently from any number of request
//! handlers. The tax cache is the single shared structure, cleared as a
//! whole by the admin write path.
//!
//! Persistence is injected: the engine sees the tax store only through
//! [`store::TaxDefinitionStore`]. Loyalty balances are read here but
//! deducted by the caller's commit transaction, which must re-validate the
//! balance it observed.

pub mod config;
pub mod error;
pub mod loyalty;
pub mod money;
pub mod order_calculator;
pub mod pricing;
pub mod store;
pub mod tax;
pub mod validation;

// Re-exports
pub use config::EngineConfig;
pub use error::{CalcError, InvariantViolation, StoreError};
pub use order_calculator::OrderCalculator;
pub use store::{InMemoryTaxStore, TaxDefinitionStore};
pub use tax::{CacheInvalidationController, TaxRegistry};
