//! Domain Models
//!
//! Entities owned by external collaborators and consumed read-only by the
//! calculation engine: the customer profile (upstream account service) and
//! the tax definition (admin-managed store).

pub mod customer;
pub mod tax_definition;

// Re-exports
pub use customer::{Customer, LoyaltyProfile};
pub use tax_definition::{TaxDefinition, TaxDefinitionCreate, TaxDefinitionUpdate};
