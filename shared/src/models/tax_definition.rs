//! Tax Definition Model

use serde::{Deserialize, Serialize};

/// Flat excise tax definition (admin-owned)
///
/// A fixed per-unit amount, never a percentage. This is the only taxation
/// mechanism in the system.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaxDefinition {
    pub id: i64,
    pub name: String,
    /// Per-unit amount in currency units
    pub amount: f64,
    /// Last modification timestamp (Unix millis)
    pub updated_at: i64,
}

/// Create tax definition payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxDefinitionCreate {
    pub name: String,
    pub amount: f64,
}

/// Update tax definition payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxDefinitionUpdate {
    pub name: Option<String>,
    pub amount: Option<f64>,
}
