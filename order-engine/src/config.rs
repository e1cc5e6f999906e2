//! Engine configuration
//!
//! # Environment variables
//!
//! All settings can be overridden through environment variables:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | LOYALTY_EXCLUDED_CATEGORIES | tobacco | Comma-separated categories that never earn points |
//! | DEFAULT_FLAT_TAX_LABEL | Tobacco Tax | Label for tax lines whose item has none |

use std::collections::HashSet;

/// Calculation engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Categories whose items never accrue loyalty points (lowercase)
    pub loyalty_excluded_categories: HashSet<String>,
    /// Label applied to flat-tax lines when the item carries none
    pub default_flat_tax_label: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            loyalty_excluded_categories: HashSet::from(["tobacco".to_string()]),
            default_flat_tax_label: "Tobacco Tax".to_string(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            loyalty_excluded_categories: std::env::var("LOYALTY_EXCLUDED_CATEGORIES")
                .map(|v| {
                    v.split(',')
                        .map(|c| c.trim().to_ascii_lowercase())
                        .filter(|c| !c.is_empty())
                        .collect()
                })
                .unwrap_or(defaults.loyalty_excluded_categories),
            default_flat_tax_label: std::env::var("DEFAULT_FLAT_TAX_LABEL")
                .unwrap_or(defaults.default_flat_tax_label),
        }
    }
}
