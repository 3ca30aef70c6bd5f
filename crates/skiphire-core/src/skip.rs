//! Skip records returned by the pricing API.

use serde::{Deserialize, Serialize};

/// One skip offer. Extra fields in the API payload are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkipOption {
    pub id: u64,
    /// Capacity in cubic yards.
    pub size: f64,
    pub price_before_vat: f64,
    /// VAT rate as a percentage, e.g. `20` for 20%.
    pub vat: f64,
    pub hire_period_days: u32,
    #[serde(default)]
    pub allowed_on_road: bool,
    #[serde(default)]
    pub allows_heavy_waste: bool,
}

impl SkipOption {
    /// Price including VAT.
    #[must_use]
    pub fn total_price(&self) -> f64 {
        self.price_before_vat * (1.0 + self.vat / 100.0)
    }

    /// Grid label, e.g. `8y - £300`.
    #[must_use]
    pub fn grid_label(&self) -> String {
        format!("{}y - £{}", self.size, self.price_before_vat)
    }

    /// Placement wording for the detail line.
    #[must_use]
    pub fn placement(&self) -> &'static str {
        if self.allowed_on_road {
            "Road OK"
        } else {
            "Off-road"
        }
    }
}
