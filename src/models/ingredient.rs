use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CostError, Result};
use crate::models::unit::UnitId;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientId(pub u32);

impl std::fmt::Display for IngredientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ingredient #{}", self.0)
    }
}

/// An ingredient as purchased.
///
/// Package and clean-yield quantities are expressed in the purchase unit.
/// `weight_per_unit` is also in the purchase unit and is required only when the
/// ingredient is consumed by count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: IngredientId,
    pub name: String,
    pub purchase_unit: UnitId,
    pub package_quantity: Decimal,
    pub package_cost: Decimal,
    #[serde(default = "default_correction_factor")]
    pub correction_factor: Decimal,
    #[serde(default)]
    pub clean_yield_quantity: Option<Decimal>,
    #[serde(default)]
    pub units_per_package: Option<Decimal>,
    #[serde(default)]
    pub weight_per_unit: Option<Decimal>,
}

fn default_correction_factor() -> Decimal {
    Decimal::ONE
}

impl Ingredient {
    /// Clean-yield quantity when set and positive, else the package quantity.
    pub fn effective_quantity(&self) -> Decimal {
        match self.clean_yield_quantity {
            Some(q) if q > Decimal::ZERO => q,
            _ => self.package_quantity,
        }
    }

    /// Units per package when declared and positive.
    pub fn declared_units_per_package(&self) -> Option<Decimal> {
        self.units_per_package.filter(|u| *u > Decimal::ZERO)
    }

    /// Creation-time checks. The costing engine itself never calls this;
    /// non-positive package data simply costs zero there.
    pub fn validate(&self) -> Result<()> {
        if self.package_quantity <= Decimal::ZERO {
            return Err(CostError::InvalidInput(format!(
                "{}: package quantity must be positive",
                self.name
            )));
        }
        if self.package_cost < Decimal::ZERO {
            return Err(CostError::InvalidInput(format!(
                "{}: package cost must not be negative",
                self.name
            )));
        }
        if self.correction_factor < Decimal::ONE {
            return Err(CostError::InvalidInput(format!(
                "{}: correction factor must be at least 1.0",
                self.name
            )));
        }
        if let Some(clean) = self.clean_yield_quantity {
            if clean > self.package_quantity {
                return Err(CostError::InvalidInput(format!(
                    "{}: clean yield exceeds package quantity",
                    self.name
                )));
            }
        }
        Ok(())
    }
}
