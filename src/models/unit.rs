use serde::{Deserialize, Serialize};

use crate::costing::constants::LARGE_UNIT_FACTOR;
use rust_decimal::Decimal;

/// Measurement unit identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitId(pub u32);

impl std::fmt::Display for UnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unit #{}", self.0)
    }
}

/// Family a unit belongs to. Mass and volume have a base unit (gram, milliliter);
/// count units are converted through an ingredient's weight per unit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitFamily {
    Mass,
    Volume,
    Count,
}

impl UnitFamily {
    pub fn base_symbol(&self) -> &'static str {
        match self {
            UnitFamily::Mass => "g",
            UnitFamily::Volume => "ml",
            UnitFamily::Count => "un",
        }
    }
}

/// Size of a unit relative to its family base.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitScale {
    /// Gram, milliliter, unit.
    #[default]
    Base,
    /// Kilogram, liter: 1000 base units.
    Large,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementUnit {
    pub id: UnitId,
    pub name: String,
    pub symbol: String,
    pub family: UnitFamily,
    #[serde(default)]
    pub scale: UnitScale,
}

impl MeasurementUnit {
    /// Factor converting a quantity in this unit to its family base unit.
    pub fn factor_to_base(&self) -> Decimal {
        match self.scale {
            UnitScale::Base => Decimal::ONE,
            UnitScale::Large => LARGE_UNIT_FACTOR,
        }
    }

    pub fn is_count(&self) -> bool {
        self.family == UnitFamily::Count
    }
}
