use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::costing::units::{ResolvedUnit, UnitResolver};
use crate::error::Result;
use crate::models::{Ingredient, MeasurementUnit};
use crate::state::Catalog;

/// Which of the two ingredient cost formulas to apply.
///
/// Recipes are costed with `Package`. Ingredients attached directly to a
/// technical sheet use the configured model, `CleanYield` by default. The two
/// formulas give different numbers for the same ingredient and are kept apart
/// on purpose.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum CostModel {
    /// Package cost over package quantity, consumed quantity scaled by the
    /// correction factor.
    Package,
    /// Package cost over the clean (edible) quantity, optionally per piece.
    #[default]
    CleanYield,
}

/// Cost of one consumed line.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineCost {
    pub unit: ResolvedUnit,
    /// Consumed quantity in base units.
    pub base_quantity: Decimal,
    /// Base quantity after the correction factor (`Package` only).
    pub gross_quantity: Decimal,
    pub cost: Decimal,
}

/// `a / b`, or zero when `b` is not positive.
fn ratio(a: Decimal, b: Decimal) -> Decimal {
    if b > Decimal::ZERO {
        a / b
    } else {
        Decimal::ZERO
    }
}

/// Non-positive costs count as zero.
fn non_negative(cost: Decimal) -> Decimal {
    cost.max(Decimal::ZERO)
}

#[derive(Debug, Clone, Copy)]
pub struct IngredientCostResolver<'a> {
    units: UnitResolver<'a>,
}

impl<'a> IngredientCostResolver<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            units: UnitResolver::new(catalog),
        }
    }

    /// Cost of one base unit (or one piece, for `CleanYield` with units per package).
    pub fn cost_per_base_unit(&self, ingredient: &Ingredient, model: CostModel) -> Result<Decimal> {
        let cost = match model {
            CostModel::Package => {
                let package = self.units.package_base_quantity(ingredient)?;
                ratio(ingredient.package_cost, package)
            }
            CostModel::CleanYield => match ingredient.declared_units_per_package() {
                Some(units) => {
                    ratio(ingredient.package_quantity, ingredient.effective_quantity())
                        * ratio(ingredient.package_cost, units)
                }
                None => {
                    let effective = self.units.effective_base_quantity(ingredient)?;
                    ratio(ingredient.package_cost, effective)
                }
            },
        };
        Ok(non_negative(cost))
    }

    /// Cost of consuming `quantity` of `ingredient` in `unit`.
    pub fn item_cost(
        &self,
        ingredient: &Ingredient,
        unit: &MeasurementUnit,
        quantity: Decimal,
        model: CostModel,
    ) -> Result<LineCost> {
        let resolved = self.units.resolve(unit, ingredient)?;
        let base_quantity = resolved.to_base(quantity);
        let package = self.units.package_base_quantity(ingredient)?;

        let (gross_quantity, cost) = match model {
            CostModel::Package => {
                let gross = base_quantity * ingredient.correction_factor;
                (gross, ratio(gross, package) * ingredient.package_cost)
            }
            CostModel::CleanYield => {
                let per_unit = self.cost_per_base_unit(ingredient, model)?;
                let cost = match ingredient.declared_units_per_package() {
                    Some(_) if resolved.via_count => quantity * per_unit,
                    Some(units) => ratio(base_quantity * units, package) * per_unit,
                    None => base_quantity * per_unit,
                };
                (base_quantity, cost)
            }
        };

        Ok(LineCost {
            unit: resolved,
            base_quantity,
            gross_quantity,
            cost: non_negative(cost),
        })
    }
}
