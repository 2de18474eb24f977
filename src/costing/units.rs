use rust_decimal::Decimal;

use crate::error::{CostError, Result};
use crate::models::{Ingredient, MeasurementUnit, UnitFamily};
use crate::state::Catalog;

/// A consumption unit resolved against an ingredient.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ResolvedUnit {
    /// Family of the base unit the quantity ends up in.
    pub family: UnitFamily,
    /// Multiply a quantity in the consumption unit by this to get base units.
    pub factor_to_base: Decimal,
    /// The consumption unit was a count unit converted through weight per unit.
    pub via_count: bool,
}

impl ResolvedUnit {
    pub fn to_base(&self, quantity: Decimal) -> Decimal {
        quantity * self.factor_to_base
    }

    pub fn is_mass(&self) -> bool {
        self.family == UnitFamily::Mass
    }
}

/// Resolves consumption units against ingredients, through the catalog.
#[derive(Debug, Clone, Copy)]
pub struct UnitResolver<'a> {
    catalog: &'a Catalog,
}

impl<'a> UnitResolver<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Resolve `consumption` for `ingredient`.
    ///
    /// Same family: factor 1 or 1000 (large units). Count: the ingredient's weight
    /// per unit, normalized to the base of its purchase family.
    pub fn resolve(
        &self,
        consumption: &MeasurementUnit,
        ingredient: &Ingredient,
    ) -> Result<ResolvedUnit> {
        let purchase = self.catalog.unit(ingredient.purchase_unit)?;

        if consumption.family == purchase.family {
            return Ok(ResolvedUnit {
                family: consumption.family,
                factor_to_base: consumption.factor_to_base(),
                via_count: false,
            });
        }

        if consumption.is_count() {
            let weight = ingredient
                .weight_per_unit
                .ok_or_else(|| CostError::MissingWeightPerUnit(ingredient.name.clone()))?;
            return Ok(ResolvedUnit {
                family: purchase.family,
                factor_to_base: weight * purchase.factor_to_base(),
                via_count: true,
            });
        }

        Err(CostError::UnitIncompatible {
            unit: consumption.symbol.clone(),
            target: ingredient.name.clone(),
        })
    }

    /// Package quantity of `ingredient` in the base unit of its purchase family.
    pub fn package_base_quantity(&self, ingredient: &Ingredient) -> Result<Decimal> {
        let purchase = self.catalog.unit(ingredient.purchase_unit)?;
        Ok(ingredient.package_quantity * purchase.factor_to_base())
    }

    /// Clean-yield (or package) quantity of `ingredient` in base units.
    pub fn effective_base_quantity(&self, ingredient: &Ingredient) -> Result<Decimal> {
        let purchase = self.catalog.unit(ingredient.purchase_unit)?;
        Ok(ingredient.effective_quantity() * purchase.factor_to_base())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IngredientId, UnitId, UnitScale};
    use crate::state::Snapshot;
    use rust_decimal_macros::dec;

    fn unit(id: u32, symbol: &str, family: UnitFamily, scale: UnitScale) -> MeasurementUnit {
        MeasurementUnit {
            id: UnitId(id),
            name: symbol.to_string(),
            symbol: symbol.to_string(),
            family,
            scale,
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(Snapshot {
            units: vec![
                unit(1, "g", UnitFamily::Mass, UnitScale::Base),
                unit(2, "kg", UnitFamily::Mass, UnitScale::Large),
                unit(3, "ml", UnitFamily::Volume, UnitScale::Base),
                unit(4, "un", UnitFamily::Count, UnitScale::Base),
            ],
            ..Default::default()
        })
    }

    fn ingredient(purchase_unit: u32, weight_per_unit: Option<Decimal>) -> Ingredient {
        Ingredient {
            id: IngredientId(1),
            name: "Egg".to_string(),
            purchase_unit: UnitId(purchase_unit),
            package_quantity: dec!(1000),
            package_cost: dec!(100),
            correction_factor: Decimal::ONE,
            clean_yield_quantity: None,
            units_per_package: None,
            weight_per_unit,
        }
    }

    #[test]
    fn test_same_family_factors() {
        let catalog = catalog();
        let resolver = UnitResolver::new(&catalog);
        let egg = ingredient(1, None);

        let grams = resolver.resolve(catalog.unit(UnitId(1)).unwrap(), &egg).unwrap();
        assert_eq!(grams.factor_to_base, Decimal::ONE);
        assert_eq!(grams.family, UnitFamily::Mass);

        let kilos = resolver.resolve(catalog.unit(UnitId(2)).unwrap(), &egg).unwrap();
        assert_eq!(kilos.factor_to_base, dec!(1000));
    }

    #[test]
    fn test_count_uses_weight_per_unit() {
        let catalog = catalog();
        let resolver = UnitResolver::new(&catalog);

        let egg = ingredient(1, Some(dec!(50)));
        let resolved = resolver.resolve(catalog.unit(UnitId(4)).unwrap(), &egg).unwrap();
        assert_eq!(resolved.family, UnitFamily::Mass);
        assert_eq!(resolved.factor_to_base, dec!(50));
        assert!(resolved.via_count);

        // Weight per unit in kilograms when purchased by the kilogram.
        let mut by_kilo = ingredient(2, Some(dec!(0.05)));
        by_kilo.package_quantity = dec!(1);
        let resolved = resolver.resolve(catalog.unit(UnitId(4)).unwrap(), &by_kilo).unwrap();
        assert_eq!(resolved.factor_to_base, dec!(50));
    }

    #[test]
    fn test_count_without_weight_is_rejected() {
        let catalog = catalog();
        let resolver = UnitResolver::new(&catalog);
        let egg = ingredient(1, None);

        let err = resolver
            .resolve(catalog.unit(UnitId(4)).unwrap(), &egg)
            .unwrap_err();
        assert!(matches!(err, CostError::MissingWeightPerUnit(_)));
    }

    #[test]
    fn test_cross_family_is_incompatible() {
        let catalog = catalog();
        let resolver = UnitResolver::new(&catalog);
        let egg = ingredient(1, Some(dec!(50)));

        let err = resolver
            .resolve(catalog.unit(UnitId(3)).unwrap(), &egg)
            .unwrap_err();
        assert!(matches!(err, CostError::UnitIncompatible { .. }));
    }

    #[test]
    fn test_package_base_quantity() {
        let catalog = catalog();
        let resolver = UnitResolver::new(&catalog);
        let mut flour = ingredient(2, None);
        flour.package_quantity = dec!(5);
        assert_eq!(resolver.package_base_quantity(&flour).unwrap(), dec!(5000));
    }
}
