use rust_decimal::Decimal;
use tracing::debug;

use crate::costing::constants::{fraction, MAX_INDEX_MAGNITUDE};
use crate::costing::ingredient_cost::{CostModel, IngredientCostResolver};
use crate::error::{CostError, Result};
use crate::models::{CookIndex, IndexSign, ItemCost, Recipe, RecipeCost, RecipeId};
use crate::state::Catalog;

/// Cook factor of an index: `1 - v/100` for a loss, `1 + v/100` for a gain.
///
/// Rejects magnitudes above 999 and any factor that is not positive.
pub fn cook_factor(index: &CookIndex) -> Result<Decimal> {
    if index.magnitude > MAX_INDEX_MAGNITUDE {
        return Err(CostError::IndexOutOfRange(format!(
            "cook index {} exceeds {}%",
            index, MAX_INDEX_MAGNITUDE
        )));
    }

    let v = fraction(Decimal::from(index.magnitude));
    let factor = match index.sign {
        IndexSign::Loss => Decimal::ONE - v,
        IndexSign::Gain => Decimal::ONE + v,
    };

    if factor <= Decimal::ZERO {
        return Err(CostError::NonPositiveYield(format!(
            "cook index {} leaves nothing",
            index
        )));
    }
    Ok(factor)
}

/// Sums recipe lines into total and per-portion cost.
#[derive(Debug, Clone, Copy)]
pub struct RecipeAggregator<'a> {
    catalog: &'a Catalog,
    costs: IngredientCostResolver<'a>,
}

impl<'a> RecipeAggregator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            costs: IngredientCostResolver::new(catalog),
        }
    }

    pub fn aggregate_id(&self, id: RecipeId) -> Result<RecipeCost> {
        self.aggregate(self.catalog.recipe(id)?)
    }

    /// Cost a recipe with the package model.
    ///
    /// The cook index divides the raw total; it never touches line costs.
    pub fn aggregate(&self, recipe: &Recipe) -> Result<RecipeCost> {
        if recipe.items.is_empty() {
            return Err(CostError::ItemRequired(format!("Recipe '{}'", recipe.name)));
        }
        if recipe.yield_portions <= Decimal::ZERO {
            return Err(CostError::NonPositiveYield(format!(
                "recipe '{}' yields {} portions",
                recipe.name, recipe.yield_portions
            )));
        }
        let factor = cook_factor(&recipe.cook_index)?;

        let mut items = Vec::with_capacity(recipe.items.len());
        let mut raw_total = Decimal::ZERO;

        for item in &recipe.items {
            let ingredient = self.catalog.ingredient(item.ingredient)?;
            let unit = self.catalog.unit(item.unit)?;
            let line = self
                .costs
                .item_cost(ingredient, unit, item.quantity, CostModel::Package)?;

            raw_total += line.cost;
            items.push(ItemCost {
                label: ingredient.name.clone(),
                base_quantity: line.base_quantity,
                gross_quantity: line.gross_quantity,
                cost: line.cost,
                to_taste: item.to_taste,
            });
        }

        let total_cost = raw_total / factor;
        let cost_per_portion = total_cost / recipe.yield_portions;

        debug!(
            recipe = %recipe.id,
            %raw_total,
            %factor,
            %total_cost,
            %cost_per_portion,
            "recipe costed"
        );

        Ok(RecipeCost {
            recipe: recipe.id,
            name: recipe.name.clone(),
            raw_total,
            total_cost,
            cost_per_portion,
            items,
        })
    }
}
