use rust_decimal::Decimal;
use tracing::debug;

use crate::costing::config::EngineConfig;
use crate::costing::constants::{fraction, MAX_INDEX_MAGNITUDE};
use crate::costing::ingredient_cost::IngredientCostResolver;
use crate::costing::recipe::{cook_factor, RecipeAggregator};
use crate::error::{CostError, Result};
use crate::models::{
    Channel, ChannelPrice, ItemCost, PortionMode, SheetCost, SheetId, SheetItem, SheetItemSource,
    TechnicalSheet, UnitFamily,
};
use crate::state::Catalog;

/// Cost and mass contribution of one sheet line.
struct LineOutcome {
    item: ItemCost,
    /// Grams contributed to the finalized yield, if the line resolves to mass.
    mass: Option<Decimal>,
}

/// Clean-yield index as a factor. Absent or zero means fully edible.
pub fn clean_yield_factor(index: Option<u16>) -> Result<Decimal> {
    match index {
        Some(v) if v > MAX_INDEX_MAGNITUDE => Err(CostError::IndexOutOfRange(format!(
            "clean-yield index {}% exceeds {}%",
            v, MAX_INDEX_MAGNITUDE
        ))),
        Some(v) if v > 0 => Ok(fraction(Decimal::from(v))),
        _ => Ok(Decimal::ONE),
    }
}

/// Price of a sheet on one channel. The first matching rule wins:
/// channel multiplier, then tax/commission gross-up, then the explicit price.
pub fn channel_price(
    channel: &Channel,
    cost_per_portion: Decimal,
    suggested_price: Option<Decimal>,
) -> ChannelPrice {
    let fees = Decimal::ONE + fraction(channel.fee_percent());

    let sale_price = if channel.multiplier > Decimal::ZERO {
        suggested_price.map_or(Decimal::ZERO, |p| p * channel.multiplier)
    } else if channel.fee_percent() > Decimal::ZERO {
        suggested_price.map_or(Decimal::ZERO, |p| p * fees)
    } else {
        channel.sale_price
    };

    let margin_percent = if sale_price > Decimal::ZERO && cost_per_portion > Decimal::ZERO {
        let cost_with_fees = cost_per_portion * fees;
        Some((sale_price - cost_with_fees) / sale_price * Decimal::ONE_HUNDRED)
    } else {
        None
    };

    ChannelPrice {
        channel: channel.id,
        name: channel.name.clone(),
        sale_price,
        margin_percent,
    }
}

/// Derives yield, portion cost and channel prices of technical sheets.
#[derive(Debug, Clone, Copy)]
pub struct TechnicalSheetDeriver<'a> {
    catalog: &'a Catalog,
    costs: IngredientCostResolver<'a>,
    recipes: RecipeAggregator<'a>,
    config: EngineConfig,
}

impl<'a> TechnicalSheetDeriver<'a> {
    pub fn new(catalog: &'a Catalog, config: EngineConfig) -> Self {
        Self {
            catalog,
            costs: IngredientCostResolver::new(catalog),
            recipes: RecipeAggregator::new(catalog),
            config,
        }
    }

    pub fn derive_id(&self, id: SheetId) -> Result<SheetCost> {
        self.derive(self.catalog.sheet(id)?)
    }

    /// Derive a sheet. Values are unrounded.
    pub fn derive(&self, sheet: &TechnicalSheet) -> Result<SheetCost> {
        if sheet.items.is_empty() {
            return Err(CostError::ItemRequired(format!(
                "Technical sheet '{}'",
                sheet.name
            )));
        }
        if sheet.channels.is_empty() {
            return Err(CostError::ChannelRequired(format!(
                "Technical sheet '{}'",
                sheet.name
            )));
        }
        let cook = cook_factor(&sheet.cook_index)?;
        let clean = clean_yield_factor(sheet.clean_yield_index)?;

        let mut items = Vec::with_capacity(sheet.items.len());
        let mut total_cost = Decimal::ZERO;
        let mut mass: Option<Decimal> = None;

        for item in &sheet.items {
            let line = self.line(item)?;
            total_cost += line.item.cost;
            if let Some(grams) = line.mass {
                *mass.get_or_insert(Decimal::ZERO) += grams;
            }
            items.push(line.item);
        }

        // Cook index and clean yield shape the mass only, never the cost.
        let finalized_yield = mass.map(|m| m * cook * clean);

        let (cost_per_portion, portion_mode) = self.portion_cost(sheet, total_cost, finalized_yield)?;

        let suggested_price = match sheet.accounting_multiplier {
            Some(m) if m > Decimal::ZERO && cost_per_portion > Decimal::ZERO => {
                Some(cost_per_portion * m)
            }
            _ => None,
        };

        let channels = sheet
            .channels
            .iter()
            .map(|c| channel_price(c, cost_per_portion, suggested_price))
            .collect();

        debug!(
            sheet = %sheet.id,
            %total_cost,
            finalized_yield = ?finalized_yield,
            %cost_per_portion,
            mode = ?portion_mode,
            "sheet derived"
        );

        Ok(SheetCost {
            sheet: sheet.id,
            name: sheet.name.clone(),
            finalized_yield,
            total_cost,
            cost_per_portion,
            portion_mode,
            suggested_price,
            channels,
            items,
        })
    }

    fn line(&self, item: &SheetItem) -> Result<LineOutcome> {
        let unit = self.catalog.unit(item.unit)?;

        match item.source {
            SheetItemSource::Recipe(id) => {
                let recipe = self.catalog.recipe(id)?;
                let recipe_cost = self.recipes.aggregate(recipe)?;
                let mass = match unit.family {
                    UnitFamily::Mass => Some(item.quantity * unit.factor_to_base()),
                    UnitFamily::Count => recipe.weight_per_portion.map(|w| item.quantity * w),
                    UnitFamily::Volume => None,
                };
                Ok(LineOutcome {
                    item: ItemCost {
                        label: recipe.name.clone(),
                        base_quantity: item.quantity,
                        gross_quantity: item.quantity,
                        cost: item.quantity * recipe_cost.cost_per_portion,
                        to_taste: false,
                    },
                    mass,
                })
            }
            SheetItemSource::Ingredient(id) => {
                let ingredient = self.catalog.ingredient(id)?;
                let line = self.costs.item_cost(
                    ingredient,
                    unit,
                    item.quantity,
                    self.config.direct_ingredient_model,
                )?;
                Ok(LineOutcome {
                    item: ItemCost {
                        label: ingredient.name.clone(),
                        base_quantity: line.base_quantity,
                        gross_quantity: line.gross_quantity,
                        cost: line.cost,
                        to_taste: false,
                    },
                    mass: line.unit.is_mass().then_some(line.base_quantity),
                })
            }
        }
    }

    /// Portion mode when a mass sale portion is set and the yield is positive,
    /// count mode otherwise. The finalized yield is always in grams, so a
    /// portion in any other family falls back to count mode.
    fn portion_cost(
        &self,
        sheet: &TechnicalSheet,
        total_cost: Decimal,
        finalized_yield: Option<Decimal>,
    ) -> Result<(Decimal, PortionMode)> {
        let portion = match &sheet.sale_portion {
            Some(portion) => {
                let unit = self.catalog.unit(portion.unit)?;
                (unit.family == UnitFamily::Mass).then(|| portion.quantity * unit.factor_to_base())
            }
            None => None,
        };

        if let (Some(grams), Some(yield_grams)) = (portion, finalized_yield) {
            if yield_grams > Decimal::ZERO {
                return Ok((total_cost / yield_grams * grams, PortionMode::Portion));
            }
        }

        let servings = self.serving_count(sheet)?;
        Ok((total_cost / servings, PortionMode::Count))
    }

    /// Declared serving count, else the principal recipe's yield.
    fn serving_count(&self, sheet: &TechnicalSheet) -> Result<Decimal> {
        if let Some(count) = sheet.serving_count.filter(|c| *c > Decimal::ZERO) {
            return Ok(count);
        }
        if let Some(id) = sheet.principal_recipe {
            let recipe = self.catalog.recipe(id)?;
            if recipe.yield_portions > Decimal::ZERO {
                return Ok(recipe.yield_portions);
            }
        }
        Err(CostError::NonPositiveYield(format!(
            "technical sheet '{}' has no serving count",
            sheet.name
        )))
    }
}
