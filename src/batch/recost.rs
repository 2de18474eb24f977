use rayon::prelude::*;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::costing::{EngineConfig, RecipeAggregator, TechnicalSheetDeriver};
use crate::error::{CostError, Result};
use crate::models::{RecipeCost, RecipeId, SheetCost, SheetId};
use crate::state::{Catalog, PriceUpdate};

/// Result of recomputing one entity.
#[derive(Debug)]
pub struct Outcome<Id, T> {
    pub id: Id,
    pub name: String,
    pub result: Result<T>,
}

impl<Id, T> Outcome<Id, T> {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Rounded results of a full recomputation, in id order.
#[derive(Debug, Default)]
pub struct RecostReport {
    pub recipes: Vec<Outcome<RecipeId, RecipeCost>>,
    pub sheets: Vec<Outcome<SheetId, SheetCost>>,
}

impl RecostReport {
    pub fn failures(&self) -> usize {
        self.recipes.iter().filter(|o| !o.is_ok()).count()
            + self.sheets.iter().filter(|o| !o.is_ok()).count()
    }

    pub fn successes(&self) -> usize {
        self.recipes.iter().filter(|o| o.is_ok()).count()
            + self.sheets.iter().filter(|o| o.is_ok()).count()
    }
}

/// Counts from applying a report to a catalog.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WriteBackSummary {
    pub recipes_updated: usize,
    pub sheets_updated: usize,
    pub skipped: usize,
}

/// Recompute every recipe and sheet of the catalog.
///
/// Entities are computed independently and in parallel; a failure is recorded
/// in its own outcome and never stops the others.
pub fn recost_all(catalog: &Catalog, config: &EngineConfig) -> RecostReport {
    let recipes: Vec<_> = catalog.recipes().collect();
    let sheets: Vec<_> = catalog.sheets().collect();

    info!(
        recipes = recipes.len(),
        sheets = sheets.len(),
        "recosting catalog"
    );

    let aggregator = RecipeAggregator::new(catalog);
    let recipe_outcomes: Vec<_> = recipes
        .par_iter()
        .map(|recipe| Outcome {
            id: recipe.id,
            name: recipe.name.clone(),
            result: aggregator
                .aggregate(recipe)
                .map(|cost| config.rounding.recipe(&cost)),
        })
        .collect();

    let deriver = TechnicalSheetDeriver::new(catalog, *config);
    let sheet_outcomes: Vec<_> = sheets
        .par_iter()
        .map(|sheet| Outcome {
            id: sheet.id,
            name: sheet.name.clone(),
            result: deriver
                .derive(sheet)
                .map(|cost| config.rounding.sheet(&cost)),
        })
        .collect();

    for outcome in &recipe_outcomes {
        if let Err(e) = &outcome.result {
            warn!(recipe = %outcome.id, error = %e, "recipe not costed");
        }
    }
    for outcome in &sheet_outcomes {
        if let Err(e) = &outcome.result {
            warn!(sheet = %outcome.id, error = %e, "sheet not derived");
        }
    }

    RecostReport {
        recipes: recipe_outcomes,
        sheets: sheet_outcomes,
    }
}

/// Write derived values of successful outcomes back into the catalog, one
/// entity at a time. Failed outcomes leave their entity untouched.
///
/// Channel sale prices are only overwritten when the channel derives its price
/// (multiplier or fees); an explicit price is left as entered.
pub fn write_back(catalog: &mut Catalog, report: &RecostReport) -> WriteBackSummary {
    let mut summary = WriteBackSummary::default();

    for outcome in &report.recipes {
        let (Ok(cost), Some(recipe)) = (&outcome.result, catalog.recipe_mut(outcome.id)) else {
            summary.skipped += 1;
            continue;
        };
        recipe.total_cost = Some(cost.total_cost);
        recipe.cost_per_portion = Some(cost.cost_per_portion);
        summary.recipes_updated += 1;
    }

    for outcome in &report.sheets {
        let (Ok(cost), Some(sheet)) = (&outcome.result, catalog.sheet_mut(outcome.id)) else {
            summary.skipped += 1;
            continue;
        };
        sheet.finalized_yield = cost.finalized_yield;
        sheet.cost_per_portion = Some(cost.cost_per_portion);
        sheet.suggested_price = cost.suggested_price;

        for price in &cost.channels {
            if let Some(channel) = sheet.channels.iter_mut().find(|c| c.id == price.channel) {
                if channel.multiplier > Decimal::ZERO || channel.fee_percent() > Decimal::ZERO {
                    channel.sale_price = price.sale_price;
                }
                channel.margin_percent = price.margin_percent;
            }
        }
        summary.sheets_updated += 1;
    }

    info!(
        recipes = summary.recipes_updated,
        sheets = summary.sheets_updated,
        skipped = summary.skipped,
        "derived values written back"
    );
    summary
}

/// Apply new purchase data to ingredients. Every update must reference an
/// existing ingredient; nothing is applied otherwise.
pub fn apply_price_updates(catalog: &mut Catalog, updates: &[PriceUpdate]) -> Result<usize> {
    for update in updates {
        catalog.ingredient(update.ingredient_id)?;
    }

    for update in updates {
        let ingredient = catalog
            .ingredient_mut(update.ingredient_id)
            .ok_or_else(|| CostError::InvalidReference(update.ingredient_id.to_string()))?;
        ingredient.package_cost = update.package_cost;
        if let Some(quantity) = update.package_quantity {
            ingredient.package_quantity = quantity;
        }
    }

    info!(count = updates.len(), "price updates applied");
    Ok(updates.len())
}
