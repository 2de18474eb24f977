pub mod config;
pub mod constants;
pub mod ingredient_cost;
pub mod recipe;
pub mod rounding;
pub mod sheet;
pub mod units;

pub use config::EngineConfig;
pub use constants::*;
pub use ingredient_cost::{CostModel, IngredientCostResolver, LineCost};
pub use recipe::{cook_factor, RecipeAggregator};
pub use rounding::RoundingPolicy;
pub use sheet::{channel_price, clean_yield_factor, TechnicalSheetDeriver};
pub use units::{ResolvedUnit, UnitResolver};

use crate::error::Result;
use crate::models::{RecipeCost, RecipeId, SheetCost, SheetId};
use crate::state::Catalog;

/// Cost a recipe and round it for display or persistence.
pub fn cost_recipe(catalog: &Catalog, id: RecipeId, config: &EngineConfig) -> Result<RecipeCost> {
    let cost = RecipeAggregator::new(catalog).aggregate_id(id)?;
    Ok(config.rounding.recipe(&cost))
}

/// Derive a technical sheet and round it for display or persistence.
pub fn derive_sheet(catalog: &Catalog, id: SheetId, config: &EngineConfig) -> Result<SheetCost> {
    let cost = TechnicalSheetDeriver::new(catalog, *config).derive_id(id)?;
    Ok(config.rounding.sheet(&cost))
}
