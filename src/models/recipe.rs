use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::index::CookIndex;
use crate::models::ingredient::IngredientId;
use crate::models::unit::UnitId;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(pub u32);

impl std::fmt::Display for RecipeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "recipe #{}", self.0)
    }
}

/// One ingredient line of a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeItem {
    pub ingredient: IngredientId,
    pub quantity: Decimal,
    pub unit: UnitId,
    /// "To taste" (QB). Display only; the line is still costed.
    #[serde(default)]
    pub to_taste: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    /// Number of portions the recipe yields.
    #[serde(rename = "yield")]
    pub yield_portions: Decimal,
    /// Weight of one portion in grams.
    #[serde(default)]
    pub weight_per_portion: Option<Decimal>,
    #[serde(default)]
    pub cook_index: CookIndex,
    #[serde(default)]
    pub items: Vec<RecipeItem>,

    /// Last persisted total cost. Never read by the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<Decimal>,
    /// Last persisted cost per portion. Never read by the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_per_portion: Option<Decimal>,
}
