use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::recipe::RecipeId;
use crate::models::sheet::{ChannelId, SheetId};

/// Cost of a single recipe or sheet line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemCost {
    /// Ingredient or recipe name.
    pub label: String,

    /// Consumed quantity in the family base unit (g/ml), or portions for recipe lines.
    pub base_quantity: Decimal,

    /// Base quantity after the correction factor.
    pub gross_quantity: Decimal,

    /// Cost of the line.
    pub cost: Decimal,

    /// Shown as "QB" instead of a quantity.
    pub to_taste: bool,
}

/// Derived cost of a recipe.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeCost {
    pub recipe: RecipeId,
    pub name: String,

    /// Sum of item costs before the cook index.
    pub raw_total: Decimal,

    /// Raw total divided by the cook factor.
    pub total_cost: Decimal,

    pub cost_per_portion: Decimal,

    pub items: Vec<ItemCost>,
}

/// How the sold-portion cost of a sheet was obtained.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PortionMode {
    /// Cost per unit of finalized yield times the configured sale portion.
    Portion,
    /// Total cost divided by a declared serving count.
    Count,
}

/// Derived price of a sheet on one sales channel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelPrice {
    pub channel: ChannelId,
    pub name: String,

    /// Zero when no price could be derived and none was set.
    pub sale_price: Decimal,

    pub margin_percent: Option<Decimal>,
}

/// Derived yield, cost and prices of a technical sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetCost {
    pub sheet: SheetId,
    pub name: String,

    /// Cooked, cleaned mass in grams. `None` when no line contributes mass.
    pub finalized_yield: Option<Decimal>,

    pub total_cost: Decimal,

    pub cost_per_portion: Decimal,

    pub portion_mode: PortionMode,

    pub suggested_price: Option<Decimal>,

    pub channels: Vec<ChannelPrice>,

    pub items: Vec<ItemCost>,
}
