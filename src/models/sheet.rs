use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::index::CookIndex;
use crate::models::ingredient::IngredientId;
use crate::models::recipe::RecipeId;
use crate::models::unit::UnitId;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SheetId(pub u32);

impl std::fmt::Display for SheetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sheet #{}", self.0)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(pub u32);

/// What a sheet line points at. A line is either a recipe or an ingredient.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SheetItemSource {
    Recipe(RecipeId),
    Ingredient(IngredientId),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetItem {
    pub source: SheetItemSource,
    pub quantity: Decimal,
    pub unit: UnitId,
}

/// Explicit quantity sold as one portion (e.g. 250 g).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalePortion {
    pub quantity: Decimal,
    pub unit: UnitId,
}

/// A sales channel (dining room, delivery app, ...) with its fees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub id: ChannelId,
    pub name: String,
    #[serde(default)]
    pub tax_percent: Decimal,
    #[serde(default)]
    pub commission_percent: Decimal,
    #[serde(default)]
    pub multiplier: Decimal,
    /// Explicit sale price; zero means "derive it".
    #[serde(default)]
    pub sale_price: Decimal,

    /// Last persisted margin. Never read by the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_percent: Option<Decimal>,
}

impl Channel {
    /// Combined tax and commission, in percent.
    pub fn fee_percent(&self) -> Decimal {
        self.tax_percent + self.commission_percent
    }
}

/// Technical sheet: the priced sell-sheet of a dish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalSheet {
    pub id: SheetId,
    pub name: String,
    #[serde(default)]
    pub principal_recipe: Option<RecipeId>,
    #[serde(default)]
    pub items: Vec<SheetItem>,
    #[serde(default)]
    pub sale_portion: Option<SalePortion>,
    #[serde(default)]
    pub cook_index: CookIndex,
    /// Edible percentage of the cooked mass (0..=999). Absent or zero means 100%.
    #[serde(default)]
    pub clean_yield_index: Option<u16>,
    /// Accounting markup applied to the portion cost.
    #[serde(default)]
    pub accounting_multiplier: Option<Decimal>,
    /// Declared number of servings, used when no sale portion applies.
    #[serde(default)]
    pub serving_count: Option<Decimal>,
    #[serde(default)]
    pub channels: Vec<Channel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finalized_yield: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_per_portion: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_price: Option<Decimal>,
}
