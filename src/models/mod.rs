pub mod cost;
pub mod index;
pub mod ingredient;
pub mod recipe;
pub mod sheet;
pub mod unit;

pub use cost::{ChannelPrice, ItemCost, PortionMode, RecipeCost, SheetCost};
pub use index::{CookIndex, IndexSign};
pub use ingredient::{Ingredient, IngredientId};
pub use recipe::{Recipe, RecipeId, RecipeItem};
pub use sheet::{
    Channel, ChannelId, SalePortion, SheetId, SheetItem, SheetItemSource, TechnicalSheet,
};
pub use unit::{MeasurementUnit, UnitFamily, UnitId, UnitScale};
