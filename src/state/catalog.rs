use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CostError, Result};
use crate::models::{
    Ingredient, IngredientId, MeasurementUnit, Recipe, RecipeId, SheetId, SheetItemSource,
    TechnicalSheet, UnitId,
};

/// A tenant-scoped, consistent set of entities as handed over by persistence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub units: Vec<MeasurementUnit>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    #[serde(default)]
    pub sheets: Vec<TechnicalSheet>,
}

/// Entities of a snapshot indexed by id.
///
/// Every cross-reference used by the engine goes through this table; a
/// reference that is not here is an `InvalidReference`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    units: HashMap<UnitId, MeasurementUnit>,
    ingredients: HashMap<IngredientId, Ingredient>,
    recipes: BTreeMap<RecipeId, Recipe>,
    sheets: BTreeMap<SheetId, TechnicalSheet>,
}

impl Catalog {
    /// Index a snapshot. Duplicate ids keep the last occurrence.
    pub fn new(snapshot: Snapshot) -> Self {
        let mut catalog = Catalog::default();
        for unit in snapshot.units {
            if let Some(old) = catalog.units.insert(unit.id, unit) {
                debug!(id = %old.id, "duplicate unit replaced");
            }
        }
        for ingredient in snapshot.ingredients {
            if let Some(old) = catalog.ingredients.insert(ingredient.id, ingredient) {
                debug!(id = %old.id, name = %old.name, "duplicate ingredient replaced");
            }
        }
        for recipe in snapshot.recipes {
            if let Some(old) = catalog.recipes.insert(recipe.id, recipe) {
                debug!(id = %old.id, name = %old.name, "duplicate recipe replaced");
            }
        }
        for sheet in snapshot.sheets {
            if let Some(old) = catalog.sheets.insert(sheet.id, sheet) {
                debug!(id = %old.id, name = %old.name, "duplicate technical sheet replaced");
            }
        }
        debug!(
            units = catalog.units.len(),
            ingredients = catalog.ingredients.len(),
            recipes = catalog.recipes.len(),
            sheets = catalog.sheets.len(),
            "catalog indexed"
        );
        catalog
    }

    pub fn unit(&self, id: UnitId) -> Result<&MeasurementUnit> {
        self.units
            .get(&id)
            .ok_or_else(|| CostError::InvalidReference(id.to_string()))
    }

    pub fn ingredient(&self, id: IngredientId) -> Result<&Ingredient> {
        self.ingredients
            .get(&id)
            .ok_or_else(|| CostError::InvalidReference(id.to_string()))
    }

    pub fn recipe(&self, id: RecipeId) -> Result<&Recipe> {
        self.recipes
            .get(&id)
            .ok_or_else(|| CostError::InvalidReference(id.to_string()))
    }

    pub fn sheet(&self, id: SheetId) -> Result<&TechnicalSheet> {
        self.sheets
            .get(&id)
            .ok_or_else(|| CostError::InvalidReference(id.to_string()))
    }

    pub fn ingredient_mut(&mut self, id: IngredientId) -> Option<&mut Ingredient> {
        self.ingredients.get_mut(&id)
    }

    pub fn recipe_mut(&mut self, id: RecipeId) -> Option<&mut Recipe> {
        self.recipes.get_mut(&id)
    }

    pub fn sheet_mut(&mut self, id: SheetId) -> Option<&mut TechnicalSheet> {
        self.sheets.get_mut(&id)
    }

    /// Find a recipe by name (case-insensitive).
    pub fn find_recipe(&self, name: &str) -> Option<&Recipe> {
        let needle = name.to_lowercase();
        self.recipes
            .values()
            .find(|r| r.name.to_lowercase() == needle)
    }

    /// Find a technical sheet by name (case-insensitive).
    pub fn find_sheet(&self, name: &str) -> Option<&TechnicalSheet> {
        let needle = name.to_lowercase();
        self.sheets
            .values()
            .find(|s| s.name.to_lowercase() == needle)
    }

    pub fn ingredients(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients.values()
    }

    /// Recipes in id order.
    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.values()
    }

    /// Sheets in id order.
    pub fn sheets(&self) -> impl Iterator<Item = &TechnicalSheet> {
        self.sheets.values()
    }

    /// Every dangling cross-reference in the catalog.
    pub fn dangling_references(&self) -> Vec<CostError> {
        let mut errors = Vec::new();

        for ingredient in self.ingredients.values() {
            if let Err(e) = self.unit(ingredient.purchase_unit) {
                errors.push(e);
            }
        }

        for recipe in self.recipes.values() {
            for item in &recipe.items {
                if let Err(e) = self.ingredient(item.ingredient) {
                    errors.push(e);
                }
                if let Err(e) = self.unit(item.unit) {
                    errors.push(e);
                }
            }
        }

        for sheet in self.sheets.values() {
            if let Some(principal) = sheet.principal_recipe {
                if let Err(e) = self.recipe(principal) {
                    errors.push(e);
                }
            }
            for item in &sheet.items {
                let source = match item.source {
                    SheetItemSource::Recipe(id) => self.recipe(id).map(|_| ()),
                    SheetItemSource::Ingredient(id) => self.ingredient(id).map(|_| ()),
                };
                if let Err(e) = source {
                    errors.push(e);
                }
                if let Err(e) = self.unit(item.unit) {
                    errors.push(e);
                }
            }
            if let Some(portion) = &sheet.sale_portion {
                if let Err(e) = self.unit(portion.unit) {
                    errors.push(e);
                }
            }
        }

        errors
    }

    /// Convert back to a snapshot for serialization.
    pub fn to_snapshot(&self) -> Snapshot {
        let mut units: Vec<MeasurementUnit> = self.units.values().cloned().collect();
        units.sort_by_key(|u| u.id);
        let mut ingredients: Vec<Ingredient> = self.ingredients.values().cloned().collect();
        ingredients.sort_by_key(|i| i.id);

        Snapshot {
            units,
            ingredients,
            recipes: self.recipes.values().cloned().collect(),
            sheets: self.sheets.values().cloned().collect(),
        }
    }

    pub fn recipe_count(&self) -> usize {
        self.recipes.len()
    }

    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty() && self.sheets.is_empty()
    }
}
