use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;

use crate::error::Result;
use crate::models::IngredientId;
use crate::state::catalog::Snapshot;

/// Load a snapshot from a JSON file.
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<Snapshot> {
    let content = fs::read_to_string(path.as_ref())?;
    let snapshot: Snapshot = serde_json::from_str(&content)?;
    info!(
        path = %path.as_ref().display(),
        ingredients = snapshot.ingredients.len(),
        recipes = snapshot.recipes.len(),
        sheets = snapshot.sheets.len(),
        "snapshot loaded"
    );
    Ok(snapshot)
}

/// Save a snapshot to a JSON file.
pub fn save_snapshot<P: AsRef<Path>>(path: P, snapshot: &Snapshot) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(path.as_ref(), json)?;
    info!(path = %path.as_ref().display(), "snapshot saved");
    Ok(())
}

/// New purchase data for one ingredient. Amounts are parsed from their text,
/// not through a float.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PriceUpdate {
    pub ingredient_id: IngredientId,
    #[serde(with = "rust_decimal::serde::str")]
    pub package_cost: Decimal,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub package_quantity: Option<Decimal>,
}

/// Load price updates from a CSV file with an
/// `ingredient_id,package_cost[,package_quantity]` header.
pub fn load_price_updates<P: AsRef<Path>>(path: P) -> Result<Vec<PriceUpdate>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path.as_ref())?;

    let mut updates = Vec::new();
    for row in reader.deserialize() {
        let update: PriceUpdate = row?;
        updates.push(update);
    }
    Ok(updates)
}
