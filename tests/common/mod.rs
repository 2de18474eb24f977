#![allow(dead_code)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use menu_cost_rs::models::*;
use menu_cost_rs::state::{Catalog, Snapshot};

pub const GRAM: UnitId = UnitId(1);
pub const KILOGRAM: UnitId = UnitId(2);
pub const MILLILITER: UnitId = UnitId(3);
pub const LITER: UnitId = UnitId(4);
pub const PIECE: UnitId = UnitId(5);

pub const BEEF: IngredientId = IngredientId(1);
pub const EGG: IngredientId = IngredientId(2);
pub const TOMATO: IngredientId = IngredientId(3);
pub const MILK: IngredientId = IngredientId(4);
pub const GARLIC: IngredientId = IngredientId(5);

pub const STEW: RecipeId = RecipeId(1);
pub const STEW_PLATE: SheetId = SheetId(1);
pub const MILKSHAKE: SheetId = SheetId(2);

fn unit(id: UnitId, symbol: &str, family: UnitFamily, scale: UnitScale) -> MeasurementUnit {
    MeasurementUnit {
        id,
        name: symbol.to_string(),
        symbol: symbol.to_string(),
        family,
        scale,
    }
}

pub fn ingredient(id: IngredientId, name: &str, unit: UnitId, quantity: Decimal, cost: Decimal) -> Ingredient {
    Ingredient {
        id,
        name: name.to_string(),
        purchase_unit: unit,
        package_quantity: quantity,
        package_cost: cost,
        correction_factor: Decimal::ONE,
        clean_yield_quantity: None,
        units_per_package: None,
        weight_per_unit: None,
    }
}

pub fn recipe_item(ingredient: IngredientId, quantity: Decimal, unit: UnitId) -> RecipeItem {
    RecipeItem {
        ingredient,
        quantity,
        unit,
        to_taste: false,
    }
}

pub fn channel(id: u32, name: &str) -> Channel {
    Channel {
        id: ChannelId(id),
        name: name.to_string(),
        tax_percent: Decimal::ZERO,
        commission_percent: Decimal::ZERO,
        multiplier: Decimal::ZERO,
        sale_price: Decimal::ZERO,
        margin_percent: None,
    }
}

pub fn empty_sheet(id: SheetId, name: &str) -> TechnicalSheet {
    TechnicalSheet {
        id,
        name: name.to_string(),
        principal_recipe: None,
        items: Vec::new(),
        sale_portion: None,
        cook_index: CookIndex::default(),
        clean_yield_index: None,
        accounting_multiplier: None,
        serving_count: None,
        channels: Vec::new(),
        finalized_yield: None,
        cost_per_portion: None,
        suggested_price: None,
    }
}

/// Beef stew: 950 g of beef at 0.10/g, -5% cook index, 4 portions of 250 g.
pub fn stew() -> Recipe {
    Recipe {
        id: STEW,
        name: "Beef Stew".to_string(),
        yield_portions: dec!(4),
        weight_per_portion: Some(dec!(250)),
        cook_index: CookIndex::loss(5),
        items: vec![recipe_item(BEEF, dec!(950), GRAM)],
        total_cost: None,
        cost_per_portion: None,
    }
}

/// Two stew portions plus 200 g of beef, sold by 250 g portions on three channels.
pub fn stew_plate() -> TechnicalSheet {
    let mut salon = channel(1, "Salon");
    salon.sale_price = dec!(120);

    let mut delivery = channel(2, "Delivery");
    delivery.tax_percent = dec!(10);
    delivery.commission_percent = dec!(20);
    delivery.multiplier = dec!(1.5);

    let mut takeaway = channel(3, "Takeaway");
    takeaway.tax_percent = dec!(5);

    TechnicalSheet {
        principal_recipe: Some(STEW),
        items: vec![
            SheetItem {
                source: SheetItemSource::Recipe(STEW),
                quantity: dec!(2),
                unit: PIECE,
            },
            SheetItem {
                source: SheetItemSource::Ingredient(BEEF),
                quantity: dec!(200),
                unit: GRAM,
            },
        ],
        sale_portion: Some(SalePortion {
            quantity: dec!(250),
            unit: GRAM,
        }),
        cook_index: CookIndex::loss(10),
        clean_yield_index: Some(80),
        accounting_multiplier: Some(dec!(3)),
        serving_count: Some(dec!(2)),
        channels: vec![salon, delivery, takeaway],
        ..empty_sheet(STEW_PLATE, "Stew Plate")
    }
}

/// 300 ml of milk: no mass at all.
pub fn milkshake() -> TechnicalSheet {
    let mut counter = channel(1, "Counter");
    counter.sale_price = dec!(9);

    TechnicalSheet {
        items: vec![SheetItem {
            source: SheetItemSource::Ingredient(MILK),
            quantity: dec!(300),
            unit: MILLILITER,
        }],
        serving_count: Some(dec!(1)),
        channels: vec![counter],
        ..empty_sheet(MILKSHAKE, "Milkshake")
    }
}

pub fn snapshot() -> Snapshot {
    let mut egg = ingredient(EGG, "Egg", GRAM, dec!(1000), dec!(100));
    egg.weight_per_unit = Some(dec!(50));

    let mut tomato = ingredient(TOMATO, "Tomato", GRAM, dec!(1000), dec!(100));
    tomato.clean_yield_quantity = Some(dec!(650));
    tomato.units_per_package = Some(dec!(13));
    tomato.weight_per_unit = Some(dec!(80));

    Snapshot {
        units: vec![
            unit(GRAM, "g", UnitFamily::Mass, UnitScale::Base),
            unit(KILOGRAM, "kg", UnitFamily::Mass, UnitScale::Large),
            unit(MILLILITER, "ml", UnitFamily::Volume, UnitScale::Base),
            unit(LITER, "l", UnitFamily::Volume, UnitScale::Large),
            unit(PIECE, "un", UnitFamily::Count, UnitScale::Base),
        ],
        ingredients: vec![
            ingredient(BEEF, "Beef", GRAM, dec!(1000), dec!(100)),
            egg,
            tomato,
            ingredient(MILK, "Milk", LITER, dec!(1), dec!(6)),
            ingredient(GARLIC, "Garlic", GRAM, dec!(100), dec!(5)),
        ],
        recipes: vec![stew()],
        sheets: vec![stew_plate(), milkshake()],
    }
}

pub fn catalog() -> Catalog {
    Catalog::new(snapshot())
}
