mod common;

use proptest::prelude::*;
use rust_decimal::Decimal;

use common::*;
use menu_cost_rs::costing::{cook_factor, derive_sheet, EngineConfig, RecipeAggregator};
use menu_cost_rs::models::*;
use menu_cost_rs::state::Catalog;
use menu_cost_rs::CostError;

fn stew_with(quantity: u32, index: CookIndex) -> Catalog {
    let mut recipe = stew();
    recipe.items[0].quantity = Decimal::from(quantity);
    recipe.cook_index = index;
    Catalog::new(menu_cost_rs::Snapshot {
        recipes: vec![recipe],
        ..snapshot()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// The cook index divides the total and never changes the raw sum of lines.
    #[test]
    fn cook_index_only_changes_the_divisor(
        quantity in 1u32..100_000u32,
        magnitude in 0u16..100u16,
        gain in any::<bool>(),
    ) {
        let index = if gain { CookIndex::gain(magnitude) } else { CookIndex::loss(magnitude) };

        let neutral = RecipeAggregator::new(&stew_with(quantity, CookIndex::default()))
            .aggregate_id(STEW)
            .unwrap();
        let cooked = RecipeAggregator::new(&stew_with(quantity, index))
            .aggregate_id(STEW)
            .unwrap();

        prop_assert_eq!(neutral.raw_total, cooked.raw_total);
        prop_assert_eq!(cooked.total_cost, cooked.raw_total / cook_factor(&index).unwrap());
    }

    /// A loss of 100% or more is always rejected, never clamped.
    #[test]
    fn total_loss_is_rejected(magnitude in 100u16..=999u16) {
        let result = cook_factor(&CookIndex::loss(magnitude));
        prop_assert!(matches!(result, Err(CostError::NonPositiveYield(_))));
    }

    /// Recomputing a sheet on the same snapshot gives identical output.
    #[test]
    fn sheet_derivation_is_idempotent(
        beef_grams in 1u32..5_000u32,
        portions in 1u32..10u32,
        multiplier in 1u32..6u32,
    ) {
        let mut sheet = stew_plate();
        sheet.items[0].quantity = Decimal::from(portions);
        sheet.items[1].quantity = Decimal::from(beef_grams);
        sheet.accounting_multiplier = Some(Decimal::from(multiplier));

        let mut snapshot = snapshot();
        snapshot.sheets = vec![sheet];
        let catalog = Catalog::new(snapshot);
        let config = EngineConfig::default();

        let first = derive_sheet(&catalog, STEW_PLATE, &config).unwrap();
        let second = derive_sheet(&catalog, STEW_PLATE, &config).unwrap();

        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
        prop_assert_eq!(first.portion_mode, PortionMode::Portion);
    }
}
