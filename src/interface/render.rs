use rust_decimal::Decimal;

use crate::models::{ItemCost, PortionMode, RecipeCost, SheetCost, UnitFamily};

fn or_dash(value: Option<Decimal>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn display_items(items: &[ItemCost]) {
    let max_label_len = items.iter().map(|i| i.label.len()).max().unwrap_or(10);

    for (i, item) in items.iter().enumerate() {
        let quantity = if item.to_taste {
            "QB".to_string()
        } else if item.gross_quantity != item.base_quantity {
            format!("{} ({} gross)", item.base_quantity, item.gross_quantity)
        } else {
            item.base_quantity.to_string()
        };

        println!(
            "{:>3}. {:<width$}  {:>22}  {:>12}",
            i + 1,
            item.label,
            quantity,
            item.cost,
            width = max_label_len
        );
    }
}

/// Display a recipe cost breakdown.
pub fn display_recipe_cost(cost: &RecipeCost) {
    println!();
    println!("=== Recipe: {} ===", cost.name);
    println!();

    display_items(&cost.items);

    println!();
    println!("--- Summary ---");
    println!("Raw total: {}", cost.raw_total);
    println!("Total cost (after cook index): {}", cost.total_cost);
    println!("Cost per portion: {}", cost.cost_per_portion);
    println!();
}

/// Display a technical sheet derivation with its channel prices.
pub fn display_sheet_cost(cost: &SheetCost) {
    println!();
    println!("=== Technical sheet: {} ===", cost.name);
    println!();

    display_items(&cost.items);

    let mode = match cost.portion_mode {
        PortionMode::Portion => "sale portion",
        PortionMode::Count => "serving count",
    };

    println!();
    println!("--- Summary ---");
    println!("Total cost: {}", cost.total_cost);
    println!(
        "Finalized yield ({}): {}",
        UnitFamily::Mass.base_symbol(),
        or_dash(cost.finalized_yield)
    );
    println!("Cost per portion ({}): {}", mode, cost.cost_per_portion);
    println!("Suggested price: {}", or_dash(cost.suggested_price));

    if !cost.channels.is_empty() {
        let max_name_len = cost.channels.iter().map(|c| c.name.len()).max().unwrap_or(10);

        println!();
        println!("--- Channels ---");
        for channel in &cost.channels {
            let price = if channel.sale_price > Decimal::ZERO {
                channel.sale_price.to_string()
            } else {
                "unset".to_string()
            };
            let margin = channel
                .margin_percent
                .map(|m| format!("{}%", m))
                .unwrap_or_else(|| "-".to_string());

            println!(
                "  {:<width$}  price {:>12}  margin {:>8}",
                channel.name,
                price,
                margin,
                width = max_name_len
            );
        }
    }
    println!();
}
