use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::costing::constants::{MONEY_DECIMALS, PERCENT_DECIMALS};
use crate::models::{ChannelPrice, ItemCost, RecipeCost, SheetCost};

/// Output precision for exposed and persisted values.
///
/// Only applied to finished results. Sums and ratios inside the engine run on
/// unrounded values.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundingPolicy {
    /// Decimal places for money and weight.
    pub money_decimals: u32,
    /// Decimal places for percentages.
    pub percent_decimals: u32,
}

impl Default for RoundingPolicy {
    fn default() -> Self {
        Self {
            money_decimals: MONEY_DECIMALS,
            percent_decimals: PERCENT_DECIMALS,
        }
    }
}

impl RoundingPolicy {
    pub fn money(&self, value: Decimal) -> Decimal {
        value.round_dp_with_strategy(self.money_decimals, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Weights share the money precision.
    pub fn weight(&self, value: Decimal) -> Decimal {
        self.money(value)
    }

    pub fn percent(&self, value: Decimal) -> Decimal {
        value.round_dp_with_strategy(
            self.percent_decimals,
            RoundingStrategy::MidpointAwayFromZero,
        )
    }

    fn item(&self, item: &ItemCost) -> ItemCost {
        ItemCost {
            label: item.label.clone(),
            base_quantity: self.weight(item.base_quantity),
            gross_quantity: self.weight(item.gross_quantity),
            cost: self.money(item.cost),
            to_taste: item.to_taste,
        }
    }

    pub fn recipe(&self, cost: &RecipeCost) -> RecipeCost {
        RecipeCost {
            recipe: cost.recipe,
            name: cost.name.clone(),
            raw_total: self.money(cost.raw_total),
            total_cost: self.money(cost.total_cost),
            cost_per_portion: self.money(cost.cost_per_portion),
            items: cost.items.iter().map(|i| self.item(i)).collect(),
        }
    }

    pub fn sheet(&self, cost: &SheetCost) -> SheetCost {
        SheetCost {
            sheet: cost.sheet,
            name: cost.name.clone(),
            finalized_yield: cost.finalized_yield.map(|y| self.weight(y)),
            total_cost: self.money(cost.total_cost),
            cost_per_portion: self.money(cost.cost_per_portion),
            portion_mode: cost.portion_mode,
            suggested_price: cost.suggested_price.map(|p| self.money(p)),
            channels: cost
                .channels
                .iter()
                .map(|c| ChannelPrice {
                    channel: c.channel,
                    name: c.name.clone(),
                    sale_price: self.money(c.sale_price),
                    margin_percent: c.margin_percent.map(|m| self.percent(m)),
                })
                .collect(),
            items: cost.items.iter().map(|i| self.item(i)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_and_percent_precision() {
        let policy = RoundingPolicy::default();
        assert_eq!(policy.money(dec!(11.834319526)), dec!(11.8343));
        assert_eq!(policy.money(dec!(0.00005)), dec!(0.0001));
        assert_eq!(policy.percent(dec!(33.335)), dec!(33.34));
        assert_eq!(policy.percent(dec!(-12.345)), dec!(-12.35));
    }

    #[test]
    fn test_rounding_once_beats_rounding_each_line() {
        let policy = RoundingPolicy::default();
        let line = dec!(0.00004);

        let rounded_per_line: Decimal = (0..1000).map(|_| policy.money(line)).sum();
        let rounded_at_boundary = policy.money((0..1000).map(|_| line).sum());

        assert_eq!(rounded_per_line, Decimal::ZERO);
        assert_eq!(rounded_at_boundary, dec!(0.04));
    }
}
