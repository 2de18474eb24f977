use rust_decimal::Decimal;

/// Base units per large unit (kilogram -> gram, liter -> milliliter).
pub const LARGE_UNIT_FACTOR: Decimal = Decimal::ONE_THOUSAND;

/// Divisor turning a percentage into a fraction.
pub const PERCENT: Decimal = Decimal::ONE_HUNDRED;

/// Largest accepted cook or clean-yield index magnitude.
pub const MAX_INDEX_MAGNITUDE: u16 = 999;

// ─────────────────────────────────────────────────────────────────────────────
// Output precision
// ─────────────────────────────────────────────────────────────────────────────

/// Decimal places kept for money and weight values.
pub const MONEY_DECIMALS: u32 = 4;

/// Decimal places kept for percentages.
pub const PERCENT_DECIMALS: u32 = 2;

/// Percentage `value` as a fraction (`12.5` -> `0.125`).
pub fn fraction(value: Decimal) -> Decimal {
    value / PERCENT
}
