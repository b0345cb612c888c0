//! Money helpers. Amounts are Kuwaiti dinars with three decimals (fils).

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept on every stored amount.
pub const MONEY_SCALE: u32 = 3;

/// Rounds to whole fils, half away from zero.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}
