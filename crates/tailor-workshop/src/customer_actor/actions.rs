//! Custom actions for the Customer actor: measurements and the loyalty ledger.

use crate::model::LoyaltyTier;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub enum CustomerAction {
    /// Sets one body measurement, in centimeters.
    RecordMeasurement { name: String, value_cm: Decimal },
    /// Converts a spend into points under the loyalty policy.
    EarnPoints { amount: Decimal },
    /// Fails when the balance is short.
    RedeemPoints { points: u64 },
    /// Manual correction by staff. Cannot take the balance below zero.
    AdjustPoints { delta: i64, reason: String },
}

/// Loyalty state after a points movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoyaltyReceipt {
    /// Points moved by this action.
    pub points: u64,
    pub balance: u64,
    pub lifetime_points: u64,
    pub tier: LoyaltyTier,
}

/// Results from CustomerActions - variants match 1:1 with CustomerAction
#[derive(Debug, Clone)]
pub enum CustomerActionResult {
    RecordMeasurement(()),
    EarnPoints(LoyaltyReceipt),
    RedeemPoints(LoyaltyReceipt),
    AdjustPoints(LoyaltyReceipt),
}
