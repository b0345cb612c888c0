use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ids::{CustomerId, MaterialId, SaleId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Card,
    Knet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleLine {
    pub material_id: MaterialId,
    pub sku: String,
    pub name: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

/// A completed POS checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: SaleId,
    pub customer_id: Option<CustomerId>,
    pub lines: Vec<SaleLine>,
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub points_redeemed: u64,
    pub redemption_value: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub payment_method: PaymentMethod,
    pub tendered: Decimal,
    pub change: Decimal,
    pub points_earned: u64,
    pub created_at: DateTime<Utc>,
}

/// Priced checkout as produced by [`Cart::checkout`](crate::pos::Cart::checkout).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleCreate {
    pub customer_id: Option<CustomerId>,
    pub lines: Vec<SaleLine>,
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub points_redeemed: u64,
    pub redemption_value: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub payment_method: PaymentMethod,
    pub tendered: Decimal,
}

/// Sales are immutable once rung up.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaleUpdate;
