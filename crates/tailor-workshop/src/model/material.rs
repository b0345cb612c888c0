use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ids::MaterialId;
use super::money::round_money;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialCategory {
    Fabric,
    Lining,
    Thread,
    Button,
    Zipper,
    Embroidery,
    Accessory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockUnit {
    Meter,
    Piece,
    Spool,
}

/// An inventory item. Fabric is stocked in meters, trims by the piece or spool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: MaterialId,
    /// Upper-cased, unique across the inventory.
    pub sku: String,
    pub name: String,
    pub category: MaterialCategory,
    pub unit: StockUnit,
    pub quantity: Decimal,
    pub unit_cost: Decimal,
    pub retail_price: Decimal,
    pub reorder_level: Decimal,
    pub updated_at: DateTime<Utc>,
}

impl Material {
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.reorder_level
    }

    /// Stock valued at cost, saturating at `Decimal::MAX`.
    pub fn stock_value(&self) -> Decimal {
        round_money(self.quantity.saturating_mul(self.unit_cost))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialCreate {
    pub sku: String,
    pub name: String,
    pub category: MaterialCategory,
    pub unit: StockUnit,
    #[serde(default)]
    pub quantity: Decimal,
    pub unit_cost: Decimal,
    pub retail_price: Decimal,
    #[serde(default)]
    pub reorder_level: Decimal,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialUpdate {
    pub sku: Option<String>,
    pub name: Option<String>,
    pub quantity: Option<Decimal>,
    pub unit_cost: Option<Decimal>,
    pub retail_price: Option<Decimal>,
    pub reorder_level: Option<Decimal>,
}
