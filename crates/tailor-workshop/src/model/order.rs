/// A tailoring order: one garment type made in some quantity for one customer.
///
/// # Actor Framework
/// Managed by the order actor; see [`crate::order_actor`] for the lifecycle rules and
/// the cross-actor effects of each transition.
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ids::{CustomerId, MaterialId, OrderId, WorkerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GarmentType {
    Dishdasha,
    Bisht,
    Suit,
    Shirt,
    Trousers,
    Abaya,
    Alteration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductionStage {
    Cutting,
    Sewing,
    Embroidery,
    Finishing,
    QualityCheck,
}

impl ProductionStage {
    pub const ALL: [ProductionStage; 5] = [
        ProductionStage::Cutting,
        ProductionStage::Sewing,
        ProductionStage::Embroidery,
        ProductionStage::Finishing,
        ProductionStage::QualityCheck,
    ];

    /// `None` after quality check.
    pub fn next(self) -> Option<ProductionStage> {
        match self {
            ProductionStage::Cutting => Some(ProductionStage::Sewing),
            ProductionStage::Sewing => Some(ProductionStage::Embroidery),
            ProductionStage::Embroidery => Some(ProductionStage::Finishing),
            ProductionStage::Finishing => Some(ProductionStage::QualityCheck),
            ProductionStage::QualityCheck => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Confirmed,
    InProduction(ProductionStage),
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::InProduction(_) => "in_production",
            OrderStatus::Ready => "ready",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::InProduction(stage) => write!(f, "in_production({stage:?})"),
            other => f.write_str(other.label()),
        }
    }
}

/// Fabric taken from inventory for the whole order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FabricUsage {
    pub material_id: MaterialId,
    pub meters: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusChange {
    pub status: OrderStatus,
    pub at: DateTime<Utc>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub garment: GarmentType,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub total: Decimal,
    pub fabric: Option<FabricUsage>,
    pub status: OrderStatus,
    pub assigned_worker: Option<WorkerId>,
    pub due_date: Option<NaiveDate>,
    pub notes: String,
    pub history: Vec<StatusChange>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Not yet delivered or cancelled.
    pub fn is_open(&self) -> bool {
        !matches!(self.status, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.is_open() && self.due_date.is_some_and(|due| due < today)
    }

    pub fn stage(&self) -> Option<ProductionStage> {
        match self.status {
            OrderStatus::InProduction(stage) => Some(stage),
            _ => None,
        }
    }
}

/// Payload for creating a new order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub customer_id: CustomerId,
    pub garment: GarmentType,
    pub quantity: u32,
    pub unit_price: Decimal,
    #[serde(default)]
    pub fabric: Option<FabricUsage>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Only scheduling details can change once an order is placed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderUpdate {
    pub due_date: Option<NaiveDate>,
    pub notes: Option<String>,
}
