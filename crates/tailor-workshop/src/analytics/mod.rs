//! # Dashboard
//!
//! Management figures computed from a [`WorkshopSnapshot`], a point-in-time copy of every
//! store. Computing is pure, so the same snapshot always yields the same dashboard.

use crate::model::{
    Customer, CustomerId, Invoice, LoyaltyTier, Material, MaterialId, Order, OrderId,
    OrderStatus, ProductionStage, Sale, Worker, WorkerId,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// How many customers [`Dashboard::top_customers`] lists.
pub const TOP_CUSTOMERS: usize = 5;

#[derive(Debug, Clone, Default)]
pub struct WorkshopSnapshot {
    pub customers: Vec<Customer>,
    pub workers: Vec<Worker>,
    pub materials: Vec<Material>,
    pub orders: Vec<Order>,
    pub invoices: Vec<Invoice>,
    pub sales: Vec<Sale>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverdueOrder {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub due_date: NaiveDate,
    pub days_late: i64,
    pub status: OrderStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Revenue {
    pub delivered_orders: Decimal,
    pub sales: Decimal,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LowStockItem {
    pub id: MaterialId,
    pub sku: String,
    pub name: String,
    pub quantity: Decimal,
    pub reorder_level: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkerLoad {
    pub id: WorkerId,
    pub name: String,
    pub active: bool,
    pub open_orders: usize,
    pub pieces_pending: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopCustomer {
    pub id: CustomerId,
    pub name: String,
    pub lifetime_points: u64,
    pub tier: LoyaltyTier,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecordCounts {
    pub customers: usize,
    pub workers: usize,
    pub materials: usize,
    pub orders: usize,
    pub invoices: usize,
    pub sales: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub generated_on: NaiveDate,
    pub counts: RecordCounts,
    pub orders_by_status: BTreeMap<String, usize>,
    pub orders_by_stage: BTreeMap<ProductionStage, usize>,
    /// Most overdue first.
    pub overdue_orders: Vec<OverdueOrder>,
    pub revenue: Revenue,
    /// Outstanding balance across open invoices.
    pub receivables: Decimal,
    /// Stock valued at cost.
    pub inventory_value: Decimal,
    pub low_stock: Vec<LowStockItem>,
    pub worker_load: Vec<WorkerLoad>,
    pub top_customers: Vec<TopCustomer>,
    pub tier_distribution: BTreeMap<LoyaltyTier, usize>,
}

impl Dashboard {
    pub fn compute(snapshot: &WorkshopSnapshot, today: NaiveDate) -> Self {
        let WorkshopSnapshot {
            customers,
            workers,
            materials,
            orders,
            invoices,
            sales,
        } = snapshot;

        let mut orders_by_status: BTreeMap<String, usize> = BTreeMap::new();
        let mut orders_by_stage: BTreeMap<ProductionStage, usize> =
            ProductionStage::ALL.iter().map(|stage| (*stage, 0)).collect();
        for order in orders {
            *orders_by_status.entry(order.status.label().to_string()).or_default() += 1;
            if let Some(stage) = order.stage() {
                *orders_by_stage.entry(stage).or_default() += 1;
            }
        }

        let mut overdue_orders: Vec<OverdueOrder> = orders
            .iter()
            .filter(|order| order.is_overdue(today))
            .filter_map(|order| {
                let due_date = order.due_date?;
                Some(OverdueOrder {
                    id: order.id,
                    customer_id: order.customer_id,
                    due_date,
                    days_late: (today - due_date).num_days(),
                    status: order.status,
                })
            })
            .collect();
        overdue_orders.sort_by(|a, b| b.days_late.cmp(&a.days_late).then(a.id.cmp(&b.id)));

        let delivered_orders: Decimal = orders
            .iter()
            .filter(|order| order.status == OrderStatus::Delivered)
            .map(|order| order.total)
            .fold(Decimal::ZERO, Decimal::saturating_add);
        let sales_total = sales
            .iter()
            .map(|sale| sale.total)
            .fold(Decimal::ZERO, Decimal::saturating_add);

        let low_stock = materials
            .iter()
            .filter(|material| material.is_low_stock())
            .map(|material| LowStockItem {
                id: material.id,
                sku: material.sku.clone(),
                name: material.name.clone(),
                quantity: material.quantity,
                reorder_level: material.reorder_level,
            })
            .collect();

        let worker_load = workers
            .iter()
            .map(|worker| WorkerLoad {
                id: worker.id,
                name: worker.name.clone(),
                active: worker.active,
                open_orders: orders
                    .iter()
                    .filter(|order| order.is_open() && order.assigned_worker == Some(worker.id))
                    .count(),
                pieces_pending: worker.completed_pieces,
            })
            .collect();

        let mut ranked: Vec<&Customer> = customers.iter().collect();
        ranked.sort_by(|a, b| {
            b.loyalty
                .lifetime_points
                .cmp(&a.loyalty.lifetime_points)
                .then(a.id.cmp(&b.id))
        });
        let top_customers = ranked
            .into_iter()
            .take(TOP_CUSTOMERS)
            .map(|customer| TopCustomer {
                id: customer.id,
                name: customer.name.clone(),
                lifetime_points: customer.loyalty.lifetime_points,
                tier: customer.loyalty.tier,
            })
            .collect();

        let mut tier_distribution: BTreeMap<LoyaltyTier, usize> =
            LoyaltyTier::ALL.iter().map(|tier| (*tier, 0)).collect();
        for customer in customers {
            *tier_distribution.entry(customer.loyalty.tier).or_default() += 1;
        }

        Self {
            generated_on: today,
            counts: RecordCounts {
                customers: customers.len(),
                workers: workers.len(),
                materials: materials.len(),
                orders: orders.len(),
                invoices: invoices.len(),
                sales: sales.len(),
            },
            orders_by_status,
            orders_by_stage,
            overdue_orders,
            revenue: Revenue {
                delivered_orders,
                sales: sales_total,
                total: delivered_orders.saturating_add(sales_total),
            },
            receivables: invoices
                .iter()
                .filter(|invoice| invoice.is_open())
                .map(Invoice::balance)
                .fold(Decimal::ZERO, Decimal::saturating_add),
            inventory_value: materials
                .iter()
                .map(Material::stock_value)
                .fold(Decimal::ZERO, Decimal::saturating_add),
            low_stock,
            worker_load,
            top_customers,
            tier_distribution,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        GarmentType, InvoiceSource, InvoiceStatus, LoyaltyAccount, MaterialCategory, StockUnit,
        WorkerSpecialty,
    };
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn order(id: u32, status: OrderStatus, total: Decimal, due: Option<NaiveDate>, worker: Option<u32>) -> Order {
        Order {
            id: OrderId(id),
            customer_id: CustomerId(1),
            garment: GarmentType::Dishdasha,
            quantity: 1,
            unit_price: total,
            total,
            fabric: None,
            status,
            assigned_worker: worker.map(WorkerId),
            due_date: due,
            notes: String::new(),
            history: Vec::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn customer(id: u32, lifetime: u64, tier: LoyaltyTier) -> Customer {
        Customer {
            id: CustomerId(id),
            name: format!("Customer {id}"),
            phone: format!("5000000{id}"),
            email: None,
            measurements: Default::default(),
            loyalty: LoyaltyAccount {
                points: lifetime,
                lifetime_points: lifetime,
                tier,
            },
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn snapshot() -> WorkshopSnapshot {
        WorkshopSnapshot {
            customers: vec![
                customer(1, 120, LoyaltyTier::Bronze),
                customer(2, 2400, LoyaltyTier::Gold),
                customer(3, 800, LoyaltyTier::Silver),
            ],
            workers: vec![Worker {
                id: WorkerId(1),
                name: "Ramesh".into(),
                phone: "90001234".into(),
                specialty: WorkerSpecialty::Tailor,
                base_salary: dec!(250),
                piece_rate: dec!(1.5),
                active: true,
                completed_pieces: 4,
                hired_on: day(1),
                last_paid_period: None,
            }],
            materials: vec![Material {
                id: MaterialId(1),
                sku: "FAB-1".into(),
                name: "White cotton".into(),
                category: MaterialCategory::Fabric,
                unit: StockUnit::Meter,
                quantity: dec!(4),
                unit_cost: dec!(2.500),
                retail_price: dec!(4),
                reorder_level: dec!(5),
                updated_at: Utc::now(),
            }],
            orders: vec![
                order(1, OrderStatus::Confirmed, dec!(20), Some(day(5)), None),
                order(2, OrderStatus::InProduction(ProductionStage::Sewing), dec!(30), Some(day(8)), Some(1)),
                order(3, OrderStatus::Delivered, dec!(45), Some(day(2)), Some(1)),
                order(4, OrderStatus::Ready, dec!(15), None, Some(1)),
            ],
            invoices: vec![Invoice {
                id: crate::model::InvoiceId(1),
                source: InvoiceSource::Order(OrderId(3)),
                customer_id: Some(CustomerId(1)),
                lines: Vec::new(),
                subtotal: dec!(45),
                discount: dec!(0),
                tax: dec!(0),
                total: dec!(45),
                amount_paid: dec!(20),
                status: InvoiceStatus::PartiallyPaid,
                payments: Vec::new(),
                issued_at: Utc::now(),
                due_date: None,
            }],
            sales: Vec::new(),
        }
    }

    #[test]
    fn counts_and_money_match_records() {
        let dashboard = Dashboard::compute(&snapshot(), day(10));

        assert_eq!(dashboard.counts.orders, 4);
        assert_eq!(dashboard.orders_by_status.get("confirmed"), Some(&1));
        assert_eq!(dashboard.orders_by_status.get("in_production"), Some(&1));
        assert_eq!(dashboard.orders_by_stage.get(&ProductionStage::Sewing), Some(&1));
        assert_eq!(dashboard.orders_by_stage.get(&ProductionStage::Cutting), Some(&0));
        assert_eq!(dashboard.revenue.total, dec!(45));
        assert_eq!(dashboard.receivables, dec!(25));
        assert_eq!(dashboard.inventory_value, dec!(10.000));
        assert_eq!(dashboard.low_stock.len(), 1);
    }

    #[test]
    fn overdue_excludes_closed_orders_and_sorts_latest_first() {
        let dashboard = Dashboard::compute(&snapshot(), day(10));
        let ids: Vec<OrderId> = dashboard.overdue_orders.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![OrderId(1), OrderId(2)]);
        assert_eq!(dashboard.overdue_orders[0].days_late, 5);
    }

    #[test]
    fn worker_load_and_loyalty_rankings() {
        let dashboard = Dashboard::compute(&snapshot(), day(10));
        assert_eq!(dashboard.worker_load[0].open_orders, 2);
        assert_eq!(dashboard.worker_load[0].pieces_pending, 4);

        let top: Vec<CustomerId> = dashboard.top_customers.iter().map(|c| c.id).collect();
        assert_eq!(top, vec![CustomerId(2), CustomerId(3), CustomerId(1)]);
        assert_eq!(dashboard.tier_distribution.get(&LoyaltyTier::Gold), Some(&1));
        assert_eq!(dashboard.tier_distribution.get(&LoyaltyTier::Silver), Some(&1));
    }
}
