//! [`ActorEntity`] implementation for [`Order`].
//!
//! An order reaches into three other actors: the customer actor to validate the customer
//! and credit loyalty points on delivery, the material actor to take (and return) fabric,
//! and the worker actor to check assignments and credit finished pieces. Each hook runs
//! its own checks first, then the remote call, and only then mutates the order, so a
//! failed remote call leaves the order unchanged.

use super::actions::{OrderAction, OrderActionResult};
use super::error::OrderError;
use crate::clients::{CustomerClient, MaterialClient, WorkerClient};
use crate::customer_actor::CustomerError;
use crate::material_actor::MaterialError;
use crate::model::{
    round_money, CustomerId, Order, OrderCreate, OrderId, OrderStatus, OrderUpdate,
    ProductionStage, StatusChange, WorkerId,
};
use crate::worker_actor::WorkerError;
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, info};
use workshop_framework::{ActorClient, ActorEntity};

/// Clients the order actor calls from its hooks.
pub type OrderContext = (CustomerClient, MaterialClient, WorkerClient);

fn customer_error(id: CustomerId, e: CustomerError) -> OrderError {
    match e {
        CustomerError::NotFound(_) => OrderError::InvalidCustomer(id.to_string()),
        other => OrderError::ActorCommunicationError(other.to_string()),
    }
}

fn material_error(e: MaterialError) -> OrderError {
    match e {
        MaterialError::NotFound(id) => OrderError::InvalidMaterial(id),
        e @ MaterialError::InsufficientStock { .. } => OrderError::InsufficientStock(e.to_string()),
        other => OrderError::ActorCommunicationError(other.to_string()),
    }
}

fn worker_error(id: WorkerId, e: WorkerError) -> OrderError {
    match e {
        WorkerError::NotFound(_) => OrderError::InvalidWorker(id.to_string()),
        other => OrderError::ActorCommunicationError(other.to_string()),
    }
}

impl Order {
    fn transition(&mut self, status: OrderStatus, note: Option<String>) {
        let at = Utc::now();
        self.status = status;
        self.updated_at = at;
        self.history.push(StatusChange { status, at, note });
    }

    fn refuse(&self, action: &'static str) -> OrderError {
        OrderError::InvalidTransition {
            from: self.status,
            action,
        }
    }
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = OrderContext;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        if params.quantity == 0 {
            return Err(OrderError::ValidationError("quantity must be at least 1".into()));
        }
        if params.unit_price < Decimal::ZERO {
            return Err(OrderError::ValidationError(format!(
                "unit price must not be negative, got {}",
                params.unit_price
            )));
        }
        if let Some(fabric) = &params.fabric {
            if fabric.meters <= Decimal::ZERO {
                return Err(OrderError::ValidationError(format!(
                    "fabric usage must be positive, got {}",
                    fabric.meters
                )));
            }
        }

        let total = params
            .unit_price
            .checked_mul(Decimal::from(params.quantity))
            .ok_or_else(|| {
                OrderError::ValidationError(format!(
                    "{} x {} is too large to price",
                    params.quantity, params.unit_price
                ))
            })?;

        let now = Utc::now();
        Ok(Self {
            id,
            customer_id: params.customer_id,
            garment: params.garment,
            quantity: params.quantity,
            unit_price: params.unit_price,
            total: round_money(total),
            fabric: params.fabric,
            status: OrderStatus::Confirmed,
            assigned_worker: None,
            due_date: params.due_date,
            notes: params.notes.unwrap_or_default(),
            history: vec![StatusChange {
                status: OrderStatus::Confirmed,
                at: now,
                note: None,
            }],
            created_at: now,
            updated_at: now,
        })
    }

    /// Validates the customer, then takes the fabric out of stock.
    async fn on_create(&mut self, ctx: &OrderContext) -> Result<(), Self::Error> {
        let (customers, materials, _) = ctx;
        debug!(customer_id = %self.customer_id, "Validating customer");
        customers
            .get(self.customer_id)
            .await
            .map_err(|e| customer_error(self.customer_id, e))?
            .ok_or_else(|| OrderError::InvalidCustomer(self.customer_id.to_string()))?;

        if let Some(fabric) = self.fabric {
            debug!(material_id = %fabric.material_id, meters = %fabric.meters, "Consuming fabric");
            materials
                .consume(fabric.material_id, fabric.meters)
                .await
                .map_err(material_error)?;
        }
        Ok(())
    }

    async fn on_update(&mut self, update: OrderUpdate, _ctx: &OrderContext) -> Result<(), Self::Error> {
        if !self.is_open() {
            return Err(self.refuse("reschedule"));
        }
        if let Some(due_date) = update.due_date {
            self.due_date = Some(due_date);
        }
        if let Some(notes) = update.notes {
            self.notes = notes;
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        ctx: &OrderContext,
    ) -> Result<OrderActionResult, Self::Error> {
        let (customers, materials, workers) = ctx;
        match action {
            OrderAction::AssignWorker(worker_id) => {
                if !matches!(self.status, OrderStatus::Confirmed | OrderStatus::InProduction(_)) {
                    return Err(self.refuse("assign a worker to"));
                }
                let worker = workers
                    .get(worker_id)
                    .await
                    .map_err(|e| worker_error(worker_id, e))?
                    .ok_or_else(|| OrderError::InvalidWorker(worker_id.to_string()))?;
                if !worker.active {
                    return Err(OrderError::WorkerInactive(worker_id.to_string()));
                }
                self.assigned_worker = Some(worker_id);
                self.updated_at = Utc::now();
                info!(order_id = %self.id, %worker_id, "Worker assigned");
                Ok(OrderActionResult::AssignWorker(()))
            }
            OrderAction::StartProduction => {
                if self.status != OrderStatus::Confirmed {
                    return Err(self.refuse("start production of"));
                }
                if self.assigned_worker.is_none() {
                    return Err(OrderError::NoWorkerAssigned(self.id.to_string()));
                }
                self.transition(OrderStatus::InProduction(ProductionStage::Cutting), None);
                Ok(OrderActionResult::StartProduction(ProductionStage::Cutting))
            }
            OrderAction::AdvanceStage => {
                let OrderStatus::InProduction(stage) = self.status else {
                    return Err(self.refuse("advance"));
                };
                let next = match stage.next() {
                    Some(next) => OrderStatus::InProduction(next),
                    None => {
                        let worker_id = self
                            .assigned_worker
                            .ok_or_else(|| OrderError::NoWorkerAssigned(self.id.to_string()))?;
                        workers
                            .record_pieces(worker_id, self.quantity)
                            .await
                            .map_err(|e| worker_error(worker_id, e))?;
                        OrderStatus::Ready
                    }
                };
                self.transition(next, None);
                Ok(OrderActionResult::AdvanceStage(next))
            }
            OrderAction::MarkDelivered => {
                if self.status != OrderStatus::Ready {
                    return Err(self.refuse("deliver"));
                }
                let receipt = customers
                    .earn_points(self.customer_id, self.total)
                    .await
                    .map_err(|e| customer_error(self.customer_id, e))?;
                self.transition(OrderStatus::Delivered, None);
                Ok(OrderActionResult::MarkDelivered(receipt.points))
            }
            OrderAction::Cancel { reason } => {
                if !matches!(self.status, OrderStatus::Confirmed | OrderStatus::InProduction(_)) {
                    return Err(self.refuse("cancel"));
                }
                if self.status == OrderStatus::Confirmed {
                    if let Some(fabric) = self.fabric {
                        materials
                            .restock(fabric.material_id, fabric.meters)
                            .await
                            .map_err(material_error)?;
                    }
                }
                let reason = reason.trim();
                let note = (!reason.is_empty()).then(|| reason.to_string());
                self.transition(OrderStatus::Cancelled, note);
                Ok(OrderActionResult::Cancel(()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FabricUsage, GarmentType, MaterialId};
    use rust_decimal_macros::dec;

    fn params() -> OrderCreate {
        OrderCreate {
            customer_id: CustomerId(1),
            garment: GarmentType::Dishdasha,
            quantity: 3,
            unit_price: dec!(18.500),
            fabric: Some(FabricUsage {
                material_id: MaterialId(1),
                meters: dec!(10.5),
            }),
            due_date: None,
            notes: None,
        }
    }

    #[test]
    fn new_orders_are_confirmed_with_total() {
        let order = Order::from_create_params(OrderId(1), params()).unwrap();
        assert_eq!(order.status, OrderStatus::Confirmed);
        assert_eq!(order.total, dec!(55.500));
        assert_eq!(order.history.len(), 1);
        assert!(order.is_open());
    }

    #[test]
    fn rejects_zero_quantity_and_empty_fabric() {
        let mut zero = params();
        zero.quantity = 0;
        assert!(matches!(
            Order::from_create_params(OrderId(1), zero),
            Err(OrderError::ValidationError(_))
        ));

        let mut no_fabric = params();
        no_fabric.fabric = Some(FabricUsage {
            material_id: MaterialId(1),
            meters: dec!(0),
        });
        assert!(matches!(
            Order::from_create_params(OrderId(1), no_fabric),
            Err(OrderError::ValidationError(_))
        ));

        let mut unpriceable = params();
        unpriceable.unit_price = Decimal::MAX;
        assert!(matches!(
            Order::from_create_params(OrderId(1), unpriceable),
            Err(OrderError::ValidationError(_))
        ));
    }

    #[test]
    fn overdue_only_while_open() {
        let mut order = Order::from_create_params(OrderId(1), params()).unwrap();
        let today = chrono::NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        order.due_date = chrono::NaiveDate::from_ymd_opt(2024, 6, 1);
        assert!(order.is_overdue(today));
        order.status = OrderStatus::Delivered;
        assert!(!order.is_overdue(today));
    }
}
