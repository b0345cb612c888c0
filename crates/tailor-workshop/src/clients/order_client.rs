//! # Order Client
//!
//! Provides a high-level API for interacting with the `Order` actor.
//! Cross-actor work (customer validation, fabric consumption, piece credits) happens in
//! the order actor's hooks, not here.
use crate::model::{Order, OrderCreate, OrderId, OrderStatus, OrderUpdate, ProductionStage, WorkerId};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use async_trait::async_trait;
use tracing::{debug, info, instrument};
use workshop_framework::{ActorClient, FrameworkError, ResourceClient};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        info!("Sending create_order to actor");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_order(&self, id: OrderId, update: OrderUpdate) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn assign_worker(&self, id: OrderId, worker_id: WorkerId) -> Result<(), OrderError> {
        match self.act(id, OrderAction::AssignWorker(worker_id)).await? {
            OrderActionResult::AssignWorker(()) => Ok(()),
            _ => unreachable!("AssignWorker action must return AssignWorker result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn start_production(&self, id: OrderId) -> Result<ProductionStage, OrderError> {
        match self.act(id, OrderAction::StartProduction).await? {
            OrderActionResult::StartProduction(stage) => Ok(stage),
            _ => unreachable!("StartProduction action must return StartProduction result"),
        }
    }

    /// Returns the status the order moved to.
    #[instrument(skip(self))]
    pub async fn advance_stage(&self, id: OrderId) -> Result<OrderStatus, OrderError> {
        match self.act(id, OrderAction::AdvanceStage).await? {
            OrderActionResult::AdvanceStage(status) => Ok(status),
            _ => unreachable!("AdvanceStage action must return AdvanceStage result"),
        }
    }

    /// Returns the loyalty points the customer earned.
    #[instrument(skip(self))]
    pub async fn mark_delivered(&self, id: OrderId) -> Result<u64, OrderError> {
        match self.act(id, OrderAction::MarkDelivered).await? {
            OrderActionResult::MarkDelivered(points) => Ok(points),
            _ => unreachable!("MarkDelivered action must return MarkDelivered result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn cancel(&self, id: OrderId, reason: String) -> Result<(), OrderError> {
        match self.act(id, OrderAction::Cancel { reason }).await? {
            OrderActionResult::Cancel(()) => Ok(()),
            _ => unreachable!("Cancel action must return Cancel result"),
        }
    }

    async fn act(&self, id: OrderId, action: OrderAction) -> Result<OrderActionResult, OrderError> {
        debug!(?action, "Sending action");
        self.inner.perform_action(id, action).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into()
    }
}
