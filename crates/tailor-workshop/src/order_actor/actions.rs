//! Production-tracking actions for the Order actor.

use crate::model::{OrderStatus, ProductionStage, WorkerId};

#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Hands the order to an active worker. Allowed until the order is ready.
    AssignWorker(WorkerId),
    /// Confirmed -> cutting. Needs an assigned worker.
    StartProduction,
    /// Moves to the next stage; after quality check the order is ready and the worker
    /// is credited the finished pieces.
    AdvanceStage,
    /// Ready -> delivered. The customer earns loyalty points on the order total.
    MarkDelivered,
    /// Allowed before the order is ready. Uncut fabric goes back to stock.
    Cancel { reason: String },
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone)]
pub enum OrderActionResult {
    AssignWorker(()),
    StartProduction(ProductionStage),
    AdvanceStage(OrderStatus),
    /// Loyalty points the customer earned
    MarkDelivered(u64),
    Cancel(()),
}
