//! # Worker Actor
//!
//! Workshop staff on the production floor: cutters, tailors, embroiderers. Each worker
//! accumulates finished pieces between payroll runs; [`WorkerAction::RunPayroll`] pays
//! the monthly base salary plus the piece rate and starts the count again.
//!
//! Deleting a worker who still has open orders is refused by
//! [`WorkshopSystem::delete_worker`](crate::lifecycle::WorkshopSystem::delete_worker).

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::WorkerClient;
use crate::model::Worker;
use workshop_framework::ResourceActor;

/// Creates a new Worker actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Worker>, WorkerClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, WorkerClient::new(generic_client))
}
