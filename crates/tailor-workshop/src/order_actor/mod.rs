//! # Order Actor
//!
//! Tailoring orders and their production tracking.
//!
//! ## Lifecycle
//!
//! ```text
//! Confirmed -> InProduction(Cutting -> Sewing -> Embroidery -> Finishing -> QualityCheck)
//!           -> Ready -> Delivered
//! Confirmed | InProduction -> Cancelled
//! ```
//!
//! Every status change is appended to [`Order::history`](crate::model::Order::history).
//!
//! ## Context
//!
//! The actor runs with an [`OrderContext`]: the customer, material and worker clients.
//!
//! ```rust,ignore
//! let (order_actor, order_client) = order_actor::new(32);
//! tokio::spawn(order_actor.run((customer_client.clone(), material_client.clone(), worker_client.clone())));
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::OrderContext;
pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use workshop_framework::ResourceActor;

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, OrderClient::new(generic_client))
}
