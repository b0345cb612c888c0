//! # Invoice Actor
//!
//! Bills raised from tailoring orders (issued, paid over time) and from POS sales
//! (settled at the counter). See
//! [`WorkshopSystem::invoice_order`](crate::lifecycle::WorkshopSystem::invoice_order)
//! and [`WorkshopSystem::create_sale`](crate::lifecycle::WorkshopSystem::create_sale).

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::InvoiceClient;
use crate::model::Invoice;
use workshop_framework::ResourceActor;

/// Creates a new Invoice actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Invoice>, InvoiceClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, InvoiceClient::new(generic_client))
}
