//! # Sale Actor
//!
//! Completed POS checkouts. A sale is built by [`Cart::checkout`](crate::pos::Cart::checkout)
//! and stored here; storing it takes the stock and moves the customer's loyalty points.
//! Stored sales cannot be edited or deleted.

pub mod entity;
pub mod error;

pub use entity::{SaleAction, SaleContext};
pub use error::*;

use crate::clients::SaleClient;
use crate::model::Sale;
use workshop_framework::ResourceActor;

/// Creates a new Sale actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Sale>, SaleClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, SaleClient::new(generic_client))
}
