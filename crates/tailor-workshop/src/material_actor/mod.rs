//! # Material Actor
//!
//! Workshop inventory: fabric bolts, linings, thread, buttons and trims.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](workshop_framework::ActorEntity) implementation for [`Material`]
//! - [`error`] - [`MaterialError`]
//! - [`actions`] - [`MaterialAction`] and [`MaterialActionResult`] for stock movements
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Custom Actions
//!
//! ```rust,ignore
//! // Read the stock level
//! let meters = material_client.check_stock(id).await?;
//!
//! // Take fabric for an order; fails on insufficient stock
//! material_client.consume(id, dec!(3.5)).await?;
//!
//! // Return it when the order is cancelled
//! material_client.restock(id, dec!(3.5)).await?;
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::MaterialClient;
use crate::model::Material;
use workshop_framework::ResourceActor;

/// Creates a new Material actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Material>, MaterialClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, MaterialClient::new(generic_client))
}
