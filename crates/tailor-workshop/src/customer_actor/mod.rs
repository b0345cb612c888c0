//! # Customer Actor
//!
//! Customers, their measurements and their loyalty points.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](workshop_framework::ActorEntity) implementation for [`Customer`]
//! - [`error`] - [`CustomerError`]
//! - [`actions`] - [`CustomerAction`] and [`CustomerActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use tailor_workshop::customer_actor;
//! use tailor_workshop::model::{CustomerCreate, LoyaltyPolicy};
//! use rust_decimal_macros::dec;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = customer_actor::new(32);
//!     tokio::spawn(actor.run(LoyaltyPolicy::default()));
//!
//!     let id = client
//!         .create_customer(CustomerCreate {
//!             name: "Fahad".into(),
//!             phone: "+965 5000 1234".into(),
//!             email: None,
//!             measurements: Default::default(),
//!         })
//!         .await?;
//!     let receipt = client.earn_points(id, dec!(75.500)).await?;
//!     assert_eq!(receipt.points, 75);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CustomerClient;
use crate::model::Customer;
use workshop_framework::ResourceActor;

/// Creates a new Customer actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Customer>, CustomerClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, CustomerClient::new(generic_client))
}
