//! # System Lifecycle & Orchestration
//!
//! [`WorkshopSystem`] creates the resource actors, wires them together and shuts them
//! down; [`setup_tracing`] installs logging.
//!
//! ## Dependency Injection via Context
//!
//! Actors are created without dependencies and receive them when started:
//!
//! ```rust,ignore
//! let (customer_actor, customer_client) = customer_actor::new(32);
//! let (order_actor, order_client) = order_actor::new(32);
//!
//! tokio::spawn(customer_actor.run(loyalty_policy));
//! tokio::spawn(order_actor.run((customer_client.clone(), material_client.clone(), worker_client.clone())));
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of every channel
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - wait for every actor task
//!
//! Context clients are clones; they keep a channel open only until the actor holding
//! them exits, which is why the wiring must stay acyclic.

pub mod tracing;
pub mod workshop_system;

pub use self::tracing::*;
pub use workshop_system::*;
