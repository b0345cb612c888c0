//! # Workshop Framework
//!
//! Resource actors for the tailoring workshop back office. Every business record type
//! (customers, materials, orders, invoices, ...) is owned by one [`ResourceActor`] running
//! in its own Tokio task and reached through a cloneable [`ResourceClient`].
//!
//! ## Layers
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the record type, its payloads and business rules
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing and the in-memory store
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed async calls
//!
//! Every resource gets the same operations: create, get, list, update, delete, plus an
//! `Action` enum for what CRUD does not cover (consuming fabric stock, advancing a
//! production stage, recording a payment).
//!
//! ## Context Injection
//!
//! Dependencies are injected when the actor starts (`run(context)`), not when it is built.
//! An order actor receives the customer, material and worker clients it needs to validate
//! a new order and consume fabric; a customer actor receives the loyalty policy.
//!
//! ```rust
//! use workshop_framework::{ActorEntity, ResourceActor, ResourceClient};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Fabric { id: u32, meters: u32 }
//! #[derive(Debug)] struct FabricCreate { meters: u32 }
//! #[derive(Debug)] struct FabricUpdate;
//! #[derive(Debug)] enum FabricAction { Cut(u32) }
//! #[derive(Debug, thiserror::Error)] #[error("not enough fabric")] struct FabricError;
//!
//! #[async_trait]
//! impl ActorEntity for Fabric {
//!     type Id = u32; type Create = FabricCreate; type Update = FabricUpdate;
//!     type Action = FabricAction; type ActionResult = u32; type Context = (); type Error = FabricError;
//!     fn from_create_params(id: u32, p: FabricCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, meters: p.meters })
//!     }
//!     async fn on_update(&mut self, _: FabricUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, a: FabricAction, _: &()) -> Result<u32, Self::Error> {
//!         let FabricAction::Cut(m) = a;
//!         self.meters = self.meters.checked_sub(m).ok_or(FabricError)?;
//!         Ok(self.meters)
//!     }
//! }
//!
//! #[derive(Clone, Debug)] struct Garment { id: u32 }
//! #[derive(Debug)] struct GarmentCreate { fabric: u32, meters: u32 }
//! #[derive(Debug)] struct GarmentUpdate;
//! #[derive(Debug)] enum GarmentAction {}
//! #[derive(Debug, thiserror::Error)] #[error("{0}")] struct GarmentError(String);
//!
//! #[async_trait]
//! impl ActorEntity for Garment {
//!     type Id = u32; type Create = GarmentCreate; type Update = GarmentUpdate;
//!     type Action = GarmentAction; type ActionResult = (); type Error = GarmentError;
//!     // The garment actor cuts fabric through the fabric actor's client.
//!     type Context = ResourceClient<Fabric>;
//!
//!     fn from_create_params(id: u32, _: GarmentCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: GarmentUpdate, _: &Self::Context) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: GarmentAction, _: &Self::Context) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (fabric_actor, fabric_client) = ResourceActor::<Fabric>::new(10);
//!     let (garment_actor, _garment_client) = ResourceActor::<Garment>::new(10);
//!
//!     tokio::spawn(fabric_actor.run(()));
//!     tokio::spawn(garment_actor.run(fabric_client.clone()));
//!
//!     let bolt = fabric_client.create(FabricCreate { meters: 30 }).await.unwrap();
//!     let left = fabric_client.perform_action(bolt, FabricAction::Cut(4)).await.unwrap();
//!     assert_eq!(left, 26);
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed sequentially within an actor
//! - Different resource types are served in parallel
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a client's requests from scripted expectations so an
//! actor can be tested with its dependencies faked.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
