//! # Tailor Workshop
//!
//! Back office for a tailoring workshop: customers and their measurements, made-to-measure
//! orders tracked through production, workers and payroll, fabric and trim inventory,
//! invoicing, a point-of-sale register with loyalty points, and a management dashboard.
//!
//! ## 🚀 Core Components
//!
//! - **[model]**: Plain records ([`Customer`](model::Customer), [`Order`](model::Order),
//!   [`Material`](model::Material), ...) with their create and update payloads.
//! - **`*_actor`**: One module per record type implementing
//!   [`ActorEntity`](workshop_framework::ActorEntity) with its errors and actions.
//! - **[clients]**: Typed wrappers such as [`OrderClient`](clients::OrderClient).
//! - **[lifecycle]**: [`WorkshopSystem`](lifecycle::WorkshopSystem) starts, wires and stops
//!   the actors and runs the workflows that span several of them.
//! - **[pos]**, **[analytics]**, **[seed]**: the register, the dashboard and demo data.
//! - **[http]**: the JSON API served by the `tailor-workshop` binary.
//!
//! ## 🧪 Testing
//!
//! See [`workshop_framework::mock`] for faking an actor's dependencies.

pub mod analytics;
pub mod clients;
pub mod config;
pub mod customer_actor;
pub mod http;
pub mod invoice_actor;
pub mod lifecycle;
pub mod material_actor;
pub mod model;
pub mod order_actor;
pub mod pos;
pub mod role_actor;
pub mod sale_actor;
pub mod seed;
pub mod staff_actor;
pub mod worker_actor;
