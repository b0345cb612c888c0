//! Typed clients, one per resource actor.
//!
//! Each wraps a [`ResourceClient`](workshop_framework::ResourceClient), gets `get`, `list`
//! and `delete` from [`ActorClient`](workshop_framework::ActorClient), and turns actions
//! into plain methods returning the resource's own error type.

mod customer_client;
mod invoice_client;
mod material_client;
mod order_client;
mod role_client;
mod sale_client;
mod staff_client;
mod worker_client;

pub use customer_client::CustomerClient;
pub use invoice_client::InvoiceClient;
pub use material_client::MaterialClient;
pub use order_client::OrderClient;
pub use role_client::RoleClient;
pub use sale_client::SaleClient;
pub use staff_client::StaffClient;
pub use worker_client::WorkerClient;
