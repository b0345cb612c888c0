//! Plain data: the stored records, their create/update payloads and the small value types
//! they share. Behavior that touches other actors lives in the `*_actor` modules.

mod customer;
mod ids;
mod invoice;
mod loyalty;
mod material;
mod money;
mod order;
mod role;
mod sale;
mod worker;

pub use customer::*;
pub use ids::*;
pub use invoice::*;
pub use loyalty::*;
pub use material::*;
pub use money::*;
pub use order::*;
pub use role::*;
pub use sale::*;
pub use worker::*;
