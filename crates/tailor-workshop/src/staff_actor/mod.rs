//! # Staff Actor
//!
//! Back-office user accounts. Each user holds exactly one role; permission checks go
//! through the role actor.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](workshop_framework::ActorEntity) implementation for [`StaffUser`]
//! - [`error`] - [`StaffError`]
//! - [`actions`] - [`StaffAction`] and [`StaffActionResult`]
//!
//! ## Context
//!
//! Runs with a [`RoleClient`](crate::clients::RoleClient).

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::StaffClient;
use crate::model::StaffUser;
use workshop_framework::ResourceActor;

/// Creates a new Staff actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<StaffUser>, StaffClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, StaffClient::new(generic_client))
}
