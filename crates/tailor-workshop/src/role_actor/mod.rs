//! # Role Actor
//!
//! Named permission sets assigned to staff users. Role names are unique regardless of
//! case.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::RoleClient;
use crate::model::Role;
use workshop_framework::ResourceActor;

/// Creates a new Role actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Role>, RoleClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, RoleClient::new(generic_client))
}
