//! # Role Client
use crate::model::{Permission, Role, RoleCreate, RoleId, RoleUpdate};
use crate::role_actor::{RoleAction, RoleActionResult, RoleError};
use async_trait::async_trait;
use tracing::{debug, instrument};
use workshop_framework::{ActorClient, FrameworkError, ResourceClient};

/// Client for interacting with the Role actor.
#[derive(Clone)]
pub struct RoleClient {
    inner: ResourceClient<Role>,
}

impl RoleClient {
    pub fn new(inner: ResourceClient<Role>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_role(&self, params: RoleCreate) -> Result<RoleId, RoleError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_role(&self, id: RoleId, update: RoleUpdate) -> Result<Role, RoleError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Looks a role up by name, ignoring case.
    #[instrument(skip(self))]
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Role>, RoleError> {
        let wanted = name.trim().to_lowercase();
        Ok(self.list().await?.into_iter().find(|role| role.name == wanted))
    }

    #[instrument(skip(self))]
    pub async fn grant(&self, id: RoleId, permission: Permission) -> Result<bool, RoleError> {
        match self.act(id, RoleAction::Grant(permission)).await? {
            RoleActionResult::Grant(changed) => Ok(changed),
            _ => unreachable!("Grant action must return Grant result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn revoke(&self, id: RoleId, permission: Permission) -> Result<bool, RoleError> {
        match self.act(id, RoleAction::Revoke(permission)).await? {
            RoleActionResult::Revoke(changed) => Ok(changed),
            _ => unreachable!("Revoke action must return Revoke result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn allows(&self, id: RoleId, permission: Permission) -> Result<bool, RoleError> {
        match self.act(id, RoleAction::Allows(permission)).await? {
            RoleActionResult::Allows(allowed) => Ok(allowed),
            _ => unreachable!("Allows action must return Allows result"),
        }
    }

    async fn act(&self, id: RoleId, action: RoleAction) -> Result<RoleActionResult, RoleError> {
        debug!(?action, "Sending action");
        self.inner.perform_action(id, action).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Role> for RoleClient {
    type Error = RoleError;

    fn inner(&self) -> &ResourceClient<Role> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into()
    }
}
