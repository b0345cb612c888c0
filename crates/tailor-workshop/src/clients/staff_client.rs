//! # Staff Client
use crate::model::{Permission, RoleId, StaffCreate, StaffId, StaffUpdate, StaffUser};
use crate::staff_actor::{StaffAction, StaffActionResult, StaffError};
use async_trait::async_trait;
use tracing::{debug, instrument};
use workshop_framework::{ActorClient, FrameworkError, ResourceClient};

/// Client for interacting with the Staff actor.
#[derive(Clone)]
pub struct StaffClient {
    inner: ResourceClient<StaffUser>,
}

impl StaffClient {
    pub fn new(inner: ResourceClient<StaffUser>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_staff(&self, params: StaffCreate) -> Result<StaffId, StaffError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_staff(&self, id: StaffId, update: StaffUpdate) -> Result<StaffUser, StaffError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn change_role(&self, id: StaffId, role_id: RoleId) -> Result<(), StaffError> {
        match self.act(id, StaffAction::ChangeRole(role_id)).await? {
            StaffActionResult::ChangeRole(()) => Ok(()),
            _ => unreachable!("ChangeRole action must return ChangeRole result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn deactivate(&self, id: StaffId) -> Result<(), StaffError> {
        match self.act(id, StaffAction::Deactivate).await? {
            StaffActionResult::Deactivate(()) => Ok(()),
            _ => unreachable!("Deactivate action must return Deactivate result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn can(&self, id: StaffId, permission: Permission) -> Result<bool, StaffError> {
        match self.act(id, StaffAction::Can(permission)).await? {
            StaffActionResult::Can(allowed) => Ok(allowed),
            _ => unreachable!("Can action must return Can result"),
        }
    }

    async fn act(&self, id: StaffId, action: StaffAction) -> Result<StaffActionResult, StaffError> {
        debug!(?action, "Sending action");
        self.inner.perform_action(id, action).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<StaffUser> for StaffClient {
    type Error = StaffError;

    fn inner(&self) -> &ResourceClient<StaffUser> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into()
    }
}
