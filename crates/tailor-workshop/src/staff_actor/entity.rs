//! [`ActorEntity`] implementation for [`StaffUser`].
//!
//! The role client is the actor's context: roles are checked on create and on every role
//! change, and permission checks read the current role rather than a cached copy.

use super::actions::{StaffAction, StaffActionResult};
use super::error::StaffError;
use crate::clients::RoleClient;
use crate::model::{Permission, RoleId, StaffCreate, StaffId, StaffUpdate, StaffUser};
use crate::role_actor::RoleError;
use async_trait::async_trait;
use chrono::Utc;
use workshop_framework::{ActorClient, ActorEntity};

fn validated_name(name: &str) -> Result<String, StaffError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(StaffError::ValidationError("name must not be blank".into()));
    }
    Ok(name.to_string())
}

fn validated_email(raw: &str) -> Result<String, StaffError> {
    let email = raw.trim().to_lowercase();
    match email.split_once('@') {
        Some((user, domain)) if !user.is_empty() && domain.contains('.') => Ok(email),
        _ => Err(StaffError::ValidationError(format!("invalid email: {raw}"))),
    }
}

fn role_error(e: RoleError) -> StaffError {
    match e {
        RoleError::NotFound(id) => StaffError::InvalidRole(id),
        other => StaffError::ActorCommunicationError(other.to_string()),
    }
}

async fn ensure_role(roles: &RoleClient, role_id: RoleId) -> Result<(), StaffError> {
    roles
        .get(role_id)
        .await
        .map_err(role_error)?
        .map(|_| ())
        .ok_or_else(|| StaffError::InvalidRole(role_id.to_string()))
}

async fn role_allows(roles: &RoleClient, role_id: RoleId, permission: Permission) -> Result<bool, StaffError> {
    match roles.allows(role_id, permission).await {
        Ok(allowed) => Ok(allowed),
        // a deleted role grants nothing
        Err(RoleError::NotFound(_)) => Ok(false),
        Err(other) => Err(role_error(other)),
    }
}

#[async_trait]
impl ActorEntity for StaffUser {
    type Id = StaffId;
    type Create = StaffCreate;
    type Update = StaffUpdate;
    type Action = StaffAction;
    type ActionResult = StaffActionResult;
    type Context = RoleClient;
    type Error = StaffError;

    fn from_create_params(id: StaffId, params: StaffCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            name: validated_name(&params.name)?,
            email: validated_email(&params.email)?,
            role_id: params.role_id,
            active: true,
            created_at: Utc::now(),
        })
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.email.clone())
    }

    async fn on_create(&mut self, roles: &RoleClient) -> Result<(), Self::Error> {
        ensure_role(roles, self.role_id).await
    }

    async fn on_update(&mut self, update: StaffUpdate, _roles: &RoleClient) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = validated_name(&name)?;
        }
        if let Some(email) = update.email {
            self.email = validated_email(&email)?;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: StaffAction,
        roles: &RoleClient,
    ) -> Result<StaffActionResult, Self::Error> {
        match action {
            StaffAction::ChangeRole(role_id) => {
                if !self.active {
                    return Err(StaffError::Inactive(self.id.to_string()));
                }
                ensure_role(roles, role_id).await?;
                self.role_id = role_id;
                Ok(StaffActionResult::ChangeRole(()))
            }
            StaffAction::Deactivate => {
                self.active = false;
                Ok(StaffActionResult::Deactivate(()))
            }
            StaffAction::Can(permission) => {
                if !self.active {
                    return Ok(StaffActionResult::Can(false));
                }
                Ok(StaffActionResult::Can(role_allows(roles, self.role_id, permission).await?))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;
    use crate::role_actor::RoleActionResult;
    use workshop_framework::mock::MockClient;

    fn params(email: &str) -> StaffCreate {
        StaffCreate {
            name: "Mariam Al-Mutairi".into(),
            email: email.into(),
            role_id: RoleId(1),
        }
    }

    #[test]
    fn emails_are_normalized_and_checked() {
        let user = StaffUser::from_create_params(StaffId(1), params(" Mariam@AlSadu.com.kw ")).unwrap();
        assert_eq!(user.unique_key().as_deref(), Some("mariam@alsadu.com.kw"));

        for bad in ["mariam", "@alsadu.com", "mariam@localhost"] {
            assert!(matches!(
                StaffUser::from_create_params(StaffId(1), params(bad)),
                Err(StaffError::ValidationError(_))
            ));
        }
    }

    #[tokio::test]
    async fn create_requires_existing_role() {
        let mut mock = MockClient::<Role>::new();
        mock.expect_get(RoleId(1)).return_ok(None);
        let roles = RoleClient::new(mock.client());

        let mut user = StaffUser::from_create_params(StaffId(1), params("mariam@alsadu.com.kw")).unwrap();
        assert_eq!(
            user.on_create(&roles).await,
            Err(StaffError::InvalidRole("role_1".into()))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn inactive_users_can_do_nothing() {
        let mut mock = MockClient::<Role>::new();
        mock.expect_action(RoleId(1)).return_ok(RoleActionResult::Allows(true));
        let roles = RoleClient::new(mock.client());

        let mut user = StaffUser::from_create_params(StaffId(1), params("mariam@alsadu.com.kw")).unwrap();
        let can = user.handle_action(StaffAction::Can(Permission::UsePos), &roles).await.unwrap();
        assert!(matches!(can, StaffActionResult::Can(true)));

        user.handle_action(StaffAction::Deactivate, &roles).await.unwrap();
        // answered without asking the role actor
        let can = user.handle_action(StaffAction::Can(Permission::UsePos), &roles).await.unwrap();
        assert!(matches!(can, StaffActionResult::Can(false)));
        assert!(matches!(
            user.handle_action(StaffAction::ChangeRole(RoleId(2)), &roles).await,
            Err(StaffError::Inactive(_))
        ));
        mock.verify();
    }
}
