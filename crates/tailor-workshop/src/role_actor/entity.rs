//! [`ActorEntity`] implementation for [`Role`].

use super::actions::{RoleAction, RoleActionResult};
use super::error::RoleError;
use crate::model::{Role, RoleCreate, RoleId, RoleUpdate};
use async_trait::async_trait;
use chrono::Utc;
use workshop_framework::ActorEntity;

fn validated_name(raw: &str) -> Result<String, RoleError> {
    let name = raw.trim().to_lowercase();
    if name.is_empty() {
        return Err(RoleError::ValidationError("role name must not be blank".into()));
    }
    Ok(name)
}

#[async_trait]
impl ActorEntity for Role {
    type Id = RoleId;
    type Create = RoleCreate;
    type Update = RoleUpdate;
    type Action = RoleAction;
    type ActionResult = RoleActionResult;
    type Context = ();
    type Error = RoleError;

    fn from_create_params(id: RoleId, params: RoleCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            name: validated_name(&params.name)?,
            permissions: params.permissions,
            created_at: Utc::now(),
        })
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.name.clone())
    }

    async fn on_update(&mut self, update: RoleUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = validated_name(&name)?;
        }
        if let Some(permissions) = update.permissions {
            self.permissions = permissions;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: RoleAction, _ctx: &()) -> Result<RoleActionResult, Self::Error> {
        Ok(match action {
            RoleAction::Grant(permission) => RoleActionResult::Grant(self.permissions.insert(permission)),
            RoleAction::Revoke(permission) => RoleActionResult::Revoke(self.permissions.remove(&permission)),
            RoleAction::Allows(permission) => RoleActionResult::Allows(self.permissions.contains(&permission)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Permission;

    #[tokio::test]
    async fn grant_and_revoke_report_changes() {
        let mut role = Role::from_create_params(
            RoleId(1),
            RoleCreate {
                name: " Cashier ".into(),
                permissions: [Permission::UsePos].into(),
            },
        )
        .unwrap();
        assert_eq!(role.unique_key().as_deref(), Some("cashier"));

        let granted = role.handle_action(RoleAction::Grant(Permission::UsePos), &()).await.unwrap();
        assert!(matches!(granted, RoleActionResult::Grant(false)));
        let granted = role
            .handle_action(RoleAction::Grant(Permission::ViewReports), &())
            .await
            .unwrap();
        assert!(matches!(granted, RoleActionResult::Grant(true)));

        role.handle_action(RoleAction::Revoke(Permission::UsePos), &()).await.unwrap();
        let allows = role.handle_action(RoleAction::Allows(Permission::UsePos), &()).await.unwrap();
        assert!(matches!(allows, RoleActionResult::Allows(false)));
    }
}
