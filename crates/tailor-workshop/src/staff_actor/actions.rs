use crate::model::{Permission, RoleId};

#[derive(Debug, Clone)]
pub enum StaffAction {
    ChangeRole(RoleId),
    Deactivate,
    /// Whether the user's role grants `Permission`. Inactive users can do nothing.
    Can(Permission),
}

/// Results from StaffActions - variants match 1:1 with StaffAction
#[derive(Debug, Clone)]
pub enum StaffActionResult {
    ChangeRole(()),
    Deactivate(()),
    Can(bool),
}
