use crate::model::Permission;

#[derive(Debug, Clone)]
pub enum RoleAction {
    Grant(Permission),
    Revoke(Permission),
    /// Read-only permission check.
    Allows(Permission),
}

/// Results from RoleActions - variants match 1:1 with RoleAction.
///
/// `Grant` and `Revoke` report whether the permission set changed.
#[derive(Debug, Clone)]
pub enum RoleActionResult {
    Grant(bool),
    Revoke(bool),
    Allows(bool),
}
