//! # Seeding
//!
//! Demo data for a Kuwaiti tailoring workshop, bundled into the binary as JSON. Records
//! are inserted in dependency order: roles, staff (whose roles are named, not numbered),
//! customers, workers, materials.

use crate::customer_actor::CustomerError;
use crate::lifecycle::WorkshopSystem;
use crate::material_actor::MaterialError;
use crate::model::{CustomerCreate, MaterialCreate, RoleCreate, StaffCreate, WorkerCreate};
use crate::role_actor::RoleError;
use crate::staff_actor::StaffError;
use crate::worker_actor::WorkerError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, instrument};

const EMBEDDED_SEED: &str = include_str!("../../data/seed.json");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Invalid seed data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Staff member {staff} refers to unknown role {role}")]
    UnknownRole { staff: String, role: String },

    #[error(transparent)]
    Role(#[from] RoleError),

    #[error(transparent)]
    Staff(#[from] StaffError),

    #[error(transparent)]
    Customer(#[from] CustomerError),

    #[error(transparent)]
    Worker(#[from] WorkerError),

    #[error(transparent)]
    Material(#[from] MaterialError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedStaff {
    pub name: String,
    pub email: String,
    /// Role name, matched case-insensitively.
    pub role: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub roles: Vec<RoleCreate>,
    pub staff: Vec<SeedStaff>,
    pub customers: Vec<CustomerCreate>,
    pub workers: Vec<WorkerCreate>,
    pub materials: Vec<MaterialCreate>,
}

impl SeedData {
    /// The data set shipped with the binary.
    pub fn embedded() -> Result<Self, SeedError> {
        Self::from_json(EMBEDDED_SEED)
    }

    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub roles: usize,
    pub staff: usize,
    pub customers: usize,
    pub workers: usize,
    pub materials: usize,
}

/// Inserts `data` through the regular clients, so every validation and unique key
/// applies. Stops at the first failure; records inserted before it stay.
#[instrument(skip_all)]
pub async fn seed_workshop(system: &WorkshopSystem, data: &SeedData) -> Result<SeedReport, SeedError> {
    let mut report = SeedReport::default();

    for role in &data.roles {
        let id = system.role_client.create_role(role.clone()).await?;
        debug!(%id, name = %role.name, "Seeded role");
        report.roles += 1;
    }

    for member in &data.staff {
        let role = system
            .role_client
            .find_by_name(&member.role)
            .await?
            .ok_or_else(|| SeedError::UnknownRole {
                staff: member.name.clone(),
                role: member.role.clone(),
            })?;
        system
            .staff_client
            .create_staff(StaffCreate {
                name: member.name.clone(),
                email: member.email.clone(),
                role_id: role.id,
            })
            .await?;
        report.staff += 1;
    }

    for customer in &data.customers {
        system.customer_client.create_customer(customer.clone()).await?;
        report.customers += 1;
    }

    for worker in &data.workers {
        system.worker_client.create_worker(worker.clone()).await?;
        report.workers += 1;
    }

    for material in &data.materials {
        system.material_client.create_material(material.clone()).await?;
        report.materials += 1;
    }

    info!(
        roles = report.roles,
        staff = report.staff,
        customers = report.customers,
        workers = report.workers,
        materials = report.materials,
        "Workshop seeded"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_seed_parses() {
        let data = SeedData::embedded().unwrap();
        assert_eq!(data.roles.len(), 4);
        assert_eq!(data.staff.len(), 4);
        assert!(data.materials.iter().any(|m| m.sku == "FAB-JPN-WHT"));
        assert!(data
            .staff
            .iter()
            .all(|s| data.roles.iter().any(|r| r.name.eq_ignore_ascii_case(&s.role))));
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let data = SeedData::from_json(r#"{"customers": []}"#).unwrap();
        assert!(data.roles.is_empty());
        assert!(data.materials.is_empty());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(SeedData::from_json("{"), Err(SeedError::Parse(_))));
    }
}
