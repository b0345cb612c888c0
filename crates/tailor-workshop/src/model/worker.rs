use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ids::WorkerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkerSpecialty {
    Cutter,
    Tailor,
    Embroiderer,
    Finisher,
    Presser,
}

/// A workshop employee paid a monthly base salary plus a rate per finished piece.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    pub id: WorkerId,
    pub name: String,
    pub phone: String,
    pub specialty: WorkerSpecialty,
    pub base_salary: Decimal,
    pub piece_rate: Decimal,
    pub active: bool,
    /// Pieces finished since the last payroll run.
    pub completed_pieces: u32,
    pub hired_on: NaiveDate,
    pub last_paid_period: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerCreate {
    pub name: String,
    pub phone: String,
    pub specialty: WorkerSpecialty,
    pub base_salary: Decimal,
    pub piece_rate: Decimal,
    #[serde(default)]
    pub hired_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub specialty: Option<WorkerSpecialty>,
    pub base_salary: Option<Decimal>,
    pub piece_rate: Option<Decimal>,
}

/// Result of one payroll run for one worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollSlip {
    pub worker_id: WorkerId,
    pub worker_name: String,
    pub period: String,
    pub base_salary: Decimal,
    pub pieces: u32,
    pub piece_rate: Decimal,
    pub piece_pay: Decimal,
    pub gross: Decimal,
    pub paid_at: DateTime<Utc>,
}
