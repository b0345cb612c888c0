//! Custom actions for the Worker actor: piece counting and payroll.

use crate::model::PayrollSlip;

#[derive(Debug, Clone)]
pub enum WorkerAction {
    /// Credits finished pieces towards the next payroll.
    RecordPieces(u32),
    /// Pays base salary plus piece pay for `period` (e.g. `2024-05`) and resets the count.
    RunPayroll { period: String },
    Deactivate,
    Activate,
}

/// Results from WorkerActions - variants match 1:1 with WorkerAction
#[derive(Debug, Clone)]
pub enum WorkerActionResult {
    /// Pieces pending payment after the credit.
    RecordPieces(u32),
    RunPayroll(PayrollSlip),
    Deactivate(()),
    Activate(()),
}
