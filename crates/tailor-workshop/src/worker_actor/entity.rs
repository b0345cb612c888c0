//! [`ActorEntity`] implementation for [`Worker`].

use super::actions::{WorkerAction, WorkerActionResult};
use super::error::WorkerError;
use crate::model::{
    is_valid_phone, normalize_phone, round_money, PayrollSlip, Worker, WorkerCreate, WorkerId,
    WorkerUpdate,
};
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::info;
use workshop_framework::ActorEntity;

fn validated_name(name: &str) -> Result<String, WorkerError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(WorkerError::ValidationError("name must not be blank".into()));
    }
    Ok(name.to_string())
}

fn validated_phone(raw: &str) -> Result<String, WorkerError> {
    let phone = normalize_phone(raw);
    if !is_valid_phone(&phone) {
        return Err(WorkerError::ValidationError(format!("invalid phone number: {raw}")));
    }
    Ok(phone)
}

fn non_negative(field: &str, value: Decimal) -> Result<Decimal, WorkerError> {
    if value < Decimal::ZERO {
        return Err(WorkerError::ValidationError(format!(
            "{field} must not be negative, got {value}"
        )));
    }
    Ok(value)
}

#[async_trait]
impl ActorEntity for Worker {
    type Id = WorkerId;
    type Create = WorkerCreate;
    type Update = WorkerUpdate;
    type Action = WorkerAction;
    type ActionResult = WorkerActionResult;
    type Context = ();
    type Error = WorkerError;

    fn from_create_params(id: WorkerId, params: WorkerCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            name: validated_name(&params.name)?,
            phone: validated_phone(&params.phone)?,
            specialty: params.specialty,
            base_salary: non_negative("base salary", params.base_salary)?,
            piece_rate: non_negative("piece rate", params.piece_rate)?,
            active: true,
            completed_pieces: 0,
            hired_on: params.hired_on.unwrap_or_else(|| Utc::now().date_naive()),
            last_paid_period: None,
        })
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.phone.clone())
    }

    async fn on_update(&mut self, update: WorkerUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = validated_name(&name)?;
        }
        if let Some(phone) = update.phone {
            self.phone = validated_phone(&phone)?;
        }
        if let Some(specialty) = update.specialty {
            self.specialty = specialty;
        }
        if let Some(salary) = update.base_salary {
            self.base_salary = non_negative("base salary", salary)?;
        }
        if let Some(rate) = update.piece_rate {
            self.piece_rate = non_negative("piece rate", rate)?;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: WorkerAction,
        _ctx: &(),
    ) -> Result<WorkerActionResult, Self::Error> {
        match action {
            WorkerAction::RecordPieces(pieces) => {
                if pieces == 0 {
                    return Err(WorkerError::ValidationError("record at least one piece".into()));
                }
                self.completed_pieces = self.completed_pieces.checked_add(pieces).ok_or_else(|| {
                    WorkerError::ValidationError(format!("{pieces} more pieces would overflow the count"))
                })?;
                Ok(WorkerActionResult::RecordPieces(self.completed_pieces))
            }
            WorkerAction::RunPayroll { period } => {
                let period = period.trim().to_string();
                if period.is_empty() {
                    return Err(WorkerError::ValidationError("payroll period must not be blank".into()));
                }
                if !self.active {
                    return Err(WorkerError::Inactive(self.id.to_string()));
                }
                if self.last_paid_period.as_deref() == Some(period.as_str()) {
                    return Err(WorkerError::AlreadyPaid(period));
                }
                let too_large = || WorkerError::ValidationError(format!("pay for period {period} is too large"));
                let piece_pay = Decimal::from(self.completed_pieces)
                    .checked_mul(self.piece_rate)
                    .map(round_money)
                    .ok_or_else(too_large)?;
                let gross = self.base_salary.checked_add(piece_pay).ok_or_else(too_large)?;
                let slip = PayrollSlip {
                    worker_id: self.id,
                    worker_name: self.name.clone(),
                    period: period.clone(),
                    base_salary: self.base_salary,
                    pieces: self.completed_pieces,
                    piece_rate: self.piece_rate,
                    piece_pay,
                    gross,
                    paid_at: Utc::now(),
                };
                info!(worker_id = %self.id, %period, gross = %slip.gross, "Payroll run");
                self.completed_pieces = 0;
                self.last_paid_period = Some(period);
                Ok(WorkerActionResult::RunPayroll(slip))
            }
            WorkerAction::Deactivate => {
                self.active = false;
                Ok(WorkerActionResult::Deactivate(()))
            }
            WorkerAction::Activate => {
                self.active = true;
                Ok(WorkerActionResult::Activate(()))
            }
        }
    }
}
