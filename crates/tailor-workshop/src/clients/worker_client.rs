//! # Worker Client
use crate::model::{PayrollSlip, Worker, WorkerCreate, WorkerId, WorkerUpdate};
use crate::worker_actor::{WorkerAction, WorkerActionResult, WorkerError};
use async_trait::async_trait;
use tracing::{debug, instrument};
use workshop_framework::{ActorClient, FrameworkError, ResourceClient};

/// Client for interacting with the Worker actor.
#[derive(Clone)]
pub struct WorkerClient {
    inner: ResourceClient<Worker>,
}

impl WorkerClient {
    pub fn new(inner: ResourceClient<Worker>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_worker(&self, params: WorkerCreate) -> Result<WorkerId, WorkerError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_worker(&self, id: WorkerId, update: WorkerUpdate) -> Result<Worker, WorkerError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Returns the pieces pending payment after the credit.
    #[instrument(skip(self))]
    pub async fn record_pieces(&self, id: WorkerId, pieces: u32) -> Result<u32, WorkerError> {
        match self.act(id, WorkerAction::RecordPieces(pieces)).await? {
            WorkerActionResult::RecordPieces(pending) => Ok(pending),
            _ => unreachable!("RecordPieces action must return RecordPieces result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn run_payroll(&self, id: WorkerId, period: String) -> Result<PayrollSlip, WorkerError> {
        match self.act(id, WorkerAction::RunPayroll { period }).await? {
            WorkerActionResult::RunPayroll(slip) => Ok(slip),
            _ => unreachable!("RunPayroll action must return RunPayroll result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn deactivate(&self, id: WorkerId) -> Result<(), WorkerError> {
        match self.act(id, WorkerAction::Deactivate).await? {
            WorkerActionResult::Deactivate(()) => Ok(()),
            _ => unreachable!("Deactivate action must return Deactivate result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn activate(&self, id: WorkerId) -> Result<(), WorkerError> {
        match self.act(id, WorkerAction::Activate).await? {
            WorkerActionResult::Activate(()) => Ok(()),
            _ => unreachable!("Activate action must return Activate result"),
        }
    }

    async fn act(&self, id: WorkerId, action: WorkerAction) -> Result<WorkerActionResult, WorkerError> {
        debug!(?action, "Sending action");
        self.inner.perform_action(id, action).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Worker> for WorkerClient {
    type Error = WorkerError;

    fn inner(&self) -> &ResourceClient<Worker> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into()
    }
}
