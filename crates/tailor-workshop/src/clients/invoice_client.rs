//! # Invoice Client
use crate::invoice_actor::{InvoiceAction, InvoiceActionResult, InvoiceError};
use crate::model::{Invoice, InvoiceCreate, InvoiceId, InvoiceStatus};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{debug, instrument};
use workshop_framework::{ActorClient, FrameworkError, ResourceClient};

/// Client for interacting with the Invoice actor.
#[derive(Clone)]
pub struct InvoiceClient {
    inner: ResourceClient<Invoice>,
}

impl InvoiceClient {
    pub fn new(inner: ResourceClient<Invoice>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_invoice(&self, params: InvoiceCreate) -> Result<InvoiceId, InvoiceError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Returns the new status and the remaining balance.
    #[instrument(skip(self))]
    pub async fn record_payment(
        &self,
        id: InvoiceId,
        amount: Decimal,
    ) -> Result<(InvoiceStatus, Decimal), InvoiceError> {
        match self.act(id, InvoiceAction::RecordPayment(amount)).await? {
            InvoiceActionResult::RecordPayment { status, balance } => Ok((status, balance)),
            _ => unreachable!("RecordPayment action must return RecordPayment result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn void(&self, id: InvoiceId) -> Result<(), InvoiceError> {
        match self.act(id, InvoiceAction::Void).await? {
            InvoiceActionResult::Void(()) => Ok(()),
            _ => unreachable!("Void action must return Void result"),
        }
    }

    async fn act(&self, id: InvoiceId, action: InvoiceAction) -> Result<InvoiceActionResult, InvoiceError> {
        debug!(?action, "Sending action");
        self.inner.perform_action(id, action).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Invoice> for InvoiceClient {
    type Error = InvoiceError;

    fn inner(&self) -> &ResourceClient<Invoice> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into()
    }
}
