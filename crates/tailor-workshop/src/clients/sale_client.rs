//! # Sale Client
use crate::model::{Sale, SaleCreate, SaleId};
use crate::sale_actor::SaleError;
use async_trait::async_trait;
use tracing::{info, instrument};
use workshop_framework::{ActorClient, FrameworkError, ResourceClient};

/// Client for interacting with the Sale actor.
#[derive(Clone)]
pub struct SaleClient {
    inner: ResourceClient<Sale>,
}

impl SaleClient {
    pub fn new(inner: ResourceClient<Sale>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params), fields(lines = params.lines.len(), total = %params.total))]
    pub async fn create_sale(&self, params: SaleCreate) -> Result<SaleId, SaleError> {
        info!("Sending create_sale to actor");
        self.inner.create(params).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Sale> for SaleClient {
    type Error = SaleError;

    fn inner(&self) -> &ResourceClient<Sale> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into()
    }
}
