//! # Material Client
//!
//! Provides a high-level API for the `Material` actor. Stock movements are exposed as
//! plain methods so callers never match on [`MaterialActionResult`] themselves.
use crate::material_actor::{MaterialAction, MaterialActionResult, MaterialError};
use crate::model::{Material, MaterialCreate, MaterialId, MaterialUpdate};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{debug, instrument};
use workshop_framework::{ActorClient, FrameworkError, ResourceClient};

/// Client for interacting with the Material actor.
#[derive(Clone)]
pub struct MaterialClient {
    inner: ResourceClient<Material>,
}

#[async_trait]
impl ActorClient<Material> for MaterialClient {
    type Error = MaterialError;

    fn inner(&self) -> &ResourceClient<Material> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into()
    }
}

impl MaterialClient {
    pub fn new(inner: ResourceClient<Material>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_material(&self, params: MaterialCreate) -> Result<MaterialId, MaterialError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_material(
        &self,
        id: MaterialId,
        update: MaterialUpdate,
    ) -> Result<Material, MaterialError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Check the current stock level for a material.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: MaterialId) -> Result<Decimal, MaterialError> {
        debug!("Checking stock for material {}", id);
        match self.inner.perform_action(id, MaterialAction::CheckStock).await {
            Ok(MaterialActionResult::CheckStock(level)) => Ok(level),
            Ok(_) => unreachable!("CheckStock action must return CheckStock result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Take stock out; returns what is left.
    #[instrument(skip(self))]
    pub async fn consume(&self, id: MaterialId, quantity: Decimal) -> Result<Decimal, MaterialError> {
        debug!("Consuming {} of material {}", quantity, id);
        match self.inner.perform_action(id, MaterialAction::Consume(quantity)).await {
            Ok(MaterialActionResult::Consume(left)) => Ok(left),
            Ok(_) => unreachable!("Consume action must return Consume result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    #[instrument(skip(self))]
    pub async fn restock(&self, id: MaterialId, quantity: Decimal) -> Result<Decimal, MaterialError> {
        debug!("Restocking {} of material {}", quantity, id);
        match self.inner.perform_action(id, MaterialAction::Restock(quantity)).await {
            Ok(MaterialActionResult::Restock(level)) => Ok(level),
            Ok(_) => unreachable!("Restock action must return Restock result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use workshop_framework::mock::{create_mock_client, expect_action};

    #[tokio::test]
    async fn test_check_stock_returns_correct_level() {
        let (client, mut receiver) = create_mock_client::<Material>(10);
        let material_client = MaterialClient::new(client);

        let check_task = tokio::spawn(async move { material_client.check_stock(MaterialId(1)).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, MaterialId(1));
        assert!(matches!(action, MaterialAction::CheckStock));

        responder
            .send(Ok(MaterialActionResult::CheckStock(dec!(42.5))))
            .unwrap();

        assert_eq!(check_task.await.unwrap().unwrap(), dec!(42.5));
    }

    #[tokio::test]
    async fn test_consume_insufficient_stock() {
        let (client, mut receiver) = create_mock_client::<Material>(10);
        let material_client = MaterialClient::new(client);

        let consume_task =
            tokio::spawn(async move { material_client.consume(MaterialId(1), dec!(100)).await });

        let (_, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        match action {
            MaterialAction::Consume(amount) => assert_eq!(amount, dec!(100)),
            _ => panic!("Expected Consume action"),
        }

        let short = MaterialError::InsufficientStock {
            sku: "FAB-1".into(),
            requested: dec!(100),
            available: dec!(3),
        };
        responder
            .send(Err(FrameworkError::EntityError(Box::new(short.clone()))))
            .unwrap();

        assert_eq!(consume_task.await.unwrap().unwrap_err(), short);
    }

    #[tokio::test]
    async fn test_closed_channel_is_communication_error() {
        let (client, receiver) = create_mock_client::<Material>(1);
        drop(receiver);
        let result = MaterialClient::new(client).restock(MaterialId(1), dec!(1)).await;
        assert!(matches!(result, Err(MaterialError::ActorCommunicationError(_))));
    }
}
