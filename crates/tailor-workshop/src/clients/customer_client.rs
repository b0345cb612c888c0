//! # Customer Client
//!
//! High-level API for the `Customer` actor, including the loyalty ledger.
use crate::customer_actor::{CustomerAction, CustomerActionResult, CustomerError, LoyaltyReceipt};
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerUpdate};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{debug, instrument};
use workshop_framework::{ActorClient, FrameworkError, ResourceClient};

/// Client for interacting with the Customer actor.
#[derive(Clone)]
pub struct CustomerClient {
    inner: ResourceClient<Customer>,
}

impl CustomerClient {
    pub fn new(inner: ResourceClient<Customer>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_customer(&self, params: CustomerCreate) -> Result<CustomerId, CustomerError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_customer(
        &self,
        id: CustomerId,
        update: CustomerUpdate,
    ) -> Result<Customer, CustomerError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn record_measurement(
        &self,
        id: CustomerId,
        name: String,
        value_cm: Decimal,
    ) -> Result<(), CustomerError> {
        match self.act(id, CustomerAction::RecordMeasurement { name, value_cm }).await? {
            CustomerActionResult::RecordMeasurement(()) => Ok(()),
            _ => unreachable!("RecordMeasurement action must return RecordMeasurement result"),
        }
    }

    /// Credits points for a spend of `amount`.
    #[instrument(skip(self))]
    pub async fn earn_points(
        &self,
        id: CustomerId,
        amount: Decimal,
    ) -> Result<LoyaltyReceipt, CustomerError> {
        match self.act(id, CustomerAction::EarnPoints { amount }).await? {
            CustomerActionResult::EarnPoints(receipt) => Ok(receipt),
            _ => unreachable!("EarnPoints action must return EarnPoints result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn redeem_points(
        &self,
        id: CustomerId,
        points: u64,
    ) -> Result<LoyaltyReceipt, CustomerError> {
        match self.act(id, CustomerAction::RedeemPoints { points }).await? {
            CustomerActionResult::RedeemPoints(receipt) => Ok(receipt),
            _ => unreachable!("RedeemPoints action must return RedeemPoints result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn adjust_points(
        &self,
        id: CustomerId,
        delta: i64,
        reason: String,
    ) -> Result<LoyaltyReceipt, CustomerError> {
        match self.act(id, CustomerAction::AdjustPoints { delta, reason }).await? {
            CustomerActionResult::AdjustPoints(receipt) => Ok(receipt),
            _ => unreachable!("AdjustPoints action must return AdjustPoints result"),
        }
    }

    async fn act(
        &self,
        id: CustomerId,
        action: CustomerAction,
    ) -> Result<CustomerActionResult, CustomerError> {
        debug!(?action, "Sending action");
        self.inner.perform_action(id, action).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Customer> for CustomerClient {
    type Error = CustomerError;

    fn inner(&self) -> &ResourceClient<Customer> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LoyaltyTier;
    use rust_decimal_macros::dec;
    use workshop_framework::mock::{create_mock_client, expect_action};

    #[tokio::test]
    async fn test_earn_points_sends_amount() {
        let (client, mut receiver) = create_mock_client::<Customer>(10);
        let customers = CustomerClient::new(client);

        let task = tokio::spawn(async move { customers.earn_points(CustomerId(4), dec!(12.5)).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, CustomerId(4));
        assert!(matches!(action, CustomerAction::EarnPoints { amount } if amount == dec!(12.5)));

        let receipt = LoyaltyReceipt {
            points: 12,
            balance: 12,
            lifetime_points: 12,
            tier: LoyaltyTier::Bronze,
        };
        responder
            .send(Ok(CustomerActionResult::EarnPoints(receipt.clone())))
            .unwrap();

        assert_eq!(task.await.unwrap().unwrap(), receipt);
    }

    #[tokio::test]
    async fn test_hook_errors_come_back_typed() {
        let (client, mut receiver) = create_mock_client::<Customer>(10);
        let customers = CustomerClient::new(client);

        let task = tokio::spawn(async move { customers.redeem_points(CustomerId(1), 90).await });

        let (_, _, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        let short = CustomerError::InsufficientPoints {
            requested: 90,
            available: 10,
        };
        responder
            .send(Err(FrameworkError::EntityError(Box::new(short.clone()))))
            .unwrap();

        assert_eq!(task.await.unwrap().unwrap_err(), short);
    }

    #[tokio::test]
    async fn test_conflict_maps_to_already_exists() {
        let (client, mut receiver) = create_mock_client::<Customer>(10);
        let customers = CustomerClient::new(client);

        let task = tokio::spawn(async move {
            customers
                .create_customer(CustomerCreate {
                    name: "Salem".into(),
                    phone: "55550000".into(),
                    email: None,
                    measurements: Default::default(),
                })
                .await
        });

        let (_, responder) = workshop_framework::mock::expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        responder
            .send(Err(FrameworkError::Conflict("55550000".into())))
            .unwrap();

        assert_eq!(
            task.await.unwrap().unwrap_err(),
            CustomerError::AlreadyExists("55550000".into())
        );
    }
}
