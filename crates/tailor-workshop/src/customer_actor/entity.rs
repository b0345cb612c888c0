//! [`ActorEntity`] implementation for [`Customer`].
//!
//! The loyalty policy is the actor's context, so earning rates and tier thresholds come
//! from configuration rather than from the stored records.

use super::actions::{CustomerAction, CustomerActionResult, LoyaltyReceipt};
use super::error::CustomerError;
use crate::model::{
    is_valid_phone, normalize_phone, Customer, CustomerCreate, CustomerId, CustomerUpdate,
    LoyaltyAccount, LoyaltyPolicy, PointsError,
};
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::info;
use workshop_framework::ActorEntity;

fn validated_name(name: &str) -> Result<String, CustomerError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CustomerError::ValidationError("name must not be blank".into()));
    }
    Ok(name.to_string())
}

fn validated_phone(raw: &str) -> Result<String, CustomerError> {
    let phone = normalize_phone(raw);
    if !is_valid_phone(&phone) {
        return Err(CustomerError::ValidationError(format!("invalid phone number: {raw}")));
    }
    Ok(phone)
}

fn validated_email(raw: &str) -> Result<String, CustomerError> {
    let email = raw.trim().to_lowercase();
    if !email.contains('@') {
        return Err(CustomerError::ValidationError(format!("invalid email: {raw}")));
    }
    Ok(email)
}

fn validated_measurement(name: &str, value_cm: Decimal) -> Result<(), CustomerError> {
    if name.trim().is_empty() {
        return Err(CustomerError::ValidationError("measurement name must not be blank".into()));
    }
    if value_cm <= Decimal::ZERO {
        return Err(CustomerError::ValidationError(format!(
            "measurement {name} must be positive, got {value_cm}"
        )));
    }
    Ok(())
}

fn validated_measurements(
    measurements: BTreeMap<String, Decimal>,
) -> Result<BTreeMap<String, Decimal>, CustomerError> {
    measurements
        .into_iter()
        .map(|(name, value)| {
            validated_measurement(&name, value)?;
            Ok::<_, CustomerError>((name.trim().to_lowercase(), value))
        })
        .collect()
}

fn points_error(e: PointsError, requested: u64) -> CustomerError {
    match e {
        PointsError::Insufficient { available } => {
            CustomerError::InsufficientPoints { requested, available }
        }
        PointsError::Overflow => {
            CustomerError::ValidationError(format!("{requested} points would overflow the balance"))
        }
    }
}

impl Customer {
    fn receipt(&self, points: u64) -> LoyaltyReceipt {
        LoyaltyReceipt {
            points,
            balance: self.loyalty.points,
            lifetime_points: self.loyalty.lifetime_points,
            tier: self.loyalty.tier,
        }
    }
}

#[async_trait]
impl ActorEntity for Customer {
    type Id = CustomerId;
    type Create = CustomerCreate;
    type Update = CustomerUpdate;
    type Action = CustomerAction;
    type ActionResult = CustomerActionResult;
    type Context = LoyaltyPolicy;
    type Error = CustomerError;

    fn from_create_params(id: CustomerId, params: CustomerCreate) -> Result<Self, Self::Error> {
        let now = Utc::now();
        Ok(Self {
            id,
            name: validated_name(&params.name)?,
            phone: validated_phone(&params.phone)?,
            email: params.email.as_deref().map(validated_email).transpose()?,
            measurements: validated_measurements(params.measurements)?,
            loyalty: LoyaltyAccount::default(),
            created_at: now,
            updated_at: now,
        })
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.phone.clone())
    }

    async fn on_update(
        &mut self,
        update: CustomerUpdate,
        _ctx: &LoyaltyPolicy,
    ) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = validated_name(&name)?;
        }
        if let Some(phone) = update.phone {
            self.phone = validated_phone(&phone)?;
        }
        if let Some(email) = update.email {
            self.email = Some(validated_email(&email)?);
        }
        if let Some(measurements) = update.measurements {
            self.measurements = validated_measurements(measurements)?;
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CustomerAction,
        policy: &LoyaltyPolicy,
    ) -> Result<CustomerActionResult, Self::Error> {
        let result = match action {
            CustomerAction::RecordMeasurement { name, value_cm } => {
                validated_measurement(&name, value_cm)?;
                self.measurements.insert(name.trim().to_lowercase(), value_cm);
                CustomerActionResult::RecordMeasurement(())
            }
            CustomerAction::EarnPoints { amount } => {
                if amount < Decimal::ZERO {
                    return Err(CustomerError::ValidationError(format!(
                        "cannot earn points on a negative amount: {amount}"
                    )));
                }
                let points = policy.points_for(amount).ok_or_else(|| {
                    CustomerError::ValidationError(format!("amount {amount} is too large to earn points on"))
                })?;
                let before = self.loyalty.tier;
                self.loyalty
                    .earn(points, policy)
                    .map_err(|e| points_error(e, points))?;
                if self.loyalty.tier != before {
                    info!(customer_id = %self.id, tier = ?self.loyalty.tier, "Loyalty tier changed");
                }
                CustomerActionResult::EarnPoints(self.receipt(points))
            }
            CustomerAction::RedeemPoints { points } => {
                if points == 0 {
                    return Err(CustomerError::ValidationError("redeem at least one point".into()));
                }
                self.loyalty.redeem(points).map_err(|e| points_error(e, points))?;
                CustomerActionResult::RedeemPoints(self.receipt(points))
            }
            CustomerAction::AdjustPoints { delta, reason } => {
                if reason.trim().is_empty() {
                    return Err(CustomerError::ValidationError(
                        "a points adjustment needs a reason".into(),
                    ));
                }
                self.loyalty
                    .adjust(delta, policy)
                    .map_err(|e| points_error(e, delta.unsigned_abs()))?;
                info!(customer_id = %self.id, delta, %reason, "Loyalty points adjusted");
                CustomerActionResult::AdjustPoints(self.receipt(delta.unsigned_abs()))
            }
        };
        self.updated_at = Utc::now();
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LoyaltyTier;
    use rust_decimal_macros::dec;

    fn create(phone: &str) -> CustomerCreate {
        CustomerCreate {
            name: "  Yousef Al-Mutairi ".into(),
            phone: phone.into(),
            email: Some("Yousef@Example.com".into()),
            measurements: BTreeMap::from([("Chest".to_string(), dec!(104.5))]),
        }
    }

    #[test]
    fn create_normalizes_fields() {
        let customer = Customer::from_create_params(CustomerId(1), create("+965 6000 1111")).unwrap();
        assert_eq!(customer.name, "Yousef Al-Mutairi");
        assert_eq!(customer.phone, "+96560001111");
        assert_eq!(customer.email.as_deref(), Some("yousef@example.com"));
        assert_eq!(customer.measurements.get("chest"), Some(&dec!(104.5)));
        assert_eq!(customer.unique_key().as_deref(), Some("+96560001111"));
    }

    #[test]
    fn create_rejects_bad_input() {
        let bad_phone = Customer::from_create_params(CustomerId(1), create("12"));
        assert!(matches!(bad_phone, Err(CustomerError::ValidationError(_))));

        let mut params = create("60001111");
        params.measurements.insert("sleeve".into(), dec!(0));
        assert!(matches!(
            Customer::from_create_params(CustomerId(1), params),
            Err(CustomerError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn loyalty_actions_track_balance_and_tier() {
        let policy = LoyaltyPolicy::default();
        let mut customer = Customer::from_create_params(CustomerId(1), create("60001111")).unwrap();

        let earned = customer
            .handle_action(CustomerAction::EarnPoints { amount: dec!(520.750) }, &policy)
            .await
            .unwrap();
        let CustomerActionResult::EarnPoints(receipt) = earned else {
            panic!("expected EarnPoints result");
        };
        assert_eq!(receipt.points, 520);
        assert_eq!(receipt.tier, LoyaltyTier::Silver);

        let short = customer
            .handle_action(CustomerAction::RedeemPoints { points: 600 }, &policy)
            .await;
        assert_eq!(
            short.unwrap_err(),
            CustomerError::InsufficientPoints {
                requested: 600,
                available: 520
            }
        );

        customer
            .handle_action(
                CustomerAction::AdjustPoints {
                    delta: -20,
                    reason: "goodwill reversal".into(),
                },
                &policy,
            )
            .await
            .unwrap();
        assert_eq!(customer.loyalty.points, 500);
        assert_eq!(customer.loyalty.lifetime_points, 520);
    }

    #[tokio::test]
    async fn earning_on_a_huge_amount_is_rejected() {
        let policy = LoyaltyPolicy::default();
        let mut customer = Customer::from_create_params(CustomerId(1), create("60001111")).unwrap();

        let huge = customer
            .handle_action(CustomerAction::EarnPoints { amount: Decimal::MAX }, &policy)
            .await;
        assert!(matches!(huge, Err(CustomerError::ValidationError(_))));

        customer.loyalty.points = u64::MAX - 1;
        customer.loyalty.lifetime_points = u64::MAX - 1;
        let overflow = customer
            .handle_action(CustomerAction::EarnPoints { amount: dec!(10) }, &policy)
            .await;
        assert!(matches!(overflow, Err(CustomerError::ValidationError(_))));
        assert_eq!(customer.loyalty.points, u64::MAX - 1);
    }
}
