//! [`ActorEntity`] implementation for [`Sale`].
//!
//! Creating a sale moves stock and loyalty points in other actors. Stock is taken line by
//! line; if a line or the points redemption fails, everything already taken is put back
//! before the error is returned.

use super::error::SaleError;
use crate::clients::{CustomerClient, MaterialClient};
use crate::customer_actor::CustomerError;
use crate::material_actor::MaterialError;
use crate::model::{
    round_money, CustomerId, MaterialId, PaymentMethod, Sale, SaleCreate, SaleId, SaleUpdate,
};
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, warn};
use workshop_framework::{ActorClient, ActorEntity};

/// Clients the sale actor calls while a sale is created.
pub type SaleContext = (MaterialClient, CustomerClient);

/// Sales take no actions once stored.
#[derive(Debug, Clone)]
pub enum SaleAction {}

fn material_error(e: MaterialError) -> SaleError {
    match e {
        MaterialError::NotFound(id) => SaleError::InvalidMaterial(id),
        e @ MaterialError::InsufficientStock { .. } => SaleError::InsufficientStock(e.to_string()),
        other => SaleError::ActorCommunicationError(other.to_string()),
    }
}

fn customer_error(id: CustomerId, e: CustomerError) -> SaleError {
    match e {
        CustomerError::NotFound(_) => SaleError::InvalidCustomer(id.to_string()),
        CustomerError::InsufficientPoints { requested, available } => {
            SaleError::InsufficientPoints { requested, available }
        }
        other => SaleError::ActorCommunicationError(other.to_string()),
    }
}

async fn put_back(materials: &MaterialClient, taken: &[(MaterialId, Decimal)]) {
    for (material_id, quantity) in taken {
        if let Err(e) = materials.restock(*material_id, *quantity).await {
            warn!(%material_id, %quantity, error = %e, "Could not return stock");
        }
    }
}

#[async_trait]
impl ActorEntity for Sale {
    type Id = SaleId;
    type Create = SaleCreate;
    type Update = SaleUpdate;
    type Action = SaleAction;
    type ActionResult = ();
    type Context = SaleContext;
    type Error = SaleError;

    fn from_create_params(id: SaleId, params: SaleCreate) -> Result<Self, Self::Error> {
        if params.lines.is_empty() {
            return Err(SaleError::EmptySale);
        }
        if let Some(line) = params
            .lines
            .iter()
            .find(|line| line.quantity <= Decimal::ZERO || line.unit_price < Decimal::ZERO)
        {
            return Err(SaleError::ValidationError(format!(
                "invalid line {}: quantity {} at {}",
                line.sku, line.quantity, line.unit_price
            )));
        }
        if params.points_redeemed > 0 && params.customer_id.is_none() {
            return Err(SaleError::ValidationError(
                "redeeming points needs a customer".into(),
            ));
        }
        if params.total < Decimal::ZERO {
            return Err(SaleError::ValidationError(format!(
                "total must not be negative, got {}",
                params.total
            )));
        }

        let (tendered, change) = match params.payment_method {
            PaymentMethod::Cash if params.tendered < params.total => {
                return Err(SaleError::InsufficientTender {
                    total: params.total,
                    tendered: params.tendered,
                });
            }
            PaymentMethod::Cash => (params.tendered, round_money(params.tendered - params.total)),
            PaymentMethod::Card | PaymentMethod::Knet => (params.total, Decimal::ZERO),
        };

        Ok(Self {
            id,
            customer_id: params.customer_id,
            lines: params.lines,
            subtotal: params.subtotal,
            discount: params.discount,
            points_redeemed: params.points_redeemed,
            redemption_value: params.redemption_value,
            tax: params.tax,
            total: params.total,
            payment_method: params.payment_method,
            tendered,
            change,
            points_earned: 0,
            created_at: Utc::now(),
        })
    }

    async fn on_create(&mut self, ctx: &SaleContext) -> Result<(), Self::Error> {
        let (materials, customers) = ctx;

        if let Some(customer_id) = self.customer_id {
            customers
                .get(customer_id)
                .await
                .map_err(|e| customer_error(customer_id, e))?
                .ok_or_else(|| SaleError::InvalidCustomer(customer_id.to_string()))?;
        }

        let mut taken = Vec::with_capacity(self.lines.len());
        for line in &self.lines {
            debug!(sku = %line.sku, quantity = %line.quantity, "Taking stock");
            if let Err(e) = materials.consume(line.material_id, line.quantity).await {
                put_back(materials, &taken).await;
                return Err(material_error(e));
            }
            taken.push((line.material_id, line.quantity));
        }

        let Some(customer_id) = self.customer_id else {
            return Ok(());
        };
        if self.points_redeemed > 0 {
            if let Err(e) = customers.redeem_points(customer_id, self.points_redeemed).await {
                put_back(materials, &taken).await;
                return Err(customer_error(customer_id, e));
            }
        }
        match customers.earn_points(customer_id, self.total).await {
            Ok(receipt) => self.points_earned = receipt.points,
            Err(e) => warn!(%customer_id, error = %e, "Loyalty points not credited for sale"),
        }
        Ok(())
    }

    async fn on_update(&mut self, _update: SaleUpdate, _ctx: &SaleContext) -> Result<(), Self::Error> {
        Err(SaleError::Immutable)
    }

    async fn on_delete(&self, _ctx: &SaleContext) -> Result<(), Self::Error> {
        Err(SaleError::Immutable)
    }

    async fn handle_action(&mut self, action: SaleAction, _ctx: &SaleContext) -> Result<(), Self::Error> {
        match action {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SaleLine;
    use rust_decimal_macros::dec;

    fn params(method: PaymentMethod, tendered: Decimal) -> SaleCreate {
        SaleCreate {
            customer_id: None,
            lines: vec![SaleLine {
                material_id: MaterialId(1),
                sku: "ACC-CUFF-GOLD".into(),
                name: "Gold cufflinks".into(),
                quantity: dec!(1),
                unit_price: dec!(12.000),
                line_total: dec!(12.000),
            }],
            subtotal: dec!(12.000),
            discount: dec!(0),
            points_redeemed: 0,
            redemption_value: dec!(0),
            tax: dec!(0),
            total: dec!(12.000),
            payment_method: method,
            tendered,
        }
    }

    #[test]
    fn cash_sales_compute_change() {
        let sale = Sale::from_create_params(SaleId(1), params(PaymentMethod::Cash, dec!(20))).unwrap();
        assert_eq!(sale.change, dec!(8.000));
    }

    #[test]
    fn short_cash_is_rejected_and_card_tenders_total() {
        let short = Sale::from_create_params(SaleId(1), params(PaymentMethod::Cash, dec!(10)));
        assert!(matches!(short, Err(SaleError::InsufficientTender { .. })));

        let card = Sale::from_create_params(SaleId(1), params(PaymentMethod::Knet, dec!(0))).unwrap();
        assert_eq!(card.tendered, dec!(12.000));
        assert_eq!(card.change, dec!(0));
    }

    #[test]
    fn redemption_requires_customer() {
        let mut p = params(PaymentMethod::Card, dec!(0));
        p.points_redeemed = 100;
        assert!(matches!(
            Sale::from_create_params(SaleId(1), p),
            Err(SaleError::ValidationError(_))
        ));
    }
}
