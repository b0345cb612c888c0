use crate::customer_actor::CustomerError;
use crate::lifecycle::WorkshopSystem;
use crate::material_actor::MaterialError;
use crate::model::{CustomerId, InvoiceId, MaterialId, PaymentMethod, Sale};
use crate::pos::{CartError, Discount};
use crate::sale_actor::SaleError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, instrument};
use workshop_framework::ActorClient;

#[derive(Debug, Clone, Deserialize)]
pub struct SaleItemRequest {
    pub material_id: MaterialId,
    pub quantity: Decimal,
}

/// A checkout as sent by the register. Prices are looked up, never taken from here.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSaleRequest {
    #[serde(default)]
    pub customer_id: Option<CustomerId>,
    pub items: Vec<SaleItemRequest>,
    #[serde(default)]
    pub discount: Option<Discount>,
    #[serde(default)]
    pub redeem_points: Option<u64>,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub tendered: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SaleReceipt {
    pub sale: Sale,
    pub invoice_id: InvoiceId,
}

#[derive(Debug, Error)]
pub enum PosError {
    #[error(transparent)]
    Cart(#[from] CartError),

    #[error("Unknown material: {0}")]
    UnknownMaterial(MaterialId),

    #[error("Unknown customer: {0}")]
    UnknownCustomer(CustomerId),

    #[error(transparent)]
    Material(#[from] MaterialError),

    #[error(transparent)]
    Customer(#[from] CustomerError),

    #[error(transparent)]
    Sale(#[from] SaleError),
}

/// Prices a checkout request against the current catalog and completes the sale.
///
/// Without an explicit tender the payment is taken to be the exact total.
#[instrument(skip(system, request), fields(items = request.items.len()))]
pub async fn ring_up(
    system: &WorkshopSystem,
    request: CreateSaleRequest,
) -> Result<SaleReceipt, PosError> {
    let mut cart = system.cart();

    for item in &request.items {
        let material = system
            .material_client
            .get(item.material_id)
            .await?
            .ok_or(PosError::UnknownMaterial(item.material_id))?;
        cart.add_item(&material, item.quantity)?;
    }

    if let Some(customer_id) = request.customer_id {
        let customer = system
            .customer_client
            .get(customer_id)
            .await?
            .ok_or(PosError::UnknownCustomer(customer_id))?;
        cart.set_customer(&customer);
    }
    if let Some(discount) = request.discount {
        cart.apply_discount(discount)?;
    }
    if let Some(points) = request.redeem_points.filter(|points| *points > 0) {
        cart.redeem_points(points)?;
    }

    let tendered = request.tendered.unwrap_or_else(|| cart.totals().total);
    let params = cart.checkout(request.payment_method, tendered)?;
    let (sale, invoice_id) = system.create_sale(params).await?;

    info!(sale_id = %sale.id, %invoice_id, total = %sale.total, "Rang up sale");
    Ok(SaleReceipt { sale, invoice_id })
}
