//! [`ActorEntity`] implementation for [`Material`].
//!
//! Includes the stock movements used by orders and POS sales.

use super::actions::{MaterialAction, MaterialActionResult};
use super::error::MaterialError;
use crate::model::{Material, MaterialCreate, MaterialId, MaterialUpdate};
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::warn;
use workshop_framework::ActorEntity;

fn validated_sku(raw: &str) -> Result<String, MaterialError> {
    let sku = raw.trim().to_uppercase();
    if sku.is_empty() {
        return Err(MaterialError::ValidationError("sku must not be blank".into()));
    }
    Ok(sku)
}

fn validated_name(name: &str) -> Result<String, MaterialError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(MaterialError::ValidationError("name must not be blank".into()));
    }
    Ok(name.to_string())
}

fn non_negative(field: &str, value: Decimal) -> Result<Decimal, MaterialError> {
    if value < Decimal::ZERO {
        return Err(MaterialError::ValidationError(format!(
            "{field} must not be negative, got {value}"
        )));
    }
    Ok(value)
}

fn positive(quantity: Decimal) -> Result<Decimal, MaterialError> {
    if quantity <= Decimal::ZERO {
        return Err(MaterialError::InvalidQuantity(quantity));
    }
    Ok(quantity)
}

#[async_trait]
impl ActorEntity for Material {
    type Id = MaterialId;
    type Create = MaterialCreate;
    type Update = MaterialUpdate;
    type Action = MaterialAction;
    type ActionResult = MaterialActionResult;
    type Context = ();
    type Error = MaterialError;

    fn from_create_params(id: MaterialId, params: MaterialCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            sku: validated_sku(&params.sku)?,
            name: validated_name(&params.name)?,
            category: params.category,
            unit: params.unit,
            quantity: non_negative("quantity", params.quantity)?,
            unit_cost: non_negative("unit cost", params.unit_cost)?,
            retail_price: non_negative("retail price", params.retail_price)?,
            reorder_level: non_negative("reorder level", params.reorder_level)?,
            updated_at: Utc::now(),
        })
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.sku.clone())
    }

    /// Handles updates to the Material entity.
    ///
    /// A direct `quantity` is a stock-take correction; day-to-day movements go through
    /// [`MaterialAction`].
    async fn on_update(&mut self, update: MaterialUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(sku) = update.sku {
            self.sku = validated_sku(&sku)?;
        }
        if let Some(name) = update.name {
            self.name = validated_name(&name)?;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = non_negative("quantity", quantity)?;
        }
        if let Some(cost) = update.unit_cost {
            self.unit_cost = non_negative("unit cost", cost)?;
        }
        if let Some(price) = update.retail_price {
            self.retail_price = non_negative("retail price", price)?;
        }
        if let Some(level) = update.reorder_level {
            self.reorder_level = non_negative("reorder level", level)?;
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: MaterialAction,
        _ctx: &(),
    ) -> Result<MaterialActionResult, Self::Error> {
        match action {
            MaterialAction::CheckStock => Ok(MaterialActionResult::CheckStock(self.quantity)),
            MaterialAction::Consume(quantity) => {
                let quantity = positive(quantity)?;
                if quantity > self.quantity {
                    return Err(MaterialError::InsufficientStock {
                        sku: self.sku.clone(),
                        requested: quantity,
                        available: self.quantity,
                    });
                }
                self.quantity -= quantity;
                self.updated_at = Utc::now();
                if self.is_low_stock() {
                    warn!(sku = %self.sku, quantity = %self.quantity, "Stock at or below reorder level");
                }
                Ok(MaterialActionResult::Consume(self.quantity))
            }
            MaterialAction::Restock(quantity) => {
                self.quantity = self
                    .quantity
                    .checked_add(positive(quantity)?)
                    .ok_or(MaterialError::InvalidQuantity(quantity))?;
                self.updated_at = Utc::now();
                Ok(MaterialActionResult::Restock(self.quantity))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MaterialCategory, StockUnit};
    use rust_decimal_macros::dec;

    fn wool() -> Material {
        Material::from_create_params(
            MaterialId(1),
            MaterialCreate {
                sku: " fab-wool-navy ".into(),
                name: "Navy wool".into(),
                category: MaterialCategory::Fabric,
                unit: StockUnit::Meter,
                quantity: dec!(20),
                unit_cost: dec!(4.500),
                retail_price: dec!(7.000),
                reorder_level: dec!(5),
            },
        )
        .unwrap()
    }

    #[test]
    fn sku_is_upper_cased_key() {
        let material = wool();
        assert_eq!(material.sku, "FAB-WOOL-NAVY");
        assert_eq!(material.unique_key().as_deref(), Some("FAB-WOOL-NAVY"));
        assert_eq!(material.stock_value(), dec!(90.000));
    }

    #[tokio::test]
    async fn consume_fails_without_touching_stock() {
        let mut material = wool();
        let result = material.handle_action(MaterialAction::Consume(dec!(25)), &()).await;
        assert!(matches!(result, Err(MaterialError::InsufficientStock { .. })));
        assert_eq!(material.quantity, dec!(20));

        let left = material.handle_action(MaterialAction::Consume(dec!(15.5)), &()).await.unwrap();
        assert!(matches!(left, MaterialActionResult::Consume(q) if q == dec!(4.5)));
        assert!(material.is_low_stock());
    }

    #[tokio::test]
    async fn movements_must_be_positive() {
        let mut material = wool();
        let result = material.handle_action(MaterialAction::Restock(dec!(0)), &()).await;
        assert_eq!(result.unwrap_err(), MaterialError::InvalidQuantity(dec!(0)));
    }

    #[tokio::test]
    async fn restock_past_the_decimal_range_is_refused() {
        let mut material = wool();
        let result = material.handle_action(MaterialAction::Restock(Decimal::MAX), &()).await;
        assert_eq!(result.unwrap_err(), MaterialError::InvalidQuantity(Decimal::MAX));
        assert_eq!(material.quantity, dec!(20));

        material.unit_cost = Decimal::MAX;
        assert_eq!(material.stock_value(), Decimal::MAX);
    }
}
