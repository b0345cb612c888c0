//! The POS cart: a pure state machine over line items, a discount, a loyalty redemption
//! and the resulting totals. It talks to no actor; callers load materials and customers
//! and the finished cart becomes a [`SaleCreate`].
//!
//! Totals, in order:
//!
//! ```text
//! subtotal   = sum of line totals
//! discount   = percent of subtotal or a fixed amount, capped at subtotal
//! redemption = whole points that fit in subtotal - discount, x redemption value
//! tax        = (subtotal - discount - redemption) x tax rate, rounded to fils
//! total      = subtotal - discount - redemption + tax
//! ```
//!
//! Points that would push the redemption past the payable amount stay with the customer.

use crate::model::{
    round_money, Customer, CustomerId, LoyaltyPolicy, Material, MaterialId, PaymentMethod,
    SaleCreate, SaleLine,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Quantity must be positive, got {0}")]
    InvalidQuantity(Decimal),

    #[error("Not enough {sku} in stock: wanted {wanted}, available {available}")]
    InsufficientStock {
        sku: String,
        wanted: Decimal,
        available: Decimal,
    },

    #[error("{0} is not in the cart")]
    ItemNotInCart(MaterialId),

    #[error("Discount of {percent}% exceeds the {max}% limit")]
    DiscountTooLarge { percent: Decimal, max: Decimal },

    #[error("Invalid discount: {0}")]
    InvalidDiscount(Decimal),

    #[error("Redeeming points needs a customer on the cart")]
    NoCustomer,

    #[error("Insufficient loyalty points: requested {requested}, available {available}")]
    InsufficientPoints { requested: u64, available: u64 },

    #[error("Cart is empty")]
    EmptyCart,

    #[error("Cash tendered {tendered} is below the total {total}")]
    InsufficientTender { total: Decimal, tendered: Decimal },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum Discount {
    Percent(Decimal),
    Fixed(Decimal),
}

/// Register settings the cart needs from configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSettings {
    pub tax_rate: Decimal,
    pub max_discount_percent: Decimal,
    pub loyalty: LoyaltyPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
    pub material_id: MaterialId,
    pub sku: String,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: Decimal,
    /// Stock on hand when the line was last touched.
    #[serde(skip)]
    available: Decimal,
}

impl CartLine {
    pub fn line_total(&self) -> Decimal {
        round_money(self.unit_price * self.quantity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CartTotals {
    pub subtotal: Decimal,
    pub discount: Decimal,
    /// Points actually spent; at most the points asked for.
    pub points_redeemed: u64,
    pub redemption: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct CartCustomer {
    id: CustomerId,
    points_available: u64,
}

#[derive(Debug, Clone)]
pub struct Cart {
    settings: CartSettings,
    lines: Vec<CartLine>,
    customer: Option<CartCustomer>,
    discount: Option<Discount>,
    points_to_redeem: u64,
}

fn positive(quantity: Decimal) -> Result<Decimal, CartError> {
    if quantity <= Decimal::ZERO {
        return Err(CartError::InvalidQuantity(quantity));
    }
    Ok(quantity)
}

impl Cart {
    pub fn new(settings: CartSettings) -> Self {
        Self {
            settings,
            lines: Vec::new(),
            customer: None,
            discount: None,
            points_to_redeem: 0,
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn customer_id(&self) -> Option<CustomerId> {
        self.customer.map(|c| c.id)
    }

    /// Adds `quantity` of `material` at its retail price, merging with an existing line.
    pub fn add_item(&mut self, material: &Material, quantity: Decimal) -> Result<(), CartError> {
        let quantity = positive(quantity)?;
        let in_cart = self
            .lines
            .iter()
            .find(|line| line.material_id == material.id)
            .map_or(Decimal::ZERO, |line| line.quantity);
        let wanted = in_cart + quantity;
        if wanted > material.quantity {
            return Err(CartError::InsufficientStock {
                sku: material.sku.clone(),
                wanted,
                available: material.quantity,
            });
        }

        match self.lines.iter_mut().find(|line| line.material_id == material.id) {
            Some(line) => {
                line.quantity = wanted;
                line.unit_price = material.retail_price;
                line.available = material.quantity;
            }
            None => self.lines.push(CartLine {
                material_id: material.id,
                sku: material.sku.clone(),
                name: material.name.clone(),
                unit_price: material.retail_price,
                quantity,
                available: material.quantity,
            }),
        }
        Ok(())
    }

    /// Sets a line's quantity; zero removes the line.
    pub fn update_quantity(&mut self, material_id: MaterialId, quantity: Decimal) -> Result<(), CartError> {
        if quantity.is_zero() {
            return self.remove_item(material_id);
        }
        let quantity = positive(quantity)?;
        let line = self
            .lines
            .iter_mut()
            .find(|line| line.material_id == material_id)
            .ok_or(CartError::ItemNotInCart(material_id))?;
        if quantity > line.available {
            return Err(CartError::InsufficientStock {
                sku: line.sku.clone(),
                wanted: quantity,
                available: line.available,
            });
        }
        line.quantity = quantity;
        Ok(())
    }

    pub fn remove_item(&mut self, material_id: MaterialId) -> Result<(), CartError> {
        let before = self.lines.len();
        self.lines.retain(|line| line.material_id != material_id);
        if self.lines.len() == before {
            return Err(CartError::ItemNotInCart(material_id));
        }
        Ok(())
    }

    /// Attaches a customer. A pending redemption larger than their balance is dropped.
    pub fn set_customer(&mut self, customer: &Customer) {
        self.customer = Some(CartCustomer {
            id: customer.id,
            points_available: customer.loyalty.points,
        });
        if self.points_to_redeem > customer.loyalty.points {
            self.points_to_redeem = 0;
        }
    }

    pub fn clear_customer(&mut self) {
        self.customer = None;
        self.points_to_redeem = 0;
    }

    pub fn apply_discount(&mut self, discount: Discount) -> Result<(), CartError> {
        match discount {
            Discount::Percent(percent) if percent < Decimal::ZERO => {
                return Err(CartError::InvalidDiscount(percent));
            }
            Discount::Percent(percent) if percent > self.settings.max_discount_percent => {
                return Err(CartError::DiscountTooLarge {
                    percent,
                    max: self.settings.max_discount_percent,
                });
            }
            Discount::Fixed(amount) if amount < Decimal::ZERO => {
                return Err(CartError::InvalidDiscount(amount));
            }
            _ => {}
        }
        self.discount = Some(discount);
        Ok(())
    }

    pub fn clear_discount(&mut self) {
        self.discount = None;
    }

    /// Marks points to spend at checkout. Zero cancels a pending redemption.
    pub fn redeem_points(&mut self, points: u64) -> Result<(), CartError> {
        let customer = self.customer.ok_or(CartError::NoCustomer)?;
        if points > customer.points_available {
            return Err(CartError::InsufficientPoints {
                requested: points,
                available: customer.points_available,
            });
        }
        self.points_to_redeem = points;
        Ok(())
    }

    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    fn redemption(&self, payable: Decimal) -> (u64, Decimal) {
        let loyalty = &self.settings.loyalty;
        if self.points_to_redeem == 0 || loyalty.redemption_value <= Decimal::ZERO {
            return (0, Decimal::ZERO);
        }
        let affordable = payable
            .checked_div(loyalty.redemption_value)
            .and_then(|points| points.floor().to_u64())
            .unwrap_or(u64::MAX);
        let points = self.points_to_redeem.min(affordable);
        (points, loyalty.redemption_amount(points))
    }

    pub fn totals(&self) -> CartTotals {
        let subtotal = self.subtotal();
        let discount = match self.discount {
            Some(Discount::Percent(percent)) => round_money(subtotal * percent / dec!(100)),
            Some(Discount::Fixed(amount)) => amount,
            None => Decimal::ZERO,
        }
        .min(subtotal);
        let (points_redeemed, redemption) = self.redemption(subtotal - discount);
        let taxable = subtotal - discount - redemption;
        let tax = round_money(taxable * self.settings.tax_rate);
        CartTotals {
            subtotal,
            discount,
            points_redeemed,
            redemption,
            tax,
            total: taxable + tax,
        }
    }

    /// Prices the cart into a sale. `tendered` only matters for cash.
    pub fn checkout(&self, payment_method: PaymentMethod, tendered: Decimal) -> Result<SaleCreate, CartError> {
        if self.lines.is_empty() {
            return Err(CartError::EmptyCart);
        }
        if self.points_to_redeem > 0 && self.customer.is_none() {
            return Err(CartError::NoCustomer);
        }
        let totals = self.totals();
        if payment_method == PaymentMethod::Cash && tendered < totals.total {
            return Err(CartError::InsufficientTender {
                total: totals.total,
                tendered,
            });
        }

        Ok(SaleCreate {
            customer_id: self.customer_id(),
            lines: self
                .lines
                .iter()
                .map(|line| SaleLine {
                    material_id: line.material_id,
                    sku: line.sku.clone(),
                    name: line.name.clone(),
                    quantity: line.quantity,
                    unit_price: line.unit_price,
                    line_total: line.line_total(),
                })
                .collect(),
            subtotal: totals.subtotal,
            discount: totals.discount,
            points_redeemed: totals.points_redeemed,
            redemption_value: totals.redemption,
            tax: totals.tax,
            total: totals.total,
            payment_method,
            tendered: if payment_method == PaymentMethod::Cash {
                tendered
            } else {
                totals.total
            },
        })
    }
}
