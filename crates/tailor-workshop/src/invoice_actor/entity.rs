//! [`ActorEntity`] implementation for [`Invoice`].

use super::actions::{InvoiceAction, InvoiceActionResult};
use super::error::InvoiceError;
use crate::model::{
    round_money, Invoice, InvoiceCreate, InvoiceId, InvoiceLine, InvoiceSource, InvoiceStatus,
    InvoiceUpdate, Payment,
};
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use workshop_framework::ActorEntity;

fn priced_lines(lines: Vec<InvoiceLine>) -> Result<Vec<InvoiceLine>, InvoiceError> {
    if lines.is_empty() {
        return Err(InvoiceError::ValidationError("an invoice needs at least one line".into()));
    }
    lines
        .into_iter()
        .map(|line| {
            if line.quantity <= Decimal::ZERO || line.unit_price < Decimal::ZERO {
                return Err(InvoiceError::ValidationError(format!(
                    "invalid line {:?}: quantity {} at {}",
                    line.description, line.quantity, line.unit_price
                )));
            }
            let line_total = line.quantity.checked_mul(line.unit_price).ok_or_else(|| {
                InvoiceError::ValidationError(format!("line {:?} is too large to price", line.description))
            })?;
            Ok(InvoiceLine {
                line_total: round_money(line_total),
                ..line
            })
        })
        .collect()
}

/// Paid needs money received, so a zero-total invoice starts Issued.
fn status_for(total: Decimal, paid: Decimal) -> InvoiceStatus {
    if paid > Decimal::ZERO && paid >= total {
        InvoiceStatus::Paid
    } else if paid > Decimal::ZERO {
        InvoiceStatus::PartiallyPaid
    } else {
        InvoiceStatus::Issued
    }
}

#[async_trait]
impl ActorEntity for Invoice {
    type Id = InvoiceId;
    type Create = InvoiceCreate;
    type Update = InvoiceUpdate;
    type Action = InvoiceAction;
    type ActionResult = InvoiceActionResult;
    type Context = ();
    type Error = InvoiceError;

    fn from_create_params(id: InvoiceId, params: InvoiceCreate) -> Result<Self, Self::Error> {
        let lines = priced_lines(params.lines)?;
        let subtotal = lines
            .iter()
            .try_fold(Decimal::ZERO, |sum, line| sum.checked_add(line.line_total))
            .ok_or_else(|| InvoiceError::ValidationError("invoice subtotal is too large".into()))?;
        if params.discount < Decimal::ZERO || params.discount > subtotal {
            return Err(InvoiceError::ValidationError(format!(
                "discount {} must be between 0 and the subtotal {subtotal}",
                params.discount
            )));
        }
        if params.tax < Decimal::ZERO {
            return Err(InvoiceError::ValidationError("tax must not be negative".into()));
        }
        let total = (subtotal - params.discount)
            .checked_add(params.tax)
            .ok_or_else(|| InvoiceError::ValidationError("invoice total is too large".into()))?;
        if params.amount_paid < Decimal::ZERO || params.amount_paid > total {
            return Err(InvoiceError::ValidationError(format!(
                "amount paid {} must be between 0 and the total {total}",
                params.amount_paid
            )));
        }

        // a sale is settled at the register, even when points covered all of it
        let status = match params.source {
            InvoiceSource::Sale(_) if params.amount_paid >= total => InvoiceStatus::Paid,
            _ => status_for(total, params.amount_paid),
        };

        let now = Utc::now();
        let payments = if params.amount_paid > Decimal::ZERO {
            vec![Payment {
                amount: params.amount_paid,
                at: now,
            }]
        } else {
            Vec::new()
        };
        Ok(Self {
            id,
            source: params.source,
            customer_id: params.customer_id,
            lines,
            subtotal,
            discount: params.discount,
            tax: params.tax,
            total,
            amount_paid: params.amount_paid,
            status,
            payments,
            issued_at: now,
            due_date: params.due_date,
        })
    }

    async fn on_update(&mut self, update: InvoiceUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(due_date) = update.due_date {
            self.due_date = Some(due_date);
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: InvoiceAction,
        _ctx: &(),
    ) -> Result<InvoiceActionResult, Self::Error> {
        match action {
            InvoiceAction::RecordPayment(amount) => {
                if !self.is_open() {
                    return Err(InvoiceError::NotPayable(self.status));
                }
                if amount <= Decimal::ZERO {
                    return Err(InvoiceError::InvalidAmount(amount));
                }
                let balance = self.balance();
                if amount > balance {
                    return Err(InvoiceError::Overpayment { amount, balance });
                }
                self.amount_paid += amount;
                self.payments.push(Payment {
                    amount,
                    at: Utc::now(),
                });
                self.status = status_for(self.total, self.amount_paid);
                Ok(InvoiceActionResult::RecordPayment {
                    status: self.status,
                    balance: self.balance(),
                })
            }
            InvoiceAction::Void => {
                if self.status == InvoiceStatus::Void {
                    return Err(InvoiceError::CannotVoid("already void".into()));
                }
                if self.amount_paid > Decimal::ZERO {
                    return Err(InvoiceError::CannotVoid(format!(
                        "{} has already been paid",
                        self.amount_paid
                    )));
                }
                self.status = InvoiceStatus::Void;
                Ok(InvoiceActionResult::Void(()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderId, SaleId};
    use rust_decimal_macros::dec;

    fn order_invoice_params() -> InvoiceCreate {
        InvoiceCreate {
            source: InvoiceSource::Order(OrderId(7)),
            customer_id: None,
            lines: vec![InvoiceLine {
                description: "Dishdasha x2".into(),
                quantity: dec!(2),
                unit_price: dec!(20.000),
                line_total: Decimal::ZERO,
            }],
            discount: Decimal::ZERO,
            tax: Decimal::ZERO,
            amount_paid: Decimal::ZERO,
            due_date: None,
        }
    }

    fn order_invoice() -> Invoice {
        Invoice::from_create_params(InvoiceId(1), order_invoice_params()).unwrap()
    }

    #[tokio::test]
    async fn payments_move_issued_to_paid() {
        let mut invoice = order_invoice();
        assert_eq!(invoice.total, dec!(40.000));
        assert_eq!(invoice.status, InvoiceStatus::Issued);

        invoice.handle_action(InvoiceAction::RecordPayment(dec!(15)), &()).await.unwrap();
        assert_eq!(invoice.status, InvoiceStatus::PartiallyPaid);
        assert_eq!(invoice.balance(), dec!(25));

        let over = invoice.handle_action(InvoiceAction::RecordPayment(dec!(30)), &()).await;
        assert!(matches!(over, Err(InvoiceError::Overpayment { .. })));

        invoice.handle_action(InvoiceAction::RecordPayment(dec!(25)), &()).await.unwrap();
        assert_eq!(invoice.status, InvoiceStatus::Paid);

        let late = invoice.handle_action(InvoiceAction::RecordPayment(dec!(1)), &()).await;
        assert_eq!(late.unwrap_err(), InvoiceError::NotPayable(InvoiceStatus::Paid));
    }

    #[tokio::test]
    async fn void_only_before_payment() {
        let mut invoice = order_invoice();
        invoice.handle_action(InvoiceAction::RecordPayment(dec!(5)), &()).await.unwrap();
        assert!(matches!(
            invoice.handle_action(InvoiceAction::Void, &()).await,
            Err(InvoiceError::CannotVoid(_))
        ));

        let mut fresh = order_invoice();
        fresh.handle_action(InvoiceAction::Void, &()).await.unwrap();
        assert_eq!(fresh.status, InvoiceStatus::Void);
        assert!(!fresh.is_open());
    }

    #[test]
    fn zero_total_status_depends_on_source() {
        let mut free = order_invoice_params();
        free.lines[0].unit_price = Decimal::ZERO;
        let order = Invoice::from_create_params(InvoiceId(1), free.clone()).unwrap();
        assert_eq!(order.total, Decimal::ZERO);
        assert_eq!(order.status, InvoiceStatus::Issued);

        free.source = InvoiceSource::Sale(SaleId(3));
        let sale = Invoice::from_create_params(InvoiceId(2), free).unwrap();
        assert_eq!(sale.status, InvoiceStatus::Paid);
    }

    #[test]
    fn oversized_lines_are_rejected() {
        let mut params = order_invoice_params();
        params.lines[0].unit_price = Decimal::MAX;
        assert!(matches!(
            Invoice::from_create_params(InvoiceId(1), params),
            Err(InvoiceError::ValidationError(_))
        ));
    }
}
