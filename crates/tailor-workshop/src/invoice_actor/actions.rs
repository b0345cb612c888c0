use crate::model::InvoiceStatus;
use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub enum InvoiceAction {
    /// Positive and not above the outstanding balance.
    RecordPayment(Decimal),
    /// Only while nothing has been paid.
    Void,
}

/// Results from InvoiceActions - variants match 1:1 with InvoiceAction
#[derive(Debug, Clone)]
pub enum InvoiceActionResult {
    /// Status and remaining balance after the payment
    RecordPayment { status: InvoiceStatus, balance: Decimal },
    Void(()),
}
