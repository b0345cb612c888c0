//! Custom actions for the Material actor.
//!
//! Stock movements beyond plain CRUD. These are handled by
//! [`ActorEntity::handle_action`](workshop_framework::ActorEntity::handle_action) on
//! [`Material`](crate::model::Material).

use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub enum MaterialAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
    /// Takes stock out of inventory.
    ///
    /// # Errors
    /// Fails if the requested amount exceeds available stock; stock is left untouched.
    Consume(Decimal),
    /// Puts stock back, from a delivery or a cancelled order.
    Restock(Decimal),
}

/// Results from MaterialActions - variants match 1:1 with MaterialAction
#[derive(Debug, Clone)]
pub enum MaterialActionResult {
    /// Current stock level
    CheckStock(Decimal),
    /// Stock left after consumption
    Consume(Decimal),
    /// Stock after restocking
    Restock(Decimal),
}
