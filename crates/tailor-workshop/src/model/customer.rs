use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ids::CustomerId;
use super::loyalty::LoyaltyAccount;

/// A workshop customer with their body measurements and loyalty account.
///
/// The normalized phone number is the natural key; two customers can never share one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    /// Measurement name (`chest`, `shoulder`, `sleeve`, ...) to centimeters.
    pub measurements: BTreeMap<String, Decimal>,
    pub loyalty: LoyaltyAccount,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub measurements: BTreeMap<String, Decimal>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub measurements: Option<BTreeMap<String, Decimal>>,
}

/// Keeps digits and a leading `+`, dropping spaces and dashes.
pub fn normalize_phone(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut phone: String = trimmed.chars().filter(|c| c.is_ascii_digit()).collect();
    if trimmed.starts_with('+') {
        phone.insert(0, '+');
    }
    phone
}

/// A phone number is usable when it carries at least seven digits.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.chars().filter(|c| c.is_ascii_digit()).count() >= 7
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_kuwaiti_numbers() {
        assert_eq!(normalize_phone(" +965 5555-1234 "), "+96555551234");
        assert_eq!(normalize_phone("9999 0000"), "99990000");
        assert!(is_valid_phone("99990000"));
        assert!(!is_valid_phone("+96"));
    }
}
