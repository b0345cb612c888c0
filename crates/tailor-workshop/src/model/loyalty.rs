//! Loyalty points and tiers.
//!
//! Points are earned on spend, redeemed at the POS and never expire. The tier is a
//! function of lifetime points only, so redeeming never demotes a customer.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::money::round_money;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoyaltyTier {
    Bronze,
    Silver,
    Gold,
}

impl LoyaltyTier {
    pub const ALL: [LoyaltyTier; 3] = [LoyaltyTier::Bronze, LoyaltyTier::Silver, LoyaltyTier::Gold];
}

/// How spend turns into points and points back into money.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoyaltyPolicy {
    /// Points earned per dinar spent.
    pub points_per_unit: Decimal,
    pub silver_threshold: u64,
    pub gold_threshold: u64,
    /// Dinars one point is worth when redeemed.
    pub redemption_value: Decimal,
}

impl Default for LoyaltyPolicy {
    fn default() -> Self {
        Self {
            points_per_unit: dec!(1),
            silver_threshold: 500,
            gold_threshold: 2000,
            redemption_value: dec!(0.010),
        }
    }
}

impl LoyaltyPolicy {
    /// Whole points earned for `amount`; partial points are dropped. `None` when the
    /// amount is too large to count in points.
    pub fn points_for(&self, amount: Decimal) -> Option<u64> {
        let points = amount.checked_mul(self.points_per_unit)?.floor();
        if points.is_sign_negative() {
            return Some(0);
        }
        points.to_u64()
    }

    pub fn tier_for(&self, lifetime_points: u64) -> LoyaltyTier {
        if lifetime_points >= self.gold_threshold {
            LoyaltyTier::Gold
        } else if lifetime_points >= self.silver_threshold {
            LoyaltyTier::Silver
        } else {
            LoyaltyTier::Bronze
        }
    }

    pub fn redemption_amount(&self, points: u64) -> Decimal {
        round_money(Decimal::from(points) * self.redemption_value)
    }
}

/// Why a balance change was refused. The account is left as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointsError {
    Insufficient { available: u64 },
    Overflow,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoyaltyAccount {
    pub points: u64,
    pub lifetime_points: u64,
    pub tier: LoyaltyTier,
}

impl Default for LoyaltyAccount {
    fn default() -> Self {
        Self {
            points: 0,
            lifetime_points: 0,
            tier: LoyaltyTier::Bronze,
        }
    }
}

impl LoyaltyAccount {
    pub fn earn(&mut self, points: u64, policy: &LoyaltyPolicy) -> Result<(), PointsError> {
        let (Some(balance), Some(lifetime)) = (
            self.points.checked_add(points),
            self.lifetime_points.checked_add(points),
        ) else {
            return Err(PointsError::Overflow);
        };
        self.points = balance;
        self.lifetime_points = lifetime;
        self.tier = policy.tier_for(self.lifetime_points);
        Ok(())
    }

    /// Spends points. A short balance changes nothing.
    pub fn redeem(&mut self, points: u64) -> Result<(), PointsError> {
        if points > self.points {
            return Err(PointsError::Insufficient {
                available: self.points,
            });
        }
        self.points -= points;
        Ok(())
    }

    /// Manual correction. Positive deltas count towards the tier like earned points.
    pub fn adjust(&mut self, delta: i64, policy: &LoyaltyPolicy) -> Result<(), PointsError> {
        if delta >= 0 {
            self.earn(delta.unsigned_abs(), policy)
        } else {
            self.redeem(delta.unsigned_abs())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_are_floored() {
        let policy = LoyaltyPolicy::default();
        assert_eq!(policy.points_for(dec!(45.750)), Some(45));
        assert_eq!(policy.points_for(dec!(0.999)), Some(0));
        assert_eq!(policy.points_for(dec!(-3)), Some(0));
    }

    #[test]
    fn tier_follows_lifetime_points_not_balance() {
        let policy = LoyaltyPolicy::default();
        let mut account = LoyaltyAccount::default();

        account.earn(499, &policy).unwrap();
        assert_eq!(account.tier, LoyaltyTier::Bronze);
        account.earn(1, &policy).unwrap();
        assert_eq!(account.tier, LoyaltyTier::Silver);

        account.redeem(400).unwrap();
        assert_eq!(account.points, 100);
        assert_eq!(account.tier, LoyaltyTier::Silver);

        account.earn(1500, &policy).unwrap();
        assert_eq!(account.tier, LoyaltyTier::Gold);
    }

    #[test]
    fn redeem_cannot_overdraw() {
        let mut account = LoyaltyAccount::default();
        account.earn(30, &LoyaltyPolicy::default()).unwrap();
        assert_eq!(account.redeem(31), Err(PointsError::Insufficient { available: 30 }));
        assert_eq!(account.points, 30);
    }

    #[test]
    fn huge_amounts_do_not_wrap() {
        let policy = LoyaltyPolicy {
            points_per_unit: dec!(2),
            ..LoyaltyPolicy::default()
        };
        assert_eq!(policy.points_for(Decimal::MAX), None);
        assert_eq!(policy.points_for(Decimal::from(u64::MAX)), None);

        let mut account = LoyaltyAccount {
            points: u64::MAX - 5,
            lifetime_points: u64::MAX - 5,
            tier: LoyaltyTier::Gold,
        };
        assert_eq!(account.earn(10, &policy), Err(PointsError::Overflow));
        assert_eq!(account.adjust(10, &policy), Err(PointsError::Overflow));
        assert_eq!(account.points, u64::MAX - 5);
        account.earn(5, &policy).unwrap();
        assert_eq!(account.points, u64::MAX);
    }

    #[test]
    fn redemption_amount_in_fils() {
        let policy = LoyaltyPolicy::default();
        assert_eq!(policy.redemption_amount(250), dec!(2.500));
    }
}
