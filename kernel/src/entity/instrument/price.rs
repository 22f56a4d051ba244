use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entity::RentalMonths;

/// Flat rate per whole rental month.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPrice(Decimal);

impl MonthlyPrice {
    pub fn new(price: impl Into<Decimal>) -> Self {
        Self(price.into())
    }

    /// Total for a rental: monthly rate times the number of whole months.
    pub fn total_for(&self, months: &RentalMonths) -> RentalPrice {
        RentalPrice::new(self.0 * Decimal::from(*months.as_ref()))
    }
}

impl AsRef<Decimal> for MonthlyPrice {
    fn as_ref(&self) -> &Decimal {
        &self.0
    }
}

impl From<MonthlyPrice> for Decimal {
    fn from(price: MonthlyPrice) -> Self {
        price.0
    }
}

/// Price of one rental over its whole period.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct RentalPrice(Decimal);

impl RentalPrice {
    pub fn new(price: impl Into<Decimal>) -> Self {
        Self(price.into())
    }
}

impl AsRef<Decimal> for RentalPrice {
    fn as_ref(&self) -> &Decimal {
        &self.0
    }
}

impl From<RentalPrice> for Decimal {
    fn from(price: RentalPrice) -> Self {
        price.0
    }
}
