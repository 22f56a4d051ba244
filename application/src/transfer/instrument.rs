use rust_decimal::Decimal;
use serde::Serialize;
use time::Date;

use kernel::prelude::entity::RentalInstrument;

#[derive(Debug, Clone)]
pub struct ListAvailableDto {
    pub start: Date,
    pub end: Date,
    pub kind: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RentalInstrumentDto {
    pub id: i32,
    pub name: String,
    pub model: String,
    pub category: String,
    pub monthly_price: Decimal,
    pub months: i32,
    pub total_price: Decimal,
}

impl From<RentalInstrument> for RentalInstrumentDto {
    fn from(value: RentalInstrument) -> Self {
        Self {
            id: *value.id().as_ref(),
            name: value.name().as_ref().to_owned(),
            model: value.model().as_ref().to_owned(),
            category: value.category().as_ref().to_owned(),
            monthly_price: *value.monthly_price().as_ref(),
            months: *value.months().as_ref(),
            total_price: *value.total_price().as_ref(),
        }
    }
}
