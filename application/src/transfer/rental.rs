use rust_decimal::Decimal;
use serde::Serialize;
use time::{Date, OffsetDateTime};

use kernel::prelude::entity::Rental;

#[derive(Debug, Clone)]
pub struct CreateRentalDto {
    pub student_id: i32,
    pub instrument_id: i32,
    pub start: Date,
    pub end: Date,
    pub delivery: Option<OffsetDateTime>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TerminateRentalDto {
    pub student_id: i32,
    pub instrument_id: i32,
    pub start: Date,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RentalDto {
    pub student_id: i32,
    pub instrument_id: i32,
    pub start: Date,
    pub end: Date,
    pub delivery: Option<OffsetDateTime>,
    pub price: Decimal,
    pub notes: Option<String>,
    pub terminated: bool,
}

impl From<Rental> for RentalDto {
    fn from(value: Rental) -> Self {
        Self {
            student_id: *value.student_id().as_ref(),
            instrument_id: *value.instrument_id().as_ref(),
            start: *value.period().start(),
            end: *value.period().end(),
            delivery: value.delivery().map(|delivery| *delivery.as_ref()),
            price: *value.price().as_ref(),
            notes: value.notes().map(|notes| notes.as_ref().to_owned()),
            terminated: value.terminated(),
        }
    }
}
