mod delivery;
mod notes;
mod period;
mod termination;

pub use self::{delivery::*, notes::*, period::*, termination::*};

use serde::{Deserialize, Serialize};

use crate::entity::{RentalInstrumentId, RentalPrice, StudentId};

/// One booking of one instrument unit by one student. Created by the booking
/// transaction; afterwards only [`Rental::mark_terminated`] may change it,
/// and only the two termination fields.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Rental {
    student_id: StudentId,
    instrument_id: RentalInstrumentId,
    period: RentalPeriod,
    delivery: Option<DeliveryTime>,
    price: RentalPrice,
    notes: Option<RentalNotes>,
    terminated: bool,
    terminated_on: Option<TerminationDate>,
}

impl Rental {
    /// A fresh booking: never terminated at creation time.
    pub fn book(
        student_id: StudentId,
        instrument_id: RentalInstrumentId,
        period: RentalPeriod,
        delivery: Option<DeliveryTime>,
        price: RentalPrice,
        notes: Option<RentalNotes>,
    ) -> Self {
        Self {
            student_id,
            instrument_id,
            period,
            delivery,
            price,
            notes,
            terminated: false,
            terminated_on: None,
        }
    }

    /// The single permitted mutation: flips the terminated flag and records
    /// the termination date.
    pub fn mark_terminated(&mut self, on: TerminationDate) {
        self.terminated = true;
        self.terminated_on = Some(on);
    }

    /// Whether this rental occupies its instrument for `period`: terminated
    /// rentals never do, live ones do exactly when the ranges overlap.
    pub fn occupies(&self, period: &RentalPeriod) -> bool {
        !self.terminated && self.period.overlaps(period)
    }

    pub fn student_id(&self) -> &StudentId {
        &self.student_id
    }

    pub fn instrument_id(&self) -> &RentalInstrumentId {
        &self.instrument_id
    }

    pub fn period(&self) -> &RentalPeriod {
        &self.period
    }

    pub fn delivery(&self) -> Option<&DeliveryTime> {
        self.delivery.as_ref()
    }

    pub fn price(&self) -> &RentalPrice {
        &self.price
    }

    pub fn notes(&self) -> Option<&RentalNotes> {
        self.notes.as_ref()
    }

    pub fn terminated(&self) -> bool {
        self.terminated
    }

    pub fn terminated_on(&self) -> Option<&TerminationDate> {
        self.terminated_on.as_ref()
    }
}

#[cfg(test)]
mod test {
    use rust_decimal::Decimal;
    use time::macros::date;

    use super::*;

    fn some_rental() -> Rental {
        let period = RentalPeriod::try_new(date!(2022 - 01 - 16), date!(2022 - 05 - 16))
            .expect("valid period");
        Rental::book(
            StudentId::new(18),
            RentalInstrumentId::new(16),
            period,
            None,
            RentalPrice::new(Decimal::new(40000, 2)),
            None,
        )
    }

    #[test]
    fn termination_stops_occupancy() {
        let mut rental = some_rental();
        let query = RentalPeriod::try_new(date!(2022 - 03 - 01), date!(2022 - 06 - 01))
            .expect("valid period");
        assert!(rental.occupies(&query));

        rental.mark_terminated(TerminationDate::new(date!(2022 - 02 - 01)));
        assert!(rental.terminated());
        assert!(!rental.occupies(&query));
    }
}
