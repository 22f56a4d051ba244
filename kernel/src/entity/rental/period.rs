use error_stack::Report;
use serde::{Deserialize, Serialize};
use time::Date;

use crate::KernelError;

/// Closed date range of a rental or an availability query.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct RentalPeriod {
    start: Date,
    end: Date,
}

impl RentalPeriod {
    /// Rejects ranges whose start falls after their end; dates are never
    /// reordered on the caller's behalf.
    pub fn try_new(start: Date, end: Date) -> error_stack::Result<Self, KernelError> {
        if start > end {
            return Err(Report::new(KernelError::Validation)
                .attach_printable(format!("period starts {start} but ends {end}")));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> &Date {
        &self.start
    }

    pub fn end(&self) -> &Date {
        &self.end
    }

    /// Inclusive-bounds intersection: `a.start <= b.end && a.end >= b.start`.
    pub fn overlaps(&self, other: &RentalPeriod) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    /// Whole months between start and end, truncated, never negative.
    pub fn months(&self) -> RentalMonths {
        let whole = (self.end.year() - self.start.year()) * 12
            + i32::from(u8::from(self.end.month()))
            - i32::from(u8::from(self.start.month()))
            - i32::from(self.end.day() < self.start.day());
        RentalMonths::new(whole.max(0))
    }
}

/// Whole rental months charged for a period.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct RentalMonths(i32);

impl RentalMonths {
    pub fn new(months: impl Into<i32>) -> Self {
        Self(months.into())
    }
}

impl AsRef<i32> for RentalMonths {
    fn as_ref(&self) -> &i32 {
        &self.0
    }
}

impl From<RentalMonths> for i32 {
    fn from(months: RentalMonths) -> Self {
        months.0
    }
}
