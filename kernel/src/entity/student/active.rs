use serde::{Deserialize, Serialize};

/// Upper bound on simultaneously active rentals per student.
pub const MAX_ACTIVE_RENTALS: i64 = 2;

/// Number of active rentals a student holds, as counted under an exclusive
/// lock inside the booking transaction.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct ActiveRentalCount(i64);

impl ActiveRentalCount {
    pub fn new(count: impl Into<i64>) -> Self {
        Self(count.into())
    }

    /// Policy gate for booking: false once the student is at the cap.
    pub fn can_rent_another(&self) -> bool {
        self.0 < MAX_ACTIVE_RENTALS
    }
}

impl AsRef<i64> for ActiveRentalCount {
    fn as_ref(&self) -> &i64 {
        &self.0
    }
}

impl From<ActiveRentalCount> for i64 {
    fn from(count: ActiveRentalCount) -> Self {
        count.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn cap_is_two_active_rentals() {
        assert!(ActiveRentalCount::new(0i64).can_rent_another());
        assert!(ActiveRentalCount::new(1i64).can_rent_another());
        assert!(!ActiveRentalCount::new(2i64).can_rent_another());
        assert!(!ActiveRentalCount::new(3i64).can_rent_another());
    }
}
