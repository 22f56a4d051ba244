mod category;
mod id;
mod model;
mod name;
mod price;

pub use self::{category::*, id::*, model::*, name::*, price::*};

use serde::{Deserialize, Serialize};

use crate::entity::{RentalMonths, RentalPeriod};

/// Catalog unit priced for one queried period. Constructed fresh per query
/// result, never stored and never mutated.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RentalInstrument {
    id: RentalInstrumentId,
    name: InstrumentName,
    model: InstrumentModel,
    category: InstrumentCategory,
    monthly_price: MonthlyPrice,
    months: RentalMonths,
    total_price: RentalPrice,
}

impl RentalInstrument {
    /// Annotates a catalog unit with the month count and total price derived
    /// from `period`.
    pub fn priced_for(
        id: RentalInstrumentId,
        name: InstrumentName,
        model: InstrumentModel,
        category: InstrumentCategory,
        monthly_price: MonthlyPrice,
        period: &RentalPeriod,
    ) -> Self {
        let months = period.months();
        let total_price = monthly_price.total_for(&months);
        Self {
            id,
            name,
            model,
            category,
            monthly_price,
            months,
            total_price,
        }
    }

    pub fn id(&self) -> &RentalInstrumentId {
        &self.id
    }

    pub fn name(&self) -> &InstrumentName {
        &self.name
    }

    pub fn model(&self) -> &InstrumentModel {
        &self.model
    }

    pub fn category(&self) -> &InstrumentCategory {
        &self.category
    }

    pub fn monthly_price(&self) -> &MonthlyPrice {
        &self.monthly_price
    }

    pub fn months(&self) -> &RentalMonths {
        &self.months
    }

    pub fn total_price(&self) -> &RentalPrice {
        &self.total_price
    }
}
