use rust_decimal::Decimal;
use sqlx::PgConnection;

use kernel::interface::query::{InstrumentQuery, LockMode};
use kernel::prelude::entity::{
    InstrumentCategory, InstrumentModel, InstrumentName, MonthlyPrice, RentalInstrument,
    RentalInstrumentId, RentalPeriod,
};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresInstrumentRepository;

#[async_trait::async_trait]
impl InstrumentQuery<PostgresTransaction> for PostgresInstrumentRepository {
    async fn find_available(
        &self,
        con: &mut PostgresTransaction,
        period: &RentalPeriod,
        kind: Option<&InstrumentName>,
        lock: LockMode,
    ) -> error_stack::Result<Vec<RentalInstrument>, KernelError> {
        PgInstrumentInternal::find_available(con.connection(), period, kind, lock).await
    }
}

#[derive(sqlx::FromRow)]
struct AvailableRow {
    id: i32,
    name: String,
    model: String,
    category: String,
    monthly_price: Decimal,
}

impl AvailableRow {
    fn into_instrument(self, period: &RentalPeriod) -> RentalInstrument {
        RentalInstrument::priced_for(
            RentalInstrumentId::new(self.id),
            InstrumentName::new(self.name),
            InstrumentModel::new(self.model),
            InstrumentCategory::new(self.category),
            MonthlyPrice::new(self.monthly_price),
            period,
        )
    }
}

pub(in crate::database) struct PgInstrumentInternal;

impl PgInstrumentInternal {
    pub(in crate::database) async fn find_available(
        con: &mut PgConnection,
        period: &RentalPeriod,
        kind: Option<&InstrumentName>,
        lock: LockMode,
    ) -> error_stack::Result<Vec<RentalInstrument>, KernelError> {
        if lock == LockMode::Exclusive {
            Self::lock_overlapping_rentals(con, period).await?;
        }

        let mut sql = String::from(
            // language=postgresql
            r#"
            SELECT
                ri.id,
                i.name,
                ri.model,
                i.category,
                ri.monthly_price
            FROM
                rental_instrument ri
                JOIN instrument i ON i.id = ri.instrument_id
            WHERE
                NOT EXISTS (
                    SELECT 1
                    FROM rental r
                    WHERE r.rental_instrument_id = ri.id
                      AND NOT r.terminated
                      AND $1 <= r.end_date
                      AND $2 >= r.start_date
                )
            "#,
        );
        if kind.is_some() {
            sql.push_str(" AND i.name = $3");
        }
        sql.push_str(" ORDER BY ri.id");
        if lock == LockMode::Exclusive {
            sql.push_str(" FOR UPDATE OF ri");
        }

        let mut query = sqlx::query_as::<_, AvailableRow>(&sql)
            .bind(*period.start())
            .bind(*period.end());
        if let Some(kind) = kind {
            query = query.bind(kind.as_ref());
        }

        let rows = query.fetch_all(&mut *con).await.convert_error()?;
        tracing::debug!(
            start = %period.start(),
            end = %period.end(),
            found = rows.len(),
            "evaluated availability"
        );
        Ok(rows
            .into_iter()
            .map(|row| row.into_instrument(period))
            .collect())
    }

    /// Row-locks every live rental overlapping the window, so the occupancy
    /// this evaluation is about to read cannot change under the enclosing
    /// transaction.
    async fn lock_overlapping_rentals(
        con: &mut PgConnection,
        period: &RentalPeriod,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            SELECT id
            FROM rental
            WHERE NOT terminated
              AND $1 <= end_date
              AND $2 >= start_date
            FOR UPDATE
            "#,
        )
        .bind(*period.start())
        .bind(*period.end())
        .execute(&mut *con)
        .await
        .convert_error()?;
        Ok(())
    }
}
