use error_stack::Report;
use sqlx::PgConnection;
use time::Date;

use kernel::interface::update::RentalModifier;
use kernel::prelude::entity::{Rental, RentalInstrumentId, StudentId};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresRentalRepository;

#[async_trait::async_trait]
impl RentalModifier<PostgresTransaction> for PostgresRentalRepository {
    async fn create(
        &self,
        con: &mut PostgresTransaction,
        rental: &Rental,
    ) -> error_stack::Result<(), KernelError> {
        PgRentalInternal::create(con.connection(), rental).await
    }

    async fn terminate(
        &self,
        con: &mut PostgresTransaction,
        student_id: &StudentId,
        instrument_id: &RentalInstrumentId,
        start_date: &Date,
    ) -> error_stack::Result<u64, KernelError> {
        PgRentalInternal::terminate(con.connection(), student_id, instrument_id, start_date).await
    }
}

pub(in crate::database) struct PgRentalInternal;

impl PgRentalInternal {
    async fn create(con: &mut PgConnection, rental: &Rental) -> error_stack::Result<(), KernelError> {
        let done = sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO rental (student_id, rental_instrument_id, start_date, end_date, delivery, price, notes, terminated)
            VALUES ($1, $2, $3, $4, $5, $6, $7, FALSE)
            "#,
        )
        .bind(*rental.student_id().as_ref())
        .bind(*rental.instrument_id().as_ref())
        .bind(*rental.period().start())
        .bind(*rental.period().end())
        .bind(rental.delivery().map(|delivery| *delivery.as_ref()))
        .bind(*rental.price().as_ref())
        .bind(rental.notes().map(|notes| notes.as_ref().to_owned()))
        .execute(&mut *con)
        .await
        .convert_error()?;

        if done.rows_affected() != 1 {
            return Err(Report::new(KernelError::Storage).attach_printable(format!(
                "rental insert for student {} and instrument {} wrote {} rows",
                rental.student_id().as_ref(),
                rental.instrument_id().as_ref(),
                done.rows_affected()
            )));
        }
        tracing::debug!(
            student = rental.student_id().as_ref(),
            instrument = rental.instrument_id().as_ref(),
            "created rental"
        );
        Ok(())
    }

    async fn terminate(
        con: &mut PgConnection,
        student_id: &StudentId,
        instrument_id: &RentalInstrumentId,
        start_date: &Date,
    ) -> error_stack::Result<u64, KernelError> {
        let done = sqlx::query(
            // language=postgresql
            r#"
            UPDATE rental
            SET terminated = TRUE, termination_date = CURRENT_DATE
            WHERE rental_instrument_id = $1
              AND student_id = $2
              AND start_date = $3
              AND NOT terminated
            "#,
        )
        .bind(*instrument_id.as_ref())
        .bind(*student_id.as_ref())
        .bind(*start_date)
        .execute(&mut *con)
        .await
        .convert_error()?;
        Ok(done.rows_affected())
    }
}

#[cfg(test)]
mod test {
    use rust_decimal::Decimal;
    use sqlx::PgConnection;
    use time::macros::date;

    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::{InstrumentQuery, LockMode, StudentQuery};
    use kernel::interface::update::RentalModifier;
    use kernel::prelude::entity::{Rental, RentalInstrumentId, RentalPeriod, StudentId};
    use kernel::KernelError;

    use crate::database::postgres::{
        PostgresDatabase, PostgresInstrumentRepository, PostgresRentalRepository,
        PostgresStudentRepository,
    };
    use crate::error::ConvertError;

    async fn seed_unit(
        con: &mut PgConnection,
        name: &str,
        category: &str,
        model: &str,
        monthly_price: Decimal,
    ) -> error_stack::Result<i32, KernelError> {
        let (instrument_id,): (i32,) =
            sqlx::query_as("INSERT INTO instrument (name, category) VALUES ($1, $2) RETURNING id")
                .bind(name)
                .bind(category)
                .fetch_one(&mut *con)
                .await
                .convert_error()?;
        let (unit_id,): (i32,) = sqlx::query_as(
            "INSERT INTO rental_instrument (instrument_id, model, monthly_price) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(instrument_id)
        .bind(model)
        .bind(monthly_price)
        .fetch_one(&mut *con)
        .await
        .convert_error()?;
        Ok(unit_id)
    }

    async fn seed_student(
        con: &mut PgConnection,
        approved: bool,
    ) -> error_stack::Result<i32, KernelError> {
        let (student_id,): (i32,) =
            sqlx::query_as("INSERT INTO student (approved) VALUES ($1) RETURNING student_id")
                .bind(approved)
                .fetch_one(&mut *con)
                .await
                .convert_error()?;
        Ok(student_id)
    }

    // Runs entirely inside one transaction that is rolled back at the end, so
    // repeated runs leave the database untouched.
    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn book_conflict_terminate_roundtrip() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        db.migrate().await?;
        let mut con = db.transact().await?;

        let unit_id = seed_unit(
            con.connection(),
            "guitar",
            "string",
            "Stratocaster",
            Decimal::new(9950, 2),
        )
        .await?;
        let student_raw = seed_student(con.connection(), true).await?;
        let student_id = StudentId::new(student_raw);

        let period = RentalPeriod::try_new(date!(2030 - 01 - 16), date!(2030 - 05 - 16))?;
        let available = PostgresInstrumentRepository
            .find_available(&mut con, &period, None, LockMode::Normal)
            .await?;
        let unit = available
            .iter()
            .find(|found| found.id().as_ref() == &unit_id)
            .expect("seeded unit is free");
        assert_eq!(unit.months().as_ref(), &4);
        assert_eq!(unit.total_price().as_ref(), &Decimal::new(39800, 2));

        let rental = Rental::book(
            student_id,
            RentalInstrumentId::new(unit_id),
            period,
            None,
            *unit.total_price(),
            None,
        );
        PostgresRentalRepository.create(&mut con, &rental).await?;

        // same transaction, exclusive re-check: the unit is occupied now
        let recheck = PostgresInstrumentRepository
            .find_available(&mut con, &period, None, LockMode::Exclusive)
            .await?;
        assert!(recheck.iter().all(|found| found.id().as_ref() != &unit_id));

        let active = PostgresStudentRepository
            .active_rental_count(&mut con, &student_id)
            .await?;
        assert_eq!(active.as_ref(), &1);

        let affected = PostgresRentalRepository
            .terminate(
                &mut con,
                &student_id,
                &RentalInstrumentId::new(unit_id),
                period.start(),
            )
            .await?;
        assert_eq!(affected, 1);

        // terminated rentals neither occupy the unit nor match again
        let relisted = PostgresInstrumentRepository
            .find_available(&mut con, &period, None, LockMode::Normal)
            .await?;
        assert!(relisted.iter().any(|found| found.id().as_ref() == &unit_id));
        let repeated = PostgresRentalRepository
            .terminate(
                &mut con,
                &student_id,
                &RentalInstrumentId::new(unit_id),
                period.start(),
            )
            .await?;
        assert_eq!(repeated, 0);

        con.roll_back().await?;
        Ok(())
    }

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn unknown_student_count_is_a_lookup_failure() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        db.migrate().await?;
        let mut con = db.transact().await?;

        let missing = PostgresStudentRepository
            .active_rental_count(&mut con, &StudentId::new(-1))
            .await;
        let report = missing.expect_err("student does not exist");
        assert!(matches!(report.current_context(), KernelError::Lookup));

        con.roll_back().await?;
        Ok(())
    }

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn unapproved_student_cannot_be_counted() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        db.migrate().await?;
        let mut con = db.transact().await?;

        let student_raw = seed_student(con.connection(), false).await?;
        let unapproved = PostgresStudentRepository
            .active_rental_count(&mut con, &StudentId::new(student_raw))
            .await;
        let report = unapproved.expect_err("student is not approved");
        assert!(matches!(report.current_context(), KernelError::Lookup));

        con.roll_back().await?;
        Ok(())
    }
}
