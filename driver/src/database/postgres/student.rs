use error_stack::Report;
use sqlx::PgConnection;

use kernel::interface::query::StudentQuery;
use kernel::prelude::entity::{ActiveRentalCount, StudentId};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresStudentRepository;

#[async_trait::async_trait]
impl StudentQuery<PostgresTransaction> for PostgresStudentRepository {
    async fn active_rental_count(
        &self,
        con: &mut PostgresTransaction,
        student_id: &StudentId,
    ) -> error_stack::Result<ActiveRentalCount, KernelError> {
        PgStudentInternal::active_rental_count(con.connection(), student_id).await
    }
}

#[derive(sqlx::FromRow)]
struct ActiveCountRow {
    approved: bool,
    active: i64,
}

pub(in crate::database) struct PgStudentInternal;

impl PgStudentInternal {
    // FOR UPDATE must sit inside the subqueries: Postgres rejects it next to
    // an aggregate, and the locks have to cover both scanned relations.
    pub(in crate::database) async fn active_rental_count(
        con: &mut PgConnection,
        student_id: &StudentId,
    ) -> error_stack::Result<ActiveRentalCount, KernelError> {
        let row = sqlx::query_as::<_, ActiveCountRow>(
            // language=postgresql
            r#"
            SELECT
                s.approved,
                COUNT(r.student_id) AS active
            FROM
                (SELECT student_id, approved FROM student WHERE student_id = $1 FOR UPDATE) s
                LEFT JOIN (
                    SELECT student_id
                    FROM rental
                    WHERE student_id = $1
                      AND NOT terminated
                      AND (end_date IS NULL OR end_date >= CURRENT_DATE)
                    FOR UPDATE
                ) r ON r.student_id = s.student_id
            GROUP BY s.approved
            "#,
        )
        .bind(*student_id.as_ref())
        .fetch_optional(&mut *con)
        .await
        .convert_error()?;

        match row {
            Some(row) if row.approved => Ok(ActiveRentalCount::new(row.active)),
            Some(_) => Err(Report::new(KernelError::Lookup).attach_printable(format!(
                "student {} is not approved for rentals",
                student_id.as_ref()
            ))),
            None => Err(Report::new(KernelError::Lookup)
                .attach_printable(format!("no student with id {}", student_id.as_ref()))),
        }
    }
}
