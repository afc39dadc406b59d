//! PostgreSQL implementation of ProgramRepository.
//!
//! Same transactional discipline as the slot store: enrollment commits
//! lock the program row, re-validate capacity, and pair the counter
//! update with the enrollment row change. Program deletion removes the
//! enrollments in the same transaction.

use crate::domain::foundation::{
    DomainError, EnrollmentId, ErrorCode, MemberAccount, ProgramId, Timestamp,
};
use crate::domain::program::{CoachProgram, ProgramEnrollment};
use crate::ports::ProgramRepository;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL implementation of the ProgramRepository port.
pub struct PostgresProgramRepository {
    pool: PgPool,
}

impl PostgresProgramRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ProgramRow {
    id: Uuid,
    venue_name: String,
    address: String,
    date: NaiveDate,
    time_slot: String,
    fee_cents: i64,
    capacity: i32,
    registered_count: i32,
    coach_name: String,
    coach_phone: String,
    recommendation_level: String,
    version: i32,
}

impl From<ProgramRow> for CoachProgram {
    fn from(row: ProgramRow) -> Self {
        CoachProgram {
            id: ProgramId::from_uuid(row.id),
            venue_name: row.venue_name,
            address: row.address,
            date: row.date,
            time_slot: row.time_slot,
            fee_cents: row.fee_cents,
            capacity: row.capacity,
            registered_count: row.registered_count,
            coach_name: row.coach_name,
            coach_phone: row.coach_phone,
            recommendation_level: row.recommendation_level,
            version: row.version,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct EnrollmentRow {
    id: Uuid,
    member_account: String,
    program_id: Uuid,
    registered_at: DateTime<Utc>,
}

impl TryFrom<EnrollmentRow> for ProgramEnrollment {
    type Error = DomainError;

    fn try_from(row: EnrollmentRow) -> Result<Self, Self::Error> {
        Ok(ProgramEnrollment {
            id: EnrollmentId::from_uuid(row.id),
            member_account: MemberAccount::new(row.member_account).map_err(|e| {
                DomainError::new(ErrorCode::DatabaseError, format!("Invalid account: {}", e))
            })?,
            program_id: ProgramId::from_uuid(row.program_id),
            registered_at: Timestamp::from_datetime(row.registered_at),
        })
    }
}

fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, e))
}

const PROGRAM_COLUMNS: &str = "id, venue_name, address, date, time_slot, fee_cents, \
     capacity, registered_count, coach_name, coach_phone, recommendation_level, version";

#[async_trait]
impl ProgramRepository for PostgresProgramRepository {
    async fn save(&self, program: &CoachProgram) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO coach_programs (
                id, venue_name, address, date, time_slot, fee_cents, capacity,
                registered_count, coach_name, coach_phone, recommendation_level, version
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(program.id.as_uuid())
        .bind(&program.venue_name)
        .bind(&program.address)
        .bind(program.date)
        .bind(&program.time_slot)
        .bind(program.fee_cents)
        .bind(program.capacity)
        .bind(program.registered_count)
        .bind(&program.coach_name)
        .bind(&program.coach_phone)
        .bind(&program.recommendation_level)
        .bind(program.version)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to save program", e))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &ProgramId) -> Result<Option<CoachProgram>, DomainError> {
        let row: Option<ProgramRow> = sqlx::query_as(&format!(
            "SELECT {} FROM coach_programs WHERE id = $1",
            PROGRAM_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to load program", e))?;

        Ok(row.map(CoachProgram::from))
    }

    async fn list_from(&self, from: NaiveDate) -> Result<Vec<CoachProgram>, DomainError> {
        let rows: Vec<ProgramRow> = sqlx::query_as(&format!(
            "SELECT {} FROM coach_programs WHERE date >= $1 ORDER BY date, time_slot",
            PROGRAM_COLUMNS
        ))
        .bind(from)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list programs", e))?;

        Ok(rows.into_iter().map(CoachProgram::from).collect())
    }

    async fn list_by_coach(&self, coach_name: &str) -> Result<Vec<CoachProgram>, DomainError> {
        let rows: Vec<ProgramRow> = sqlx::query_as(&format!(
            "SELECT {} FROM coach_programs WHERE coach_name = $1 ORDER BY date, time_slot",
            PROGRAM_COLUMNS
        ))
        .bind(coach_name)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list coach programs", e))?;

        Ok(rows.into_iter().map(CoachProgram::from).collect())
    }

    async fn find_enrollment(
        &self,
        id: &EnrollmentId,
        account: &MemberAccount,
    ) -> Result<Option<ProgramEnrollment>, DomainError> {
        let row: Option<EnrollmentRow> = sqlx::query_as(
            r#"
            SELECT id, member_account, program_id, registered_at
            FROM program_enrollments WHERE id = $1 AND member_account = $2
            "#,
        )
        .bind(id.as_uuid())
        .bind(account.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to load enrollment", e))?;

        row.map(ProgramEnrollment::try_from).transpose()
    }

    async fn list_enrollments(
        &self,
        account: &MemberAccount,
    ) -> Result<Vec<ProgramEnrollment>, DomainError> {
        let rows: Vec<EnrollmentRow> = sqlx::query_as(
            r#"
            SELECT id, member_account, program_id, registered_at
            FROM program_enrollments WHERE member_account = $1
            ORDER BY registered_at DESC
            "#,
        )
        .bind(account.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list enrollments", e))?;

        rows.into_iter().map(ProgramEnrollment::try_from).collect()
    }

    async fn commit_enrollment(
        &self,
        program: &CoachProgram,
        enrollment: &ProgramEnrollment,
    ) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("Failed to begin transaction", e))?;

        // Lock the program row and re-validate against the stored count.
        let counters: Option<(i32, i32)> = sqlx::query_as(
            "SELECT registered_count, capacity FROM coach_programs WHERE id = $1 FOR UPDATE",
        )
        .bind(program.id.as_uuid())
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| db_error("Failed to lock program", e))?;

        match counters {
            None => {
                return Err(DomainError::new(
                    ErrorCode::ProgramNotFound,
                    "Program not found",
                ));
            }
            Some((registered, capacity)) if registered >= capacity => {
                return Err(DomainError::new(
                    ErrorCode::ProgramFull,
                    "This program is fully booked",
                ));
            }
            Some(_) => {}
        }

        sqlx::query(
            r#"
            UPDATE coach_programs SET
                registered_count = registered_count + 1,
                version = version + 1
            WHERE id = $1
            "#,
        )
        .bind(program.id.as_uuid())
        .execute(&mut *tx)
        .await
        .map_err(|e| db_error("Failed to update program counters", e))?;

        sqlx::query(
            r#"
            INSERT INTO program_enrollments (id, member_account, program_id, registered_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(enrollment.id.as_uuid())
        .bind(enrollment.member_account.as_str())
        .bind(enrollment.program_id.as_uuid())
        .bind(enrollment.registered_at.as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(|e| db_error("Failed to insert enrollment", e))?;

        tx.commit()
            .await
            .map_err(|e| db_error("Failed to commit enrollment", e))
    }

    async fn commit_withdrawal(
        &self,
        program: &CoachProgram,
        enrollment_id: &EnrollmentId,
    ) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("Failed to begin transaction", e))?;

        let deleted = sqlx::query("DELETE FROM program_enrollments WHERE id = $1")
            .bind(enrollment_id.as_uuid())
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("Failed to delete enrollment", e))?;
        if deleted.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::EnrollmentNotFound,
                "Enrollment not found",
            ));
        }

        let updated = sqlx::query(
            r#"
            UPDATE coach_programs SET
                registered_count = registered_count - 1,
                version = version + 1
            WHERE id = $1 AND registered_count > 0
            "#,
        )
        .bind(program.id.as_uuid())
        .execute(&mut *tx)
        .await
        .map_err(|e| db_error("Failed to update program counters", e))?;
        if updated.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::InternalError,
                "Program counter underflow",
            ));
        }

        tx.commit()
            .await
            .map_err(|e| db_error("Failed to commit withdrawal", e))
    }

    async fn delete_with_enrollments(&self, id: &ProgramId) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("Failed to begin transaction", e))?;

        sqlx::query("DELETE FROM program_enrollments WHERE program_id = $1")
            .bind(id.as_uuid())
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("Failed to delete enrollments", e))?;

        let deleted = sqlx::query("DELETE FROM coach_programs WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("Failed to delete program", e))?;
        if deleted.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ProgramNotFound,
                "Program not found",
            ));
        }

        tx.commit()
            .await
            .map_err(|e| db_error("Failed to commit program deletion", e))
    }
}
