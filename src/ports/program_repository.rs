//! Coach program store port.
//!
//! Same transactional contract as the slot store: enrollment commits pair
//! the counter write with the enrollment row change, serialized on the
//! program row. Program deletion cascades to enrollments in the same
//! transaction so cancelled programs leave no orphaned rows.

use crate::domain::foundation::{DomainError, EnrollmentId, MemberAccount, ProgramId};
use crate::domain::program::{CoachProgram, ProgramEnrollment};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Repository port for coach programs and enrollments.
#[async_trait]
pub trait ProgramRepository: Send + Sync {
    /// Persist a newly created program.
    async fn save(&self, program: &CoachProgram) -> Result<(), DomainError>;

    /// Find a program by id. Returns `None` if not found.
    async fn find_by_id(&self, id: &ProgramId) -> Result<Option<CoachProgram>, DomainError>;

    /// List programs on or after the given date, ordered by date then
    /// time slot.
    async fn list_from(&self, from: NaiveDate) -> Result<Vec<CoachProgram>, DomainError>;

    /// List a coach's own programs (feeds the coach cancel screen).
    async fn list_by_coach(&self, coach_name: &str) -> Result<Vec<CoachProgram>, DomainError>;

    /// Find an enrollment by id, scoped to the owning member.
    async fn find_enrollment(
        &self,
        id: &EnrollmentId,
        account: &MemberAccount,
    ) -> Result<Option<ProgramEnrollment>, DomainError>;

    /// List a member's enrollments, newest first.
    async fn list_enrollments(
        &self,
        account: &MemberAccount,
    ) -> Result<Vec<ProgramEnrollment>, DomainError>;

    /// Persist an enrollment: take one seat and insert the enrollment row
    /// in one transaction, re-validating capacity under the program lock.
    ///
    /// # Errors
    ///
    /// - `ProgramNotFound` if the program vanished since the caller's read
    /// - `ProgramFull` if a concurrent writer took the last seat first
    /// - `DatabaseError` on persistence failure
    async fn commit_enrollment(
        &self,
        program: &CoachProgram,
        enrollment: &ProgramEnrollment,
    ) -> Result<(), DomainError>;

    /// Persist a withdrawal: delete the enrollment row and return its seat
    /// in one transaction.
    ///
    /// # Errors
    ///
    /// - `EnrollmentNotFound` if the row was already removed
    /// - `DatabaseError` on persistence failure
    async fn commit_withdrawal(
        &self,
        program: &CoachProgram,
        enrollment_id: &EnrollmentId,
    ) -> Result<(), DomainError>;

    /// Delete a program and all of its enrollments in one transaction.
    ///
    /// # Errors
    ///
    /// - `ProgramNotFound` if the program does not exist
    /// - `DatabaseError` on persistence failure
    async fn delete_with_enrollments(&self, id: &ProgramId) -> Result<(), DomainError>;
}
