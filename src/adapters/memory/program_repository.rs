//! In-memory program store.

use crate::domain::foundation::{DomainError, EnrollmentId, ErrorCode, MemberAccount, ProgramId};
use crate::domain::program::{CoachProgram, ProgramEnrollment};
use crate::ports::ProgramRepository;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Mutex;

/// Mutex-backed program store for tests and demos.
#[derive(Default)]
pub struct InMemoryProgramRepository {
    programs: Mutex<Vec<CoachProgram>>,
    enrollments: Mutex<Vec<ProgramEnrollment>>,
}

impl InMemoryProgramRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_program(self, program: CoachProgram) -> Self {
        self.programs.lock().unwrap().push(program);
        self
    }

    pub fn with_enrollment(self, enrollment: ProgramEnrollment) -> Self {
        self.enrollments.lock().unwrap().push(enrollment);
        self
    }

    pub fn program_count(&self) -> usize {
        self.programs.lock().unwrap().len()
    }

    pub fn enrollment_count(&self) -> usize {
        self.enrollments.lock().unwrap().len()
    }

    /// Stored enrollment count for a program, for test assertions.
    pub fn registered_count(&self, id: &ProgramId) -> Option<i32> {
        self.programs
            .lock()
            .unwrap()
            .iter()
            .find(|p| &p.id == id)
            .map(|p| p.registered_count)
    }
}

#[async_trait]
impl ProgramRepository for InMemoryProgramRepository {
    async fn save(&self, program: &CoachProgram) -> Result<(), DomainError> {
        self.programs.lock().unwrap().push(program.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ProgramId) -> Result<Option<CoachProgram>, DomainError> {
        let programs = self.programs.lock().unwrap();
        Ok(programs.iter().find(|p| &p.id == id).cloned())
    }

    async fn list_from(&self, from: NaiveDate) -> Result<Vec<CoachProgram>, DomainError> {
        let mut matching: Vec<CoachProgram> = self
            .programs
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.date >= from)
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.time_slot.cmp(&b.time_slot)));
        Ok(matching)
    }

    async fn list_by_coach(&self, coach_name: &str) -> Result<Vec<CoachProgram>, DomainError> {
        let programs = self.programs.lock().unwrap();
        Ok(programs
            .iter()
            .filter(|p| p.coach_name == coach_name)
            .cloned()
            .collect())
    }

    async fn find_enrollment(
        &self,
        id: &EnrollmentId,
        account: &MemberAccount,
    ) -> Result<Option<ProgramEnrollment>, DomainError> {
        let enrollments = self.enrollments.lock().unwrap();
        Ok(enrollments
            .iter()
            .find(|e| &e.id == id && &e.member_account == account)
            .cloned())
    }

    async fn list_enrollments(
        &self,
        account: &MemberAccount,
    ) -> Result<Vec<ProgramEnrollment>, DomainError> {
        let mut matching: Vec<ProgramEnrollment> = self
            .enrollments
            .lock()
            .unwrap()
            .iter()
            .filter(|e| &e.member_account == account)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.registered_at.cmp(&a.registered_at));
        Ok(matching)
    }

    async fn commit_enrollment(
        &self,
        program: &CoachProgram,
        enrollment: &ProgramEnrollment,
    ) -> Result<(), DomainError> {
        let mut programs = self.programs.lock().unwrap();
        let stored = programs
            .iter_mut()
            .find(|p| p.id == program.id)
            .ok_or_else(|| DomainError::new(ErrorCode::ProgramNotFound, "Program not found"))?;

        if stored.registered_count >= stored.capacity {
            return Err(DomainError::new(
                ErrorCode::ProgramFull,
                "This program is fully booked",
            ));
        }
        stored.registered_count += 1;
        stored.version += 1;

        self.enrollments.lock().unwrap().push(enrollment.clone());
        Ok(())
    }

    async fn commit_withdrawal(
        &self,
        program: &CoachProgram,
        enrollment_id: &EnrollmentId,
    ) -> Result<(), DomainError> {
        // Lock order is programs before enrollments, same as
        // commit_enrollment. The enrollment is only removed once the
        // counter update has succeeded, so an error leaves both intact.
        let mut programs = self.programs.lock().unwrap();
        let mut enrollments = self.enrollments.lock().unwrap();
        let position = enrollments
            .iter()
            .position(|e| &e.id == enrollment_id)
            .ok_or_else(|| {
                DomainError::new(ErrorCode::EnrollmentNotFound, "Enrollment not found")
            })?;

        let stored = programs
            .iter_mut()
            .find(|p| p.id == program.id)
            .ok_or_else(|| DomainError::new(ErrorCode::ProgramNotFound, "Program not found"))?;
        if stored.registered_count <= 0 {
            return Err(DomainError::new(
                ErrorCode::InternalError,
                "Program counter underflow",
            ));
        }
        stored.registered_count -= 1;
        stored.version += 1;
        enrollments.remove(position);
        Ok(())
    }

    async fn delete_with_enrollments(&self, id: &ProgramId) -> Result<(), DomainError> {
        let mut programs = self.programs.lock().unwrap();
        let position = programs
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| DomainError::new(ErrorCode::ProgramNotFound, "Program not found"))?;
        programs.remove(position);

        self.enrollments
            .lock()
            .unwrap()
            .retain(|e| &e.program_id != id);
        Ok(())
    }
}
