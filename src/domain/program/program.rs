//! Coach program aggregate.

use crate::domain::foundation::{DomainError, ErrorCode, ProgramId};
use crate::domain::venue::SlotStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A coach-led course occurrence.
///
/// Capacity is tracked by `registered_count` alone; remaining seats are
/// computed by readers as `capacity - registered_count`. The venue address
/// is a snapshot taken at creation time and does not follow later venue
/// edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachProgram {
    pub id: ProgramId,

    /// Venue name as entered by the coach.
    pub venue_name: String,

    /// Venue address snapshot.
    pub address: String,

    pub date: NaiveDate,
    pub time_slot: String,
    pub fee_cents: i64,
    pub capacity: i32,

    /// Seats currently enrolled; sole capacity signal.
    pub registered_count: i32,

    /// Owning coach's display name; ownership checks compare against it.
    pub coach_name: String,
    pub coach_phone: String,

    /// Skill level the coach recommends, e.g. "beginner".
    pub recommendation_level: String,

    /// Optimistic concurrency token for counter writes.
    pub version: i32,
}

impl CoachProgram {
    /// Creates a program with no enrollments.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        venue_name: impl Into<String>,
        address: impl Into<String>,
        date: NaiveDate,
        time_slot: impl Into<String>,
        fee_cents: i64,
        capacity: i32,
        coach_name: impl Into<String>,
        coach_phone: impl Into<String>,
        recommendation_level: impl Into<String>,
    ) -> Self {
        Self {
            id: ProgramId::new(),
            venue_name: venue_name.into(),
            address: address.into(),
            date,
            time_slot: time_slot.into(),
            fee_cents,
            capacity,
            registered_count: 0,
            coach_name: coach_name.into(),
            coach_phone: coach_phone.into(),
            recommendation_level: recommendation_level.into(),
            version: 0,
        }
    }

    /// Seats still available.
    pub fn remaining_seats(&self) -> i32 {
        self.capacity - self.registered_count
    }

    /// Current capacity state.
    pub fn status(&self) -> SlotStatus {
        if self.remaining_seats() > 0 {
            SlotStatus::Open
        } else {
            SlotStatus::Full
        }
    }

    /// Takes one seat.
    ///
    /// # Errors
    ///
    /// `ProgramFull` when `registered_count` has reached `capacity`.
    pub fn enroll(&mut self) -> Result<(), DomainError> {
        if self.registered_count >= self.capacity {
            return Err(DomainError::new(
                ErrorCode::ProgramFull,
                "This program is fully booked",
            )
            .with_detail("program_id", self.id.to_string()));
        }
        self.registered_count += 1;
        Ok(())
    }

    /// Returns one seat.
    ///
    /// # Errors
    ///
    /// `InternalError` on counter underflow; the caller verified a matching
    /// enrollment row exists first.
    pub fn withdraw(&mut self) -> Result<(), DomainError> {
        if self.registered_count <= 0 {
            return Err(DomainError::new(
                ErrorCode::InternalError,
                "Program counter underflow",
            )
            .with_detail("program_id", self.id.to_string()));
        }
        self.registered_count -= 1;
        Ok(())
    }

    /// True if the named coach owns this program.
    pub fn is_owned_by(&self, coach_name: &str) -> bool {
        self.coach_name == coach_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program(capacity: i32) -> CoachProgram {
        CoachProgram::new(
            "City Arena",
            "1 Arena Road",
            NaiveDate::from_ymd_opt(2026, 10, 3).unwrap(),
            "19:00-21:00",
            40_000,
            capacity,
            "Lin",
            "0912-345-678",
            "intermediate",
        )
    }

    #[test]
    fn new_program_has_no_enrollments() {
        let program = program(8);
        assert_eq!(program.registered_count, 0);
        assert_eq!(program.remaining_seats(), 8);
        assert_eq!(program.status(), SlotStatus::Open);
    }

    #[test]
    fn enroll_until_full_then_reject() {
        let mut program = program(2);
        program.enroll().unwrap();
        program.enroll().unwrap();
        assert_eq!(program.status(), SlotStatus::Full);

        let err = program.enroll().unwrap_err();
        assert_eq!(err.code, ErrorCode::ProgramFull);
        assert_eq!(program.registered_count, 2);
    }

    #[test]
    fn withdraw_frees_a_seat() {
        let mut program = program(2);
        program.enroll().unwrap();
        program.withdraw().unwrap();
        assert_eq!(program.registered_count, 0);
        assert_eq!(program.remaining_seats(), 2);
    }

    #[test]
    fn withdraw_on_empty_program_fails() {
        let mut program = program(2);
        let err = program.withdraw().unwrap_err();
        assert_eq!(err.code, ErrorCode::InternalError);
    }

    #[test]
    fn ownership_matches_on_coach_name() {
        let program = program(4);
        assert!(program.is_owned_by("Lin"));
        assert!(!program.is_owned_by("Chen"));
    }
}
