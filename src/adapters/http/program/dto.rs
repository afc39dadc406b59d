//! HTTP DTOs for coach program and enrollment endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EnrollmentId, ProgramId, Timestamp};
use crate::domain::program::{CoachProgram, ProgramEnrollment};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to publish a new program occurrence.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProgramRequest {
    pub venue_name: String,
    pub date: NaiveDate,
    pub time_slot: String,
    pub fee_cents: i64,
    pub capacity: i32,
    pub coach_phone: String,
    pub recommendation_level: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A coach program occurrence with its live seat count.
#[derive(Debug, Clone, Serialize)]
pub struct ProgramResponse {
    pub id: ProgramId,
    pub venue_name: String,
    pub address: String,
    pub date: NaiveDate,
    pub time_slot: String,
    pub fee_cents: i64,
    pub capacity: i32,
    pub registered_count: i32,
    /// Computed, never stored: `capacity - registered_count`.
    pub remaining_seats: i32,
    pub coach_name: String,
    pub coach_phone: String,
    pub recommendation_level: String,
}

impl From<CoachProgram> for ProgramResponse {
    fn from(program: CoachProgram) -> Self {
        let remaining_seats = program.remaining_seats();
        Self {
            id: program.id,
            venue_name: program.venue_name,
            address: program.address,
            date: program.date,
            time_slot: program.time_slot,
            fee_cents: program.fee_cents,
            capacity: program.capacity,
            registered_count: program.registered_count,
            remaining_seats,
            coach_name: program.coach_name,
            coach_phone: program.coach_phone,
            recommendation_level: program.recommendation_level,
        }
    }
}

/// A member's program enrollment.
#[derive(Debug, Clone, Serialize)]
pub struct EnrollmentResponse {
    pub id: EnrollmentId,
    pub program_id: ProgramId,
    pub registered_at: Timestamp,
}

impl From<ProgramEnrollment> for EnrollmentResponse {
    fn from(enrollment: ProgramEnrollment) -> Self {
        Self {
            id: enrollment.id,
            program_id: enrollment.program_id,
            registered_at: enrollment.registered_at,
        }
    }
}

/// Member-facing program browser payload: upcoming programs plus the
/// caller's own enrollments so the client can mark joined ones.
#[derive(Debug, Clone, Serialize)]
pub struct ListProgramsResponse {
    pub programs: Vec<ProgramResponse>,
    pub enrollments: Vec<EnrollmentResponse>,
}

/// Response to a successful enrollment.
#[derive(Debug, Clone, Serialize)]
pub struct EnrollResponse {
    pub enrollment: EnrollmentResponse,
    pub program: ProgramResponse,
}

/// Response to a successful enrollment cancellation.
#[derive(Debug, Clone, Serialize)]
pub struct CancelEnrollmentResponse {
    pub program: ProgramResponse,
}

/// Response to a successful program cancellation.
#[derive(Debug, Clone, Serialize)]
pub struct CancelProgramResponse {
    /// Enrollments removed along with the program.
    pub enrollments_removed: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_response_computes_remaining_seats() {
        let mut program = CoachProgram::new(
            "Downtown Court",
            "1 Main St",
            NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            "18:00-20:00",
            50_00,
            8,
            "Lin",
            "0912-345-678",
            "intermediate",
        );
        program.enroll().unwrap();

        let response = ProgramResponse::from(program);
        assert_eq!(response.registered_count, 1);
        assert_eq!(response.remaining_seats, 7);
    }
}
