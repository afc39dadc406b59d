//! Program enrollment record: the join between a member and a program.

use crate::domain::foundation::{EnrollmentId, MemberAccount, ProgramId, Timestamp};
use serde::{Deserialize, Serialize};

use super::CoachProgram;

/// A booked seat in a coach program. Created on enroll, deleted on cancel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramEnrollment {
    pub id: EnrollmentId,
    pub member_account: MemberAccount,
    pub program_id: ProgramId,
    pub registered_at: Timestamp,
}

impl ProgramEnrollment {
    /// Creates an enrollment for a seat in the given program.
    pub fn for_program(member_account: MemberAccount, program: &CoachProgram) -> Self {
        Self {
            id: EnrollmentId::new(),
            member_account,
            program_id: program.id,
            registered_at: Timestamp::now(),
        }
    }
}
