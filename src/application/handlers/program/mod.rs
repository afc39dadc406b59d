//! Program handlers: the coach-program side of the capacity ledger.
//!
//! ## Commands
//! - Creating a program (coach only)
//! - Cancelling a program (owner only, cascades to enrollments)
//! - Enrolling in a program
//! - Cancelling an enrollment
//!
//! ## Queries
//! - Upcoming programs plus the caller's enrollments
//! - A coach's own programs

mod cancel_enrollment;
mod cancel_program;
mod create_program;
mod enroll_in_program;
mod list_coach_programs;
mod list_programs;

pub use cancel_enrollment::{
    CancelEnrollmentCommand, CancelEnrollmentHandler, CancelEnrollmentResult,
};
pub use cancel_program::{CancelProgramCommand, CancelProgramHandler, CancelProgramResult};
pub use create_program::{CreateProgramCommand, CreateProgramHandler, CreateProgramResult};
pub use enroll_in_program::{
    EnrollInProgramCommand, EnrollInProgramHandler, EnrollInProgramResult,
};

pub use list_coach_programs::{
    ListCoachProgramsHandler, ListCoachProgramsQuery, ListCoachProgramsResult,
};
pub use list_programs::{ListProgramsHandler, ListProgramsQuery, ListProgramsResult};
