//! Program domain: coach-authored course occurrences and enrollments.

mod enrollment;
mod program;

pub use enrollment::ProgramEnrollment;
pub use program::CoachProgram;
