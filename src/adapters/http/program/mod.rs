//! Program HTTP adapter: coach programs and enrollments.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::ProgramAppState;
pub use routes::program_routes;
