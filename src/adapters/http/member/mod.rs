//! Member account HTTP adapter: registration, coach registration, login.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::MemberAppState;
pub use routes::member_routes;
