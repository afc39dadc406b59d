//! PostgreSQL adapters - database implementations of the repository ports.
//!
//! Counter writes and their child-row changes run in one transaction with
//! a `SELECT ... FOR UPDATE` row lock on the slot/program, so concurrent
//! reservations of the last seat serialize and the loser gets a capacity
//! error rather than a partial write.

mod member_repository;
mod program_repository;
mod slot_repository;

pub use member_repository::PostgresMemberRepository;
pub use program_repository::PostgresProgramRepository;
pub use slot_repository::PostgresSlotRepository;
