//! In-memory repository implementations.
//!
//! Back the handler unit tests and the HTTP integration tests; also usable
//! as a demo backend. Mutation follows the same serialization contract as
//! the postgres adapters: commits re-validate capacity against the stored
//! row under the store lock, so the counter invariants hold even when the
//! caller's snapshot is stale.

mod member_repository;
mod program_repository;
mod slot_repository;

pub use member_repository::InMemoryMemberRepository;
pub use program_repository::InMemoryProgramRepository;
pub use slot_repository::InMemorySlotRepository;
