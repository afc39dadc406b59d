//! Ports: async contracts between the application layer and the
//! persistence gateway. Adapters implement these; handlers depend on them
//! as `Arc<dyn Trait>`.

mod member_repository;
mod program_repository;
mod slot_repository;

pub use member_repository::MemberRepository;
pub use program_repository::ProgramRepository;
pub use slot_repository::SlotRepository;
