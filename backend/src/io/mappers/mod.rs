pub mod participant_mapper;
pub mod session_mapper;

pub use participant_mapper::ParticipantMapper;
pub use session_mapper::SessionMapper;
