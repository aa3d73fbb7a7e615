pub mod participants;

pub use participants as participant_entity;
