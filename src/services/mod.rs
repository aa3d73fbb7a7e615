pub mod participant_service;

pub use participant_service::*;
