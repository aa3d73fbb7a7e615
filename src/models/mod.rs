pub mod common;
pub mod participant;

pub use common::*;
pub use participant::*;
