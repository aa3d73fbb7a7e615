pub mod email;
pub mod ticket;

pub use email::*;
pub use ticket::format_ticket_number;
