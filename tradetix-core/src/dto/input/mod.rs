mod bank_details;
mod event;
mod event_filters;
mod id;
mod listing;
mod login;
mod pagination;
mod register;
mod ticket;
mod user_tickets;

pub use bank_details::*;
pub use event::*;
pub use event_filters::*;
pub use id::*;
pub use listing::*;
pub use login::*;
pub use pagination::*;
pub use register::*;
pub use ticket::*;
pub use user_tickets::*;
