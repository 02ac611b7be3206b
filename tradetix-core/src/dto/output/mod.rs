mod envelope;
mod event;
mod health;
mod listing;
mod ticket;
mod transaction;
mod user;

pub use envelope::*;
pub use event::*;
pub use health::*;
pub use listing::*;
pub use ticket::*;
pub use transaction::*;
pub use user::*;
