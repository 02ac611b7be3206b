mod event;
mod event_changes;
mod events_query;

pub use event::*;
pub use event_changes::*;
pub use events_query::*;
