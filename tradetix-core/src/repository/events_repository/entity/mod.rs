mod event_find_entity;
mod event_insert_entity;

pub use event_find_entity::*;
pub use event_insert_entity::*;
