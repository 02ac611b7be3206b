mod listing_find_entity;
mod listing_insert_entity;

pub use listing_find_entity::*;
pub use listing_insert_entity::*;
