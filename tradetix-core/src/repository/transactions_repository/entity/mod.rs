mod transaction_find_entity;
mod transaction_insert_entity;

pub use transaction_find_entity::*;
pub use transaction_insert_entity::*;
