use bson::{oid::ObjectId, DateTime};
use serde::Serialize;

#[derive(Serialize)]
pub struct EventInsertEntity {
    pub name: String,
    pub date: DateTime,
    pub venue: String,
    pub performers: Vec<String>,
    pub categories: Vec<String>,
    pub is_available: bool,

    pub valid_from: DateTime,
    pub valid_to: DateTime,

    pub created_by: ObjectId,
    pub updated_by: ObjectId,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}
