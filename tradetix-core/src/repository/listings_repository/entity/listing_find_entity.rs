use crate::dto::ListingStatus;
use bson::{oid::ObjectId, DateTime};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct ListingFindEntity {
    pub _id: ObjectId,
    pub ticket_id: ObjectId,
    pub price: i64,
    pub status: ListingStatus,

    pub created_by: ObjectId,
    pub updated_by: ObjectId,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}
