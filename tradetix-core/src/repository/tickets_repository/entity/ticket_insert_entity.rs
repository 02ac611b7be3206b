use crate::dto::TicketStatus;
use bson::{oid::ObjectId, DateTime};
use serde::Serialize;

#[derive(Serialize)]
pub struct TicketInsertEntity {
    pub title: String,
    pub description: Option<String>,
    pub price: i64,
    pub status: TicketStatus,

    pub owner: ObjectId,
    pub buyer: Option<ObjectId>,
    pub event_id: Option<ObjectId>,

    pub expiry: DateTime,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}
