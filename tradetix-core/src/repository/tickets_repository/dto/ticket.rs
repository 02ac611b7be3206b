use crate::{dto::TicketStatus, repository::tickets_repository::entity::TicketFindEntity};
use bson::oid::ObjectId;
use time::OffsetDateTime;

#[derive(Debug, Clone)]
pub struct Ticket {
    pub id: ObjectId,

    pub title: String,
    pub description: Option<String>,
    pub price: i64,
    pub status: TicketStatus,

    pub owner: ObjectId,
    pub buyer: Option<ObjectId>,
    pub event_id: Option<ObjectId>,

    pub expiry: OffsetDateTime,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<TicketFindEntity> for Ticket {
    fn from(value: TicketFindEntity) -> Self {
        Self {
            id: value._id,
            title: value.title,
            description: value.description,
            price: value.price,
            status: value.status,
            owner: value.owner,
            buyer: value.buyer,
            event_id: value.event_id,
            expiry: value.expiry.into(),
            created_at: value.created_at.into(),
            updated_at: value.updated_at.into(),
        }
    }
}
