use crate::{dto::ListingStatus, repository::listings_repository::entity::ListingFindEntity};
use bson::oid::ObjectId;
use time::OffsetDateTime;

#[derive(Debug, Clone)]
pub struct Listing {
    pub id: ObjectId,
    pub ticket_id: ObjectId,
    pub price: i64,
    pub status: ListingStatus,

    pub created_by: ObjectId,
    pub updated_by: ObjectId,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<ListingFindEntity> for Listing {
    fn from(value: ListingFindEntity) -> Self {
        Self {
            id: value._id,
            ticket_id: value.ticket_id,
            price: value.price,
            status: value.status,
            created_by: value.created_by,
            updated_by: value.updated_by,
            created_at: value.created_at.into(),
            updated_at: value.updated_at.into(),
        }
    }
}
