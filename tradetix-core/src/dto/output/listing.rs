use crate::{dto::ListingStatus, repository};
use serde::Serialize;
use time::OffsetDateTime;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub ticket_id: String,
    pub price: i64,
    pub status: ListingStatus,
    pub created_by: String,
    pub updated_by: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<repository::Listing> for Listing {
    fn from(value: repository::Listing) -> Self {
        Self {
            id: value.id.to_hex(),
            ticket_id: value.ticket_id.to_hex(),
            price: value.price,
            status: value.status,
            created_by: value.created_by.to_hex(),
            updated_by: value.updated_by.to_hex(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
