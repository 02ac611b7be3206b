use crate::repository;
use serde::Serialize;
use time::OffsetDateTime;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub ticket_id: String,
    pub listing_id: Option<String>,
    pub seller_id: String,
    pub buyer_id: String,
    pub sale_price: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<repository::Transaction> for Transaction {
    fn from(value: repository::Transaction) -> Self {
        Self {
            id: value.id.to_hex(),
            ticket_id: value.ticket_id.to_hex(),
            listing_id: value.listing_id.map(|listing_id| listing_id.to_hex()),
            seller_id: value.seller_id.to_hex(),
            buyer_id: value.buyer_id.to_hex(),
            sale_price: value.sale_price,
            created_at: value.created_at,
        }
    }
}
