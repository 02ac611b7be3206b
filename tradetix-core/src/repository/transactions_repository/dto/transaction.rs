use crate::repository::transactions_repository::entity::TransactionFindEntity;
use bson::oid::ObjectId;
use time::OffsetDateTime;

#[derive(Debug, Clone)]
pub struct Transaction {
    pub id: ObjectId,
    pub ticket_id: ObjectId,
    pub listing_id: Option<ObjectId>,
    pub seller_id: ObjectId,
    pub buyer_id: ObjectId,
    pub sale_price: i64,
    pub created_at: OffsetDateTime,
}

impl From<TransactionFindEntity> for Transaction {
    fn from(value: TransactionFindEntity) -> Self {
        Self {
            id: value._id,
            ticket_id: value.ticket_id,
            listing_id: value.listing_id,
            seller_id: value.seller_id,
            buyer_id: value.buyer_id,
            sale_price: value.sale_price,
            created_at: value.created_at.into(),
        }
    }
}
