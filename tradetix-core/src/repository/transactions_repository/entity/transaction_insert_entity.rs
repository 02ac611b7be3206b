use bson::{oid::ObjectId, DateTime};
use serde::Serialize;

#[derive(Serialize)]
pub struct TransactionInsertEntity {
    pub ticket_id: ObjectId,
    pub listing_id: Option<ObjectId>,
    pub seller_id: ObjectId,
    pub buyer_id: ObjectId,
    pub sale_price: i64,
    pub created_at: DateTime,
}
