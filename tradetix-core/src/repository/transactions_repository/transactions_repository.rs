use super::Transaction;
use crate::{dto::input, repository};
use axum::async_trait;
use bson::oid::ObjectId;
use time::OffsetDateTime;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TransactionsRepository: Send + Sync {
    async fn insert(
        &self,
        ticket_id: ObjectId,
        listing_id: Option<ObjectId>,
        seller_id: ObjectId,
        buyer_id: ObjectId,
        sale_price: i64,
        created_at: OffsetDateTime,
    ) -> Result<Transaction, repository::Error>;

    ///
    /// Finds transaction. When `participant` is set only transaction
    /// where he is seller or buyer is returned.
    ///
    async fn find(
        &self,
        id: ObjectId,
        participant: Option<ObjectId>,
    ) -> Result<Option<Transaction>, repository::Error>;

    async fn find_many(
        &self,
        participant: Option<ObjectId>,
        pagination: input::Pagination,
    ) -> Result<Vec<Transaction>, repository::Error>;
}
